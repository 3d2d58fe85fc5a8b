//! Change notification layered over [`AbilityScores`].
//!
//! The score record itself is plain data. Callers that need to react to
//! edits (a character sheet recomputing skill totals, say) wrap it in an
//! [`ObservedScores`] and register observers.

use super::{AbilityClass, AbilityScores};
use crate::error::MechResult;

/// A single accepted change to an ability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityChange {
    /// Which ability changed.
    pub ability: AbilityClass,
    /// Score before the change.
    pub old: i32,
    /// Score after the change.
    pub new: i32,
}

/// Receives notifications when an observed score changes.
pub trait ScoreObserver {
    /// Called after a change has been stored.
    fn on_change(&mut self, change: &AbilityChange);
}

impl<F> ScoreObserver for F
where
    F: FnMut(&AbilityChange),
{
    fn on_change(&mut self, change: &AbilityChange) {
        self(change)
    }
}

/// An [`AbilityScores`] record that notifies observers on every change.
///
/// Rejected assignments and assignments of the current value notify nobody.
#[derive(Default)]
pub struct ObservedScores {
    scores: AbilityScores,
    observers: Vec<Box<dyn ScoreObserver>>,
}

impl ObservedScores {
    /// Wrap an existing record.
    pub fn new(scores: AbilityScores) -> Self {
        Self {
            scores,
            observers: Vec::new(),
        }
    }

    /// Register an observer.
    pub fn subscribe(&mut self, observer: impl ScoreObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// The current scores.
    pub fn scores(&self) -> &AbilityScores {
        &self.scores
    }

    /// The score for one ability.
    pub fn get(&self, ability: AbilityClass) -> i32 {
        self.scores.get(ability)
    }

    /// Set one score and notify observers if it changed.
    pub fn set(&mut self, ability: AbilityClass, score: i32) -> MechResult<()> {
        let old = self.scores.get(ability);
        self.scores.set(ability, score)?;
        if old != score {
            let change = AbilityChange {
                ability,
                old,
                new: score,
            };
            for observer in &mut self.observers {
                observer.on_change(&change);
            }
        }
        Ok(())
    }

    /// Unwrap the record, dropping all observers.
    pub fn into_inner(self) -> AbilityScores {
        self.scores
    }
}

impl std::fmt::Debug for ObservedScores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservedScores")
            .field("scores", &self.scores)
            .field("observers", &self.observers.len())
            .finish()
    }
}
