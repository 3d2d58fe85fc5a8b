//! Name → strategy lookup.

use std::sync::LazyLock;

use rand::rngs::StdRng;

use super::{Classic, GenerationParams, Heroic, ScoreGenerator, Standard};
use crate::ability::AbilityScores;
use crate::error::{MechError, MechResult};

static BUILTIN: LazyLock<StrategyRegistry> = LazyLock::new(StrategyRegistry::builtin);

/// The process-wide registry of built-in strategies.
///
/// Initialized on first use and read-only afterwards.
pub fn registry() -> &'static StrategyRegistry {
    &BUILTIN
}

/// An ordered set of score generators addressable by name.
///
/// Names are matched case-insensitively and must be unique.
#[derive(Default)]
pub struct StrategyRegistry {
    strategies: Vec<Box<dyn ScoreGenerator>>,
}

impl StrategyRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding Standard, Classic and Heroic, in that order.
    pub fn builtin() -> Self {
        Self {
            strategies: vec![Box::new(Standard), Box::new(Classic), Box::new(Heroic)],
        }
    }

    /// Add a strategy. Fails if the name is already taken.
    pub fn register(&mut self, strategy: impl ScoreGenerator + 'static) -> MechResult<()> {
        if self.find(strategy.name()).is_some() {
            return Err(MechError::InvalidConfig(format!(
                "strategy '{}' is already registered",
                strategy.name()
            )));
        }
        self.strategies.push(Box::new(strategy));
        Ok(())
    }

    /// Look up a strategy by name.
    pub fn get(&self, name: &str) -> MechResult<&dyn ScoreGenerator> {
        self.find(name)
            .ok_or_else(|| MechError::UnknownStrategy(name.to_string()))
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Iterate the registered strategies in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn ScoreGenerator> {
        self.strategies.iter().map(|s| {
            let strategy: &dyn ScoreGenerator = s.as_ref();
            strategy
        })
    }

    /// Number of registered strategies.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Returns true if no strategies are registered.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Generate a full record with the named strategy.
    ///
    /// An unknown name fails before any die is rolled.
    pub fn generate(
        &self,
        name: &str,
        params: &GenerationParams,
        rng: &mut StdRng,
    ) -> MechResult<AbilityScores> {
        let strategy = self.get(name)?;
        tracing::debug!(
            strategy = strategy.name(),
            params = params.len(),
            "generating ability scores"
        );
        let scores = strategy.generate(rng, params)?;
        tracing::debug!(strategy = strategy.name(), %scores, "generated ability scores");
        Ok(scores)
    }

    fn find(&self, name: &str) -> Option<&dyn ScoreGenerator> {
        let name = name.trim();
        self.iter().find(|s| s.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("strategies", &self.names())
            .finish()
    }
}
