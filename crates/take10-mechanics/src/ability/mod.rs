//! Ability classes and validated ability-score records.
//!
//! [`AbilityScores`] holds the six core statistics of a character. Every
//! field is non-negative at all times: constructors, setters, bonus
//! application and deserialization all validate before storing anything.

pub mod observe;

pub use observe::{AbilityChange, ObservedScores, ScoreObserver};

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// The six standard ability classes.
///
/// Discriminants are stable and match the serialized ordinals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum AbilityClass {
    /// Physical might.
    Strength = 0,
    /// Agility and reflexes.
    Dexterity = 1,
    /// Reasoning and learning.
    Intelligence = 2,
    /// Perception and willpower.
    Wisdom = 3,
    /// Force of personality.
    Charisma = 4,
    /// Health and stamina.
    Constitution = 5,
}

impl AbilityClass {
    /// Every ability class, in ordinal order.
    pub const ALL: [AbilityClass; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
        Self::Constitution,
    ];

    /// Stable ordinal of this ability class.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Upper-case identifier, e.g. `"STRENGTH"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Strength => "STRENGTH",
            Self::Dexterity => "DEXTERITY",
            Self::Intelligence => "INTELLIGENCE",
            Self::Wisdom => "WISDOM",
            Self::Charisma => "CHARISMA",
            Self::Constitution => "CONSTITUTION",
        }
    }

    /// Three-letter abbreviation, e.g. `"STR"`.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
            Self::Constitution => "CON",
        }
    }
}

impl std::fmt::Display for AbilityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AbilityClass {
    type Err = MechError;

    /// Accepts full names or abbreviations, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s) || a.abbreviation().eq_ignore_ascii_case(s))
            .ok_or_else(|| MechError::InvalidConfig(format!("unknown ability: {s}")))
    }
}

/// The six core ability scores of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawAbilityScores", into = "RawAbilityScores")]
pub struct AbilityScores {
    scores: [i32; 6],
}

impl AbilityScores {
    /// Build a record from six explicit scores.
    pub fn new(
        strength: i32,
        dexterity: i32,
        intelligence: i32,
        wisdom: i32,
        charisma: i32,
        constitution: i32,
    ) -> MechResult<Self> {
        Self::from_array([
            strength,
            dexterity,
            intelligence,
            wisdom,
            charisma,
            constitution,
        ])
    }

    /// Build a record from scores in [`AbilityClass::ALL`] order.
    pub fn from_array(scores: [i32; 6]) -> MechResult<Self> {
        for ability in AbilityClass::ALL {
            validate(ability, scores[ability.ordinal()])?;
        }
        Ok(Self { scores })
    }

    /// Build a record by computing each score in turn.
    ///
    /// The closure is called once per ability in [`AbilityClass::ALL`]
    /// order. Nothing is returned unless all six scores are valid.
    pub fn from_fn<F>(mut f: F) -> MechResult<Self>
    where
        F: FnMut(AbilityClass) -> MechResult<i32>,
    {
        let mut scores = [0; 6];
        for ability in AbilityClass::ALL {
            let score = f(ability)?;
            validate(ability, score)?;
            scores[ability.ordinal()] = score;
        }
        Ok(Self { scores })
    }

    /// The score for one ability.
    pub fn get(&self, ability: AbilityClass) -> i32 {
        self.scores[ability.ordinal()]
    }

    /// Set one score. Negative values are rejected and leave the record unchanged.
    pub fn set(&mut self, ability: AbilityClass, score: i32) -> MechResult<()> {
        validate(ability, score)?;
        self.scores[ability.ordinal()] = score;
        Ok(())
    }

    /// Strength score.
    pub fn strength(&self) -> i32 {
        self.get(AbilityClass::Strength)
    }

    /// Dexterity score.
    pub fn dexterity(&self) -> i32 {
        self.get(AbilityClass::Dexterity)
    }

    /// Intelligence score.
    pub fn intelligence(&self) -> i32 {
        self.get(AbilityClass::Intelligence)
    }

    /// Wisdom score.
    pub fn wisdom(&self) -> i32 {
        self.get(AbilityClass::Wisdom)
    }

    /// Charisma score.
    pub fn charisma(&self) -> i32 {
        self.get(AbilityClass::Charisma)
    }

    /// Constitution score.
    pub fn constitution(&self) -> i32 {
        self.get(AbilityClass::Constitution)
    }

    /// Set the Strength score.
    pub fn set_strength(&mut self, score: i32) -> MechResult<()> {
        self.set(AbilityClass::Strength, score)
    }

    /// Set the Dexterity score.
    pub fn set_dexterity(&mut self, score: i32) -> MechResult<()> {
        self.set(AbilityClass::Dexterity, score)
    }

    /// Set the Intelligence score.
    pub fn set_intelligence(&mut self, score: i32) -> MechResult<()> {
        self.set(AbilityClass::Intelligence, score)
    }

    /// Set the Wisdom score.
    pub fn set_wisdom(&mut self, score: i32) -> MechResult<()> {
        self.set(AbilityClass::Wisdom, score)
    }

    /// Set the Charisma score.
    pub fn set_charisma(&mut self, score: i32) -> MechResult<()> {
        self.set(AbilityClass::Charisma, score)
    }

    /// Set the Constitution score.
    pub fn set_constitution(&mut self, score: i32) -> MechResult<()> {
        self.set(AbilityClass::Constitution, score)
    }

    /// Exchange the scores of two abilities.
    ///
    /// Generators assign totals in enumeration order; callers that let the
    /// player arrange their rolls use this to move them around.
    pub fn swap(&mut self, a: AbilityClass, b: AbilityClass) {
        self.scores.swap(a.ordinal(), b.ordinal());
    }

    /// Iterate `(ability, score)` pairs in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (AbilityClass, i32)> + '_ {
        AbilityClass::ALL.into_iter().map(|a| (a, self.get(a)))
    }

    /// The scores as an ability-keyed map.
    pub fn to_map(&self) -> BTreeMap<AbilityClass, i32> {
        self.iter().collect()
    }

    /// Sum of all six scores.
    pub fn total(&self) -> i64 {
        self.scores.iter().map(|s| i64::from(*s)).sum()
    }

    /// The standard ability modifier, `(score - 10) / 2` rounded down.
    pub fn modifier(&self, ability: AbilityClass) -> i32 {
        (self.get(ability) - 10).div_euclid(2)
    }

    /// Return a copy with a bonus applied.
    ///
    /// Fails without producing anything if any adjusted score would be
    /// negative or would not fit in an `i32`.
    pub fn with_bonus(&self, bonus: &AbilityBonus) -> MechResult<Self> {
        Self::from_fn(|ability| {
            let (score, delta) = (self.get(ability), bonus.get(ability));
            score.checked_add(delta).ok_or_else(|| {
                MechError::InvalidArgument(format!(
                    "{ability} bonus overflows: {score} {delta:+}"
                ))
            })
        })
    }
}

impl std::fmt::Display for AbilityScores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(a, s)| format!("{} {s}", a.abbreviation()))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

fn validate(ability: AbilityClass, value: i32) -> MechResult<()> {
    if value < 0 {
        return Err(MechError::Validation { ability, value });
    }
    Ok(())
}

/// Serialized shape of [`AbilityScores`]; validated on the way in.
#[derive(Serialize, Deserialize)]
struct RawAbilityScores {
    strength: i32,
    dexterity: i32,
    intelligence: i32,
    wisdom: i32,
    charisma: i32,
    constitution: i32,
}

impl TryFrom<RawAbilityScores> for AbilityScores {
    type Error = MechError;

    fn try_from(raw: RawAbilityScores) -> Result<Self, Self::Error> {
        Self::new(
            raw.strength,
            raw.dexterity,
            raw.intelligence,
            raw.wisdom,
            raw.charisma,
            raw.constitution,
        )
    }
}

impl From<AbilityScores> for RawAbilityScores {
    fn from(s: AbilityScores) -> Self {
        Self {
            strength: s.strength(),
            dexterity: s.dexterity(),
            intelligence: s.intelligence(),
            wisdom: s.wisdom(),
            charisma: s.charisma(),
            constitution: s.constitution(),
        }
    }
}

/// Signed per-ability adjustments, e.g. a racial +2 Dexterity / -2 Constitution.
///
/// Abilities not mentioned have a delta of zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityBonus {
    deltas: BTreeMap<AbilityClass, i32>,
}

impl AbilityBonus {
    /// An empty bonus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` to one ability. Zero deltas are not stored.
    ///
    /// Accumulated deltas saturate at the `i32` bounds.
    pub fn with(mut self, ability: AbilityClass, delta: i32) -> Self {
        let total = self.get(ability).saturating_add(delta);
        if total == 0 {
            self.deltas.remove(&ability);
        } else {
            self.deltas.insert(ability, total);
        }
        self
    }

    /// The delta for one ability.
    pub fn get(&self, ability: AbilityClass) -> i32 {
        self.deltas.get(&ability).copied().unwrap_or(0)
    }

    /// Iterate the non-zero deltas in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (AbilityClass, i32)> + '_ {
        self.deltas.iter().map(|(a, d)| (*a, *d))
    }

    /// Returns true if every delta is zero.
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// One candidate per ability: "+`amount` to one ability of your choice".
    pub fn any_one_of(amount: i32) -> Vec<Self> {
        AbilityClass::ALL
            .into_iter()
            .map(|a| Self::new().with(a, amount))
            .collect()
    }
}

impl std::fmt::Display for AbilityBonus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let parts: Vec<String> = self
            .iter()
            .map(|(a, d)| format!("{d:+} {}", a.abbreviation()))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}
