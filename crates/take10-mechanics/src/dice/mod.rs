//! Dice types, expressions, and rolling.
//!
//! [`roll`] is the randomness source every score generator draws from.
//! [`Die`] and [`DiceExpr`] give the same thing a typed face for callers
//! that think in `4d6` notation.

pub mod roll;

pub use roll::{Roll, Rolls, roll};

use std::str::FromStr;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// Largest dice count accepted in a [`DiceExpr`].
pub const MAX_EXPR_DICE: u32 = 1000;

/// A fresh RNG: seeded when a seed is given, from OS entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// Build a die from a side count, preferring the named variants.
    ///
    /// Returns `None` for fewer than two sides.
    pub fn from_sides(sides: u32) -> Option<Self> {
        match sides {
            0 | 1 => None,
            4 => Some(Self::D4),
            6 => Some(Self::D6),
            8 => Some(Self::D8),
            10 => Some(Self::D10),
            12 => Some(Self::D12),
            20 => Some(Self::D20),
            100 => Some(Self::D100),
            n => Some(Self::Custom(n)),
        }
    }

    /// Parse a die from a string like "d20", "d6", "d100".
    pub fn from_str_tag(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        let sides = s.strip_prefix('d')?.parse::<u32>().ok()?;
        Self::from_sides(sides)
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// A dice expression in `NdS` notation, e.g. `4d6` or `d20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceExpr {
    /// How many dice to roll.
    pub count: u32,
    /// Which die to roll.
    pub die: Die,
}

impl DiceExpr {
    /// Create an expression for `count` dice of the given type.
    pub fn new(count: u32, die: Die) -> Self {
        Self { count, die }
    }

    /// Roll this expression with the given RNG.
    pub fn roll<'a>(&self, rng: &'a mut StdRng) -> MechResult<Roll<'a>> {
        let count = i32::try_from(self.count)
            .map_err(|_| MechError::InvalidArgument(format!("too many dice: {}", self.count)))?;
        let sides = i32::try_from(self.die.sides())
            .map_err(|_| MechError::InvalidArgument(format!("die too large: {}", self.die)))?;
        roll(rng, count, sides)
    }
}

impl FromStr for DiceExpr {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let Some(at) = lower.find('d') else {
            return Err(MechError::InvalidConfig(format!(
                "expected dice notation like 4d6, got '{s}'"
            )));
        };
        let (count, die) = lower.split_at(at);

        let count = if count.is_empty() {
            1
        } else {
            count
                .parse::<u32>()
                .map_err(|_| MechError::InvalidConfig(format!("invalid dice count in '{s}'")))?
        };
        if count > MAX_EXPR_DICE {
            return Err(MechError::InvalidConfig(format!(
                "at most {MAX_EXPR_DICE} dice per expression, got {count}"
            )));
        }

        let die = Die::from_str_tag(die)
            .ok_or_else(|| MechError::InvalidConfig(format!("invalid die size in '{s}'")))?;

        Ok(Self { count, die })
    }
}

impl std::fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.count, self.die)
    }
}
