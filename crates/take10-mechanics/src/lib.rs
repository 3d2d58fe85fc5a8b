//! Character ability mechanics for take10.
//!
//! Provides the dice source, the six ability classes with a validated
//! score record, the three classic score-generation strategies behind a
//! name-keyed registry, the 35-skill taxonomy with its governing-ability
//! map, and the race bonus contract.

pub mod ability;
pub mod config;
pub mod dice;
pub mod error;
pub mod generate;
pub mod race;
pub mod skill;

pub use ability::{AbilityBonus, AbilityClass, AbilityScores, ObservedScores, ScoreObserver};
pub use config::GenerationConfig;
pub use dice::{DiceExpr, Die, Roll, roll, seeded_rng};
pub use error::{MechError, MechResult};
pub use generate::{
    GenerationParams, ScoreGenerator, StrategyRegistry, generate, registry, strategy_names,
};
pub use race::{BonusOptions, Race, RaceChoice, choose_bonus};
pub use skill::{SkillClass, SkillSet, ability_for, skills_for};
