//! Ability-score generation strategies.
//!
//! Each strategy turns dice into a single score and is applied once per
//! ability, in [`AbilityClass`](crate::ability::AbilityClass) order, to
//! build a full record:
//! - **Standard**: 4d6, drop the lowest (3-18)
//! - **Classic**: 3d6 (3-18)
//! - **Heroic**: 2d6 + 6 (8-18)
//!
//! The totals land on the abilities in enumeration order. Letting a player
//! arrange them is up to the caller (see [`AbilityScores::swap`]).

pub mod classic;
pub mod heroic;
pub mod params;
pub mod registry;
pub mod standard;

pub use classic::Classic;
pub use heroic::Heroic;
pub use params::GenerationParams;
pub use registry::{StrategyRegistry, registry};
pub use standard::Standard;

use std::ops::RangeInclusive;

use rand::rngs::StdRng;

use crate::ability::AbilityScores;
use crate::error::MechResult;

/// An algorithm that produces ability scores from dice.
pub trait ScoreGenerator: Send + Sync {
    /// Registry name, e.g. `"Standard"`.
    fn name(&self) -> &'static str;

    /// Short description of the dice involved, e.g. `"3d6"`.
    fn description(&self) -> &'static str;

    /// Lowest and highest score a single roll can produce.
    fn range(&self) -> RangeInclusive<i32>;

    /// Roll one score.
    fn roll_score(&self, rng: &mut StdRng, params: &GenerationParams) -> MechResult<i32>;

    /// Roll all six scores.
    fn generate(&self, rng: &mut StdRng, params: &GenerationParams) -> MechResult<AbilityScores> {
        AbilityScores::from_fn(|_| self.roll_score(rng, params))
    }
}

/// Generate a record with a built-in strategy, looked up by name.
pub fn generate(
    name: &str,
    params: &GenerationParams,
    rng: &mut StdRng,
) -> MechResult<AbilityScores> {
    registry().generate(name, params, rng)
}

/// Names of the built-in strategies, in registration order.
pub fn strategy_names() -> Vec<&'static str> {
    registry().names()
}
