//! Heroic generation: roll 2d6 and add 6.
//!
//! Less random than Standard; produces mostly above-average scores.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;

use super::{GenerationParams, ScoreGenerator};
use crate::dice::roll;
use crate::error::MechResult;

/// Flat bonus added to every Heroic roll.
pub const HEROIC_BONUS: i32 = 6;

/// Roll 2d6, sum both, add [`HEROIC_BONUS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Heroic;

impl ScoreGenerator for Heroic {
    fn name(&self) -> &'static str {
        "Heroic"
    }

    fn description(&self) -> &'static str {
        "2d6 + 6"
    }

    fn range(&self) -> RangeInclusive<i32> {
        8..=18
    }

    fn roll_score(&self, rng: &mut StdRng, _params: &GenerationParams) -> MechResult<i32> {
        Ok(roll(rng, 2, 6)?.total() as i32 + HEROIC_BONUS)
    }
}
