//! Standard generation: roll 4d6 and drop the lowest die.
//!
//! Less random than Classic and tends to produce above-average scores.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;

use super::{GenerationParams, ScoreGenerator};
use crate::dice::roll;
use crate::error::MechResult;

/// Roll 4d6, discard one lowest die, sum the other three.
#[derive(Debug, Clone, Copy, Default)]
pub struct Standard;

impl ScoreGenerator for Standard {
    fn name(&self) -> &'static str {
        "Standard"
    }

    fn description(&self) -> &'static str {
        "4d6, drop the lowest"
    }

    fn range(&self) -> RangeInclusive<i32> {
        3..=18
    }

    fn roll_score(&self, rng: &mut StdRng, _params: &GenerationParams) -> MechResult<i32> {
        let dice = roll(rng, 4, 6)?.into_values();
        Ok(drop_lowest(&dice) as i32)
    }
}

/// Sum all values except one instance of the minimum.
///
/// Ties at the minimum drop only one of them. Empty input sums to zero.
pub fn drop_lowest(values: &[u32]) -> u64 {
    let lowest = values.iter().min().copied().unwrap_or(0);
    values.iter().map(|v| u64::from(*v)).sum::<u64>() - u64::from(lowest)
}
