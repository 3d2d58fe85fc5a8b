//! Classic generation: roll 3d6 and add them up.
//!
//! Quite random; some characters will have clearly superior abilities.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;

use super::{GenerationParams, ScoreGenerator};
use crate::dice::roll;
use crate::error::MechResult;

/// Roll 3d6 and sum all three.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classic;

impl ScoreGenerator for Classic {
    fn name(&self) -> &'static str {
        "Classic"
    }

    fn description(&self) -> &'static str {
        "3d6"
    }

    fn range(&self) -> RangeInclusive<i32> {
        3..=18
    }

    fn roll_score(&self, rng: &mut StdRng, _params: &GenerationParams) -> MechResult<i32> {
        Ok(roll(rng, 3, 6)?.total() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::AbilityClass;
    use rand::SeedableRng;

    #[test]
    fn scores_within_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let params = GenerationParams::new();
        for _ in 0..500 {
            let score = Classic.roll_score(&mut rng, &params).unwrap();
            assert!((3..=18).contains(&score), "{score} out of range");
        }
    }

    #[test]
    fn mean_per_field_is_ten_and_a_half() {
        let mut rng = StdRng::seed_from_u64(1234);
        let params = GenerationParams::new();
        let n = 1000;
        let mut sums = [0i32; 6];
        for _ in 0..n {
            let scores = Classic.generate(&mut rng, &params).unwrap();
            for (ability, score) in scores.iter() {
                sums[ability.ordinal()] += score;
            }
        }
        for ability in AbilityClass::ALL {
            let mean = f64::from(sums[ability.ordinal()]) / f64::from(n);
            assert!((mean - 10.5).abs() < 0.5, "{ability} mean {mean}");
        }
    }
}
