//! The randomness source: rolling `n` dice of `s` sides.

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{MechError, MechResult};

/// The result of a call to [`roll`].
///
/// A single die comes back as a plain value; anything else comes back as
/// a lazy [`Rolls`] sequence that draws from the RNG as it is consumed.
#[derive(Debug)]
pub enum Roll<'a> {
    /// Exactly one die was rolled.
    Single(u32),
    /// Zero or several dice, drawn lazily.
    Many(Rolls<'a>),
}

impl Roll<'_> {
    /// Drain the roll into a vector of die values.
    pub fn into_values(self) -> Vec<u32> {
        match self {
            Self::Single(v) => vec![v],
            Self::Many(rolls) => rolls.collect(),
        }
    }

    /// Sum of all die values.
    ///
    /// Summed in `u64`, which holds `i32::MAX` dice of `i32::MAX` sides.
    pub fn total(self) -> u64 {
        match self {
            Self::Single(v) => u64::from(v),
            Self::Many(rolls) => rolls.map(u64::from).sum(),
        }
    }
}

/// A lazily drawn sequence of die values.
///
/// Each call to [`Iterator::next`] draws one die from the borrowed RNG.
/// The sequence cannot be restarted; roll again for fresh values.
#[derive(Debug)]
pub struct Rolls<'a> {
    rng: &'a mut StdRng,
    sides: u32,
    remaining: u32,
}

impl Iterator for Rolls<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.rng.random_range(1..=self.sides))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Rolls<'_> {}

/// Roll `num_dice` dice with `dice_type` sides each.
///
/// Every die is uniform on `1..=dice_type`. Negative arguments are
/// rejected before anything is drawn. Zero dice is an empty sequence,
/// whatever the die size; one or more dice of size zero is an error.
pub fn roll(rng: &mut StdRng, num_dice: i32, dice_type: i32) -> MechResult<Roll<'_>> {
    if num_dice < 0 || dice_type < 0 {
        return Err(MechError::InvalidArgument(format!(
            "invalid values for dice_type/num_dice: {num_dice}d{dice_type}"
        )));
    }
    if num_dice > 0 && dice_type == 0 {
        return Err(MechError::InvalidArgument(
            "cannot roll a die with zero sides".to_string(),
        ));
    }

    let sides = dice_type.unsigned_abs();
    tracing::trace!(num_dice, sides, "rolling dice");

    if num_dice == 1 {
        return Ok(Roll::Single(rng.random_range(1..=sides)));
    }
    Ok(Roll::Many(Rolls {
        rng,
        sides,
        remaining: num_dice.unsigned_abs(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn single_die_is_a_value() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            match roll(&mut rng, 1, 6).unwrap() {
                Roll::Single(v) => assert!((1..=6).contains(&v)),
                Roll::Many(_) => panic!("one die should be a single value"),
            }
        }
    }

    #[test]
    fn many_dice_are_a_sequence() {
        let mut rng = StdRng::seed_from_u64(42);
        let Roll::Many(rolls) = roll(&mut rng, 4, 10).unwrap() else {
            panic!("four dice should be a sequence");
        };
        assert_eq!(rolls.len(), 4);
        let values: Vec<u32> = rolls.collect();
        assert_eq!(values.len(), 4);
        assert!(values.iter().all(|v| (1..=10).contains(v)));
    }

    #[test]
    fn negative_arguments_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            roll(&mut rng, -1, 2),
            Err(MechError::InvalidArgument(_))
        ));
        assert!(matches!(
            roll(&mut rng, 2, -1),
            Err(MechError::InvalidArgument(_))
        ));
    }

    #[test]
    fn zero_dice_is_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(roll(&mut rng, 0, 6).unwrap().into_values().is_empty());
        assert!(roll(&mut rng, 0, 0).unwrap().into_values().is_empty());
    }

    #[test]
    fn zero_sided_die_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            roll(&mut rng, 10, 0),
            Err(MechError::InvalidArgument(_))
        ));
        assert!(matches!(
            roll(&mut rng, 1, 0),
            Err(MechError::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejection_draws_nothing() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut fresh = StdRng::seed_from_u64(7);
        let _ = roll(&mut rng, -3, 6);
        assert_eq!(
            roll(&mut rng, 3, 6).unwrap().into_values(),
            roll(&mut fresh, 3, 6).unwrap().into_values()
        );
    }

    #[test]
    fn sequence_is_lazy() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut fresh = StdRng::seed_from_u64(11);
        // Dropping an unconsumed sequence leaves the RNG untouched.
        let _ = roll(&mut rng, 5, 6).unwrap();
        assert_eq!(
            roll(&mut rng, 1, 20).unwrap().total(),
            roll(&mut fresh, 1, 20).unwrap().total()
        );
    }

    #[test]
    fn deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        assert_eq!(
            roll(&mut rng1, 6, 20).unwrap().into_values(),
            roll(&mut rng2, 6, 20).unwrap().into_values()
        );
    }

    #[test]
    fn total_sums_values() {
        let mut rng = StdRng::seed_from_u64(3);
        let total = roll(&mut rng, 3, 6).unwrap().total();
        assert!((3..=18).contains(&total));
    }

    #[test]
    fn largest_die_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(8);
        let sides = i32::MAX.unsigned_abs();
        let values = roll(&mut rng, 3, i32::MAX).unwrap().into_values();
        assert_eq!(values.len(), 3);
        assert!(values.iter().all(|v| (1..=sides).contains(v)));

        match roll(&mut rng, 1, i32::MAX).unwrap() {
            Roll::Single(v) => assert!((1..=sides).contains(&v)),
            Roll::Many(_) => panic!("one die should be a single value"),
        }
    }

    #[test]
    fn total_of_huge_dice_does_not_overflow() {
        let mut rng = StdRng::seed_from_u64(1);
        let total = roll(&mut rng, 1000, i32::MAX).unwrap().total();
        let max = 1000 * u64::from(i32::MAX.unsigned_abs());
        assert!((1000..=max).contains(&total), "total {total}");
        // A thousand draws near 2^31 cannot all be small.
        assert!(total > u64::from(u32::MAX), "total {total}");
    }

    #[test]
    fn total_matches_values() {
        let mut rng = StdRng::seed_from_u64(30);
        let mut fresh = StdRng::seed_from_u64(30);
        let values = roll(&mut rng, 5, i32::MAX).unwrap().into_values();
        let expected: u64 = values.iter().map(|v| u64::from(*v)).sum();
        assert_eq!(roll(&mut fresh, 5, i32::MAX).unwrap().total(), expected);
    }
}
