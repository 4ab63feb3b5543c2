//! Injected randomness for the roller.
//!
//! The roller never touches a global generator. It draws from a
//! [`RandomSource`], which is implemented for [`StdRng`] and for
//! [`ScriptedSource`], a fixed sequence used for replays and tests.

use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::dice::Die;
use crate::error::{WeatherError, WeatherResult};

/// A source of uniform draws and permutations.
pub trait RandomSource {
    /// Draw an integer uniformly from `low..=high`.
    fn roll_range(&mut self, low: u32, high: u32) -> WeatherResult<u32>;

    /// Put `values` into a uniformly random order.
    fn shuffle(&mut self, values: &mut [u32]) -> WeatherResult<()>;

    /// Roll a single die.
    fn roll_die(&mut self, die: Die) -> WeatherResult<u32> {
        self.roll_range(1, die.sides())
    }
}

impl RandomSource for StdRng {
    fn roll_range(&mut self, low: u32, high: u32) -> WeatherResult<u32> {
        Ok(self.random_range(low..=high))
    }

    fn shuffle(&mut self, values: &mut [u32]) -> WeatherResult<()> {
        values.shuffle(self);
        Ok(())
    }
}

/// A random source that replays fixed values.
///
/// `roll_range` returns the queued rolls verbatim, without range checks, so
/// a script can feed out-of-range values on purpose. Each `shuffle` consumes
/// one queued permutation prefix and moves those values to the front of the
/// slice in order; the remaining values keep their relative order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    rolls: VecDeque<u32>,
    permutations: VecDeque<Vec<u32>>,
}

impl ScriptedSource {
    /// Create a source that yields `rolls` in order.
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            permutations: VecDeque::new(),
        }
    }

    /// Queue a permutation prefix for the next `shuffle`.
    pub fn with_permutation(mut self, prefix: impl IntoIterator<Item = u32>) -> Self {
        self.permutations.push_back(prefix.into_iter().collect());
        self
    }

    /// Number of rolls not yet consumed.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RandomSource for ScriptedSource {
    fn roll_range(&mut self, _low: u32, _high: u32) -> WeatherResult<u32> {
        self.rolls.pop_front().ok_or(WeatherError::ScriptExhausted)
    }

    fn shuffle(&mut self, values: &mut [u32]) -> WeatherResult<()> {
        let prefix = self
            .permutations
            .pop_front()
            .ok_or(WeatherError::ScriptExhausted)?;
        for (slot, pick) in prefix.into_iter().enumerate().take(values.len()) {
            if let Some(offset) = values[slot..].iter().position(|v| *v == pick) {
                values[slot..=slot + offset].rotate_right(1);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn std_rng_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let v = rng.roll_range(1, 10).unwrap();
            assert!((1..=10).contains(&v));
        }
    }

    #[test]
    fn std_rng_die_rolls_cover_every_face() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let v = rng.roll_die(Die::D4).unwrap();
            seen[(v - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn std_rng_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut ids: Vec<u32> = (1..=9).collect();
        RandomSource::shuffle(&mut rng, &mut ids).unwrap();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn std_rng_deterministic_with_seed() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(a.roll_range(1, 12).unwrap(), b.roll_range(1, 12).unwrap());
        }
    }

    #[test]
    fn scripted_rolls_replay_in_order() {
        let mut src = ScriptedSource::new([3, 1, 4]);
        assert_eq!(src.remaining(), 3);
        assert_eq!(src.roll_range(1, 10).unwrap(), 3);
        assert_eq!(src.roll_die(Die::D4).unwrap(), 1);
        assert_eq!(src.roll_range(1, 2).unwrap(), 4);
        assert_eq!(src.roll_range(1, 2), Err(WeatherError::ScriptExhausted));
    }

    #[test]
    fn scripted_shuffle_moves_prefix_to_front() {
        let mut src = ScriptedSource::default().with_permutation([7, 2]);
        let mut ids: Vec<u32> = (1..=9).collect();
        src.shuffle(&mut ids).unwrap();
        assert_eq!(ids, vec![7, 2, 1, 3, 4, 5, 6, 8, 9]);
    }

    #[test]
    fn scripted_shuffle_without_permutation_fails() {
        let mut src = ScriptedSource::new([1]);
        let mut ids = vec![1, 2, 3];
        assert_eq!(src.shuffle(&mut ids), Err(WeatherError::ScriptExhausted));
    }
}
