//! Random sources for die rolls
//!
//! The game never reaches for ambient randomness: every roll goes through a
//! [`RandomSource`] supplied at construction.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::error::{PigError, Result};
use crate::domain::value_objects::validate_sides;

/// Produces die values in `[1, sides]`
pub trait RandomSource: Send {
    /// Draw one value. Fails with `InvalidConfiguration` when `sides < 2`.
    fn next(&mut self, sides: u32) -> Result<u32>;
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn next(&mut self, sides: u32) -> Result<u32> {
        (**self).next(sides)
    }
}

/// Uniform pseudo-random die backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngDice<R = ChaCha8Rng> {
    rng: R,
}

impl RngDice<ChaCha8Rng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Same seed, same sequence
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RngDice<ChaCha8Rng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng + Send> RngDice<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> RandomSource for RngDice<R> {
    fn next(&mut self, sides: u32) -> Result<u32> {
        validate_sides(sides)?;
        Ok(self.rng.gen_range(1..=sides))
    }
}

/// Always rolls the same value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDice(pub u32);

impl RandomSource for FixedDice {
    fn next(&mut self, sides: u32) -> Result<u32> {
        validate_sides(sides)?;
        check_face(self.0, sides)?;
        Ok(self.0)
    }
}

/// Rolls a finite script of values, then fails
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedDice {
    values: VecDeque<u32>,
}

impl ScriptedDice {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Values not yet rolled
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedDice {
    fn next(&mut self, sides: u32) -> Result<u32> {
        validate_sides(sides)?;
        let value = *self.values.front().ok_or_else(|| {
            PigError::InvalidConfiguration("scripted dice exhausted".to_string())
        })?;
        check_face(value, sides)?;
        self.values.pop_front();
        Ok(value)
    }
}

fn check_face(value: u32, sides: u32) -> Result<()> {
    if value < 1 || value > sides {
        return Err(PigError::InvalidConfiguration(format!(
            "die value {} outside 1..={}",
            value, sides
        )));
    }
    Ok(())
}
