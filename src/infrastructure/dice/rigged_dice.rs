//! Rigged dice for development
//!
//! Wraps another random source and can force, bias or soften its rolls.
//! The knobs only take effect when the dice is armed at construction.

use std::collections::VecDeque;
use std::fmt;

use tracing::warn;

use crate::domain::error::Result;
use crate::domain::services::RandomSource;
use crate::domain::value_objects::validate_sides;

type Bias = Box<dyn FnMut() -> u32 + Send>;

pub struct RiggedDice<D> {
    inner: D,
    armed: bool,
    queue: VecDeque<u32>,
    no_bust: bool,
    bias: Option<Bias>,
}

impl<D: RandomSource> RiggedDice<D> {
    pub fn new(inner: D, armed: bool) -> Self {
        if armed {
            warn!("Rigged dice armed: rolls can be forced");
        }
        Self {
            inner,
            armed,
            queue: VecDeque::new(),
            no_bust: false,
            bias: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Queue a value for an upcoming roll
    pub fn force_next_roll(&mut self, value: u32) {
        if !self.armed {
            return;
        }
        self.queue.push_back(value);
    }

    pub fn force_next_rolls(&mut self, values: impl IntoIterator<Item = u32>) {
        for value in values {
            self.force_next_roll(value);
        }
    }

    /// Turn rolled 1s into 2s (forced rolls are left alone)
    pub fn no_bust_on_ones(&mut self, on: bool) {
        if !self.armed {
            return;
        }
        self.no_bust = on;
    }

    /// Replace the inner source with a chooser while no roll is forced
    pub fn bias(&mut self, chooser: impl FnMut() -> u32 + Send + 'static) {
        if !self.armed {
            return;
        }
        self.bias = Some(Box::new(chooser));
    }

    pub fn clear(&mut self) {
        if !self.armed {
            return;
        }
        self.queue.clear();
        self.no_bust = false;
        self.bias = None;
    }

    pub fn into_inner(self) -> D {
        self.inner
    }

    fn soften(&self, value: u32) -> u32 {
        if self.no_bust && value == 1 {
            2
        } else {
            value
        }
    }
}

impl<D: RandomSource> RandomSource for RiggedDice<D> {
    fn next(&mut self, sides: u32) -> Result<u32> {
        validate_sides(sides)?;

        if let Some(value) = self.queue.pop_front() {
            return Ok(value.clamp(1, sides));
        }

        if let Some(chooser) = self.bias.as_mut() {
            let value = chooser().clamp(1, sides);
            return Ok(self.soften(value));
        }

        let value = self.inner.next(sides)?;
        Ok(self.soften(value))
    }
}

impl<D: fmt::Debug> fmt::Debug for RiggedDice<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RiggedDice")
            .field("inner", &self.inner)
            .field("armed", &self.armed)
            .field("queue", &self.queue)
            .field("no_bust", &self.no_bust)
            .field("bias", &self.bias.is_some())
            .finish()
    }
}
