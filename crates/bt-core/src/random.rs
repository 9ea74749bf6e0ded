//! Sources of uniform random draws.
//!
//! Tables only ever ask for one thing: a uniform `f64` in `[0, 1)`. Any
//! [`rand::RngCore`] qualifies through a blanket implementation, and
//! [`RiggedRandom`] replays scripted draws for deterministic tests.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// A source of uniform draws on `[0, 1)`.
pub trait RandomSource {
    /// Draw the next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// A random source that replays queued draws before falling back to a
/// seeded generator.
///
/// Every draw is counted, which makes it possible to assert how much
/// randomness a sample consumed.
#[derive(Debug, Clone)]
pub struct RiggedRandom {
    queue: VecDeque<f64>,
    fallback: StdRng,
    draws: usize,
}

impl RiggedRandom {
    /// Create a rigged source whose fallback generator uses the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            queue: VecDeque::new(),
            fallback: StdRng::seed_from_u64(seed),
            draws: 0,
        }
    }

    /// Create a rigged source preloaded with the given draws.
    pub fn with_draws(draws: impl IntoIterator<Item = f64>) -> Self {
        let mut rigged = Self::new(0);
        rigged.queue.extend(draws);
        rigged
    }

    /// Queue a value to be returned by a later draw.
    pub fn enqueue(&mut self, value: f64) {
        self.queue.push_back(value);
    }

    /// How many draws have been taken so far.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// How many queued values have not been drawn yet.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl Default for RiggedRandom {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RandomSource for RiggedRandom {
    fn next_f64(&mut self) -> f64 {
        self.draws += 1;
        match self.queue.pop_front() {
            Some(value) => value,
            None => self.fallback.random::<f64>(),
        }
    }
}
