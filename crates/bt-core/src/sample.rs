//! Sampling contracts for the two table families.

use crate::error::TableResult;
use crate::random::RandomSource;

/// A context-free table that can be sampled with a random source alone.
pub trait Sample<T> {
    /// Run every roll and append the produced values to `out`.
    fn sample_into<R>(&self, rng: &mut R, out: &mut Vec<T>) -> TableResult<()>
    where
        R: RandomSource + ?Sized;

    /// Run every roll and collect the produced values.
    fn sample<R>(&self, rng: &mut R) -> TableResult<Vec<T>>
    where
        R: RandomSource + ?Sized,
    {
        let mut out = Vec::new();
        self.sample_into(rng, &mut out)?;
        Ok(out)
    }
}

/// A table gated by conditions over a caller-supplied context.
///
/// A context the table's conditions reject produces nothing and consumes no
/// draws.
pub trait ConditionalSample<T, C> {
    /// Run every roll for `context` and append the produced values to `out`.
    fn sample_into<R>(&self, rng: &mut R, context: &C, out: &mut Vec<T>) -> TableResult<()>
    where
        R: RandomSource + ?Sized;

    /// Run every roll for `context` and collect the produced values.
    fn sample<R>(&self, rng: &mut R, context: &C) -> TableResult<Vec<T>>
    where
        R: RandomSource + ?Sized,
    {
        let mut out = Vec::new();
        self.sample_into(rng, context, &mut out)?;
        Ok(out)
    }
}
