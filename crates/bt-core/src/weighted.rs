//! Weighted-exclusive tables: each roll picks exactly one entry in
//! proportion to its share of the total weight.
//!
//! Selection is a cumulative-weight scan in insertion order. A draw landing
//! exactly on a boundary resolves to the earlier entry, so a zero-weight
//! entry is only picked when the remainder already sits at zero on reaching
//! it, as with a draw of `0.0` and a leading zero-weight entry.

use crate::condition::{Conditional, Conditions};
use crate::entry::Entry;
use crate::error::{TableError, TableResult};
use crate::random::RandomSource;
use crate::random_table::{ConditionalTable, RandomTable};
use crate::sample::{ConditionalSample, Sample};
use crate::table::{EntryList, Table};

/// Run `rolls` weighted picks over `entries`, handing each picked entry to
/// `produce`.
pub(crate) fn roll_weighted<T, N, R, F>(
    entries: &EntryList<T, N>,
    rolls: u32,
    rng: &mut R,
    out: &mut Vec<T>,
    mut produce: F,
) -> TableResult<()>
where
    R: RandomSource + ?Sized,
    F: FnMut(&Entry<T, N>, &mut R, &mut Vec<T>) -> TableResult<()>,
{
    if rolls == 0 || entries.is_empty() {
        return Ok(());
    }
    if !entries.total_weight().is_finite() {
        tracing::debug!(entries = entries.len(), "weighted table total weight overflowed");
        return Err(TableError::WeightOverflow {
            entries: entries.len(),
        });
    }
    if entries.total_weight() <= 0.0 {
        tracing::debug!(entries = entries.len(), "weighted table has zero total weight");
        return Err(TableError::EmptyDistribution {
            entries: entries.len(),
        });
    }

    for roll in 0..rolls {
        if let Some((index, entry)) = pick(entries, rng) {
            tracing::trace!(roll, index, weight = entry.weight(), "weighted pick");
            produce(entry, rng, out)?;
        }
    }
    Ok(())
}

/// Pick one entry by cumulative weight.
fn pick<'a, T, N, R>(entries: &'a EntryList<T, N>, rng: &mut R) -> Option<(usize, &'a Entry<T, N>)>
where
    R: RandomSource + ?Sized,
{
    let mut remainder = rng.next_f64() * entries.total_weight();
    let mut last = None;
    for (index, entry) in entries.iter().enumerate() {
        let weight = entry.weight();
        remainder -= weight;
        if remainder <= 0.0 {
            return Some((index, entry));
        }
        if weight > 0.0 {
            last = Some((index, entry));
        }
    }
    // Rounding can leave a sliver past the final boundary.
    tracing::debug!(remainder, "weighted scan overran, using last entry");
    last
}

/// A context-free table that picks one entry per roll by weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedTable<T> {
    entries: EntryList<T, RandomTable<T>>,
    rolls: u32,
}

impl<T> WeightedTable<T> {
    /// Create an empty table performing `rolls` picks per sample.
    pub fn new(rolls: u32) -> Self {
        Self {
            entries: EntryList::new(),
            rolls,
        }
    }

    /// Sum of the weights of all current entries.
    pub fn total_weight(&self) -> f64 {
        self.entries.total_weight()
    }
}

impl<T> Default for WeightedTable<T> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<T> Table for WeightedTable<T> {
    type Value = T;
    type Nested = RandomTable<T>;

    fn entries(&self) -> &EntryList<T, RandomTable<T>> {
        &self.entries
    }

    fn entries_mut(&mut self) -> &mut EntryList<T, RandomTable<T>> {
        &mut self.entries
    }

    fn rolls(&self) -> u32 {
        self.rolls
    }

    fn set_rolls(&mut self, rolls: u32) {
        self.rolls = rolls;
    }
}

impl<T: Clone> Sample<T> for WeightedTable<T> {
    fn sample_into<R>(&self, rng: &mut R, out: &mut Vec<T>) -> TableResult<()>
    where
        R: RandomSource + ?Sized,
    {
        tracing::trace!(rolls = self.rolls, entries = self.entries.len(), "sampling weighted table");
        roll_weighted(&self.entries, self.rolls, rng, out, |entry, rng, out| {
            entry.produce_into(rng, out)
        })
    }
}

/// A weighted table gated by conditions over a context of type `C`.
#[derive(Debug, Clone)]
pub struct ConditionalWeightedTable<T, C> {
    entries: EntryList<T, ConditionalTable<T, C>>,
    conditions: Conditions<C>,
    rolls: u32,
}

impl<T, C> ConditionalWeightedTable<T, C> {
    /// Create an empty table performing `rolls` picks per sample.
    pub fn new(rolls: u32) -> Self {
        Self {
            entries: EntryList::new(),
            conditions: Conditions::new(),
            rolls,
        }
    }

    /// Sum of the weights of all current entries.
    pub fn total_weight(&self) -> f64 {
        self.entries.total_weight()
    }
}

impl<T, C> Default for ConditionalWeightedTable<T, C> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<T: PartialEq, C> PartialEq for ConditionalWeightedTable<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.rolls == other.rolls
            && self.entries == other.entries
            && self.conditions.len() == other.conditions.len()
    }
}

impl<T, C> Table for ConditionalWeightedTable<T, C> {
    type Value = T;
    type Nested = ConditionalTable<T, C>;

    fn entries(&self) -> &EntryList<T, ConditionalTable<T, C>> {
        &self.entries
    }

    fn entries_mut(&mut self) -> &mut EntryList<T, ConditionalTable<T, C>> {
        &mut self.entries
    }

    fn rolls(&self) -> u32 {
        self.rolls
    }

    fn set_rolls(&mut self, rolls: u32) {
        self.rolls = rolls;
    }
}

impl<T, C> Conditional<C> for ConditionalWeightedTable<T, C> {
    fn conditions(&self) -> &Conditions<C> {
        &self.conditions
    }

    fn conditions_mut(&mut self) -> &mut Conditions<C> {
        &mut self.conditions
    }
}

impl<T: Clone, C> ConditionalSample<T, C> for ConditionalWeightedTable<T, C> {
    fn sample_into<R>(&self, rng: &mut R, context: &C, out: &mut Vec<T>) -> TableResult<()>
    where
        R: RandomSource + ?Sized,
    {
        if !self.validate(context)? {
            tracing::debug!("context rejected by weighted table conditions");
            return Ok(());
        }
        tracing::trace!(rolls = self.rolls, entries = self.entries.len(), "sampling weighted table");
        roll_weighted(&self.entries, self.rolls, rng, out, |entry, rng, out| {
            entry.produce_with(rng, context, out)
        })
    }
}
