//! Independent-chance tables: every roll tests each entry on its own.
//!
//! An entry's weight is its probability of being produced on a roll. One
//! draw is taken per entry per roll, in insertion order, so zero, one, or
//! many entries may be produced.

use crate::condition::{Conditional, Conditions};
use crate::entry::Entry;
use crate::error::TableResult;
use crate::random::RandomSource;
use crate::random_table::{ConditionalTable, RandomTable};
use crate::sample::{ConditionalSample, Sample};
use crate::table::{EntryList, Table};

/// Run `rolls` passes over `entries`, handing every entry whose draw falls
/// under its weight to `produce`.
pub(crate) fn roll_chance<T, N, R, F>(
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
    for roll in 0..rolls {
        for (index, entry) in entries.iter().enumerate() {
            if rng.next_f64() < entry.weight() {
                tracing::trace!(roll, index, chance = entry.weight(), "chance hit");
                produce(entry, rng, out)?;
            }
        }
    }
    Ok(())
}

/// A context-free table that tests every entry independently on each roll.
#[derive(Debug, Clone, PartialEq)]
pub struct ChanceTable<T> {
    entries: EntryList<T, RandomTable<T>>,
    rolls: u32,
}

impl<T> ChanceTable<T> {
    /// Create an empty table performing `rolls` passes per sample.
    pub fn new(rolls: u32) -> Self {
        Self {
            entries: EntryList::new(),
            rolls,
        }
    }
}

impl<T> Default for ChanceTable<T> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<T> Table for ChanceTable<T> {
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

impl<T: Clone> Sample<T> for ChanceTable<T> {
    fn sample_into<R>(&self, rng: &mut R, out: &mut Vec<T>) -> TableResult<()>
    where
        R: RandomSource + ?Sized,
    {
        tracing::trace!(rolls = self.rolls, entries = self.entries.len(), "sampling chance table");
        roll_chance(&self.entries, self.rolls, rng, out, |entry, rng, out| {
            entry.produce_into(rng, out)
        })
    }
}

/// A chance table gated by conditions over a context of type `C`.
#[derive(Debug, Clone)]
pub struct ConditionalChanceTable<T, C> {
    entries: EntryList<T, ConditionalTable<T, C>>,
    conditions: Conditions<C>,
    rolls: u32,
}

impl<T, C> ConditionalChanceTable<T, C> {
    /// Create an empty table performing `rolls` passes per sample.
    pub fn new(rolls: u32) -> Self {
        Self {
            entries: EntryList::new(),
            conditions: Conditions::new(),
            rolls,
        }
    }
}

impl<T, C> Default for ConditionalChanceTable<T, C> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<T: PartialEq, C> PartialEq for ConditionalChanceTable<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.rolls == other.rolls
            && self.entries == other.entries
            && self.conditions.len() == other.conditions.len()
    }
}

impl<T, C> Table for ConditionalChanceTable<T, C> {
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

impl<T, C> Conditional<C> for ConditionalChanceTable<T, C> {
    fn conditions(&self) -> &Conditions<C> {
        &self.conditions
    }

    fn conditions_mut(&mut self) -> &mut Conditions<C> {
        &mut self.conditions
    }
}

impl<T: Clone, C> ConditionalSample<T, C> for ConditionalChanceTable<T, C> {
    fn sample_into<R>(&self, rng: &mut R, context: &C, out: &mut Vec<T>) -> TableResult<()>
    where
        R: RandomSource + ?Sized,
    {
        if !self.validate(context)? {
            tracing::debug!("context rejected by chance table conditions");
            return Ok(());
        }
        tracing::trace!(rolls = self.rolls, entries = self.entries.len(), "sampling chance table");
        roll_chance(&self.entries, self.rolls, rng, out, |entry, rng, out| {
            entry.produce_with(rng, context, out)
        })
    }
}
