//! Sum types over the table policies, one per family.
//!
//! A nested entry wraps one of these, so any policy can nest any other
//! within the same family.

use crate::chance::{ConditionalChanceTable, ChanceTable};
use crate::condition::{Conditional, Conditions};
use crate::error::TableResult;
use crate::random::RandomSource;
use crate::sample::{ConditionalSample, Sample};
use crate::table::{EntryList, Table};
use crate::weighted::{ConditionalWeightedTable, WeightedTable};

/// How a table turns draws into picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// One entry per roll, in proportion to its share of the total weight.
    Weighted,
    /// Every entry tested per roll against its own probability.
    Chance,
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weighted => write!(f, "weighted"),
            Self::Chance => write!(f, "chance"),
        }
    }
}

/// Any context-free table.
#[derive(Debug, Clone, PartialEq)]
pub enum RandomTable<T> {
    /// A weighted-exclusive table.
    Weighted(WeightedTable<T>),
    /// An independent-chance table.
    Chance(ChanceTable<T>),
}

impl<T> RandomTable<T> {
    /// The policy of the wrapped table.
    pub fn policy(&self) -> Policy {
        match self {
            Self::Weighted(_) => Policy::Weighted,
            Self::Chance(_) => Policy::Chance,
        }
    }
}

impl<T> From<WeightedTable<T>> for RandomTable<T> {
    fn from(table: WeightedTable<T>) -> Self {
        Self::Weighted(table)
    }
}

impl<T> From<ChanceTable<T>> for RandomTable<T> {
    fn from(table: ChanceTable<T>) -> Self {
        Self::Chance(table)
    }
}

impl<T> Table for RandomTable<T> {
    type Value = T;
    type Nested = RandomTable<T>;

    fn entries(&self) -> &EntryList<T, RandomTable<T>> {
        match self {
            Self::Weighted(t) => t.entries(),
            Self::Chance(t) => t.entries(),
        }
    }

    fn entries_mut(&mut self) -> &mut EntryList<T, RandomTable<T>> {
        match self {
            Self::Weighted(t) => t.entries_mut(),
            Self::Chance(t) => t.entries_mut(),
        }
    }

    fn rolls(&self) -> u32 {
        match self {
            Self::Weighted(t) => t.rolls(),
            Self::Chance(t) => t.rolls(),
        }
    }

    fn set_rolls(&mut self, rolls: u32) {
        match self {
            Self::Weighted(t) => t.set_rolls(rolls),
            Self::Chance(t) => t.set_rolls(rolls),
        }
    }
}

impl<T: Clone> Sample<T> for RandomTable<T> {
    fn sample_into<R>(&self, rng: &mut R, out: &mut Vec<T>) -> TableResult<()>
    where
        R: RandomSource + ?Sized,
    {
        match self {
            Self::Weighted(t) => t.sample_into(rng, out),
            Self::Chance(t) => t.sample_into(rng, out),
        }
    }
}

/// Any table gated by conditions over a context of type `C`.
#[derive(Debug, Clone)]
pub enum ConditionalTable<T, C> {
    /// A gated weighted-exclusive table.
    Weighted(ConditionalWeightedTable<T, C>),
    /// A gated independent-chance table.
    Chance(ConditionalChanceTable<T, C>),
}

impl<T, C> ConditionalTable<T, C> {
    /// The policy of the wrapped table.
    pub fn policy(&self) -> Policy {
        match self {
            Self::Weighted(_) => Policy::Weighted,
            Self::Chance(_) => Policy::Chance,
        }
    }
}

impl<T: PartialEq, C> PartialEq for ConditionalTable<T, C> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Weighted(a), Self::Weighted(b)) => a == b,
            (Self::Chance(a), Self::Chance(b)) => a == b,
            _ => false,
        }
    }
}

impl<T, C> From<ConditionalWeightedTable<T, C>> for ConditionalTable<T, C> {
    fn from(table: ConditionalWeightedTable<T, C>) -> Self {
        Self::Weighted(table)
    }
}

impl<T, C> From<ConditionalChanceTable<T, C>> for ConditionalTable<T, C> {
    fn from(table: ConditionalChanceTable<T, C>) -> Self {
        Self::Chance(table)
    }
}

impl<T, C> Table for ConditionalTable<T, C> {
    type Value = T;
    type Nested = ConditionalTable<T, C>;

    fn entries(&self) -> &EntryList<T, ConditionalTable<T, C>> {
        match self {
            Self::Weighted(t) => t.entries(),
            Self::Chance(t) => t.entries(),
        }
    }

    fn entries_mut(&mut self) -> &mut EntryList<T, ConditionalTable<T, C>> {
        match self {
            Self::Weighted(t) => t.entries_mut(),
            Self::Chance(t) => t.entries_mut(),
        }
    }

    fn rolls(&self) -> u32 {
        match self {
            Self::Weighted(t) => t.rolls(),
            Self::Chance(t) => t.rolls(),
        }
    }

    fn set_rolls(&mut self, rolls: u32) {
        match self {
            Self::Weighted(t) => t.set_rolls(rolls),
            Self::Chance(t) => t.set_rolls(rolls),
        }
    }
}

impl<T, C> Conditional<C> for ConditionalTable<T, C> {
    fn conditions(&self) -> &Conditions<C> {
        match self {
            Self::Weighted(t) => t.conditions(),
            Self::Chance(t) => t.conditions(),
        }
    }

    fn conditions_mut(&mut self) -> &mut Conditions<C> {
        match self {
            Self::Weighted(t) => t.conditions_mut(),
            Self::Chance(t) => t.conditions_mut(),
        }
    }
}

impl<T: Clone, C> ConditionalSample<T, C> for ConditionalTable<T, C> {
    fn sample_into<R>(&self, rng: &mut R, context: &C, out: &mut Vec<T>) -> TableResult<()>
    where
        R: RandomSource + ?Sized,
    {
        match self {
            Self::Weighted(t) => t.sample_into(rng, context, out),
            Self::Chance(t) => t.sample_into(rng, context, out),
        }
    }
}
