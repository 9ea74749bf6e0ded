//! Loot tables: ordered pools whose samples are concatenated.

use crate::error::TableResult;
use crate::random::RandomSource;
use crate::random_table::{ConditionalTable, RandomTable};
use crate::sample::{ConditionalSample, Sample};

/// An ordered list of context-free pools.
#[derive(Debug, Clone, PartialEq)]
pub struct LootTable<T> {
    pools: Vec<RandomTable<T>>,
}

impl<T> LootTable<T> {
    /// Create a loot table with no pools.
    pub fn new() -> Self {
        Self { pools: Vec::new() }
    }

    /// Append a pool.
    pub fn add_pool(&mut self, table: impl Into<RandomTable<T>>) {
        self.pools.push(table.into());
    }

    /// The pools in sampling order.
    pub fn pools(&self) -> &[RandomTable<T>] {
        &self.pools
    }

    /// Mutable access to the pools, for editing their entries.
    pub fn pools_mut(&mut self) -> &mut [RandomTable<T>] {
        &mut self.pools
    }

    /// Number of pools.
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Returns true if there are no pools.
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

impl<T> Default for LootTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Sample<T> for LootTable<T> {
    fn sample_into<R>(&self, rng: &mut R, out: &mut Vec<T>) -> TableResult<()>
    where
        R: RandomSource + ?Sized,
    {
        for pool in &self.pools {
            pool.sample_into(rng, out)?;
        }
        Ok(())
    }
}

/// An ordered list of pools gated by conditions over a context of type `C`.
///
/// A pool whose conditions reject the context contributes nothing; later
/// pools are still sampled.
#[derive(Debug, Clone)]
pub struct ConditionalLootTable<T, C> {
    pools: Vec<ConditionalTable<T, C>>,
}

impl<T, C> ConditionalLootTable<T, C> {
    /// Create a loot table with no pools.
    pub fn new() -> Self {
        Self { pools: Vec::new() }
    }

    /// Append a pool.
    pub fn add_pool(&mut self, table: impl Into<ConditionalTable<T, C>>) {
        self.pools.push(table.into());
    }

    /// The pools in sampling order.
    pub fn pools(&self) -> &[ConditionalTable<T, C>] {
        &self.pools
    }

    /// Mutable access to the pools, for editing their entries.
    pub fn pools_mut(&mut self) -> &mut [ConditionalTable<T, C>] {
        &mut self.pools
    }

    /// Number of pools.
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Returns true if there are no pools.
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

impl<T, C> Default for ConditionalLootTable<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq, C> PartialEq for ConditionalLootTable<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.pools == other.pools
    }
}

impl<T: Clone, C> ConditionalSample<T, C> for ConditionalLootTable<T, C> {
    fn sample_into<R>(&self, rng: &mut R, context: &C, out: &mut Vec<T>) -> TableResult<()>
    where
        R: RandomSource + ?Sized,
    {
        for pool in &self.pools {
            pool.sample_into(rng, context, out)?;
        }
        Ok(())
    }
}
