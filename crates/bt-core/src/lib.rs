//! Weighted random selection tables for Beutel.
//!
//! Tables hold weighted entries and turn uniform random draws into sampled
//! values. Two policies are provided: weighted tables pick exactly one entry
//! per roll in proportion to its weight, and chance tables test every entry
//! independently against its weight as a probability. Entries can nest other
//! tables, and loot tables concatenate the samples of several pools.
//!
//! Every table comes in a context-free form and a form gated by conditions
//! over a caller-supplied context; a gated table whose conditions reject the
//! context produces nothing without drawing any randomness.

pub mod chance;
pub mod condition;
pub mod entry;
pub mod error;
pub mod loot;
pub mod random;
pub mod random_table;
pub mod sample;
pub mod seeded;
pub mod table;
pub mod weighted;

pub use chance::{ChanceTable, ConditionalChanceTable};
pub use condition::{Conditional, Conditions};
pub use entry::{Entry, Weight};
pub use error::{TableError, TableResult};
pub use loot::{ConditionalLootTable, LootTable};
pub use random::{RandomSource, RiggedRandom};
pub use random_table::{ConditionalTable, Policy, RandomTable};
pub use sample::{ConditionalSample, Sample};
pub use seeded::{Constant, SeededValue, constant};
pub use table::{EntryList, Table};
pub use weighted::{ConditionalWeightedTable, WeightedTable};

/// An entry of a context-free table.
pub type TableEntry<T> = Entry<T, RandomTable<T>>;

/// An entry of a table gated by a context of type `C`.
pub type ConditionalEntry<T, C> = Entry<T, ConditionalTable<T, C>>;
