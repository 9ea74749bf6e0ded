//! Weighted entries: leaf values and nested tables.

use crate::error::{TableError, TableResult};
use crate::random::RandomSource;
use crate::sample::{ConditionalSample, Sample};

/// A validated entry weight: finite and non-negative.
///
/// For weighted tables the weight is a share of the table's total; for
/// chance tables it is a probability that is compared against each draw.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Weight(f64);

impl Weight {
    /// Validate a raw weight.
    pub fn new(weight: f64) -> TableResult<Self> {
        if weight.is_finite() && weight >= 0.0 {
            Ok(Self(weight))
        } else {
            Err(TableError::InvalidWeight(weight))
        }
    }

    /// The raw weight value.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Weight {
    type Error = TableError;

    fn try_from(weight: f64) -> TableResult<Self> {
        Self::new(weight)
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One weighted unit inside a table.
///
/// `N` is the nested table type of the owning family, so a context-free
/// table can only nest context-free tables and a gated table only gated ones.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry<T, N> {
    /// A concrete value produced when the entry is picked.
    Leaf {
        /// The produced value.
        value: T,
        /// The entry weight.
        weight: Weight,
    },
    /// A sub-table sampled when the entry is picked.
    Nested {
        /// The wrapped table.
        table: Box<N>,
        /// The entry weight.
        weight: Weight,
    },
}

impl<T, N> Entry<T, N> {
    /// Create a leaf entry.
    pub fn leaf(value: T, weight: f64) -> TableResult<Self> {
        Ok(Self::Leaf {
            value,
            weight: Weight::new(weight)?,
        })
    }

    /// Create an entry wrapping a sub-table.
    pub fn nested(weight: f64, table: impl Into<N>) -> TableResult<Self> {
        Ok(Self::Nested {
            table: Box::new(table.into()),
            weight: Weight::new(weight)?,
        })
    }

    /// The entry weight.
    pub fn weight(&self) -> f64 {
        match self {
            Self::Leaf { weight, .. } | Self::Nested { weight, .. } => weight.get(),
        }
    }

    /// The carried value, if this is a leaf.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Leaf { value, .. } => Some(value),
            Self::Nested { .. } => None,
        }
    }

    /// The wrapped table, if this entry is nested.
    pub fn table(&self) -> Option<&N> {
        match self {
            Self::Leaf { .. } => None,
            Self::Nested { table, .. } => Some(table),
        }
    }

    /// Returns true if this entry wraps a sub-table.
    pub fn is_nested(&self) -> bool {
        matches!(self, Self::Nested { .. })
    }
}

impl<T: Clone, N: Sample<T>> Entry<T, N> {
    /// Append what this entry produces: its value, or a fresh sample of
    /// its sub-table.
    pub fn produce_into<R>(&self, rng: &mut R, out: &mut Vec<T>) -> TableResult<()>
    where
        R: RandomSource + ?Sized,
    {
        match self {
            Self::Leaf { value, .. } => out.push(value.clone()),
            Self::Nested { table, .. } => table.sample_into(rng, out)?,
        }
        Ok(())
    }
}

impl<T: Clone, N> Entry<T, N> {
    /// Append what this entry produces, threading the context into a
    /// nested gated table.
    pub fn produce_with<C, R>(&self, rng: &mut R, context: &C, out: &mut Vec<T>) -> TableResult<()>
    where
        N: ConditionalSample<T, C>,
        R: RandomSource + ?Sized,
    {
        match self {
            Self::Leaf { value, .. } => out.push(value.clone()),
            Self::Nested { table, .. } => table.sample_into(rng, context, out)?,
        }
        Ok(())
    }
}
