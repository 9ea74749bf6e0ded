//! JSON table definitions and their conversion into loot tables.
//!
//! A definition is a list of pools. Each pool names its policy, how many
//! times it rolls, the conditions gating it and its entries; an entry holds
//! either a plain string value or another table.

use std::fmt;
use std::path::Path;

use bt_core::{
    Conditional, ConditionalChanceTable, ConditionalLootTable, ConditionalTable,
    ConditionalWeightedTable, Table,
};
use serde::Deserialize;

use crate::context::Context;
use crate::error::{CliError, CliResult};

/// The loot table a definition builds.
pub type Loot = ConditionalLootTable<String, Context>;

/// A whole definition file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Definition {
    /// Pools in sampling order.
    pub pools: Vec<TableDef>,
}

/// Selection policy of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// One entry per roll, proportional to weight.
    Weighted,
    /// Every entry tested per roll, weight as probability.
    Chance,
}

/// One table: a pool, or a table nested inside an entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableDef {
    /// Selection policy.
    pub kind: Kind,
    /// Rolls per sample.
    #[serde(default = "default_rolls")]
    pub rolls: u32,
    /// Conditions that must all hold for the table to produce anything.
    #[serde(default)]
    pub when: Vec<ConditionDef>,
    /// Entries in insertion order.
    #[serde(default)]
    pub entries: Vec<EntryDef>,
}

fn default_rolls() -> u32 {
    1
}

/// A condition over the roll context.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionDef {
    /// The key is set to exactly this value.
    Equals {
        /// Context key.
        key: String,
        /// Required value.
        value: String,
    },
    /// The key is set to anything.
    Present {
        /// Context key.
        key: String,
    },
    /// The key is not set.
    Absent {
        /// Context key.
        key: String,
    },
}

/// An entry: a weight and exactly one of `value` or `table`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntryDef {
    /// Relative weight (weighted) or probability (chance).
    pub weight: f64,
    /// Value produced when the entry is selected.
    #[serde(default)]
    pub value: Option<String>,
    /// Table sampled when the entry is selected.
    #[serde(default)]
    pub table: Option<TableDef>,
}

impl Definition {
    /// Parse a definition from JSON text.
    pub fn from_json(text: &str) -> CliResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a definition file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let definition = Self::from_json(&text)?;
        tracing::debug!(
            path = %path.display(),
            pools = definition.pools.len(),
            "loaded definition"
        );
        Ok(definition)
    }

    /// Build the gated loot table described by this definition.
    pub fn build(&self) -> CliResult<Loot> {
        let mut loot = Loot::new();
        for pool in &self.pools {
            loot.add_pool(pool.build()?);
        }
        Ok(loot)
    }
}

impl TableDef {
    /// Build this table and everything nested under it.
    pub fn build(&self) -> CliResult<ConditionalTable<String, Context>> {
        let mut table: ConditionalTable<String, Context> = match self.kind {
            Kind::Weighted => ConditionalWeightedTable::new(self.rolls).into(),
            Kind::Chance => ConditionalChanceTable::new(self.rolls).into(),
        };
        for condition in &self.when {
            condition.attach(&mut table);
        }
        for entry in &self.entries {
            match (&entry.value, &entry.table) {
                (Some(value), None) => table.add_value(value.clone(), entry.weight)?,
                (None, Some(nested)) => table.add_table(entry.weight, nested.build()?)?,
                (Some(_), Some(_)) => {
                    return Err(CliError::Definition(
                        "entry has both a value and a table".into(),
                    ));
                }
                (None, None) => {
                    return Err(CliError::Definition(
                        "entry needs a value or a table".into(),
                    ));
                }
            }
        }
        Ok(table)
    }
}

impl ConditionDef {
    /// Evaluate against a context.
    pub fn holds(&self, context: &Context) -> bool {
        match self {
            Self::Equals { key, value } => context.get(key) == Some(value.as_str()),
            Self::Present { key } => context.contains(key),
            Self::Absent { key } => !context.contains(key),
        }
    }

    fn attach(&self, table: &mut ConditionalTable<String, Context>) {
        let condition = self.clone();
        table.add_condition(move |context: &Context| condition.holds(context));
    }
}

impl fmt::Display for ConditionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equals { key, value } => write!(f, "{key} = {value}"),
            Self::Present { key } => write!(f, "{key} set"),
            Self::Absent { key } => write!(f, "{key} unset"),
        }
    }
}
