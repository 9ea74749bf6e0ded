//! The key/value context that pool conditions are evaluated against.

use std::collections::BTreeMap;

use crate::error::{CliError, CliResult};

/// String facts about the roll, such as `biome=forest`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    values: BTreeMap<String, String>,
}

impl Context {
    /// An empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `key=value` assignments; later keys overwrite earlier ones.
    pub fn from_assignments<S: AsRef<str>>(assignments: &[S]) -> CliResult<Self> {
        let mut context = Self::new();
        for raw in assignments {
            let raw = raw.as_ref();
            let (key, value) = raw
                .split_once('=')
                .ok_or_else(|| CliError::InvalidContext(raw.to_string()))?;
            let key = key.trim();
            if key.is_empty() {
                return Err(CliError::InvalidContext(raw.to_string()));
            }
            context.insert(key, value.trim());
        }
        Ok(context)
    }

    /// Set a key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns true if the key is set.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterate over the assignments in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of keys set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no keys are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
