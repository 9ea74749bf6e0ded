//! Entry storage and the operations every table shares.
//!
//! [`EntryList`] is the only place entries live. It keeps a running total of
//! its weights and refreshes that total inside every mutating method, so the
//! total can never be read while stale. The [`Table`] trait layers the
//! collection-style operations on top of any table that owns an entry list.

use crate::entry::Entry;
use crate::error::TableResult;

/// An ordered list of weighted entries with a cached total weight.
///
/// Insertion order is significant: it defines the cumulative-weight
/// boundaries of weighted tables and the test order of chance tables.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryList<T, N> {
    entries: Vec<Entry<T, N>>,
    total_weight: f64,
}

impl<T, N> Default for EntryList<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, N> EntryList<T, N> {
    /// Create an empty entry list.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            total_weight: 0.0,
        }
    }

    /// Sum of the weights of all current entries.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<T, N>> {
        self.entries.iter()
    }

    /// The entry at the given position.
    pub fn get(&self, index: usize) -> Option<&Entry<T, N>> {
        self.entries.get(index)
    }

    /// The entries as a slice.
    pub fn as_slice(&self) -> &[Entry<T, N>] {
        &self.entries
    }

    /// Append an entry.
    pub fn add(&mut self, entry: Entry<T, N>) {
        self.entries.push(entry);
        self.recalculate();
    }

    /// Remove and return the entry at the given position.
    pub fn remove_at(&mut self, index: usize) -> Option<Entry<T, N>> {
        if index >= self.entries.len() {
            return None;
        }
        let removed = self.entries.remove(index);
        self.recalculate();
        Some(removed)
    }

    /// Keep only the entries the predicate accepts. Returns true if any
    /// entry was removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&Entry<T, N>) -> bool) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| keep(entry));
        self.recalculate();
        self.entries.len() != before
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.total_weight = self.entries.iter().map(Entry::weight).sum();
    }
}

impl<T: PartialEq, N: PartialEq> EntryList<T, N> {
    /// Remove the first entry equal to `entry`. Returns true if one was found.
    pub fn remove(&mut self, entry: &Entry<T, N>) -> bool {
        match self.entries.iter().position(|e| e == entry) {
            Some(index) => self.remove_at(index).is_some(),
            None => false,
        }
    }

    /// Remove every entry equal to any of `entries`. Returns true if any
    /// entry was removed.
    pub fn remove_all(&mut self, entries: &[Entry<T, N>]) -> bool {
        self.retain(|e| !entries.contains(e))
    }

    /// Keep only entries equal to one of `entries`. Returns true if any
    /// entry was removed.
    pub fn retain_only(&mut self, entries: &[Entry<T, N>]) -> bool {
        self.retain(|e| entries.contains(e))
    }

    /// Returns true if an equal entry is present.
    pub fn contains(&self, entry: &Entry<T, N>) -> bool {
        self.entries.contains(entry)
    }

    /// Returns true if every one of `entries` is present.
    pub fn contains_all(&self, entries: &[Entry<T, N>]) -> bool {
        entries.iter().all(|e| self.contains(e))
    }
}

impl<T: PartialEq, N> EntryList<T, N> {
    /// Returns true if a leaf entry carries a value equal to `value`.
    pub fn contains_value(&self, value: &T) -> bool {
        self.entries.iter().any(|e| e.value() == Some(value))
    }

    /// Returns true if every one of `values` is carried by some leaf entry.
    pub fn contains_all_values(&self, values: &[T]) -> bool {
        values.iter().all(|v| self.contains_value(v))
    }
}

impl<'a, T, N> IntoIterator for &'a EntryList<T, N> {
    type Item = &'a Entry<T, N>;
    type IntoIter = std::slice::Iter<'a, Entry<T, N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Operations shared by every table: entry storage, roll count, and
/// collection-style mutation.
///
/// All mutation goes through the underlying [`EntryList`], which keeps its
/// cached total weight consistent before returning.
pub trait Table {
    /// The type of value the table produces.
    type Value;
    /// The type of table a nested entry may wrap.
    type Nested;

    /// The table's entries.
    fn entries(&self) -> &EntryList<Self::Value, Self::Nested>;

    /// Mutable access to the table's entries.
    fn entries_mut(&mut self) -> &mut EntryList<Self::Value, Self::Nested>;

    /// How many independent passes a sample performs.
    fn rolls(&self) -> u32;

    /// Set how many independent passes a sample performs.
    fn set_rolls(&mut self, rolls: u32);

    /// Append an entry.
    fn add(&mut self, entry: Entry<Self::Value, Self::Nested>) {
        self.entries_mut().add(entry);
    }

    /// Append a leaf entry carrying `value`.
    fn add_value(&mut self, value: Self::Value, weight: f64) -> TableResult<()> {
        self.add(Entry::leaf(value, weight)?);
        Ok(())
    }

    /// Append an entry wrapping a sub-table.
    fn add_table(&mut self, weight: f64, table: impl Into<Self::Nested>) -> TableResult<()> {
        self.add(Entry::nested(weight, table)?);
        Ok(())
    }

    /// Remove the first entry equal to `entry`.
    fn remove(&mut self, entry: &Entry<Self::Value, Self::Nested>) -> bool
    where
        Self::Value: PartialEq,
        Self::Nested: PartialEq,
    {
        self.entries_mut().remove(entry)
    }

    /// Remove and return the entry at the given position.
    fn remove_at(&mut self, index: usize) -> Option<Entry<Self::Value, Self::Nested>> {
        self.entries_mut().remove_at(index)
    }

    /// Remove every entry equal to any of `entries`.
    fn remove_all(&mut self, entries: &[Entry<Self::Value, Self::Nested>]) -> bool
    where
        Self::Value: PartialEq,
        Self::Nested: PartialEq,
    {
        self.entries_mut().remove_all(entries)
    }

    /// Keep only entries equal to one of `entries`.
    fn retain_only(&mut self, entries: &[Entry<Self::Value, Self::Nested>]) -> bool
    where
        Self::Value: PartialEq,
        Self::Nested: PartialEq,
    {
        self.entries_mut().retain_only(entries)
    }

    /// Keep only the entries the predicate accepts.
    fn retain(&mut self, keep: impl FnMut(&Entry<Self::Value, Self::Nested>) -> bool) -> bool {
        self.entries_mut().retain(keep)
    }

    /// Remove every entry.
    fn clear(&mut self) {
        self.entries_mut().clear();
    }

    /// Returns true if an equal entry is present.
    fn contains(&self, entry: &Entry<Self::Value, Self::Nested>) -> bool
    where
        Self::Value: PartialEq,
        Self::Nested: PartialEq,
    {
        self.entries().contains(entry)
    }

    /// Returns true if every one of `entries` is present.
    fn contains_all(&self, entries: &[Entry<Self::Value, Self::Nested>]) -> bool
    where
        Self::Value: PartialEq,
        Self::Nested: PartialEq,
    {
        self.entries().contains_all(entries)
    }

    /// Returns true if a leaf entry carries `value`.
    fn contains_value(&self, value: &Self::Value) -> bool
    where
        Self::Value: PartialEq,
    {
        self.entries().contains_value(value)
    }

    /// Returns true if every one of `values` is carried by some leaf entry.
    fn contains_all_values(&self, values: &[Self::Value]) -> bool
    where
        Self::Value: PartialEq,
    {
        self.entries().contains_all_values(values)
    }

    /// Number of entries.
    fn len(&self) -> usize {
        self.entries().len()
    }

    /// Returns true if the table holds no entries.
    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}
