//! Value counting with a deterministic order
//!
//! Entries are ordered by descending count. Equal counts are ordered by
//! ascending key, so the mode of a column is the smallest of its most
//! frequent values.

use std::collections::BTreeMap;

/// A value and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Count<K> {
    pub value: K,
    pub count: u64,
}

impl<K> Count<K> {
    pub fn map<U, F: FnOnce(K) -> U>(self, f: F) -> Count<U> {
        Count {
            value: f(self.value),
            count: self.count,
        }
    }
}

/// Occurrence counts of every distinct value in a column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<K> {
    entries: Vec<Count<K>>,
}

impl<K: Ord> FrequencyTable<K> {
    pub fn from_values<I: IntoIterator<Item = K>>(values: I) -> Self {
        let mut counts: BTreeMap<K, u64> = BTreeMap::new();
        for value in values {
            *counts.entry(value).or_insert(0) += 1;
        }

        let mut entries: Vec<Count<K>> = counts
            .into_iter()
            .map(|(value, count)| Count { value, count })
            .collect();
        // stable sort keeps ascending key order within equal counts
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        Self { entries }
    }
}

impl<K> FrequencyTable<K> {
    #[must_use]
    pub fn most_common(&self) -> Option<&Count<K>> {
        self.entries.first()
    }

    #[must_use]
    pub fn entries(&self) -> &[Count<K>] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// Convert every key, keeping the order
    pub fn map_values<U, F: FnMut(K) -> U>(self, mut f: F) -> FrequencyTable<U> {
        FrequencyTable {
            entries: self
                .entries
                .into_iter()
                .map(|entry| entry.map(&mut f))
                .collect(),
        }
    }

    /// Most common value together with its count
    pub fn into_most_common(self) -> Option<Count<K>> {
        self.entries.into_iter().next()
    }
}

/// Most frequent value; ties go to the smallest value
pub fn mode<K: Ord, I: IntoIterator<Item = K>>(values: I) -> Option<K> {
    FrequencyTable::from_values(values)
        .into_most_common()
        .map(|entry| entry.value)
}
