use std::collections::HashMap;

use crate::core::LexicalKey;

/// Occurrence counts per lexical key.
///
/// Entries remember the order in which they were first seen, which breaks
/// ties between equal counts when listing most-frequent-first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyRecord {
    entries: Vec<(LexicalKey, u32)>,
    index: HashMap<LexicalKey, usize>,
}

impl FrequencyRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `weight` occurrences of `key`. A zero weight never creates an entry.
    pub fn add(&mut self, key: LexicalKey, weight: u32) {
        if weight == 0 {
            return;
        }

        match self.index.get(&key) {
            Some(&slot) => {
                let count = &mut self.entries[slot].1;
                *count = count.saturating_add(weight);
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, weight));
            }
        }
    }

    /// Folds another record into this one, e.g. a per-worker accumulator.
    /// Keys new to `self` are appended in `other`'s first-seen order.
    pub fn merge(&mut self, other: &FrequencyRecord) {
        for (key, count) in &other.entries {
            self.add(key.clone(), *count);
        }
    }

    pub fn get(&self, key: &LexicalKey) -> u32 {
        self.index.get(key).map_or(0, |&slot| self.entries[slot].1)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| u64::from(*count)).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&LexicalKey, u32)> {
        self.entries.iter().map(|(key, count)| (key, *count))
    }

    /// Entries sorted by descending count; equal counts keep first-seen order.
    pub fn most_common(&self) -> Vec<(&LexicalKey, u32)> {
        let mut sorted: Vec<(&LexicalKey, u32)> = self.iter().collect();
        // sort_by is stable
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;

    fn key(word: &str) -> LexicalKey {
        LexicalKey::new(word, Category::Unknown)
    }

    #[test]
    fn add_accumulates_weights() {
        let mut record = FrequencyRecord::new();
        record.add(key("hola"), 1);
        record.add(key("hola"), 3);
        record.add(key("mundo"), 1);

        assert_eq!(record.get(&key("hola")), 4);
        assert_eq!(record.get(&key("mundo")), 1);
        assert_eq!(record.get(&key("casa")), 0);
        assert_eq!(record.total(), 5);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn zero_weight_creates_nothing() {
        let mut record = FrequencyRecord::new();
        record.add(key("hola"), 0);
        assert!(record.is_empty());
    }

    #[test]
    fn same_word_in_two_categories_is_two_entries() {
        let mut record = FrequencyRecord::new();
        record.add(LexicalKey::new("bajo", Category::Adposition), 1);
        record.add(LexicalKey::new("bajo", Category::Adjective), 1);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn most_common_breaks_ties_by_first_seen() {
        let mut record = FrequencyRecord::new();
        for word in ["beta", "alfa", "gamma", "alfa", "beta", "delta"] {
            record.add(key(word), 1);
        }

        let order: Vec<(&str, u32)> =
            record.most_common().into_iter().map(|(k, c)| (k.token.as_str(), c)).collect();
        assert_eq!(order, vec![("beta", 2), ("alfa", 2), ("gamma", 1), ("delta", 1)]);
    }

    #[test]
    fn merge_matches_sequential_adds() {
        let mut left = FrequencyRecord::new();
        left.add(key("uno"), 2);
        let mut right = FrequencyRecord::new();
        right.add(key("dos"), 1);
        right.add(key("uno"), 1);

        left.merge(&right);

        let mut expected = FrequencyRecord::new();
        expected.add(key("uno"), 3);
        expected.add(key("dos"), 1);
        assert_eq!(left, expected);
    }

    #[test]
    fn clear_empties_everything() {
        let mut record = FrequencyRecord::new();
        record.add(key("hola"), 2);
        record.clear();
        assert!(record.is_empty());
        assert_eq!(record.total(), 0);
        assert_eq!(record, FrequencyRecord::new());
    }
}
