use std::collections::HashMap;

use serde::Serialize;

/// Canonical name (or `dst-<TEAM>`) to ownership percentage.
///
/// Iteration follows first-insertion order; re-inserting a key replaces its
/// value in place. Rebuilt every time an ownership source is applied.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OwnershipDictionary {
    entries: Vec<(String, f64)>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl OwnershipDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&idx) => self.entries[idx].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.index.get(key).map(|&idx| self.entries[idx].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), *value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert every entry of `other`, in its order.
    pub fn merge(&mut self, other: &OwnershipDictionary) {
        for (key, value) in other.iter() {
            self.insert(key, value);
        }
    }
}

impl PartialEq for OwnershipDictionary {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for OwnershipDictionary {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        let mut dict = Self::new();
        for (key, value) in iter {
            dict.insert(key, value);
        }
        dict
    }
}
