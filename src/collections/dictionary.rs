use hashbrown::hash_table::Entry;
use hashbrown::HashTable;
use tracing::debug;

use super::table_hash;
use crate::comparer::{DefaultComparer, EqualityComparer};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Dictionary<K, V, C = DefaultComparer> {
    table: HashTable<(K, V)>,
    comparer: C,
}

impl<K, V> Dictionary<K, V> {
    pub fn new() -> Self {
        Self::with_comparer(DefaultComparer)
    }
}

impl<K, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> Dictionary<K, V, C> {
    pub fn with_comparer(comparer: C) -> Self {
        Self {
            table: HashTable::new(),
            comparer,
        }
    }

    pub fn comparer(&self) -> &C {
        &self.comparer
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.table.iter().map(|(k, v)| (k, v))
    }
}

impl<K, V, C: EqualityComparer<K>> Dictionary<K, V, C> {
    // Fails without touching the map when an equal key is already present.
    pub fn add(&mut self, key: K, value: V) -> Result<()> {
        let comparer = &self.comparer;
        let hash = table_hash(comparer, &key);

        match self.table.entry(
            hash,
            |(existing, _)| comparer.equals(Some(existing), Some(&key)),
            |(existing, _)| table_hash(comparer, existing),
        ) {
            Entry::Occupied(_) => {
                debug!(hash, "rejected duplicate key");
                Err(Error::DuplicateKey)
            }
            Entry::Vacant(entry) => {
                entry.insert((key, value));
                debug!(hash, len = self.table.len(), "added entry");
                Ok(())
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.table
            .find(table_hash(&self.comparer, key), |(existing, _)| {
                self.comparer.equals(Some(existing), Some(key))
            })
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let comparer = &self.comparer;
        let entry = self
            .table
            .find_entry(table_hash(comparer, key), |(existing, _)| {
                comparer.equals(Some(existing), Some(key))
            })
            .ok()?;

        let ((_, value), _) = entry.remove();
        Some(value)
    }
}
