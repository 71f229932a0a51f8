use hashbrown::hash_table::Entry;
use hashbrown::HashTable;

use super::table_hash;
use crate::comparer::{DefaultComparer, EqualityComparer};

#[derive(Debug, Clone)]
pub struct UniqueSet<T, C = DefaultComparer> {
    table: HashTable<T>,
    comparer: C,
}

impl<T> UniqueSet<T> {
    pub fn new() -> Self {
        Self::with_comparer(DefaultComparer)
    }
}

impl<T> Default for UniqueSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> UniqueSet<T, C> {
    pub fn with_comparer(comparer: C) -> Self {
        Self {
            table: HashTable::new(),
            comparer,
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.table.iter()
    }
}

impl<T, C: EqualityComparer<T>> UniqueSet<T, C> {
    pub fn from_iter_with<I: IntoIterator<Item = T>>(iter: I, comparer: C) -> Self {
        let mut set = Self::with_comparer(comparer);
        set.extend(iter);
        set
    }

    // The first of two equal values is the one kept.
    pub fn insert(&mut self, value: T) -> bool {
        let comparer = &self.comparer;
        match self.table.entry(
            table_hash(comparer, &value),
            |existing| comparer.equals(Some(existing), Some(&value)),
            |existing| table_hash(comparer, existing),
        ) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(value);
                true
            }
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.table
            .find(table_hash(&self.comparer, value), |existing| {
                self.comparer.equals(Some(existing), Some(value))
            })
            .is_some()
    }
}

impl<T, C: EqualityComparer<T>> Extend<T> for UniqueSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for UniqueSet<T>
where
    DefaultComparer: EqualityComparer<T>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, DefaultComparer)
    }
}
