use hashbrown::hash_table::Entry;
use hashbrown::HashTable;

use super::table_hash;
use crate::comparer::{DefaultComparer, EqualityComparer};

// Order preserving; the first of each group of equal values survives.
pub fn distinct<T, I, C>(iter: I, comparer: &C) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    C: EqualityComparer<T>,
{
    // Indexes into `out`.
    let mut seen: HashTable<usize> = HashTable::new();
    let mut out = Vec::new();

    for value in iter {
        let entry = seen.entry(
            table_hash(comparer, &value),
            |&idx| comparer.equals(Some(&out[idx]), Some(&value)),
            |&idx| table_hash(comparer, &out[idx]),
        );
        if let Entry::Vacant(entry) = entry {
            entry.insert(out.len());
            out.push(value);
        }
    }

    out
}

pub fn distinct_default<T, I>(iter: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    DefaultComparer: EqualityComparer<T>,
{
    distinct(iter, &DefaultComparer)
}
