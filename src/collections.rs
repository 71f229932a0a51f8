mod dictionary;
mod distinct;
mod unique_set;

pub use dictionary::Dictionary;
pub use distinct::{distinct, distinct_default};
pub use unique_set::UniqueSet;

use crate::comparer::EqualityComparer;

// Sign extension keeps equal codes equal, which is all the table needs.
fn table_hash<T, C: EqualityComparer<T>>(comparer: &C, item: &T) -> u64 {
    comparer.hash(item) as u64
}
