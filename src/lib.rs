mod error;
mod hash_code;

pub mod collections;
pub mod comparer;
pub mod cuboid;
pub mod demo;
pub mod logging;

pub use error::{Error, Result};
pub use hash_code::{HashCode, NULL_HASH_CODE};
