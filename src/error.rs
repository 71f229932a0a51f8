use std::result;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("An item with the same key has already been added.")]
    DuplicateKey,
}

pub type Result<T> = result::Result<T, Error>;
