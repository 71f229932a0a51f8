use super::prelude::*;
use super::{Dimensioned, Dimensions};
use crate::hash_code::HashCode;

#[derive(Debug, Clone, Copy)]
pub struct Cuboid {
    dimensions: Dimensions,
}

impl Cuboid {
    pub fn new(
        height: impl Into<Option<i32>>,
        length: impl Into<Option<i32>>,
        width: impl Into<Option<i32>>,
    ) -> Self {
        Self {
            dimensions: Dimensions::new(height, length, width),
        }
    }

    pub fn height(&self) -> Option<i32> {
        self.dimensions.height
    }

    pub fn length(&self) -> Option<i32> {
        self.dimensions.length
    }

    pub fn width(&self) -> Option<i32> {
        self.dimensions.width
    }
}

impl Dimensioned for Cuboid {
    fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }
}

impl Display for Cuboid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dimensions)
    }
}

impl PartialEq for Cuboid {
    fn eq(&self, other: &Self) -> bool {
        self.height() == other.height()
    }
}

impl Eq for Cuboid {}

// Must agree with `eq`: height only.
impl hash::Hash for Cuboid {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        hash::Hash::hash(&self.height(), state);
    }
}

impl HashCode for Cuboid {
    fn hash_code(&self) -> i32 {
        self.height().hash_code()
    }
}
