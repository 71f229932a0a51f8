use super::prelude::*;
use super::{Dimensioned, Dimensions};
use crate::hash_code::HashCode;

pub trait Equatable<T: ?Sized = Self> {
    fn equals_typed(&self, other: Option<&T>) -> bool;
}

#[derive(Debug, Clone, Copy)]
pub struct EquatableCuboid {
    dimensions: Dimensions,
}

impl EquatableCuboid {
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

    // Two absent operands are equal, one absent operand never is.
    pub fn eq_operator(left: Option<&Self>, right: Option<&Self>) -> bool {
        match (left, right) {
            (Some(left), right @ Some(_)) => left.equals_typed(right),
            (left, right) => left.is_none() && right.is_none(),
        }
    }

    pub fn ne_operator(left: Option<&Self>, right: Option<&Self>) -> bool {
        !Self::eq_operator(left, right)
    }
}

impl Equatable for EquatableCuboid {
    fn equals_typed(&self, other: Option<&Self>) -> bool {
        match other {
            Some(other) => self.height() == other.height(),
            None => false,
        }
    }
}

impl Dimensioned for EquatableCuboid {
    fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }
}

impl Display for EquatableCuboid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dimensions)
    }
}

impl PartialEq for EquatableCuboid {
    fn eq(&self, other: &Self) -> bool {
        Self::eq_operator(Some(self), Some(other))
    }
}

impl Eq for EquatableCuboid {}

impl hash::Hash for EquatableCuboid {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        hash::Hash::hash(&self.height(), state);
    }
}

impl HashCode for EquatableCuboid {
    fn hash_code(&self) -> i32 {
        self.height().hash_code()
    }
}
