use super::prelude::*;

// Compares all three fields; the cuboid types narrow this to the height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    pub height: Option<i32>,
    pub length: Option<i32>,
    pub width: Option<i32>,
}

impl Dimensions {
    pub fn new(
        height: impl Into<Option<i32>>,
        length: impl Into<Option<i32>>,
        width: impl Into<Option<i32>>,
    ) -> Self {
        Self {
            height: height.into(),
            length: length.into(),
            width: width.into(),
        }
    }
}

struct Field(Option<i32>);

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{}", v),
            None => Ok(()),
        }
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            Field(self.height),
            Field(self.length),
            Field(self.width)
        )
    }
}

pub trait Dimensioned {
    fn dimensions(&self) -> &Dimensions;
}
