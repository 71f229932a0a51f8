mod prelude {
    pub use std::fmt;
    pub use std::fmt::{Display, Formatter};
    pub use std::hash;
}

mod dimensions;
mod equatable;
mod object_eq;
mod plain;

pub use dimensions::{Dimensioned, Dimensions};
pub use equatable::{Equatable, EquatableCuboid};
pub use object_eq::ObjectEq;
pub use plain::Cuboid;
