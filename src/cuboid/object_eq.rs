use std::any::Any;

// False unless `other` is present and of the same concrete type.
pub trait ObjectEq: Any {
    fn equals(&self, other: Option<&dyn Any>) -> bool;
}

impl<T> ObjectEq for T
where
    T: Eq + Any,
{
    fn equals(&self, other: Option<&dyn Any>) -> bool {
        match other.and_then(|other| other.downcast_ref::<T>()) {
            Some(other) => self == other,
            None => false,
        }
    }
}
