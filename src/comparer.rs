use std::ptr;

use crate::cuboid::Dimensioned;
use crate::hash_code::HashCode;

// Values that compare equal must report the same `hash`.
pub trait EqualityComparer<T: ?Sized> {
    fn equals(&self, left: Option<&T>, right: Option<&T>) -> bool;
    fn hash(&self, item: &T) -> i32;
}

impl<T: ?Sized, C: EqualityComparer<T> + ?Sized> EqualityComparer<T> for &C {
    fn equals(&self, left: Option<&T>, right: Option<&T>) -> bool {
        (**self).equals(left, right)
    }

    fn hash(&self, item: &T) -> i32 {
        (**self).hash(item)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultComparer;

impl<T: PartialEq + HashCode + ?Sized> EqualityComparer<T> for DefaultComparer {
    fn equals(&self, left: Option<&T>, right: Option<&T>) -> bool {
        match (left, right) {
            (Some(left), Some(right)) => left == right,
            (None, None) => true,
            _ => false,
        }
    }

    fn hash(&self, item: &T) -> i32 {
        item.hash_code()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FullComparer;

impl<T: Dimensioned + ?Sized> EqualityComparer<T> for FullComparer {
    fn equals(&self, left: Option<&T>, right: Option<&T>) -> bool {
        match (left, right) {
            (None, None) => true,
            (Some(left), Some(right)) => {
                ptr::eq(left, right) || left.dimensions() == right.dimensions()
            }
            _ => false,
        }
    }

    fn hash(&self, item: &T) -> i32 {
        let dimensions = item.dimensions();
        dimensions.height.hash_code() ^ dimensions.length.hash_code() ^ dimensions.width.hash_code()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::cuboid::{Cuboid, EquatableCuboid};

    // Narrow range so that generated pairs collide often.
    fn arb_field() -> impl Strategy<Value = Option<i32>> {
        proptest::option::of(-3..3_i32)
    }

    fn arb_cuboid() -> impl Strategy<Value = Cuboid> {
        (arb_field(), arb_field(), arb_field()).prop_map(|(h, l, w)| Cuboid::new(h, l, w))
    }

    #[test]
    fn test_full_comparer() {
        let a = Cuboid::new(4, 3, 4);
        let b = Cuboid::new(4, 3, 4);
        let c = Cuboid::new(3, 4, 3);
        let d = Cuboid::new(4, 4, 3);

        assert!(FullComparer.equals(Some(&a), Some(&a)));
        assert!(FullComparer.equals(Some(&a), Some(&b)));
        assert!(!FullComparer.equals(Some(&a), Some(&c)));
        assert!(!FullComparer.equals(Some(&a), Some(&d)));

        // The cuboid's own policy still sees `a` and `d` as equal.
        assert_eq!(a, d);
    }

    #[test]
    fn test_full_comparer_absent_operands() {
        let a = Cuboid::new(4, 3, 4);

        assert!(FullComparer.equals(None::<&Cuboid>, None));
        assert!(!FullComparer.equals(Some(&a), None));
        assert!(!FullComparer.equals(None, Some(&a)));
    }

    #[test]
    fn test_full_comparer_absent_fields() {
        let a = Cuboid::new(None, 3, None);

        assert!(FullComparer.equals(Some(&a), Some(&Cuboid::new(None, 3, None))));
        assert!(!FullComparer.equals(Some(&a), Some(&Cuboid::new(None, 3, 0))));
        assert_eq!(FullComparer.hash(&a), 3);
    }

    #[test]
    fn test_full_hash_is_xor() {
        assert_eq!(FullComparer.hash(&Cuboid::new(4, 3, 4)), 4 ^ 3 ^ 4);
        assert_eq!(FullComparer.hash(&Cuboid::new(3, 4, 3)), 4);
        assert_eq!(FullComparer.hash(&Cuboid::new(None, None, None)), 0);
    }

    #[test]
    fn test_full_comparer_on_equatable_variant() {
        let a = EquatableCuboid::new(4, 3, 4);
        let d = EquatableCuboid::new(4, 4, 3);

        assert!(!FullComparer.equals(Some(&a), Some(&d)));
        assert!(DefaultComparer.equals(Some(&a), Some(&d)));
    }

    #[test]
    fn test_default_comparer() {
        let a = Cuboid::new(4, 3, 4);
        let d = Cuboid::new(4, 4, 3);

        assert!(DefaultComparer.equals(Some(&a), Some(&d)));
        assert!(DefaultComparer.equals(None::<&Cuboid>, None));
        assert!(!DefaultComparer.equals(Some(&a), None));
        assert_eq!(DefaultComparer.hash(&a), 4);
    }

    proptest! {
        #[test]
        fn full_equality_matches_all_fields(a in arb_cuboid(), b in arb_cuboid()) {
            let all_fields = a.height() == b.height()
                && a.length() == b.length()
                && a.width() == b.width();

            prop_assert_eq!(FullComparer.equals(Some(&a), Some(&b)), all_fields);
            prop_assert_eq!(
                FullComparer.equals(Some(&a), Some(&b)),
                FullComparer.equals(Some(&b), Some(&a))
            );
            prop_assert!(FullComparer.equals(Some(&a), Some(&a)));
        }

        #[test]
        fn full_equality_implies_same_hash(a in arb_cuboid(), b in arb_cuboid()) {
            if FullComparer.equals(Some(&a), Some(&b)) {
                prop_assert_eq!(FullComparer.hash(&a), FullComparer.hash(&b));
            }
        }
    }
}
