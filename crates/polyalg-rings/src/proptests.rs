//! Property-based tests for the coefficient field.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use std::cmp::Ordering;

    use crate::scalar::Scalar;
    use crate::traits::{Field, Ring};

    // Small integers keep sums and products exact.
    fn small_scalar() -> impl Strategy<Value = Scalar> {
        (-1000i32..1000).prop_map(Scalar::from)
    }

    fn nonzero_scalar() -> impl Strategy<Value = Scalar> {
        small_scalar().prop_filter("scalar must be non-zero", |s| !s.is_zero())
    }

    fn any_scalar() -> impl Strategy<Value = Scalar> {
        prop_oneof![
            any::<f64>().prop_map(Scalar::new),
            Just(Scalar::new(f64::NAN)),
            Just(Scalar::new(-0.0)),
        ]
    }

    proptest! {
        // Field laws

        #[test]
        fn scalar_add_commutative(a in small_scalar(), b in small_scalar()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn scalar_add_associative(a in small_scalar(), b in small_scalar(), c in small_scalar()) {
            prop_assert_eq!((a + b) + c, a + (b + c));
        }

        #[test]
        fn scalar_mul_associative(a in small_scalar(), b in small_scalar(), c in small_scalar()) {
            prop_assert_eq!((a * b) * c, a * (b * c));
        }

        #[test]
        fn scalar_distributive(a in small_scalar(), b in small_scalar(), c in small_scalar()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn scalar_identities(a in small_scalar()) {
            prop_assert_eq!(a + <Scalar as Ring>::zero(), a);
            prop_assert_eq!(a * <Scalar as Ring>::one(), a);
            prop_assert!(Ring::is_zero(&(a - a)));
        }

        #[test]
        fn scalar_division_undoes_product(a in small_scalar(), b in nonzero_scalar()) {
            prop_assert_eq!((a * b).try_div(&b), Some(a));
        }

        #[test]
        fn scalar_pow_matches_repeated_product(a in -8i32..8, n in 0u32..6) {
            let a = Scalar::from(a);
            let expected = (0..n).fold(Scalar::ONE, |acc, _| acc * a);
            prop_assert_eq!(Ring::pow(&a, n), expected);
        }

        // Total order

        #[test]
        fn scalar_order_is_antisymmetric(a in any_scalar(), b in any_scalar()) {
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        }

        #[test]
        fn scalar_order_is_transitive(a in any_scalar(), b in any_scalar(), c in any_scalar()) {
            let mut sorted = [a, b, c];
            sorted.sort();
            prop_assert!(sorted[0] <= sorted[1]);
            prop_assert!(sorted[1] <= sorted[2]);
            prop_assert!(sorted[0] <= sorted[2]);
        }

        #[test]
        fn scalar_equality_matches_order(a in any_scalar(), b in any_scalar()) {
            prop_assert_eq!(a == b, a.cmp(&b) == Ordering::Equal);
        }
    }
}
