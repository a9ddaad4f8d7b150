//! Property-based tests for integration.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::definite::{definite_integral, iterated_integral};
    use crate::formal::formal_integral;
    use polyalg_poly::{Monomial, Polynomial, Variable};
    use polyalg_rings::Scalar;

    const TOLERANCE: f64 = 1e-9;

    fn small_monomial() -> impl Strategy<Value = Monomial> {
        (-5i32..=5, proptest::collection::vec(0u32..3, 3))
            .prop_map(|(c, exps)| Monomial::from_exponents(c, &exps))
    }

    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_monomial(), 0..4).prop_map(Polynomial::new)
    }

    fn var() -> impl Strategy<Value = Variable> {
        (0u32..4).prop_map(Variable::from_id)
    }

    fn bound() -> impl Strategy<Value = Scalar> {
        (-3i32..=3).prop_map(Scalar::from)
    }

    // Division by e + 1 is not always undone exactly in floating point.
    fn approx_eq(a: &Polynomial, b: &Polynomial) -> bool {
        a.sub(b)
            .terms()
            .iter()
            .all(|m| m.coeff().value().abs() < TOLERANCE)
    }

    proptest! {
        #[test]
        fn derivative_of_integral(p in small_poly(), v in var()) {
            let back = formal_integral(&p, &[v]).derivative(&[v]);
            prop_assert!(approx_eq(&back, &p), "{} != {}", back, p);
        }

        #[test]
        fn integral_is_linear(a in small_poly(), b in small_poly(), v in var()) {
            let left = formal_integral(&a.add(&b), &[v]);
            let right = formal_integral(&a, &[v]).add(&formal_integral(&b, &[v]));
            prop_assert!(approx_eq(&left, &right));
        }

        #[test]
        fn integral_raises_degree(p in small_poly(), v in var()) {
            prop_assume!(!p.is_zero());
            let integral = formal_integral(&p, &[v]);
            prop_assert_eq!(integral.degree_in(v), p.degree_in(v) + 1);
            prop_assert_eq!(integral.len(), p.len());
        }

        #[test]
        fn definite_over_empty_interval(p in small_poly(), a in bound()) {
            prop_assert!(definite_integral(&p, &[(a, a)]).is_zero());
            prop_assert!(iterated_integral(&p, &[(a, a)]).is_zero());
        }

        #[test]
        fn definite_reversed_bounds_negate(p in small_poly(), a in bound(), b in bound()) {
            let forward = definite_integral(&p, &[(a, b)]);
            let backward = definite_integral(&p, &[(b, a)]);
            prop_assert!(forward.add(&backward).is_zero());
        }

        #[test]
        fn definite_of_constant_in_x0(p in small_poly(), a in bound(), b in bound()) {
            // Terms free of x_0 cancel under substitution.
            let free: Polynomial = p
                .terms()
                .iter()
                .filter(|m| m.exponent(Variable::from_id(0)) == 0)
                .cloned()
                .collect();
            prop_assert!(definite_integral(&free, &[(a, b)]).is_zero());
        }
    }
}
