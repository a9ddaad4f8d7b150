//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::monomial::Monomial;
    use crate::ordering::cmp_exponents;
    use crate::polynomial::Polynomial;
    use crate::value::Value;
    use crate::variable::{Variable, VariableRegistry};
    use polyalg_rings::Scalar;

    // Integer coefficients keep every float operation below exact.
    fn small_coeff() -> impl Strategy<Value = i32> {
        -5i32..=5
    }

    fn small_monomial() -> impl Strategy<Value = Monomial> {
        (small_coeff(), proptest::collection::vec(0u32..3, 3))
            .prop_map(|(c, exps)| Monomial::from_exponents(c, &exps))
    }

    fn unit_monomial() -> impl Strategy<Value = Monomial> {
        proptest::collection::vec(0u32..4, 3).prop_map(|exps| Monomial::from_exponents(1, &exps))
    }

    // Up to three terms over x_0, x_1, x_2
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_monomial(), 0..4).prop_map(Polynomial::new)
    }

    // Positive coefficients keep every partial quotient at least the divisor.
    fn positive_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(
            (1i32..=5, proptest::collection::vec(0u32..3, 3))
                .prop_map(|(c, exps)| Monomial::from_exponents(c, &exps)),
            0..4,
        )
        .prop_map(Polynomial::new)
    }

    fn nonzero_poly() -> impl Strategy<Value = Polynomial> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    // Polynomials in x_0 alone
    fn univariate_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec((small_coeff(), 0u32..5), 1..5).prop_map(|terms| {
            terms
                .into_iter()
                .map(|(c, e)| Monomial::from_exponents(c, &[e]))
                .collect::<Polynomial>()
        })
    }

    // Leading coefficient forced to +-1 so quotients stay integral.
    fn monic(p: Polynomial, negative: bool) -> Polynomial {
        let Some(lead) = p.leading_term().cloned() else {
            return Polynomial::one();
        };
        let target = if negative { -1.0 } else { 1.0 };
        let fix = Monomial::from_exponents(target - lead.coeff().value(), lead.exponents());
        p.add(&Polynomial::from_monomial(fix))
    }

    fn var() -> impl Strategy<Value = Variable> {
        (0u32..3).prop_map(Variable::from_id)
    }

    proptest! {
        // Canonical form

        #[test]
        fn poly_is_canonical(terms in proptest::collection::vec(small_monomial(), 0..6)) {
            let p = Polynomial::new(terms.clone());
            prop_assert!(p.is_canonical());

            let mut reversed = terms;
            reversed.reverse();
            prop_assert_eq!(Polynomial::new(reversed), p);
        }

        #[test]
        fn poly_result_is_canonical(a in small_poly(), b in small_poly()) {
            prop_assert!(a.add(&b).is_canonical());
            prop_assert!(a.sub(&b).is_canonical());
            prop_assert!(a.mul(&b).is_canonical());
        }

        // Promotion

        #[test]
        fn promotion_soundness(a in -1.0e6f64..1.0e6) {
            let s = Scalar::new(a);
            let lifted = Polynomial::from_monomial(Monomial::constant(s));

            prop_assert_eq!(Value::from(lifted.clone()), Value::from(s));
            prop_assert_eq!(Value::from(s), Value::from(lifted));
            prop_assert_eq!(Value::from(Monomial::constant(s)), Value::from(s));
        }

        #[test]
        fn mixed_level_add_matches_polynomial_add(m in small_monomial(), p in small_poly()) {
            let mixed = Value::from(m.clone()).try_add(&Value::from(p.clone())).unwrap();
            let direct = Polynomial::from_monomial(m).add(&p);
            prop_assert_eq!(mixed, Value::from(direct));
        }

        // Ring laws

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
            prop_assert!(a.sub(&a).is_zero());
        }

        #[test]
        fn poly_identities(a in small_poly()) {
            prop_assert_eq!(a.add(&Polynomial::zero()), a.clone());
            prop_assert_eq!(a.mul(&Polynomial::one()), a.clone());
            prop_assert!(a.mul(&Polynomial::zero()).is_zero());
        }

        // Monomial order

        #[test]
        fn order_compatible_with_mul(a in unit_monomial(), b in unit_monomial(), c in unit_monomial()) {
            let before = cmp_exponents(a.exponents(), b.exponents());
            let after = cmp_exponents(a.mul(&c).exponents(), b.mul(&c).exponents());
            prop_assert_eq!(before, after);
        }

        // Division

        #[test]
        fn division_identity(p in small_poly(), m in nonzero_poly(), negative in any::<bool>()) {
            let m = monic(m, negative);
            let (q, r) = p.div_rem(&m).unwrap();

            prop_assert_eq!(q.mul(&m).add(&r), p);
        }

        #[test]
        fn division_of_exact_product(q in positive_poly(), m in nonzero_poly()) {
            let m = monic(m, false);
            let (quotient, remainder) = q.mul(&m).div_rem(&m).unwrap();

            prop_assert_eq!(quotient, q);
            prop_assert!(remainder.is_zero());
        }

        #[test]
        fn smaller_dividend_is_remainder(p in small_poly(), m in nonzero_poly()) {
            prop_assume!(p < m);
            let (q, r) = p.div_rem(&m).unwrap();

            prop_assert!(q.is_zero());
            prop_assert_eq!(r, p);
        }

        #[test]
        fn univariate_remainder_below_divisor(p in univariate_poly(), m in univariate_poly(), negative in any::<bool>()) {
            prop_assume!(!m.is_zero());
            let m = monic(m, negative);
            let (q, r) = p.div_rem(&m).unwrap();

            prop_assert_eq!(q.mul(&m).add(&r), p);
            prop_assert!(r.is_zero() || r < m);
        }

        // Calculus

        #[test]
        fn derivative_linear(a in small_poly(), b in small_poly(), v in var()) {
            let left = a.add(&b).derivative(&[v]);
            let right = a.derivative(&[v]).add(&b.derivative(&[v]));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn derivative_product_rule(a in small_poly(), b in small_poly(), v in var()) {
            let left = a.mul(&b).derivative(&[v]);
            let right = a.derivative(&[v]).mul(&b).add(&a.mul(&b.derivative(&[v])));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn derivative_order_irrelevant(a in small_poly(), u in var(), v in var()) {
            prop_assert_eq!(a.derivative(&[u, v]), a.derivative(&[v, u]));
        }

        #[test]
        fn eval_is_multiplicative(a in small_poly(), b in small_poly(), args in proptest::collection::vec(-3i32..=3, 3)) {
            let args: Vec<Scalar> = args.into_iter().map(Scalar::from).collect();
            let product = a.mul(&b).eval(&args);
            let separate = a.eval(&args).try_mul(&b.eval(&args)).unwrap();
            prop_assert_eq!(product, separate);
        }

        // Variables

        #[test]
        fn allocation_takes_smallest_free_id(reserved in proptest::collection::btree_set(0u32..16, 0..8), count in 1usize..8) {
            let mut registry = VariableRegistry::new();
            for &id in &reserved {
                registry.reserve(id);
            }

            let mut seen = Vec::new();
            for _ in 0..count {
                let floor = registry.next_candidate();
                let v = Variable::new_in(&mut registry);
                let expected = (floor..).find(|id| !reserved.contains(id) && !seen.contains(id)).unwrap();

                prop_assert_eq!(v.id(), expected);
                seen.push(v.id());
            }
            prop_assert_eq!(registry.len(), reserved.len() + count);
        }
    }
}
