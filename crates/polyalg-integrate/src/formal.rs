//! Formal (indefinite) integration by the power rule.
//!
//! For a term `c * v^e * ...` the integral with respect to `v` is
//! `c / (e + 1) * v^(e + 1) * ...`. A term free of `v` gains `v` to the
//! first power. No constant of integration is added.

use polyalg_poly::{Monomial, Polynomial, Variable};
use polyalg_rings::Scalar;

/// Integrates a single term with respect to `v`.
#[must_use]
pub fn integrate_monomial(m: &Monomial, v: Variable) -> Monomial {
    if m.is_zero() {
        return Monomial::zero();
    }

    let index = v.id() as usize;
    let mut exponents = m.exponents().to_vec();
    if exponents.len() <= index {
        exponents.resize(index + 1, 0);
    }
    exponents[index] += 1;

    let coeff = m.coeff() / Scalar::from(exponents[index]);
    Monomial::from_exponents(coeff, &exponents)
}

/// Integrates every term with respect to `v`.
#[must_use]
pub fn integrate_by(p: &Polynomial, v: Variable) -> Polynomial {
    p.terms().iter().map(|m| integrate_monomial(m, v)).collect()
}

/// Repeated formal integral, applied left to right over `vars`.
#[must_use]
pub fn formal_integral(p: &Polynomial, vars: &[Variable]) -> Polynomial {
    vars.iter().fold(p.clone(), |acc, &v| integrate_by(&acc, v))
}
