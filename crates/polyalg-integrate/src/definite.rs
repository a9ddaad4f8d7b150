//! Definite integration over interval lists.
//!
//! Interval `i` belongs to the variable with id `i`. Two readings are
//! provided:
//!
//! - [`definite_integral`] substitutes the bounds into the integrand itself
//!   and subtracts, one interval at a time.
//! - [`iterated_integral`] first integrates formally with respect to the
//!   variable, then substitutes the bounds, which is the iterated integral
//!   over the box.

use tracing::trace;

use polyalg_poly::{Bindings, Polynomial, Variable};
use polyalg_rings::Scalar;

use crate::formal::integrate_by;

/// `p(v = upper) - p(v = lower)`.
#[must_use]
pub fn evaluate_between(p: &Polynomial, v: Variable, lower: Scalar, upper: Scalar) -> Polynomial {
    let at = |value: Scalar| {
        let mut bindings = Bindings::default();
        bindings.insert(v.id(), value);
        p.eval_with(&bindings)
    };
    at(upper).sub(&at(lower))
}

/// Substitutes each interval's bounds into the integrand in turn.
///
/// The partial result of one interval is the integrand of the next.
#[must_use]
pub fn definite_integral(p: &Polynomial, intervals: &[(Scalar, Scalar)]) -> Polynomial {
    (0u32..)
        .zip(intervals)
        .fold(p.clone(), |acc, (id, &(lower, upper))| {
            trace!(id, %lower, %upper, "substituting bounds");
            evaluate_between(&acc, Variable::from_id(id), lower, upper)
        })
}

/// Integrates over the box given by `intervals`, one variable at a time.
#[must_use]
pub fn iterated_integral(p: &Polynomial, intervals: &[(Scalar, Scalar)]) -> Polynomial {
    (0u32..)
        .zip(intervals)
        .fold(p.clone(), |acc, (id, &(lower, upper))| {
            let v = Variable::from_id(id);
            evaluate_between(&integrate_by(&acc, v), v, lower, upper)
        })
}
