//! Short and long division.
//!
//! Long division repeatedly cancels the leading term of the running
//! dividend against the divisor's leading term, for as long as the running
//! dividend is at least the divisor under the polynomial order. That order
//! breaks ties on coefficients, so `x + 5` is already smaller than `x + 7`
//! and divides to `(0, x + 5)`.
//!
//! A leading term that the divisor's leading term does not divide is moved
//! to the remainder instead, so every step removes the current leading term
//! and the loop terminates for any input.

use tracing::debug;

use crate::error::{AlgebraError, Result};
use crate::monomial::Monomial;
use crate::polynomial::Polynomial;

/// Divides one monomial by another.
///
/// This is only meaningful when the divisor's variables are contained in
/// the dividend's; anything else yields the zero monomial.
#[must_use]
pub fn short_division(dividend: &Monomial, divisor: &Monomial) -> Monomial {
    dividend.short_div(divisor)
}

/// Divides `dividend` by `divisor`, returning `(quotient, remainder)` with
/// `quotient * divisor + remainder == dividend`.
///
/// # Errors
///
/// Returns [`AlgebraError::DivisionByZero`] if `divisor` is zero.
pub fn long_division(dividend: &Polynomial, divisor: &Polynomial) -> Result<(Polynomial, Polynomial)> {
    let Some((lead_divisor, divisor_tail)) = divisor.split_leading() else {
        return Err(AlgebraError::DivisionByZero);
    };

    let mut rest = dividend.clone();
    let mut quotient = Vec::new();
    let mut remainder = Vec::new();
    let mut steps = 0usize;

    while rest >= *divisor {
        let Some((lead, tail)) = rest.split_leading() else {
            break;
        };

        // The leading term is cancelled by construction rather than by
        // floating subtraction, which could leave a residue behind.
        rest = match lead.checked_div(lead_divisor) {
            Some(term) => {
                let reduced = tail.sub(&divisor_tail.mul_monomial(&term));
                quotient.push(term);
                reduced
            }
            None => {
                remainder.push(lead.clone());
                tail
            }
        };
        steps += 1;
    }

    remainder.extend(rest.into_terms());
    let (quotient, remainder) = (Polynomial::new(quotient), Polynomial::new(remainder));

    debug!(
        steps,
        quotient_terms = quotient.len(),
        remainder_terms = remainder.len(),
        "long division finished"
    );
    Ok((quotient, remainder))
}

impl Polynomial {
    /// Long division, returning `(quotient, remainder)`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Polynomial) -> Result<(Polynomial, Polynomial)> {
        long_division(self, divisor)
    }

    /// The quotient of long division.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] if `divisor` is zero.
    pub fn quotient(&self, divisor: &Polynomial) -> Result<Polynomial> {
        Ok(self.div_rem(divisor)?.0)
    }

    /// The remainder of long division.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] if `divisor` is zero.
    pub fn remainder(&self, divisor: &Polynomial) -> Result<Polynomial> {
        Ok(self.div_rem(divisor)?.1)
    }
}
