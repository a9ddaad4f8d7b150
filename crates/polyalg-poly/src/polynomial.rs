//! Sparse multivariate polynomials.
//!
//! A polynomial is a list of monomials kept in canonical form: sorted
//! strictly descending by the monomial order, one term per variable
//! multiset, no zero coefficients. The empty list is the zero polynomial.

use std::fmt;

use polyalg_rings::Scalar;

use crate::monomial::Monomial;
use crate::ordering::SortKey;
use crate::variable::Variable;

/// A canonical sum of monomials.
///
/// Polynomials compare by their term sequences, term by term under the
/// monomial order; a proper prefix compares less.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct Polynomial {
    /// Terms in descending monomial order.
    terms: Vec<Monomial>,
}

impl Polynomial {
    /// Creates a polynomial from terms in any order.
    ///
    /// Like terms are merged and zero terms dropped.
    #[must_use]
    pub fn new(terms: Vec<Monomial>) -> Self {
        let mut poly = Self { terms };
        poly.normalize();
        poly
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(Scalar::ONE)
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: impl Into<Scalar>) -> Self {
        Self::from_monomial(Monomial::constant(c))
    }

    /// Creates the polynomial `1 * v`.
    #[must_use]
    pub fn from_variable(v: Variable) -> Self {
        Self {
            terms: vec![Monomial::from_variable(v)],
        }
    }

    /// Creates a one-term polynomial (or zero).
    #[must_use]
    pub fn from_monomial(m: Monomial) -> Self {
        if m.is_zero() {
            Self::zero()
        } else {
            Self { terms: vec![m] }
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the terms, leading term first.
    #[must_use]
    pub fn terms(&self) -> &[Monomial] {
        &self.terms
    }

    /// Consumes the polynomial, returning its terms.
    #[must_use]
    pub fn into_terms(self) -> Vec<Monomial> {
        self.terms
    }

    /// Returns the leading (greatest) term.
    #[must_use]
    pub fn leading_term(&self) -> Option<&Monomial> {
        self.terms.first()
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<Scalar> {
        self.terms.first().map(Monomial::coeff)
    }

    /// Splits off the leading term.
    #[must_use]
    pub fn split_leading(&self) -> Option<(&Monomial, Self)> {
        let (lead, tail) = self.terms.split_first()?;
        Some((
            lead,
            Self {
                terms: tail.to_vec(),
            },
        ))
    }

    /// Returns the constant value if the polynomial has no variables.
    #[must_use]
    pub fn as_constant(&self) -> Option<Scalar> {
        match self.terms.as_slice() {
            [] => Some(Scalar::ZERO),
            [m] if m.is_constant() => Some(m.coeff()),
            _ => None,
        }
    }

    /// The term-by-term sort keys.
    #[must_use]
    pub fn sort_key(&self) -> Vec<SortKey> {
        self.terms.iter().map(Monomial::sort_key).collect()
    }

    /// Sorts terms, merges like terms and drops zeros.
    fn normalize(&mut self) {
        // Descending, so the leading term comes first. Equal variable
        // multisets end up adjacent since exponents dominate the order.
        self.terms.sort_by(|a, b| b.cmp(a));

        let mut accepted: Vec<Monomial> = Vec::with_capacity(self.terms.len());
        for term in self.terms.drain(..) {
            match accepted.last_mut() {
                Some(last) if last.same_variables(&term) => last.coeff += term.coeff,
                _ => accepted.push(term),
            }
        }

        accepted.retain(|m| !m.coeff.is_zero());
        self.terms = accepted;
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut terms = Vec::with_capacity(self.len() + other.len());
        terms.extend_from_slice(&self.terms);
        terms.extend_from_slice(&other.terms);

        Self::new(terms)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(Monomial::neg).collect(),
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials (schoolbook algorithm).
    ///
    /// # Panics
    ///
    /// Panics if an exponent of the product exceeds `u32::MAX`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut terms = Vec::with_capacity(self.len() * other.len());
        for m1 in &self.terms {
            for m2 in &other.terms {
                terms.push(m1.mul(m2));
            }
        }

        Self::new(terms)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: Scalar) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::new(self.terms.iter().map(|m| m.scale(c)).collect())
    }

    /// Multiplies by a monomial.
    #[must_use]
    pub fn mul_monomial(&self, m: &Monomial) -> Self {
        if m.is_zero() {
            return Self::zero();
        }
        Self::new(self.terms.iter().map(|t| t.mul(m)).collect())
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base);
            }
        }

        result
    }

    /// Computes the total degree (zero for the zero polynomial).
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.terms
            .iter()
            .map(Monomial::total_degree)
            .max()
            .unwrap_or(0)
    }

    /// The highest exponent of `v` over all terms.
    #[must_use]
    pub fn degree_in(&self, v: Variable) -> u32 {
        self.terms.iter().map(|m| m.exponent(v)).max().unwrap_or(0)
    }

    /// Returns true if no term has a zero coefficient, no two terms share a
    /// variable multiset, and terms descend strictly.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.terms.iter().all(|m| !m.is_zero())
            && self
                .terms
                .windows(2)
                .all(|w| crate::ordering::cmp_exponents(w[0].exponents(), w[1].exponents()).is_gt())
    }
}

impl From<Monomial> for Polynomial {
    fn from(m: Monomial) -> Self {
        Self::from_monomial(m)
    }
}

impl From<Variable> for Polynomial {
    fn from(v: Variable) -> Self {
        Self::from_variable(v)
    }
}

impl From<Scalar> for Polynomial {
    fn from(c: Scalar) -> Self {
        Self::constant(c)
    }
}

impl FromIterator<Monomial> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Monomial>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((lead, rest)) = self.terms.split_first() else {
            return write!(f, "0");
        };

        write!(f, "{lead}")?;
        for m in rest {
            let sep = if m.coeff().value() < 0.0 { " - " } else { " + " };
            write!(f, "{sep}{}", m.abs())?;
        }
        Ok(())
    }
}
