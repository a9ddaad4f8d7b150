//! The monomial order.
//!
//! Exponent vectors are compared lexicographically with the highest
//! variable id as the most significant position. When the exponents tie,
//! the coefficient decides. Exponent vectors are id-indexed, so vectors of
//! different lengths compare as if padded with zeros.
//!
//! Lex is compatible with multiplication and well-founded on exponent
//! vectors, which is what long division relies on to terminate.

use std::cmp::Ordering;
use std::fmt;

use polyalg_rings::Scalar;

/// Compares two id-indexed exponent vectors, highest id first.
#[must_use]
pub fn cmp_exponents(a: &[u32], b: &[u32]) -> Ordering {
    let len = a.len().max(b.len());
    for i in (0..len).rev() {
        let ea = a.get(i).copied().unwrap_or(0);
        let eb = b.get(i).copied().unwrap_or(0);
        match ea.cmp(&eb) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Compares two terms: exponents first, coefficient as the tie-break.
#[must_use]
pub fn cmp_terms(a_exps: &[u32], a_coeff: Scalar, b_exps: &[u32], b_coeff: Scalar) -> Ordering {
    cmp_exponents(a_exps, b_exps).then_with(|| a_coeff.cmp(&b_coeff))
}

/// Returns true if every exponent of `divisor` is at most the matching
/// exponent of `dividend`.
#[must_use]
pub fn exponents_divide(divisor: &[u32], dividend: &[u32]) -> bool {
    divisor
        .iter()
        .enumerate()
        .all(|(i, &e)| e <= dividend.get(i).copied().unwrap_or(0))
}

/// An owned sort key of a monomial.
///
/// Keys order exactly like the monomials they were taken from.
#[derive(Clone, PartialEq, Eq)]
pub struct SortKey {
    exponents: Vec<u32>,
    coeff: Scalar,
}

impl SortKey {
    pub(crate) fn new(exponents: &[u32], coeff: Scalar) -> Self {
        Self {
            exponents: exponents.to_vec(),
            coeff,
        }
    }

    /// Exponents in descending-id order, starting at the highest id present.
    #[must_use]
    pub fn descending_exponents(&self) -> Vec<u32> {
        self.exponents.iter().rev().copied().collect()
    }

    /// The coefficient tie-break.
    #[must_use]
    pub fn coeff(&self) -> Scalar {
        self.coeff
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_terms(&self.exponents, self.coeff, &other.exponents, other.coeff)
    }
}

impl fmt::Debug for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.exponents.iter().rev())
            .entry(&self.coeff)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highest_id_dominates() {
        // x_1 > x_0^5
        assert_eq!(cmp_exponents(&[0, 1], &[5]), Ordering::Greater);
        // x_0^2 x_1 > x_0 x_1
        assert_eq!(cmp_exponents(&[2, 1], &[1, 1]), Ordering::Greater);
        // Padding with zeros does not matter.
        assert_eq!(cmp_exponents(&[1, 0, 0], &[1]), Ordering::Equal);
    }

    #[test]
    fn test_coefficient_breaks_ties() {
        let two = Scalar::new(2.0);
        let three = Scalar::new(3.0);

        assert_eq!(cmp_terms(&[1], two, &[1], three), Ordering::Less);
        assert_eq!(cmp_terms(&[2], two, &[1], three), Ordering::Greater);
    }

    #[test]
    fn test_divisibility() {
        assert!(exponents_divide(&[1, 1], &[2, 1]));
        assert!(exponents_divide(&[], &[2, 1]));
        assert!(!exponents_divide(&[0, 2], &[2, 1]));
        assert!(!exponents_divide(&[0, 0, 1], &[2, 1]));
    }

    #[test]
    fn test_sort_key() {
        let key = SortKey::new(&[2, 1], Scalar::new(-3.0));
        assert_eq!(key.descending_exponents(), vec![1, 2]);
        assert_eq!(key.coeff(), Scalar::new(-3.0));
        assert!(key < SortKey::new(&[0, 2], Scalar::ONE));
    }
}
