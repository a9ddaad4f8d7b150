//! Monomials: a coefficient times a product of variables.
//!
//! The variable multiset is stored as an exponent vector indexed by
//! variable id, with trailing zeros trimmed. A zero coefficient forces the
//! vector to be empty, so there is exactly one zero monomial.

use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;

use polyalg_rings::{Field, Scalar};

use crate::ordering::{cmp_terms, exponents_divide, SortKey};
use crate::polynomial::Polynomial;
use crate::value::Value;
use crate::variable::{Variable, VariableRegistry};

/// Exponent vector indexed by variable id.
pub(crate) type Exponents = SmallVec<[u32; 4]>;

const EXPONENT_OVERFLOW: &str = "exponent exceeds u32::MAX";

/// A coefficient together with a multiset of variables.
///
/// Two monomials are equal iff both their exponents and coefficients are.
#[derive(Clone, Debug)]
pub struct Monomial {
    pub(crate) coeff: Scalar,
    pub(crate) exponents: Exponents,
}

impl Monomial {
    /// Creates `coeff * v_1 * v_2 * ...`; repeated variables raise the exponent.
    #[must_use]
    pub fn new(coeff: impl Into<Scalar>, variables: &[Variable]) -> Self {
        let mut exponents = Exponents::new();
        for v in variables {
            if exponents.len() <= v.index() {
                exponents.resize(v.index() + 1, 0);
            }
            exponents[v.index()] += 1;
        }
        Self::from_parts(coeff.into(), exponents)
    }

    /// Creates a monomial from an id-indexed exponent slice.
    #[must_use]
    pub fn from_exponents(coeff: impl Into<Scalar>, exponents: &[u32]) -> Self {
        Self::from_parts(coeff.into(), exponents.iter().copied().collect())
    }

    /// Builds the canonical form from raw parts.
    pub(crate) fn from_parts(coeff: Scalar, mut exponents: Exponents) -> Self {
        if coeff.is_zero() {
            exponents.clear();
        } else {
            while exponents.last() == Some(&0) {
                exponents.pop();
            }
        }
        Self { coeff, exponents }
    }

    /// The zero monomial.
    #[must_use]
    pub fn zero() -> Self {
        Self::constant(Scalar::ZERO)
    }

    /// The unit monomial.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(Scalar::ONE)
    }

    /// A monomial with no variables.
    #[must_use]
    pub fn constant(coeff: impl Into<Scalar>) -> Self {
        Self::from_parts(coeff.into(), Exponents::new())
    }

    /// The monomial `1 * v`.
    #[must_use]
    pub fn from_variable(v: Variable) -> Self {
        Self::new(Scalar::ONE, &[v])
    }

    /// Returns the coefficient.
    #[must_use]
    pub fn coeff(&self) -> Scalar {
        self.coeff
    }

    /// Returns the exponent of `v` (zero if absent).
    #[must_use]
    pub fn exponent(&self, v: Variable) -> u32 {
        self.exponents.get(v.index()).copied().unwrap_or(0)
    }

    /// The id-indexed exponent vector, without trailing zeros.
    #[must_use]
    pub fn exponents(&self) -> &[u32] {
        &self.exponents
    }

    /// The variable multiset in ascending id order, repeated by exponent.
    #[must_use]
    pub fn variables(&self) -> Vec<Variable> {
        self.support()
            .flat_map(|(v, e)| std::iter::repeat(v).take(e as usize))
            .collect()
    }

    /// Variables with a nonzero exponent, ascending by id.
    pub fn support(&self) -> impl Iterator<Item = (Variable, u32)> + '_ {
        self.exponents
            .iter()
            .enumerate()
            .filter(|&(_, &e)| e > 0)
            .map(|(i, &e)| (Variable::from_id(id_of(i)), e))
    }

    /// The exponent of every registered variable, by descending id.
    #[must_use]
    pub fn group(&self, registry: &VariableRegistry) -> Vec<(Variable, u32)> {
        registry
            .ids()
            .rev()
            .map(|id| {
                let v = Variable::from_id(id);
                (v, self.exponent(v))
            })
            .collect()
    }

    /// Sum of all exponents.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.exponents.iter().sum()
    }

    /// Returns true for the zero monomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }

    /// Returns true if no variable appears.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.exponents.is_empty()
    }

    /// Returns true if both monomials carry the same variable multiset.
    #[must_use]
    pub fn same_variables(&self, other: &Self) -> bool {
        self.exponents == other.exponents
    }

    /// The key this monomial is ordered by.
    #[must_use]
    pub fn sort_key(&self) -> SortKey {
        SortKey::new(&self.exponents, self.coeff)
    }

    /// Adds two monomials.
    ///
    /// Like terms merge into a monomial; anything else becomes a
    /// two-term polynomial.
    #[must_use]
    pub fn add(&self, other: &Self) -> Value {
        if self.same_variables(other) {
            Value::Monomial(Self::from_parts(
                self.coeff + other.coeff,
                self.exponents.clone(),
            ))
        } else {
            Value::Polynomial(Polynomial::new(vec![self.clone(), other.clone()]))
        }
    }

    /// Subtracts two monomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Value {
        self.add(&other.neg())
    }

    /// Negates the coefficient.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::from_parts(-self.coeff, self.exponents.clone())
    }

    /// Multiplies coefficients and adds exponents.
    ///
    /// # Panics
    ///
    /// Panics if an exponent of the product exceeds `u32::MAX`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let (long, short) = if self.exponents.len() >= other.exponents.len() {
            (&self.exponents, &other.exponents)
        } else {
            (&other.exponents, &self.exponents)
        };

        let mut exponents = long.clone();
        for (e, &s) in exponents.iter_mut().zip(short.iter()) {
            *e = e.checked_add(s).expect(EXPONENT_OVERFLOW);
        }

        Self::from_parts(self.coeff * other.coeff, exponents)
    }

    /// Multiplies the coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: Scalar) -> Self {
        Self::from_parts(self.coeff * c, self.exponents.clone())
    }

    /// The same monomial with the sign of its coefficient stripped.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::from_parts(self.coeff.abs(), self.exponents.clone())
    }

    /// Returns true if `self` divides `other` as a variable multiset.
    #[must_use]
    pub fn divides(&self, other: &Self) -> bool {
        exponents_divide(&self.exponents, &other.exponents)
    }

    /// Exact division: coefficient quotient and exponent subtraction.
    ///
    /// Returns `None` if the divisor is zero or its variables are not
    /// contained in ours.
    #[must_use]
    pub fn checked_div(&self, divisor: &Self) -> Option<Self> {
        if !divisor.divides(self) {
            return None;
        }
        let coeff = self.coeff.try_div(&divisor.coeff)?;

        let mut exponents = self.exponents.clone();
        for (e, &d) in exponents.iter_mut().zip(divisor.exponents.iter()) {
            *e -= d;
        }

        Some(Self::from_parts(coeff, exponents))
    }

    /// Short division as driven by long division.
    ///
    /// A divisor that is greater than the dividend, or whose variables do not
    /// fit in the dividend, yields the zero monomial.
    #[must_use]
    pub fn short_div(&self, divisor: &Self) -> Self {
        if divisor > self {
            return Self::zero();
        }
        self.checked_div(divisor).unwrap_or_else(Self::zero)
    }

    fn fmt_variables(&self) -> String {
        self.support()
            .map(|(v, e)| if e > 1 { format!("{v}^{e}") } else { v.to_string() })
            .collect::<Vec<_>>()
            .join(" * ")
    }
}

#[allow(clippy::cast_possible_truncation)]
fn id_of(index: usize) -> u32 {
    index as u32
}

impl PartialEq for Monomial {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Monomial {}

impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Monomial {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_terms(&self.exponents, self.coeff, &other.exponents, other.coeff)
    }
}

impl From<Variable> for Monomial {
    fn from(v: Variable) -> Self {
        Self::from_variable(v)
    }
}

impl From<Scalar> for Monomial {
    fn from(c: Scalar) -> Self {
        Self::constant(c)
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        if (-self.coeff).is_one() {
            return if self.is_constant() {
                write!(f, "-")
            } else {
                write!(f, "- * {}", self.fmt_variables())
            };
        }
        if self.is_constant() {
            return write!(f, "{}", self.coeff);
        }

        if self.coeff.is_one() {
            write!(f, "{}", self.fmt_variables())
        } else {
            write!(f, "{} * {}", self.coeff, self.fmt_variables())
        }
    }
}
