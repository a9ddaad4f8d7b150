//! The promotion protocol.
//!
//! `Value` is the closed set of algebraic levels. Each level implements
//! [`Algebraic`]: its order, the table of lower levels it can absorb, how to
//! promote itself one step up, and its same-level arithmetic. Mixed-level
//! operations are then driven by one generic routine:
//!
//! 1. If the right operand lifts into the left operand's level, lift it and
//!    apply the same-level operation.
//! 2. Otherwise promote the left operand one step and retry.
//!
//! Every retry raises the left operand's rank, and a polynomial absorbs
//! every other level, so the loop always meets at or below the top.

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use polyalg_rings::Scalar;

use crate::calculus::positional_bindings;
use crate::error::{AlgebraError, Result};
use crate::monomial::Monomial;
use crate::polynomial::Polynomial;
use crate::variable::Variable;

/// The level of an algebraic value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Level {
    /// A bare coefficient.
    Scalar,
    /// A bare indeterminate.
    Variable,
    /// A coefficient times variables.
    Monomial,
    /// A canonical sum of monomials.
    Polynomial,
}

impl Level {
    /// Position in the hierarchy. Variables share the monomial tier.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Level::Scalar => 0,
            Level::Variable | Level::Monomial => 1,
            Level::Polynomial => 2,
        }
    }

    /// Returns a short name for the level.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Level::Scalar => "scalar",
            Level::Variable => "variable",
            Level::Monomial => "monomial",
            Level::Polynomial => "polynomial",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Behavior shared by every level of the hierarchy.
///
/// `Ord` is the same-level comparison (the level's sort key).
pub trait Algebraic: Clone + Ord + Into<Value> {
    /// The level this type represents.
    const LEVEL: Level;

    /// Lifts `value` into this level if it is of this level or of one listed
    /// in this level's lifting table.
    fn lift(value: &Value) -> Option<Self>;

    /// The same value one level up.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::Incoercible`] at the top of the hierarchy.
    fn promote(&self) -> Result<Value>;

    /// Same-level addition.
    fn level_add(&self, other: &Self) -> Value;

    /// Same-level subtraction.
    fn level_sub(&self, other: &Self) -> Value;

    /// Same-level negation.
    fn level_neg(&self) -> Value;

    /// Same-level multiplication.
    fn level_mul(&self, other: &Self) -> Value;
}

impl Algebraic for Scalar {
    const LEVEL: Level = Level::Scalar;

    fn lift(value: &Value) -> Option<Self> {
        match value {
            Value::Scalar(s) => Some(*s),
            _ => None,
        }
    }

    fn promote(&self) -> Result<Value> {
        Ok(Value::Monomial(Monomial::constant(*self)))
    }

    fn level_add(&self, other: &Self) -> Value {
        Value::Scalar(*self + *other)
    }

    fn level_sub(&self, other: &Self) -> Value {
        Value::Scalar(*self - *other)
    }

    fn level_neg(&self) -> Value {
        Value::Scalar(-*self)
    }

    fn level_mul(&self, other: &Self) -> Value {
        Value::Scalar(*self * *other)
    }
}

impl Algebraic for Variable {
    const LEVEL: Level = Level::Variable;

    fn lift(value: &Value) -> Option<Self> {
        match value {
            Value::Variable(v) => Some(*v),
            _ => None,
        }
    }

    fn promote(&self) -> Result<Value> {
        Ok(Value::Monomial(Monomial::from_variable(*self)))
    }

    fn level_add(&self, other: &Self) -> Value {
        Monomial::from_variable(*self).add(&Monomial::from_variable(*other))
    }

    fn level_sub(&self, other: &Self) -> Value {
        Monomial::from_variable(*self).sub(&Monomial::from_variable(*other))
    }

    fn level_neg(&self) -> Value {
        Value::Monomial(Monomial::new(-1.0, &[*self]))
    }

    fn level_mul(&self, other: &Self) -> Value {
        Value::Monomial(Monomial::new(1.0, &[*self, *other]))
    }
}

impl Algebraic for Monomial {
    const LEVEL: Level = Level::Monomial;

    fn lift(value: &Value) -> Option<Self> {
        match value {
            Value::Scalar(s) => Some(Monomial::constant(*s)),
            Value::Variable(v) => Some(Monomial::from_variable(*v)),
            Value::Monomial(m) => Some(m.clone()),
            Value::Polynomial(_) => None,
        }
    }

    fn promote(&self) -> Result<Value> {
        Ok(Value::Polynomial(Polynomial::from_monomial(self.clone())))
    }

    fn level_add(&self, other: &Self) -> Value {
        self.add(other)
    }

    fn level_sub(&self, other: &Self) -> Value {
        self.sub(other)
    }

    fn level_neg(&self) -> Value {
        Value::Monomial(self.neg())
    }

    fn level_mul(&self, other: &Self) -> Value {
        Value::Monomial(self.mul(other))
    }
}

impl Algebraic for Polynomial {
    const LEVEL: Level = Level::Polynomial;

    fn lift(value: &Value) -> Option<Self> {
        Some(value.to_polynomial())
    }

    fn promote(&self) -> Result<Value> {
        Err(AlgebraError::Incoercible(Self::LEVEL))
    }

    fn level_add(&self, other: &Self) -> Value {
        Value::Polynomial(self.add(other))
    }

    fn level_sub(&self, other: &Self) -> Value {
        Value::Polynomial(self.sub(other))
    }

    fn level_neg(&self) -> Value {
        Value::Polynomial(self.neg())
    }

    fn level_mul(&self, other: &Self) -> Value {
        Value::Polynomial(self.mul(other))
    }
}

/// An operation applied once both operands sit at the same level.
trait SameLevel {
    type Output;

    fn apply<T: Algebraic>(&self, lhs: &T, rhs: &T) -> Self::Output;
}

#[derive(Clone, Copy, Debug)]
enum BinaryOp {
    Add,
    Sub,
    Mul,
}

impl SameLevel for BinaryOp {
    type Output = Value;

    fn apply<T: Algebraic>(&self, lhs: &T, rhs: &T) -> Value {
        match self {
            BinaryOp::Add => lhs.level_add(rhs),
            BinaryOp::Sub => lhs.level_sub(rhs),
            BinaryOp::Mul => lhs.level_mul(rhs),
        }
    }
}

struct Compare;

impl SameLevel for Compare {
    type Output = Ordering;

    fn apply<T: Algebraic>(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// Lifts `rhs` to `lhs`'s level, or promotes `lhs` and retries.
fn coerce_apply<T: Algebraic, O: SameLevel>(lhs: &T, rhs: &Value, op: &O) -> Result<O::Output> {
    match T::lift(rhs) {
        Some(rhs) => Ok(op.apply(lhs, &rhs)),
        None => lhs.promote()?.coerce_apply(rhs, op),
    }
}

/// A value at any level of the hierarchy.
#[derive(Clone, Debug)]
pub enum Value {
    /// A coefficient.
    Scalar(Scalar),
    /// An indeterminate.
    Variable(Variable),
    /// A single term.
    Monomial(Monomial),
    /// A sum of terms.
    Polynomial(Polynomial),
}

impl Value {
    /// The zero scalar.
    #[must_use]
    pub const fn zero() -> Self {
        Value::Scalar(Scalar::ZERO)
    }

    /// The unit scalar.
    #[must_use]
    pub const fn one() -> Self {
        Value::Scalar(Scalar::ONE)
    }

    /// Returns the level of this value.
    #[must_use]
    pub fn level(&self) -> Level {
        match self {
            Value::Scalar(_) => Level::Scalar,
            Value::Variable(_) => Level::Variable,
            Value::Monomial(_) => Level::Monomial,
            Value::Polynomial(_) => Level::Polynomial,
        }
    }

    /// Returns the rank of this value's level.
    #[must_use]
    pub fn rank(&self) -> u8 {
        self.level().rank()
    }

    fn coerce_apply<O: SameLevel>(&self, rhs: &Value, op: &O) -> Result<O::Output> {
        match self {
            Value::Scalar(s) => coerce_apply(s, rhs, op),
            Value::Variable(v) => coerce_apply(v, rhs, op),
            Value::Monomial(m) => coerce_apply(m, rhs, op),
            Value::Polynomial(p) => coerce_apply(p, rhs, op),
        }
    }

    /// The same value one level up.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::Incoercible`] for a polynomial.
    pub fn promote(&self) -> Result<Value> {
        match self {
            Value::Scalar(s) => s.promote(),
            Value::Variable(v) => v.promote(),
            Value::Monomial(m) => m.promote(),
            Value::Polynomial(p) => p.promote(),
        }
    }

    /// Lifts this value to `level`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::NoLift`] if `level` is not reachable, i.e. it
    /// is lower, or is the variable level for anything but a variable.
    pub fn lift_to(&self, level: Level) -> Result<Value> {
        let lifted = match level {
            Level::Scalar => Scalar::lift(self).map(Value::Scalar),
            Level::Variable => Variable::lift(self).map(Value::Variable),
            Level::Monomial => Monomial::lift(self).map(Value::Monomial),
            Level::Polynomial => Polynomial::lift(self).map(Value::Polynomial),
        };
        lifted.ok_or(AlgebraError::NoLift {
            from: self.level(),
            to: level,
        })
    }

    /// The value as a polynomial. Every level lifts losslessly to the top.
    #[must_use]
    pub fn to_polynomial(&self) -> Polynomial {
        match self {
            Value::Scalar(s) => Polynomial::constant(*s),
            Value::Variable(v) => Polynomial::from_variable(*v),
            Value::Monomial(m) => Polynomial::from_monomial(m.clone()),
            Value::Polynomial(p) => p.clone(),
        }
    }

    /// Rewrites the value at the lowest level that can hold it.
    ///
    /// Constants become scalars and single terms become monomials.
    #[must_use]
    pub fn demote(self) -> Value {
        match self {
            Value::Polynomial(p) => match p.as_constant() {
                Some(c) => Value::Scalar(c),
                None if p.len() == 1 => {
                    Value::Monomial(p.into_terms().swap_remove(0)).demote()
                }
                None => Value::Polynomial(p),
            },
            Value::Monomial(m) if m.is_constant() => Value::Scalar(m.coeff()),
            other => other,
        }
    }

    /// Adds two values, promoting as needed.
    ///
    /// # Errors
    ///
    /// Only fails if the promotion protocol is asked to promote a
    /// polynomial, which well-formed operands never require.
    pub fn try_add(&self, other: &Value) -> Result<Value> {
        self.coerce_apply(other, &BinaryOp::Add)
    }

    /// Subtracts two values, promoting as needed.
    ///
    /// # Errors
    ///
    /// See [`Value::try_add`].
    pub fn try_sub(&self, other: &Value) -> Result<Value> {
        self.coerce_apply(other, &BinaryOp::Sub)
    }

    /// Multiplies two values, promoting as needed.
    ///
    /// # Errors
    ///
    /// See [`Value::try_add`].
    pub fn try_mul(&self, other: &Value) -> Result<Value> {
        self.coerce_apply(other, &BinaryOp::Mul)
    }

    /// Compares two values under the order of their common level.
    ///
    /// # Errors
    ///
    /// See [`Value::try_add`].
    pub fn try_cmp(&self, other: &Value) -> Result<Ordering> {
        self.coerce_apply(other, &Compare)
    }

    /// Tests two values for equality at their common level.
    ///
    /// # Errors
    ///
    /// See [`Value::try_add`].
    pub fn try_eq(&self, other: &Value) -> Result<bool> {
        self.try_cmp(other).map(Ordering::is_eq)
    }

    /// Negates the value at its own level.
    #[must_use]
    pub fn neg(&self) -> Value {
        match self {
            Value::Scalar(s) => s.level_neg(),
            Value::Variable(v) => v.level_neg(),
            Value::Monomial(m) => m.level_neg(),
            Value::Polynomial(p) => p.level_neg(),
        }
    }

    /// Raises the value to a non-negative integer power by repeated
    /// squaring. `pow(0)` is the scalar 1 at every level.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidExponent`] for negative `n`.
    #[allow(clippy::cast_precision_loss)]
    pub fn pow(&self, n: i64) -> Result<Value> {
        if n < 0 {
            return Err(AlgebraError::InvalidExponent(n as f64));
        }

        let mut result = Value::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.try_mul(&base)?;
            }
            exp >>= 1;
            if exp > 0 {
                base = base.try_mul(&base)?;
            }
        }
        Ok(result)
    }

    /// Like [`Value::pow`], for an exponent given as a float.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidExponent`] unless `n` is a finite,
    /// non-negative integer within the range of `i64`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn powf(&self, n: f64) -> Result<Value> {
        // 2^63, the first float past i64::MAX
        const LIMIT: f64 = 9_223_372_036_854_775_808.0;

        if !n.is_finite() || n < 0.0 || n.fract() != 0.0 || n >= LIMIT {
            return Err(AlgebraError::InvalidExponent(n));
        }
        self.pow(n as i64)
    }

    /// Long division, returning `(quotient, remainder)`.
    ///
    /// Both operands are lifted to polynomials first.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] for a zero divisor.
    pub fn div_rem(&self, divisor: &Value) -> Result<(Value, Value)> {
        let (q, r) = self.to_polynomial().div_rem(&divisor.to_polynomial())?;
        Ok((Value::Polynomial(q), Value::Polynomial(r)))
    }

    /// Short division between single-term values.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionTypeMismatch`] if either side is a
    /// polynomial with more than one term.
    pub fn short_div(&self, divisor: &Value) -> Result<Value> {
        let dividend = self.as_single_term()?;
        let divisor = divisor.as_single_term()?;
        Ok(Value::Monomial(dividend.short_div(&divisor)))
    }

    fn as_single_term(&self) -> Result<Monomial> {
        match self {
            Value::Polynomial(p) if p.len() > 1 => Err(AlgebraError::DivisionTypeMismatch {
                level: Level::Polynomial,
                terms: p.len(),
            }),
            Value::Polynomial(p) => Ok(p.leading_term().cloned().unwrap_or_else(Monomial::zero)),
            other => Monomial::lift(other).ok_or(AlgebraError::DivisionTypeMismatch {
                level: other.level(),
                terms: 1,
            }),
        }
    }

    /// Partial derivative by each variable in turn, left to right.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidCalculusArguments`] if any argument is
    /// not a variable.
    pub fn derivative(&self, args: &[Value]) -> Result<Value> {
        let vars = args
            .iter()
            .map(|arg| match arg {
                Value::Variable(v) => Ok(*v),
                other => {
                    debug!(level = %other.level(), "rejected derivative argument");
                    Err(AlgebraError::InvalidCalculusArguments(format!(
                        "can only differentiate by variables, got a {}",
                        other.level()
                    )))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Value::Polynomial(self.to_polynomial().derivative(&vars)))
    }

    /// Evaluates with positional arguments bound to ids `0..args.len()`.
    ///
    /// Fully bound values come back as scalars; otherwise the residue keeps
    /// the unbound variables.
    #[must_use]
    pub fn call(&self, args: &[Scalar]) -> Value {
        let bindings = positional_bindings(args);
        match self {
            Value::Scalar(s) => Value::Scalar(*s),
            Value::Variable(v) => v.eval(&bindings),
            Value::Monomial(m) => Value::Monomial(m.eval(&bindings)).demote(),
            Value::Polynomial(p) => Value::Polynomial(p.eval_with(&bindings)).demote(),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::zero()
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Scalar(Scalar::new(x))
    }
}

impl From<i32> for Value {
    fn from(x: i32) -> Self {
        Value::Scalar(Scalar::from(x))
    }
}

impl From<Variable> for Value {
    fn from(v: Variable) -> Self {
        Value::Variable(v)
    }
}

impl From<Monomial> for Value {
    fn from(m: Monomial) -> Self {
        Value::Monomial(m)
    }
}

impl From<Polynomial> for Value {
    fn from(p: Polynomial) -> Self {
        Value::Polynomial(p)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.try_eq(other).unwrap_or(false)
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

macro_rules! impl_value_eq {
    ($($t:ty),*) => {$(
        impl PartialEq<$t> for Value {
            fn eq(&self, other: &$t) -> bool {
                *self == Value::from(other.clone())
            }
        }

        impl PartialEq<Value> for $t {
            fn eq(&self, other: &Value) -> bool {
                Value::from(self.clone()) == *other
            }
        }
    )*};
}

impl_value_eq!(Scalar, Variable, Monomial, Polynomial, f64);

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) => write!(f, "{s}"),
            Value::Variable(v) => write!(f, "{v}"),
            Value::Monomial(m) => write!(f, "{m}"),
            Value::Polynomial(p) => write!(f, "{p}"),
        }
    }
}
