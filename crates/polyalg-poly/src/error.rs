//! Errors raised by the polynomial layers.

use polyalg_rings::ScalarError;
use thiserror::Error;

use crate::value::Level;

/// Convenience alias used throughout the crate.
pub type Result<T, E = AlgebraError> = std::result::Result<T, E>;

/// Errors that can occur while building or operating on algebraic values.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AlgebraError {
    /// A value could not be read as a scalar.
    #[error(transparent)]
    Scalar(#[from] ScalarError),

    /// A power was requested with a negative or non-integral exponent.
    #[error("invalid exponent {0}: powers must be non-negative integers")]
    InvalidExponent(f64),

    /// Short division was given an operand with more than one term.
    #[error("short division needs single-term operands, got a {level} with {terms} terms")]
    DivisionTypeMismatch {
        /// Level of the offending operand.
        level: Level,
        /// Number of terms it carries.
        terms: usize,
    },

    /// Long division by the zero polynomial.
    #[error("division by the zero polynomial")]
    DivisionByZero,

    /// A top-level value was asked to promote itself.
    #[error("a {0} is top-ranked and cannot be promoted")]
    Incoercible(Level),

    /// A value was asked to lift to a level it has no path to.
    #[error("cannot lift a {from} to a {to}")]
    NoLift {
        /// Level of the value.
        from: Level,
        /// Requested target level.
        to: Level,
    },

    /// Derivative or integral arguments of the wrong kind.
    #[error("invalid calculus arguments: {0}")]
    InvalidCalculusArguments(String),
}
