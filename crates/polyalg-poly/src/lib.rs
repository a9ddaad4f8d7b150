//! # polyalg-poly
//!
//! Symbolic multivariate polynomial arithmetic over floating coefficients.
//!
//! This crate provides:
//! - Variables with process-unique ids, allocated from a registry
//! - Monomials stored as id-indexed exponent vectors
//! - Canonical sparse polynomials (sorted, merged, zero-free)
//! - A promotion protocol letting scalars, variables, monomials and
//!   polynomials meet in a single `Value` type
//! - Monomial short division and polynomial long division
//! - Formal derivatives and evaluation
//!
//! ## Hierarchy
//!
//! ```text
//! Scalar  <  Variable ~ Monomial  <  Polynomial
//! ```
//!
//! Binary operations between two levels lift the lower operand, or promote
//! the left one a step and retry, until both sides sit at the same level.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod calculus;
pub mod error;
pub mod monomial;
pub mod ops;
pub mod ordering;
pub mod polynomial;
pub mod value;
pub mod variable;

#[cfg(test)]
mod proptests;

pub use calculus::{positional_bindings, Bindings};
pub use error::{AlgebraError, Result};
pub use monomial::Monomial;
pub use ordering::SortKey;
pub use polynomial::Polynomial;
pub use polyalg_rings::Scalar;
pub use value::{Algebraic, Level, Value};
pub use variable::{registered_ids, Variable, VariableRegistry};
