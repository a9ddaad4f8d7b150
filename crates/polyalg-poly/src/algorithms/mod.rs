//! Polynomial algorithms.
//!
//! This module contains:
//! - Monomial short division
//! - Polynomial long division under the monomial order

pub mod division;

pub use division::{long_division, short_division};
