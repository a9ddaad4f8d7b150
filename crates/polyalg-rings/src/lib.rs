//! # polyalg-rings
//!
//! Coefficient arithmetic for the polyalg polynomial engine.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `Field`
//! - The coefficient field `Scalar`, a fixed-precision floating value
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── Field
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod scalar;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use scalar::{Scalar, ScalarError};
pub use traits::{Field, Ring};
