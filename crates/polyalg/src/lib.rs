//! # polyalg
//!
//! Symbolic multivariate polynomial algebra over floating coefficients.
//!
//! Scalars, variables, monomials and polynomials combine freely: each
//! operation lifts the lower operand until both meet at a common level, and
//! every result is kept in canonical form.
//!
//! ## Features
//!
//! - **Canonical forms**: sorted, merged, zero-free term lists
//! - **Promotion**: mixed-level `+`, `-`, `*` and comparisons
//! - **Division**: monomial short division and polynomial long division
//! - **Calculus**: partial derivatives, formal and definite integrals,
//!   positional evaluation
//!
//! ## Quick Start
//!
//! ```rust
//! use polyalg::prelude::*;
//!
//! let mut registry = VariableRegistry::new();
//! let x = Variable::new_in(&mut registry);
//! let y = Variable::new_in(&mut registry);
//!
//! let m1 = 2.0 * x * y;
//! let m2 = -3.0 * x * x * y;
//! let p = m1 + m2;
//! assert_eq!(p.to_string(), "-3.0 * x_0^2 * x_1 + 2.0 * x_0 * x_1");
//!
//! let (q, r) = p.pow(2).unwrap().div_rem(&p).unwrap();
//! assert_eq!(q, p);
//! assert_eq!(r, 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polyalg_integrate as integrate;
pub use polyalg_poly as poly;
pub use polyalg_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polyalg_integrate::{integrate, Integrate, IntegralArg, IntegralMode};
    pub use polyalg_poly::{
        AlgebraError, Level, Monomial, Polynomial, Scalar, Value, Variable, VariableRegistry,
    };
    pub use polyalg_rings::{Field, Ring};
}
