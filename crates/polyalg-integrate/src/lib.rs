//! # polyalg-integrate
//!
//! Integration of multivariate polynomials.
//!
//! - **Formal**: the power rule, term by term, repeated over a variable list
//! - **Definite**: bounds substituted per variable id, one interval at a time
//! - **Iterated**: formal integral followed by substitution, i.e. the
//!   integral over a box
//!
//! [`integrate`] chooses between formal and definite integration from the
//! argument types, the way a caller would write `p.integral(x, y)` or
//! `p.integral([0, 1], [2, 3])`.
//!
//! ```
//! use polyalg_integrate::{Integrate, IntegralArg};
//! use polyalg_poly::{Monomial, Value, Variable};
//!
//! let x = Variable::from_id(0);
//! let m = Monomial::new(3.0, &[x, x]);
//!
//! let antiderivative = m.integral(&[IntegralArg::from(x)]).unwrap();
//! assert_eq!(antiderivative.to_string(), "x_0^3");
//!
//! let definite = m.integral(&[IntegralArg::from((0.0, 2.0))]).unwrap();
//! assert_eq!(definite, Value::from(12.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod definite;
pub mod dispatch;
pub mod formal;

#[cfg(test)]
mod proptests;

pub use definite::{definite_integral, evaluate_between, iterated_integral};
pub use dispatch::{integrate, Integrate, IntegralArg, IntegralMode};
pub use formal::{formal_integral, integrate_by, integrate_monomial};
