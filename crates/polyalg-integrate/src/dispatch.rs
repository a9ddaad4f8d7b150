//! Argument-type dispatch for `integrate`.
//!
//! A list made only of variables selects formal integration; a list made
//! only of intervals selects definite integration. Mixed lists are
//! rejected. [`IntegralMode`] can pin one of the two.

use tracing::trace;

use polyalg_poly::{AlgebraError, Monomial, Polynomial, Result, Value, Variable};
use polyalg_rings::Scalar;

use crate::definite::definite_integral;
use crate::formal::formal_integral;

/// One argument of an integral: a variable or a bound pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IntegralArg {
    /// Integrate formally with respect to this variable.
    Variable(Variable),
    /// Substitute these bounds for the next variable id.
    Interval {
        /// Lower bound.
        lower: Scalar,
        /// Upper bound.
        upper: Scalar,
    },
}

impl IntegralArg {
    /// Creates an interval argument.
    #[must_use]
    pub fn interval(lower: impl Into<Scalar>, upper: impl Into<Scalar>) -> Self {
        IntegralArg::Interval {
            lower: lower.into(),
            upper: upper.into(),
        }
    }
}

impl From<Variable> for IntegralArg {
    fn from(v: Variable) -> Self {
        IntegralArg::Variable(v)
    }
}

impl From<(f64, f64)> for IntegralArg {
    fn from((lower, upper): (f64, f64)) -> Self {
        Self::interval(lower, upper)
    }
}

impl From<(Scalar, Scalar)> for IntegralArg {
    fn from((lower, upper): (Scalar, Scalar)) -> Self {
        Self::interval(lower, upper)
    }
}

/// Which kind of integral to compute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegralMode {
    /// Decide from the argument types.
    #[default]
    Auto,
    /// Only accept variables.
    Formal,
    /// Only accept intervals.
    Definite,
}

enum Plan {
    Formal(Vec<Variable>),
    Definite(Vec<(Scalar, Scalar)>),
}

fn variables(args: &[IntegralArg]) -> Option<Vec<Variable>> {
    args.iter()
        .map(|arg| match arg {
            IntegralArg::Variable(v) => Some(*v),
            IntegralArg::Interval { .. } => None,
        })
        .collect()
}

fn intervals(args: &[IntegralArg]) -> Option<Vec<(Scalar, Scalar)>> {
    args.iter()
        .map(|arg| match arg {
            IntegralArg::Interval { lower, upper } => Some((*lower, *upper)),
            IntegralArg::Variable(_) => None,
        })
        .collect()
}

fn plan(args: &[IntegralArg], mode: IntegralMode) -> Result<Plan> {
    let plan = match mode {
        IntegralMode::Auto => variables(args)
            .map(Plan::Formal)
            .or_else(|| intervals(args).map(Plan::Definite)),
        IntegralMode::Formal => variables(args).map(Plan::Formal),
        IntegralMode::Definite => intervals(args).map(Plan::Definite),
    };

    plan.ok_or_else(|| {
        AlgebraError::InvalidCalculusArguments(format!(
            "integral arguments must be all variables or all intervals ({mode:?} mode)"
        ))
    })
}

/// Integrates `value`, formally or over intervals depending on `args`.
///
/// Formal results stay polynomials; definite results are demoted, so a fully
/// bound integral comes back as a scalar. An empty argument list returns the
/// integrand unchanged.
///
/// # Errors
///
/// Returns [`AlgebraError::InvalidCalculusArguments`] for a mixed argument
/// list, or for arguments that do not fit a forced `mode`.
pub fn integrate(value: &Value, args: &[IntegralArg], mode: IntegralMode) -> Result<Value> {
    let plan = plan(args, mode)?;
    if args.is_empty() {
        return Ok(value.clone());
    }

    let p = value.to_polynomial();
    match plan {
        Plan::Formal(vars) => {
            trace!(?mode, variables = vars.len(), "formal integration");
            Ok(Value::Polynomial(formal_integral(&p, &vars)))
        }
        Plan::Definite(bounds) => {
            trace!(?mode, intervals = bounds.len(), "definite integration");
            Ok(Value::Polynomial(definite_integral(&p, &bounds)).demote())
        }
    }
}

/// Integral methods on algebraic values.
pub trait Integrate {
    /// Integrates, choosing the mode from the argument types.
    ///
    /// # Errors
    ///
    /// See [`integrate`].
    fn integral(&self, args: &[IntegralArg]) -> Result<Value> {
        self.integral_with(args, IntegralMode::Auto)
    }

    /// Integrates in the given mode.
    ///
    /// # Errors
    ///
    /// See [`integrate`].
    fn integral_with(&self, args: &[IntegralArg], mode: IntegralMode) -> Result<Value>;
}

impl Integrate for Value {
    fn integral_with(&self, args: &[IntegralArg], mode: IntegralMode) -> Result<Value> {
        integrate(self, args, mode)
    }
}

impl Integrate for Polynomial {
    fn integral_with(&self, args: &[IntegralArg], mode: IntegralMode) -> Result<Value> {
        integrate(&Value::from(self.clone()), args, mode)
    }
}

impl Integrate for Monomial {
    fn integral_with(&self, args: &[IntegralArg], mode: IntegralMode) -> Result<Value> {
        integrate(&Value::from(self.clone()), args, mode)
    }
}
