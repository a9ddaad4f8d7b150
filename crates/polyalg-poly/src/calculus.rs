//! Formal derivatives and evaluation.
//!
//! Both operate term by term and hand the results back to the polynomial
//! constructor, which merges terms that became alike.

use rustc_hash::FxHashMap;

use polyalg_rings::{Ring, Scalar};

use crate::monomial::Monomial;
use crate::polynomial::Polynomial;
use crate::value::Value;
use crate::variable::Variable;

/// Values bound to variable ids.
pub type Bindings = FxHashMap<u32, Scalar>;

/// Binds `args[i]` to variable id `i`.
#[must_use]
pub fn positional_bindings(args: &[Scalar]) -> Bindings {
    (0u32..).zip(args.iter().copied()).collect()
}

impl Monomial {
    /// Partial derivative by `v`.
    ///
    /// Zero if `v` does not appear; otherwise the exponent moves into the
    /// coefficient and drops by one.
    #[must_use]
    pub fn derivative(&self, v: Variable) -> Monomial {
        let e = self.exponent(v);
        if e == 0 {
            return Monomial::zero();
        }

        let mut exponents = self.exponents.clone();
        exponents[v.index()] -= 1;
        Monomial::from_parts(self.coeff * Scalar::from(e), exponents)
    }

    /// Substitutes bound variables, keeping the unbound ones.
    #[must_use]
    pub fn eval(&self, bindings: &Bindings) -> Monomial {
        let mut coeff = self.coeff;
        let mut exponents = self.exponents.clone();

        for (v, e) in self.support() {
            if let Some(value) = bindings.get(&v.id()) {
                coeff *= Ring::pow(value, e);
                exponents[v.index()] = 0;
            }
        }

        Monomial::from_parts(coeff, exponents)
    }
}

impl Polynomial {
    /// Partial derivative by a single variable.
    #[must_use]
    pub fn derivative_by(&self, v: Variable) -> Polynomial {
        self.terms().iter().map(|m| m.derivative(v)).collect()
    }

    /// Repeated partial derivative, applied left to right over `vars`.
    #[must_use]
    pub fn derivative(&self, vars: &[Variable]) -> Polynomial {
        vars.iter()
            .fold(self.clone(), |acc, &v| acc.derivative_by(v))
    }

    /// Substitutes bound variables in every term.
    #[must_use]
    pub fn eval_with(&self, bindings: &Bindings) -> Polynomial {
        self.terms().iter().map(|m| m.eval(bindings)).collect()
    }

    /// Evaluates with positional arguments bound to ids `0..args.len()`.
    ///
    /// Returns a scalar when every variable is bound, and the residue over
    /// the unbound variables otherwise.
    #[must_use]
    pub fn eval(&self, args: &[Scalar]) -> Value {
        Value::Polynomial(self.eval_with(&positional_bindings(args))).demote()
    }
}
