//! Operator sugar over the promotion protocol.
//!
//! `+`, `-` and `*` accept any pair of algebraic operands (and plain `f64`
//! coefficients) and produce a [`Value`] at the level the protocol settles
//! on. `/` and `%` run long division on polynomial dividends.

use polyalg_rings::Scalar;

use crate::error::Result;
use crate::monomial::Monomial;
use crate::polynomial::Polynomial;
use crate::value::Value;
use crate::variable::Variable;

const PROTOCOL_FAILURE: &str = "operands always meet at the polynomial level";
const ZERO_DIVISOR: &str = "division by the zero polynomial";

fn settle(result: Result<Value>) -> Value {
    result.expect(PROTOCOL_FAILURE)
}

macro_rules! impl_arith {
    ($lhs:ty => $($rhs:ty),+ $(,)?) => {$(
        impl std::ops::Add<$rhs> for $lhs {
            type Output = Value;

            fn add(self, rhs: $rhs) -> Value {
                settle(Value::from(self).try_add(&Value::from(rhs)))
            }
        }

        impl std::ops::Sub<$rhs> for $lhs {
            type Output = Value;

            fn sub(self, rhs: $rhs) -> Value {
                settle(Value::from(self).try_sub(&Value::from(rhs)))
            }
        }

        impl std::ops::Mul<$rhs> for $lhs {
            type Output = Value;

            fn mul(self, rhs: $rhs) -> Value {
                settle(Value::from(self).try_mul(&Value::from(rhs)))
            }
        }
    )+};
}

impl_arith!(Value => Value, Scalar, Variable, Monomial, Polynomial, f64);
impl_arith!(Variable => Value, Scalar, Variable, Monomial, Polynomial, f64);
impl_arith!(Monomial => Value, Scalar, Variable, Monomial, Polynomial, f64);
impl_arith!(Polynomial => Value, Scalar, Variable, Monomial, Polynomial, f64);
impl_arith!(Scalar => Value, Variable, Monomial, Polynomial);
impl_arith!(f64 => Value, Variable, Monomial, Polynomial);

impl std::ops::Add for &Value {
    type Output = Value;

    fn add(self, rhs: Self) -> Value {
        settle(self.try_add(rhs))
    }
}

impl std::ops::Sub for &Value {
    type Output = Value;

    fn sub(self, rhs: Self) -> Value {
        settle(self.try_sub(rhs))
    }
}

impl std::ops::Mul for &Value {
    type Output = Value;

    fn mul(self, rhs: Self) -> Value {
        settle(self.try_mul(rhs))
    }
}

impl std::ops::Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        Value::neg(&self)
    }
}

impl std::ops::Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        Value::neg(self)
    }
}

impl std::ops::Neg for Variable {
    type Output = Value;

    fn neg(self) -> Value {
        Value::neg(&Value::from(self))
    }
}

impl std::ops::Neg for Monomial {
    type Output = Monomial;

    fn neg(self) -> Monomial {
        Monomial::neg(&self)
    }
}

impl std::ops::Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(&self)
    }
}

macro_rules! impl_division {
    ($($rhs:ty),+ $(,)?) => {$(
        /// Long division, keeping the quotient.
        ///
        /// # Panics
        ///
        /// Panics if the divisor is zero; use [`Value::div_rem`] to handle
        /// that case.
        impl std::ops::Div<$rhs> for Value {
            type Output = Value;

            fn div(self, rhs: $rhs) -> Value {
                self.div_rem(&Value::from(rhs)).expect(ZERO_DIVISOR).0
            }
        }

        /// Long division, keeping the remainder.
        ///
        /// # Panics
        ///
        /// Panics if the divisor is zero.
        impl std::ops::Rem<$rhs> for Value {
            type Output = Value;

            fn rem(self, rhs: $rhs) -> Value {
                self.div_rem(&Value::from(rhs)).expect(ZERO_DIVISOR).1
            }
        }

        /// Long division, keeping the quotient.
        ///
        /// # Panics
        ///
        /// Panics if the divisor is zero; use [`Polynomial::div_rem`] to
        /// handle that case.
        impl std::ops::Div<$rhs> for Polynomial {
            type Output = Polynomial;

            fn div(self, rhs: $rhs) -> Polynomial {
                self.quotient(&Value::from(rhs).to_polynomial())
                    .expect(ZERO_DIVISOR)
            }
        }

        /// Long division, keeping the remainder.
        ///
        /// # Panics
        ///
        /// Panics if the divisor is zero.
        impl std::ops::Rem<$rhs> for Polynomial {
            type Output = Polynomial;

            fn rem(self, rhs: $rhs) -> Polynomial {
                self.remainder(&Value::from(rhs).to_polynomial())
                    .expect(ZERO_DIVISOR)
            }
        }
    )+};
}

impl_division!(Value, Scalar, Variable, Monomial, Polynomial, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Level;

    fn x() -> Variable {
        Variable::from_id(0)
    }

    fn y() -> Variable {
        Variable::from_id(1)
    }

    #[test]
    fn test_mixed_operands() {
        let m1 = 2.0 * x() * y();
        assert_eq!(m1.level(), Level::Monomial);
        assert_eq!(m1.to_string(), "2.0 * x_0 * x_1");

        let m2 = -3.0 * x() * x() * y();
        assert_eq!(m2.to_string(), "-3.0 * x_0^2 * x_1");

        let sum = m1 + m2;
        assert_eq!(sum.level(), Level::Polynomial);
        assert_eq!(sum.to_string(), "-3.0 * x_0^2 * x_1 + 2.0 * x_0 * x_1");
    }

    #[test]
    fn test_scalar_operands() {
        let s = Scalar::new(2.0);

        assert_eq!(s * x(), Monomial::new(2.0, &[x()]));
        assert_eq!(x() + s, Polynomial::new(vec![Monomial::from_variable(x()), Monomial::constant(2.0)]));
        assert_eq!((Value::from(s) + 1.0).level(), Level::Scalar);
        assert_eq!(Value::from(s) - 2.0, 0.0);
    }

    #[test]
    fn test_cancellation() {
        let p = x() + y();
        let q = &p - &p;
        assert_eq!(q, Value::zero());
        assert_eq!(q.to_string(), "0");

        assert_eq!(x() - x(), Monomial::zero());
    }

    #[test]
    fn test_negation() {
        assert_eq!(-x(), Monomial::new(-1.0, &[x()]));
        assert_eq!((-x()).to_string(), "- * x_0");

        let p = Polynomial::from_variable(x());
        assert_eq!(-p.clone(), Polynomial::neg(&p));
        assert_eq!(-Value::from(3.0), -3.0);
    }

    #[test]
    fn test_division_operators() {
        let d = x() + 1.0;
        let p = d.pow(2).unwrap() + 3.0;

        assert_eq!(p.clone() / d.clone(), x() + 1.0);
        assert_eq!(p % d, 3.0);

        let half = Polynomial::from_variable(y()) / 2.0;
        assert_eq!(half, Polynomial::from_monomial(Monomial::new(0.5, &[y()])));
    }

    #[test]
    #[should_panic(expected = "division by the zero polynomial")]
    fn test_division_by_zero_panics() {
        let _ = Value::from(x()) / Polynomial::zero();
    }
}
