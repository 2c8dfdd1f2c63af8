//! The four supported arithmetic operators.

use crate::core::{CalcError, NumericValue};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A binary arithmetic operator.
///
/// The set is closed: any other symbol parses to
/// [`CalcError::InvalidOperator`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Apply the operator.
    ///
    /// Two integers stay integral for `+ - *` (overflow is reported as
    /// [`CalcError::OutOfRange`]); division always yields a real. Any real
    /// operand makes the whole computation real.
    pub fn apply(&self, lhs: NumericValue, rhs: NumericValue) -> Result<NumericValue, CalcError> {
        if *self == Self::Divide && rhs.is_zero() {
            return Err(CalcError::DivisionByZero);
        }

        match (lhs, rhs) {
            (NumericValue::Integer(a), NumericValue::Integer(b)) => {
                let checked = match self {
                    Self::Add => a.checked_add(b),
                    Self::Subtract => a.checked_sub(b),
                    Self::Multiply => a.checked_mul(b),
                    Self::Divide => return Ok(NumericValue::Real(a as f64 / b as f64)),
                };
                checked.map(NumericValue::Integer).ok_or_else(|| {
                    CalcError::OutOfRange(format!("{a} {} {b}", self.symbol()))
                })
            }
            _ => {
                let (a, b) = (lhs.as_f64(), rhs.as_f64());
                let value = match self {
                    Self::Add => a + b,
                    Self::Subtract => a - b,
                    Self::Multiply => a * b,
                    Self::Divide => a / b,
                };
                Ok(NumericValue::Real(value))
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| CalcError::InvalidOperator(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_parse_to_operators() {
        for op in Operator::ALL {
            assert_eq!(op.symbol().parse::<Operator>(), Ok(op));
        }
    }

    #[test]
    fn unknown_symbols_are_invalid_operators() {
        for symbol in ["%", "x", "**", "", "plus"] {
            assert_eq!(
                symbol.parse::<Operator>(),
                Err(CalcError::InvalidOperator(symbol.to_string()))
            );
        }
    }

    #[test]
    fn integer_arithmetic_stays_integral() {
        let (a, b) = (NumericValue::Integer(10), NumericValue::Integer(11));
        assert_eq!(Operator::Add.apply(a, b), Ok(NumericValue::Integer(21)));
        assert_eq!(Operator::Subtract.apply(a, b), Ok(NumericValue::Integer(-1)));
        assert_eq!(Operator::Multiply.apply(a, b), Ok(NumericValue::Integer(110)));
    }

    #[test]
    fn integer_division_is_real() {
        let result = Operator::Divide.apply(NumericValue::Integer(10), NumericValue::Integer(4));
        assert_eq!(result, Ok(NumericValue::Real(2.5)));
    }

    #[test]
    fn real_arithmetic() {
        let (a, b) = (NumericValue::Real(7.5), NumericValue::Real(2.0));
        assert_eq!(Operator::Add.apply(a, b), Ok(NumericValue::Real(9.5)));
        assert_eq!(Operator::Subtract.apply(a, b), Ok(NumericValue::Real(5.5)));
        assert_eq!(Operator::Multiply.apply(a, b), Ok(NumericValue::Real(15.0)));
        assert_eq!(Operator::Divide.apply(a, b), Ok(NumericValue::Real(3.75)));
    }

    #[test]
    fn division_by_zero_is_reported() {
        assert_eq!(
            Operator::Divide.apply(NumericValue::Real(10.0), NumericValue::Real(0.0)),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            Operator::Divide.apply(NumericValue::Real(10.0), NumericValue::Real(-0.0)),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            Operator::Divide.apply(NumericValue::Integer(1), NumericValue::Integer(0)),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn zero_is_fine_outside_division() {
        assert_eq!(
            Operator::Multiply.apply(NumericValue::Real(3.0), NumericValue::Real(0.0)),
            Ok(NumericValue::Real(0.0))
        );
    }

    #[test]
    fn integer_overflow_is_out_of_range() {
        let result = Operator::Multiply.apply(
            NumericValue::Integer(i64::MAX),
            NumericValue::Integer(2),
        );
        assert!(matches!(result, Err(CalcError::OutOfRange(_))));
    }
}
