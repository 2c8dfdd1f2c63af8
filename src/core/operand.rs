//! Operand validation and numeric interpretation.
//!
//! An operand is checked against the lexical grammar of the selected base and
//! then converted to a [`NumericValue`]. The conversion rule depends on the
//! base:
//!
//! - Hexadecimal operands become [`NumericValue::Integer`].
//! - Decimal and binary operands become [`NumericValue::Real`], read as
//!   decimal text. A binary operand `1010` therefore computes as one thousand
//!   and ten; only its spelling is checked against base 2.

use crate::core::{Base, CalcError};
use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A validated operand or computed result.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum NumericValue {
    Integer(i64),
    Real(f64),
}

impl NumericValue {
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(value) => *value == 0,
            Self::Real(value) => *value == 0.0,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Integer(value) => *value as f64,
            Self::Real(value) => *value,
        }
    }

    /// Integer part of the value, rounding toward zero.
    ///
    /// Fails with [`CalcError::OutOfRange`] for non-finite reals and for reals
    /// whose integer part does not fit an `i128`.
    pub fn truncate(&self) -> Result<i128, CalcError> {
        match self {
            Self::Integer(value) => Ok(i128::from(*value)),
            Self::Real(value) => {
                let truncated = value.trunc();
                let lower = i128::MIN as f64;
                if truncated.is_finite() && truncated >= lower && truncated < -lower {
                    Ok(truncated as i128)
                } else {
                    Err(CalcError::OutOfRange(self.to_string()))
                }
            }
        }
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Real(value) => write!(f, "{value}"),
        }
    }
}

/// A single operand that failed validation against a base.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("'{token}' is not a valid {base} number")]
pub struct InvalidToken {
    pub token: String,
    pub base: Base,
}

/// Why an operand could not be turned into a [`NumericValue`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OperandError {
    #[error(transparent)]
    Invalid(#[from] InvalidToken),

    /// Well spelled, but too large to hold.
    #[error("'{0}' is out of range")]
    OutOfRange(String),
}

fn strip_sign(token: &str) -> &str {
    token.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(token)
}

fn is_decimal_literal(token: &str) -> bool {
    let mut seen_point = false;
    let mut seen_digit = false;
    for c in strip_sign(token).chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    seen_digit
}

fn is_binary_literal(token: &str) -> bool {
    let digits = strip_sign(token);
    !digits.is_empty() && digits.chars().all(|c| c == '0' || c == '1')
}

fn is_hexadecimal_literal(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_hexdigit())
}

fn is_literal(token: &str, base: Base) -> bool {
    match base {
        Base::Decimal => is_decimal_literal(token),
        Base::Binary => is_binary_literal(token),
        Base::Hexadecimal => is_hexadecimal_literal(token),
    }
}

/// Check the spelling of `token` and convert it per the base's rule.
pub fn parse_operand(token: &str, base: Base) -> Result<NumericValue, OperandError> {
    if !is_literal(token, base) {
        return Err(InvalidToken {
            token: token.to_string(),
            base,
        }
        .into());
    }

    match base {
        Base::Hexadecimal => i64::from_str_radix(token, 16)
            .map(NumericValue::Integer)
            .map_err(|_| OperandError::OutOfRange(token.to_string())),
        Base::Decimal | Base::Binary => token
            .parse::<f64>()
            .map(NumericValue::Real)
            .map_err(|_| OperandError::OutOfRange(token.to_string())),
    }
}

/// Whether `token` is a syntactically valid numeral in `base`.
///
/// # Example
///
/// ```rust
/// use basecalc::core::{is_valid, Base};
///
/// assert!(is_valid("1010", Base::Binary));
/// assert!(!is_valid("12", Base::Binary));
/// assert!(is_valid("FF", Base::Hexadecimal));
/// assert!(!is_valid("G1", Base::Hexadecimal));
/// assert!(is_valid("-3.5", Base::Decimal));
/// ```
pub fn is_valid(token: &str, base: Base) -> bool {
    is_literal(token, base)
}

fn check_operand(token: &str, base: Base) -> Validation<NumericValue, NonEmptyVec<OperandError>> {
    match parse_operand(token, base) {
        Ok(value) => Validation::success(value),
        Err(error) => Validation::fail(error),
    }
}

/// Validate both operands, accumulating every failure.
///
/// Misspelled operands are reported together as one
/// [`CalcError::InvalidOperand`]. Only when every operand is well spelled
/// does an oversized one surface as [`CalcError::OutOfRange`].
pub fn validate_operands(
    lhs: &str,
    rhs: &str,
    base: Base,
) -> Result<(NumericValue, NumericValue), CalcError> {
    match check_operand(lhs, base).and(check_operand(rhs, base)) {
        Validation::Success(values) => Ok(values),
        Validation::Failure(errors) => {
            let mut invalid = Vec::new();
            let mut out_of_range = None;
            for error in errors.iter() {
                match error {
                    OperandError::Invalid(bad) => invalid.push(bad.token.clone()),
                    OperandError::OutOfRange(token) => {
                        out_of_range.get_or_insert_with(|| token.clone());
                    }
                }
            }
            match out_of_range {
                Some(token) if invalid.is_empty() => Err(CalcError::OutOfRange(token)),
                _ => Err(CalcError::InvalidOperand {
                    base,
                    operands: invalid,
                }),
            }
        }
    }
}
