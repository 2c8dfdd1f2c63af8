//! Expression evaluation and multi-base rendering.

use crate::core::operand::validate_operands;
use crate::core::{Base, CalcError, Expression, NumericValue, Operator};
use serde::{Deserialize, Serialize};

/// Outcome of a successful calculation, rendered in all three bases.
///
/// The decimal rendering is the computed value verbatim, fraction included.
/// The binary and hexadecimal renderings are based on the value truncated
/// toward zero, so `7 / 2` shows `3.5`, `11` and `3`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub value: NumericValue,
    pub decimal: String,
    pub binary: String,
    pub hexadecimal: String,
}

impl CalculationResult {
    /// Render a computed value.
    ///
    /// Binary digits carry no sign. Hexadecimal digits are uppercase and keep
    /// a leading `-` for negative values.
    pub fn render(value: NumericValue) -> Result<Self, CalcError> {
        let truncated = value.truncate()?;
        let magnitude = truncated.unsigned_abs();
        let sign = if truncated < 0 { "-" } else { "" };

        Ok(Self {
            value,
            decimal: value.to_string(),
            binary: format!("{magnitude:b}"),
            hexadecimal: format!("{sign}{magnitude:X}"),
        })
    }
}

/// Evaluate `text` as an expression in `base`.
///
/// Checks run in a fixed order: token count, both operands, operator, then
/// division by zero. The first failing check determines the error.
///
/// # Example
///
/// ```rust
/// use basecalc::core::{evaluate, Base, CalcError};
///
/// let result = evaluate(Base::Hexadecimal, "A + B").unwrap();
/// assert_eq!(result.decimal, "21");
/// assert_eq!(result.binary, "10101");
/// assert_eq!(result.hexadecimal, "15");
///
/// assert_eq!(evaluate(Base::Decimal, "10 / 0"), Err(CalcError::DivisionByZero));
/// ```
pub fn evaluate(base: Base, text: &str) -> Result<CalculationResult, CalcError> {
    let expression = Expression::parse(text)?;
    let (lhs, rhs) = validate_operands(expression.lhs, expression.rhs, base)?;
    let operator: Operator = expression.operator.parse()?;

    CalculationResult::render(operator.apply(lhs, rhs)?)
}
