//! Splitting raw input into an expression triple.

use crate::core::CalcError;

/// The three whitespace-separated tokens of a calculation.
///
/// Tokens are kept as raw text: operands are validated against a base and the
/// operator is resolved later, in that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expression<'a> {
    pub lhs: &'a str,
    pub operator: &'a str,
    pub rhs: &'a str,
}

impl<'a> Expression<'a> {
    /// Split `text` on whitespace into exactly three tokens.
    ///
    /// # Example
    ///
    /// ```rust
    /// use basecalc::core::{CalcError, Expression};
    ///
    /// let expr = Expression::parse("  A  +\tB ").unwrap();
    /// assert_eq!((expr.lhs, expr.operator, expr.rhs), ("A", "+", "B"));
    ///
    /// assert_eq!(
    ///     Expression::parse("10 +"),
    ///     Err(CalcError::MalformedExpression { tokens: 2 })
    /// );
    /// ```
    pub fn parse(text: &'a str) -> Result<Self, CalcError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        match tokens.as_slice() {
            &[lhs, operator, rhs] => Ok(Expression { lhs, operator, rhs }),
            _ => Err(CalcError::MalformedExpression {
                tokens: tokens.len(),
            }),
        }
    }
}
