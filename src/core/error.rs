//! Classified calculation failures.

use crate::core::Base;
use thiserror::Error;

/// Errors that can occur while handling a calculation request.
///
/// Every variant is recoverable: the dispatcher turns it into a single text
/// reply and keeps serving subsequent events.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalcError {
    #[error("Select a base before calculating. Use /start to choose one")]
    NoBaseSelected,

    #[error("Malformed expression: expected 'number operator number', got {tokens} token(s)")]
    MalformedExpression { tokens: usize },

    #[error("Operands must be numbers in base {base}")]
    InvalidOperand { base: Base, operands: Vec<String> },

    #[error("Invalid operator '{0}'. Use +, -, * or /")]
    InvalidOperator(String),

    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("{0} is out of range")]
    OutOfRange(String),
}

impl CalcError {
    /// Short stable identifier, used as the `kind` field in logs and JSON replies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoBaseSelected => "no_base_selected",
            Self::MalformedExpression { .. } => "malformed_expression",
            Self::InvalidOperand { .. } => "invalid_operand",
            Self::InvalidOperator(_) => "invalid_operator",
            Self::DivisionByZero => "division_by_zero",
            Self::OutOfRange(_) => "out_of_range",
        }
    }
}
