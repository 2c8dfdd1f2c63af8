//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - Numeral bases and operand validation
//! - The closed operator set and its arithmetic
//! - Expression evaluation and multi-base rendering
//! - The `State` trait implemented by session states
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod base;
mod error;
mod evaluator;
mod expression;
mod operand;
mod operator;
mod state;

pub use base::{Base, ParseBaseError};
pub use error::CalcError;
pub use evaluator::{evaluate, CalculationResult};
pub use expression::Expression;
pub use operand::{
    is_valid, parse_operand, validate_operands, InvalidToken, NumericValue, OperandError,
};
pub use operator::Operator;
pub use state::State;
