//! Numeral bases understood by the calculator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A numeral base an operand can be written in.
///
/// Each base is identified by a canonical lowercase name. These names are the
/// values carried by the base picker and echoed back in confirmations and
/// error replies.
///
/// # Example
///
/// ```rust
/// use basecalc::core::Base;
///
/// let base: Base = "binario".parse().unwrap();
/// assert_eq!(base, Base::Binary);
/// assert_eq!(base.radix(), 2);
/// assert_eq!(base.name(), "binario");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Base {
    #[serde(rename = "decimal")]
    Decimal,
    #[serde(rename = "binario")]
    Binary,
    #[serde(rename = "hexadecimal")]
    Hexadecimal,
}

impl Base {
    /// Every base, in the order the picker presents them.
    pub const ALL: [Base; 3] = [Base::Decimal, Base::Binary, Base::Hexadecimal];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Binary => "binario",
            Self::Hexadecimal => "hexadecimal",
        }
    }

    /// Capitalized label used on picker buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Decimal => "Decimal",
            Self::Binary => "Binario",
            Self::Hexadecimal => "Hexadecimal",
        }
    }

    pub fn radix(&self) -> u32 {
        match self {
            Self::Decimal => 10,
            Self::Binary => 2,
            Self::Hexadecimal => 16,
        }
    }

    /// Resolve a base from its canonical name only.
    ///
    /// This is the strict lookup used for picker callbacks. [`FromStr`]
    /// additionally accepts the aliases a person might type at a prompt.
    pub fn from_name(name: &str) -> Option<Base> {
        Self::ALL.into_iter().find(|base| base.name() == name)
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names none of the supported bases.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown base '{0}'. Choose one of: decimal, binario, hexadecimal")]
pub struct ParseBaseError(pub String);

impl FromStr for Base {
    type Err = ParseBaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        if let Some(base) = Base::from_name(&normalized) {
            return Ok(base);
        }
        match normalized.as_str() {
            "dec" | "10" => Ok(Base::Decimal),
            "bin" | "binary" | "2" => Ok(Base::Binary),
            "hex" | "16" => Ok(Base::Hexadecimal),
            _ => Err(ParseBaseError(s.trim().to_string())),
        }
    }
}
