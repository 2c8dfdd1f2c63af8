//! Outbound replies handed to a transport.

use crate::core::{Base, CalcError, CalculationResult};
use serde::{Deserialize, Serialize};

pub const WELCOME: &str = "Welcome to Base Calculator! Please select a base:";

pub const HELP: &str = "\
Welcome to Base Calculator!

This calculator evaluates expressions in different numeral bases.

How to use it:
1. Send /start to choose a numeral base.
2. Pick Decimal, Binario or Hexadecimal.
3. Send /calc followed by an expression in the selected base.

Examples:
/calc 10 + 5        addition in decimal
/calc 1010 + 1101   addition in binario
/calc A + B         addition in hexadecimal

Have fun calculating in different bases!";

/// A message for the user.
///
/// Transports decide how to present these; [`Reply::text`] gives the plain
/// text rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Reply {
    Text { text: String },
    BasePicker { prompt: String, choices: Vec<Base> },
    BaseSelected { base: Base },
    Result { base: Base, value: String },
    Error { kind: String, message: String },
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Reply::Text { text: text.into() }
    }

    pub fn picker() -> Self {
        Reply::BasePicker {
            prompt: WELCOME.to_string(),
            choices: Base::ALL.to_vec(),
        }
    }

    pub fn error(err: &CalcError) -> Self {
        Reply::Error {
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }

    /// One labelled reply per base: decimal, binary, then hexadecimal.
    pub fn results(result: &CalculationResult) -> Vec<Reply> {
        vec![
            Reply::Result {
                base: Base::Decimal,
                value: result.decimal.clone(),
            },
            Reply::Result {
                base: Base::Binary,
                value: result.binary.clone(),
            },
            Reply::Result {
                base: Base::Hexadecimal,
                value: result.hexadecimal.clone(),
            },
        ]
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error { .. })
    }

    /// Plain text rendering.
    pub fn render(&self) -> String {
        match self {
            Reply::Text { text } => text.clone(),
            Reply::BasePicker { prompt, choices } => {
                let buttons = choices
                    .iter()
                    .map(|base| format!("[{}]", base.label()))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("{prompt}\n{buttons}")
            }
            Reply::BaseSelected { base } => format!("Selected base: {base}"),
            Reply::Result { base, value } => format!("{} {value}", result_label(*base)),
            Reply::Error { message, .. } => format!("Error: {message}"),
        }
    }
}

fn result_label(base: Base) -> &'static str {
    match base {
        Base::Decimal => "\u{1f522} Result in decimal:",
        Base::Binary => "0\u{fe0f}\u{20e3} Result in binary:",
        Base::Hexadecimal => "\u{1f520} Result in hexadecimal:",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    #[test]
    fn results_are_labelled_per_base() {
        let result = evaluate(Base::Decimal, "10 + 5").unwrap();
        let rendered: Vec<String> = Reply::results(&result).iter().map(Reply::render).collect();
        assert_eq!(
            rendered,
            vec![
                "\u{1f522} Result in decimal: 15",
                "0\u{fe0f}\u{20e3} Result in binary: 1111",
                "\u{1f520} Result in hexadecimal: F",
            ]
        );
    }

    #[test]
    fn picker_lists_all_bases() {
        let rendered = Reply::picker().render();
        assert!(rendered.starts_with(WELCOME));
        assert!(rendered.ends_with("[Decimal] [Binario] [Hexadecimal]"));
    }

    #[test]
    fn error_reply_carries_kind_and_message() {
        let reply = Reply::error(&CalcError::DivisionByZero);
        assert!(reply.is_error());
        assert_eq!(reply.render(), "Error: Division by zero is not allowed");
    }

    #[test]
    fn confirmation_names_the_base() {
        let reply = Reply::BaseSelected {
            base: Base::Hexadecimal,
        };
        assert_eq!(reply.render(), "Selected base: hexadecimal");
    }

    #[test]
    fn replies_serialize_with_type_tag() {
        let json = serde_json::to_string(&Reply::Result {
            base: Base::Binary,
            value: "1111".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"result","base":"binario","value":"1111"}"#);
    }
}
