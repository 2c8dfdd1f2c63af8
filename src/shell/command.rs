//! Parsing REPL input lines into commands.

use crate::core::Base;
use crate::dispatch::EventKind;
use thiserror::Error;

/// One line of REPL input, interpreted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    /// Forward to the dispatcher as the current user.
    Event(EventKind),
    /// Act as a different user from now on.
    SwitchUser(String),
    Quit,
    /// Blank line.
    Empty,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Try /help")]
    UnknownCommand(String),

    #[error("{command} needs an argument: {usage}")]
    MissingArgument {
        command: &'static str,
        usage: &'static str,
    },
}

impl CommandError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownCommand(_) => "unknown_command",
            Self::MissingArgument { .. } => "missing_argument",
        }
    }
}

/// Interpret a line of input.
///
/// Lines starting with `/` are commands; a `@name` suffix on the command word
/// is ignored, as chat platforms append it in group chats. Any other
/// non-blank line is treated as the argument of `/calc`.
///
/// # Example
///
/// ```rust
/// use basecalc::dispatch::EventKind;
/// use basecalc::shell::{parse_line, ShellCommand};
///
/// assert_eq!(
///     parse_line("/calc@basecalc_bot  A + B "),
///     Ok(ShellCommand::Event(EventKind::Calculate("A + B".to_string())))
/// );
/// assert_eq!(
///     parse_line("/base hex"),
///     Ok(ShellCommand::Event(EventKind::SelectBase("hexadecimal".to_string())))
/// );
/// ```
pub fn parse_line(line: &str) -> Result<ShellCommand, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(ShellCommand::Empty);
    }

    let Some(command) = line.strip_prefix('/') else {
        return Ok(ShellCommand::Event(EventKind::Calculate(line.to_string())));
    };

    let (word, args) = command
        .split_once(char::is_whitespace)
        .map_or((command, ""), |(word, args)| (word, args.trim()));
    let word = word.split('@').next().unwrap_or(word);

    match word {
        "start" => Ok(ShellCommand::Event(EventKind::Start)),
        "help" => Ok(ShellCommand::Event(EventKind::Help)),
        "calc" => Ok(ShellCommand::Event(EventKind::Calculate(args.to_string()))),
        "base" => {
            if args.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "/base",
                    usage: "/base decimal|binario|hexadecimal",
                });
            }
            // Aliases resolve to the canonical name; anything else is passed
            // through so the dispatcher can reject it.
            let name = args
                .parse::<Base>()
                .map_or_else(|_| args.to_string(), |base| base.name().to_string());
            Ok(ShellCommand::Event(EventKind::SelectBase(name)))
        }
        "user" => {
            if args.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "/user",
                    usage: "/user <id>",
                });
            }
            Ok(ShellCommand::SwitchUser(args.to_string()))
        }
        "quit" | "exit" => Ok(ShellCommand::Quit),
        other => Err(CommandError::UnknownCommand(format!("/{other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(kind: EventKind) -> Result<ShellCommand, CommandError> {
        Ok(ShellCommand::Event(kind))
    }

    #[test]
    fn blank_lines_are_empty() {
        assert_eq!(parse_line(""), Ok(ShellCommand::Empty));
        assert_eq!(parse_line("   \t"), Ok(ShellCommand::Empty));
    }

    #[test]
    fn calc_strips_command_and_whitespace() {
        assert_eq!(
            parse_line("/calc 10 + 5"),
            event(EventKind::Calculate("10 + 5".to_string()))
        );
        assert_eq!(parse_line("/calc"), event(EventKind::Calculate(String::new())));
    }

    #[test]
    fn bare_text_is_a_calculation() {
        assert_eq!(
            parse_line("1010 + 1"),
            event(EventKind::Calculate("1010 + 1".to_string()))
        );
    }

    #[test]
    fn base_resolves_aliases() {
        assert_eq!(
            parse_line("/base bin"),
            event(EventKind::SelectBase("binario".to_string()))
        );
        assert_eq!(
            parse_line("/base decimal"),
            event(EventKind::SelectBase("decimal".to_string()))
        );
    }

    #[test]
    fn base_passes_unknown_names_through() {
        assert_eq!(
            parse_line("/base octal"),
            event(EventKind::SelectBase("octal".to_string()))
        );
    }

    #[test]
    fn base_and_user_need_arguments() {
        assert!(matches!(
            parse_line("/base"),
            Err(CommandError::MissingArgument { command: "/base", .. })
        ));
        assert!(matches!(
            parse_line("/user  "),
            Err(CommandError::MissingArgument { command: "/user", .. })
        ));
    }

    #[test]
    fn user_switches() {
        assert_eq!(parse_line("/user bob"), Ok(ShellCommand::SwitchUser("bob".to_string())));
    }

    #[test]
    fn static_commands() {
        assert_eq!(parse_line("/start"), event(EventKind::Start));
        assert_eq!(parse_line("/help@bot"), event(EventKind::Help));
        assert_eq!(parse_line("/quit"), Ok(ShellCommand::Quit));
        assert_eq!(parse_line("/exit"), Ok(ShellCommand::Quit));
    }

    #[test]
    fn unknown_commands_are_errors() {
        assert_eq!(
            parse_line("/frobnicate now"),
            Err(CommandError::UnknownCommand("/frobnicate".to_string()))
        );
    }
}
