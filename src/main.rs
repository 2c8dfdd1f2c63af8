//! Basecalc - Entry Point

use basecalc::config::{self, CliOverrides, ConfigError};
use basecalc::core::{Base, ParseBaseError};
use basecalc::dispatch::{Dispatcher, Event};
use basecalc::logging::{self, LoggingError};
use basecalc::session::{SessionStore, UserId};
use basecalc::shell::{JsonSink, Repl, ReplError, ReplySink, SinkError, TextSink};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::info;

/// Base calculator - evaluate expressions in decimal, binary or hexadecimal
#[derive(Parser, Debug)]
#[command(name = "basecalc")]
#[command(version)]
#[command(about = "Evaluate two-operand expressions in a selected numeral base")]
pub struct Args {
    /// Select a base before reading input (decimal, binario, hexadecimal, or an alias)
    #[arg(short, long, value_parser = parse_base)]
    pub base: Option<Base>,

    /// Evaluate one expression and exit instead of starting the REPL
    #[arg(short, long, value_name = "EXPR", allow_hyphen_values = true)]
    pub eval: Option<String>,

    /// User identifier to act as
    #[arg(short, long)]
    pub user: Option<String>,

    /// Emit replies as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Path to the log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_base(value: &str) -> Result<Base, ParseBaseError> {
    value.parse()
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error(transparent)]
    Repl(#[from] ReplError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("basecalc: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode, AppError> {
    let config = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file);
        let with_env = config::apply_env_overrides(merged);
        config::apply_cli_overrides(
            with_env,
            CliOverrides {
                log_file_path: args.log_file.clone(),
                json: args.json.then_some(true),
                user: args.user.clone(),
            },
        )
    };

    logging::init(&config.log_file_path, &config.log_filter)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let store = SessionStore::new();
    let dispatcher = Dispatcher::new(&store);
    let user = UserId::new(config.user.clone());

    let mut sink: Box<dyn ReplySink> = if config.json {
        Box::new(JsonSink::new(io::stdout()))
    } else {
        Box::new(TextSink::new(io::stdout()))
    };

    if let Some(base) = args.base {
        let replies = dispatcher.handle(&Event::select_base(user.clone(), base.name()));
        // The confirmation is only interesting in one-shot JSON output.
        if args.eval.is_some() && config.json {
            for reply in &replies {
                sink.send(reply)?;
            }
        }
    }

    if let Some(expression) = args.eval {
        let succeeded = eval_once(dispatcher, sink.as_mut(), user, expression)?;
        return Ok(if succeeded {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let stdin = io::stdin();
    let prompt = if stdin.is_terminal() {
        config.prompt.as_str()
    } else {
        ""
    };

    let mut repl = Repl::new(dispatcher, sink, user);
    repl.run(stdin.lock(), prompt, io::stderr())?;

    Ok(ExitCode::SUCCESS)
}

/// Evaluate a single expression, writing its replies to `sink`.
///
/// Returns `false` when the calculation was rejected.
fn eval_once(
    dispatcher: Dispatcher<'_>,
    sink: &mut dyn ReplySink,
    user: UserId,
    expression: String,
) -> Result<bool, SinkError> {
    let replies = dispatcher.handle(&Event::calculate(user, expression));
    for reply in &replies {
        sink.send(reply)?;
    }
    Ok(!replies.iter().any(|reply| reply.is_error()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_does_not_error() {
        let err = Args::try_parse_from(["basecalc", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn no_args_defaults() {
        let args = Args::parse_from(["basecalc"]);
        assert_eq!(args.base, None);
        assert_eq!(args.eval, None);
        assert_eq!(args.user, None);
        assert!(!args.json);
        assert_eq!(args.config, None);
    }

    #[test]
    fn base_accepts_aliases() {
        let args = Args::parse_from(["basecalc", "--base", "hex", "--eval", "A + B"]);
        assert_eq!(args.base, Some(Base::Hexadecimal));
        assert_eq!(args.eval.as_deref(), Some("A + B"));
    }

    #[test]
    fn eval_accepts_leading_negative_operand() {
        let args =
            Args::try_parse_from(["basecalc", "--base", "decimal", "--eval", "-3.5 * 2"]).unwrap();
        assert_eq!(args.base, Some(Base::Decimal));
        assert_eq!(args.eval.as_deref(), Some("-3.5 * 2"));
    }

    fn eval_with_base(base: Base, expression: &str) -> (bool, Vec<serde_json::Value>) {
        let store = SessionStore::new();
        let dispatcher = Dispatcher::new(&store);
        let user = UserId::from("cli");
        store.select_base(&user, base);

        let mut sink = JsonSink::new(Vec::new());
        let succeeded = eval_once(dispatcher, &mut sink, user, expression.to_string()).unwrap();
        let output = String::from_utf8(sink.into_inner()).unwrap();
        let replies = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        (succeeded, replies)
    }

    #[test]
    fn eval_once_reports_all_three_bases() {
        let (succeeded, replies) = eval_with_base(Base::Decimal, "-3.5 * 2");
        assert!(succeeded);
        assert_eq!(replies.len(), 3);
        assert_eq!(replies[0]["value"], "-7");
        assert_eq!(replies[1]["value"], "111");
        assert_eq!(replies[2]["value"], "-7");
    }

    #[test]
    fn eval_once_fails_on_rejected_calculation() {
        let (succeeded, replies) = eval_with_base(Base::Decimal, "1 / 0");
        assert!(!succeeded);
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0]["kind"], "division_by_zero");
    }

    #[test]
    fn eval_once_without_base_fails() {
        let store = SessionStore::new();
        let mut sink = JsonSink::new(Vec::new());
        let succeeded =
            eval_once(Dispatcher::new(&store), &mut sink, UserId::from("cli"), "1 + 1".into())
                .unwrap();
        assert!(!succeeded);
    }

    #[test]
    fn base_rejects_unknown_names() {
        let err = Args::try_parse_from(["basecalc", "-b", "octal"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
