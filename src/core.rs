use std::io::Write;

use clap::Parser;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::cli::{has_help_flag, parse_flags, Args, CommandName};
use crate::client::KapsoClient;
use crate::commands::{self, usage_for};
use crate::config::{Config, REQUIRED_ENV};
use crate::context::Environment;
use crate::errors::{KapsoError, Result};
use crate::output::{write_json, ErrorEnvelope, HelpEnvelope};
use crate::status::ExitStatus;

/// Main entry point for the CLI.
///
/// Prints exactly one document: the success or help envelope on `stdout`, or
/// the error envelope on `stderr`.
pub fn run<O: Write, E: Write>(
    args: Vec<String>,
    env: &Environment,
    stdout: &mut O,
    stderr: &mut E,
) -> ExitStatus {
    let tail = args.get(1..).unwrap_or(&[]);

    if has_help_flag(tail) {
        let command = tail.first().and_then(|name| CommandName::from_name(name));
        let help = HelpEnvelope::new(usage_for(command), REQUIRED_ENV);
        return match write_json(stdout, &help) {
            Ok(()) => ExitStatus::Success,
            Err(e) => handle_error(e, stderr),
        };
    }

    if matches!(tail.first().map(String::as_str), Some("--version" | "-V")) {
        return match writeln!(stdout, "{} {}", env.program_name, env!("CARGO_PKG_VERSION")) {
            Ok(()) => ExitStatus::Success,
            Err(e) => handle_error(e.into(), stderr),
        };
    }

    match program(args, env).and_then(|doc| write_json(stdout, &doc)) {
        Ok(()) => ExitStatus::Success,
        Err(e) => handle_error(e, stderr),
    }
}

/// Parse, validate, resolve configuration, then run the command.
///
/// Usage errors are raised before configuration is read and before any
/// request is made.
pub fn program(args: Vec<String>, env: &Environment) -> Result<JsonValue> {
    let parsed = parse_args(&args, &env.program_name)?;
    let flags = parse_flags(&parsed.rest);
    let plan = commands::plan(parsed.command, &flags)?;
    debug!(command = %parsed.command, ?plan, "Command planned");

    let config = Config::from_env(&env.vars)?;
    let client = KapsoClient::new(config)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(commands::execute(&plan, &client))
}

fn parse_args(args: &[String], program_name: &str) -> Result<Args> {
    Args::try_parse_from(args).map_err(|e| {
        let rendered = e.to_string();
        let first_line = rendered
            .lines()
            .next()
            .unwrap_or_default()
            .trim_start_matches("error: ")
            .trim();
        let message = match args.get(1) {
            None => "Missing command".to_string(),
            Some(_) if first_line.is_empty() => "Invalid arguments".to_string(),
            Some(_) => first_line.to_string(),
        };
        KapsoError::usage(format!("{} (run `{} --help` for usage)", message, program_name))
    })
}

fn handle_error<E: Write>(error: KapsoError, stderr: &mut E) -> ExitStatus {
    debug!(error = ?error, "Command failed");

    let envelope = ErrorEnvelope::from(&error);
    if write_json(stderr, &envelope).is_err() {
        // stderr is gone; nothing left to report to
        debug!("Failed to write error envelope");
    }

    ExitStatus::Error
}
