//! Result formatting.
//!
//! Pure functions from a `ProbeResult` to one output line. Color is decided by the
//! caller per call; nothing here holds styling state.

use colored::Colorize;

use crate::config::OutputFormat;
use crate::probe::{Outcome, ProbeResult};

/// Renders one result as a single line (no trailing newline).
pub fn format_result(result: &ProbeResult, format: OutputFormat, color: bool) -> String {
    match format {
        OutputFormat::Json => {
            serde_json::to_string(result).unwrap_or_else(|_| "{}".into())
        }
        OutputFormat::Text if color => format_text_colored(result),
        OutputFormat::Text => format_text(result),
    }
}

fn format_text(result: &ProbeResult) -> String {
    let target = result.target.as_str();
    match &result.outcome {
        Outcome::Redirect { status, location } => format!("{target} : {status} -> {location}"),
        Outcome::Unclassified { status } => format!("{target} -> {status} (unclassified)"),
        Outcome::Unreachable => format!("{target} -> unreachable"),
        Outcome::Success { status }
        | Outcome::ClientError { status }
        | Outcome::ServerError { status } => format!("{target} -> {status}"),
    }
}

fn format_text_colored(result: &ProbeResult) -> String {
    let target = result.target.as_str();
    match &result.outcome {
        Outcome::Success { .. } => format_text(result).green().bold().to_string(),
        Outcome::Redirect { status, location } => format!(
            "{} : {} -> {}",
            target.blue().bold(),
            status.to_string().blue().bold(),
            location.yellow().bold()
        ),
        Outcome::ClientError { .. } => format_text(result).red().bold().to_string(),
        Outcome::ServerError { .. } => format_text(result).magenta().bold().to_string(),
        Outcome::Unclassified { .. } => format_text(result).white().to_string(),
        Outcome::Unreachable => format!(
            "{} -> {}",
            target.bright_white().bold(),
            "unreachable".bright_white().bold()
        ),
    }
}
