//! Error type definitions.
//!
//! This module defines the fatal error types and the internal probe failure taxonomy.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// The hostname input could not be opened.
///
/// This is the only error that stops a run, and it is raised before any worker
/// starts.
#[derive(Error, Debug)]
#[error("Failed to open input {}: {source}", path.display())]
pub struct InputError {
    /// Path that failed to open
    pub path: PathBuf,
    /// Underlying I/O error
    #[source]
    pub source: std::io::Error,
}

/// Invalid configuration values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Worker count must be at least 1.
    #[error("concurrency must be at least 1")]
    ZeroConcurrency,

    /// Timeout must be non-zero.
    #[error("timeout must be greater than zero")]
    ZeroTimeout,

    /// Scheme prefix must look like `https://`.
    #[error("invalid scheme prefix {0:?} (expected something like \"https://\")")]
    InvalidScheme(String),
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Why a probe got no response.
///
/// Used for logging and statistics only. Every kind is reported to the sink as
/// `Unreachable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    /// The request could not be built (usually a malformed target)
    Builder,
    /// DNS, TCP or TLS failure while connecting
    Connect,
    /// Connect or request timeout
    Timeout,
    /// Failure while sending the request or reading the response head
    Request,
    /// Failure reading the response body
    Body,
    /// Response could not be decoded
    Decode,
    /// Redirect policy error (only with redirect following enabled)
    Redirect,
    /// Anything else
    Other,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureKind {
    /// Human-readable label used in logs and the summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Builder => "request builder error",
            FailureKind::Connect => "connect error",
            FailureKind::Timeout => "timeout",
            FailureKind::Request => "request error",
            FailureKind::Body => "body error",
            FailureKind::Decode => "decode error",
            FailureKind::Redirect => "redirect error",
            FailureKind::Other => "other error",
        }
    }
}
