//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_CONCURRENCY, DEFAULT_SCHEME, DEFAULT_TIMEOUT_MS, DEFAULT_USER_AGENT,
};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How probe results are rendered on stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per result
    Text,
    /// One JSON object per line
    Json,
}

/// Settings applied to every probe.
///
/// Built once per run and shared read-only by all workers.
///
/// # Security
///
/// `skip_tls_verification` defaults to `true`: certificates that are self-signed,
/// expired or issued for another name are accepted. Probing large host lists is
/// about reachability, not trust, but the result of a probe against a host with a
/// bad certificate must not be read as "this host is safe to talk to". Set it to
/// `false` (`--verify-tls`) to make certificate failures classify as `Unreachable`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Connect timeout and overall request timeout
    pub timeout: Duration,
    /// Accept any server certificate
    pub skip_tls_verification: bool,
    /// Follow redirects instead of reporting the first response
    pub follow_redirects: bool,
    /// Prefix joined to each target to form the request URL
    pub scheme: String,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            skip_tls_verification: true,
            follow_redirects: false,
            scheme: DEFAULT_SCHEME.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ProbeConfig {
    /// Builds the request URL for a target.
    ///
    /// No validation happens here; malformed targets fail at the network layer.
    pub fn url_for(&self, target: &str) -> String {
        format!("{}{}", self.scheme, target)
    }
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use host_status::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("hosts.txt"),
///     concurrency: 50,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read hostnames from (`-` for stdin)
    pub file: PathBuf,

    /// Number of concurrent workers
    pub concurrency: usize,

    /// Settings shared by every probe
    pub probe: ProbeConfig,

    /// Result rendering
    pub output: OutputFormat,

    /// Colorize text output
    pub color: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("hosts.txt"),
            concurrency: DEFAULT_CONCURRENCY,
            probe: ProbeConfig::default(),
            output: OutputFormat::Text,
            color: true,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks option values before any input is opened.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for a zero worker count, a zero timeout, or a scheme
    /// that does not end in `://`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        if self.probe.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        let scheme = &self.probe.scheme;
        if !scheme.ends_with("://") || scheme.len() <= "://".len() {
            return Err(ConfigError::InvalidScheme(scheme.clone()));
        }
        Ok(())
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// host_status -f hosts.txt
///
/// # Two-second timeout, 50 workers
/// host_status -f hosts.txt -t 2000 -c 50
///
/// # Read from stdin, emit JSON lines
/// cat hosts.txt | host_status -f - --output json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "host_status",
    version,
    about = "Probes hostnames over HTTPS and reports their status classification."
)]
pub struct Opt {
    /// File with one hostname per line (`-` reads stdin)
    #[arg(short = 'f', long = "file", value_parser)]
    pub file: PathBuf,

    /// Per-request timeout in milliseconds
    #[arg(short = 't', long = "timeout-ms", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Number of concurrent workers
    #[arg(short = 'c', long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Verify TLS certificates (verification is skipped by default)
    #[arg(long)]
    pub verify_tls: bool,

    /// Follow redirects instead of reporting them
    #[arg(long)]
    pub follow_redirects: bool,

    /// Scheme prefix for request URLs
    #[arg(long, default_value = DEFAULT_SCHEME)]
    pub scheme: String,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Result output format: text|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Disable colored text output
    #[arg(long)]
    pub no_color: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            file: opt.file,
            concurrency: opt.concurrency,
            probe: ProbeConfig {
                timeout: Duration::from_millis(opt.timeout_ms),
                skip_tls_verification: !opt.verify_tls,
                follow_redirects: opt.follow_redirects,
                scheme: opt.scheme,
                user_agent: opt.user_agent,
            },
            output: opt.output,
            color: !opt.no_color,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
