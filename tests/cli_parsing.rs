//! Tests for command-line parsing.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use host_status::{Config, Opt, OutputFormat};

#[test]
fn test_defaults() {
    let opt = Opt::try_parse_from(["host_status", "-f", "hosts.txt"]).expect("Should parse");
    assert_eq!(opt.file, PathBuf::from("hosts.txt"));
    assert_eq!(opt.concurrency, 25);
    assert_eq!(opt.timeout_ms, 10_000);
    assert!(!opt.verify_tls);
    assert!(!opt.follow_redirects);
    assert_eq!(opt.scheme, "https://");
    assert_eq!(opt.output, OutputFormat::Text);

    let config = Config::from(opt);
    assert!(config.probe.skip_tls_verification);
    assert!(config.validate().is_ok());
}

#[test]
fn test_short_flags() {
    let opt = Opt::try_parse_from(["host_status", "-f", "-", "-t", "2000", "-c", "2"])
        .expect("Should parse");
    let config = Config::from(opt);
    assert_eq!(config.file, PathBuf::from("-"));
    assert_eq!(config.probe.timeout, Duration::from_secs(2));
    assert_eq!(config.concurrency, 2);
}

#[test]
fn test_long_flags() {
    let opt = Opt::try_parse_from([
        "host_status",
        "--file",
        "hosts.txt",
        "--verify-tls",
        "--follow-redirects",
        "--scheme",
        "http://",
        "--output",
        "json",
        "--no-color",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .expect("Should parse");
    let config = Config::from(opt);
    assert!(!config.probe.skip_tls_verification);
    assert!(config.probe.follow_redirects);
    assert_eq!(config.probe.scheme, "http://");
    assert_eq!(config.output, OutputFormat::Json);
    assert!(!config.color);
    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::Debug
    );
}

#[test]
fn test_file_is_required() {
    assert!(Opt::try_parse_from(["host_status"]).is_err());
}

#[test]
fn test_zero_concurrency_parses_but_fails_validation() {
    let opt = Opt::try_parse_from(["host_status", "-f", "hosts.txt", "-c", "0"])
        .expect("Should parse");
    assert!(Config::from(opt).validate().is_err());
}

#[test]
fn test_rejects_unknown_output_format() {
    assert!(Opt::try_parse_from(["host_status", "-f", "h.txt", "--output", "xml"]).is_err());
}
