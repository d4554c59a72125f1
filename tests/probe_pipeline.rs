//! End-to-end tests for the probing pipeline.
//!
//! These drive `run_probe` through the library API against local `httptest`
//! servers, so they need no internet access. Tests that do are marked `#[ignore]`.
//! To run them: `cargo test -- --ignored`

use std::io::Write;
use std::time::Duration;

use httptest::{matchers::*, responders::*, Expectation, Server};
use host_status::{
    run_probe, Classification, CollectingSink, Config, InputError, Outcome, ProbeConfig,
};
use tempfile::NamedTempFile;
use tokio_util::sync::CancellationToken;

fn hosts_file(lines: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{line}").expect("Failed to write temp file");
    }
    file
}

fn http_config(file: &NamedTempFile, concurrency: usize) -> Config {
    Config {
        file: file.path().to_path_buf(),
        concurrency,
        probe: ProbeConfig {
            timeout: Duration::from_secs(2),
            scheme: "http://".to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[tokio::test]
async fn test_duplicates_and_unreachable_port() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/"))
            .times(2)
            .respond_with(status_code(200)),
    );
    let addr = server.addr().to_string();
    let file = hosts_file(&[addr.clone(), addr.clone(), "localhost:1".to_string()]);

    let sink = CollectingSink::new();
    let report = run_probe(http_config(&file, 2), sink.clone(), CancellationToken::new())
        .await
        .expect("run completes");

    let results = sink.results();
    assert_eq!(results.len(), 3);
    assert_eq!(report.total, 3);
    assert_eq!(report.targets, 3);
    assert_eq!(report.count(Classification::Success), 2);
    assert_eq!(report.count(Classification::Unreachable), 1);

    let unreachable: Vec<_> = results
        .iter()
        .filter(|r| r.classification() == Classification::Unreachable)
        .collect();
    assert_eq!(unreachable[0].target.as_str(), "localhost:1");
    assert_eq!(unreachable[0].status_code(), None);
}

#[tokio::test]
async fn test_mixed_statuses_are_all_reported() {
    let ok = Server::run();
    ok.expect(Expectation::matching(request::method("HEAD")).respond_with(status_code(200)));
    let moved = Server::run();
    moved.expect(
        Expectation::matching(request::method("HEAD"))
            .respond_with(status_code(301).append_header("Location", "https://other.example")),
    );
    let missing = Server::run();
    missing.expect(Expectation::matching(request::method("HEAD")).respond_with(status_code(404)));
    let broken = Server::run();
    broken.expect(Expectation::matching(request::method("HEAD")).respond_with(status_code(502)));

    let file = hosts_file(&[
        "# local fixtures".to_string(),
        ok.addr().to_string(),
        String::new(),
        moved.addr().to_string(),
        missing.addr().to_string(),
        broken.addr().to_string(),
    ]);

    let sink = CollectingSink::new();
    let report = run_probe(http_config(&file, 4), sink.clone(), CancellationToken::new())
        .await
        .expect("run completes");

    assert_eq!(report.total, 4);
    assert_eq!(report.count(Classification::Success), 1);
    assert_eq!(report.count(Classification::Redirect), 1);
    assert_eq!(report.count(Classification::ClientError), 1);
    assert_eq!(report.count(Classification::ServerError), 1);

    let redirect = sink
        .results()
        .into_iter()
        .find(|r| r.classification() == Classification::Redirect)
        .expect("redirect result");
    assert_eq!(
        redirect.outcome,
        Outcome::Redirect {
            status: 301,
            location: "https://other.example".to_string()
        }
    );
}

#[tokio::test]
async fn test_missing_input_is_input_error() {
    let config = Config {
        file: "/no/such/hosts.txt".into(),
        ..Default::default()
    };
    let sink = CollectingSink::new();
    let err = run_probe(config, sink.clone(), CancellationToken::new())
        .await
        .expect_err("missing input must fail");

    assert!(err.downcast_ref::<InputError>().is_some(), "got: {err:#}");
    assert!(sink.results().is_empty());
}

#[tokio::test]
async fn test_invalid_concurrency_fails_before_reading_input() {
    let file = hosts_file(&["example.com".to_string()]);
    let config = Config {
        concurrency: 0,
        ..http_config(&file, 1)
    };
    let err = run_probe(config, CollectingSink::new(), CancellationToken::new())
        .await
        .expect_err("zero workers must fail");
    assert!(format!("{err:#}").contains("concurrency"));
}

#[tokio::test]
async fn test_empty_input_completes_without_results() {
    let file = hosts_file(&[]);
    let sink = CollectingSink::new();
    let report = run_probe(http_config(&file, 3), sink.clone(), CancellationToken::new())
        .await
        .expect("run completes");
    assert_eq!(report.total, 0);
    assert!(!report.input_truncated);
    assert!(!report.cancelled);
}

#[tokio::test]
async fn test_cancelled_run_still_returns() {
    // Accept connections but never answer, so probes hang until the timeout
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get addr").to_string();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let file = hosts_file(&vec![addr; 20]);
    let mut config = http_config(&file, 2);
    config.probe.timeout = Duration::from_secs(30);

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        trigger.cancel();
    });

    let report = tokio::time::timeout(
        Duration::from_secs(10),
        run_probe(config, CollectingSink::new(), cancel),
    )
    .await
    .expect("cancellation must end the run")
    .expect("run completes");

    assert!(report.cancelled);
    assert!(report.total < 20);
}

#[tokio::test]
#[ignore] // Requires internet access
async fn test_public_host_over_https() {
    let file = hosts_file(&[
        "example.com".to_string(),
        "EXAMPLE.com".to_string(),
        "localhost:1".to_string(),
    ]);
    let config = Config {
        file: file.path().to_path_buf(),
        concurrency: 2,
        probe: ProbeConfig {
            timeout: Duration::from_secs(2),
            ..Default::default()
        },
        ..Default::default()
    };

    let sink = CollectingSink::new();
    run_probe(config, sink.clone(), CancellationToken::new())
        .await
        .expect("run completes");

    let results = sink.results();
    let example: Vec<_> = results
        .iter()
        .filter(|r| r.target.as_str() == "example.com")
        .map(|r| r.classification())
        .collect();
    assert_eq!(example.len(), 2);
    assert_eq!(example[0], example[1]);
    assert!(results
        .iter()
        .any(|r| r.target.as_str() == "localhost:1"
            && r.classification() == Classification::Unreachable));
}
