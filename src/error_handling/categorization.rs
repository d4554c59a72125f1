//! Probe failure categorization.

use super::types::FailureKind;

/// Categorizes a `reqwest::Error` into a `FailureKind`.
///
/// Timeouts are checked first: reqwest reports a connect timeout as both a
/// connect error and a timeout, and the timeout is the more useful label.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FailureKind {
    if error.is_timeout() {
        FailureKind::Timeout
    } else if error.is_builder() {
        FailureKind::Builder
    } else if error.is_connect() {
        FailureKind::Connect
    } else if error.is_redirect() {
        FailureKind::Redirect
    } else if error.is_request() {
        FailureKind::Request
    } else if error.is_body() {
        FailureKind::Body
    } else if error.is_decode() {
        FailureKind::Decode
    } else {
        FailureKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_categorize_builder_error() {
        let client = reqwest::Client::new();
        let err = client
            .head("https://exa mple.com/")
            .send()
            .await
            .expect_err("URL with a space must not build");
        assert_eq!(categorize_reqwest_error(&err), FailureKind::Builder);
    }

    #[tokio::test]
    async fn test_categorize_connection_refused() {
        // Port 1 on loopback is closed on any sane test machine
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .expect("Failed to build client");
        let err = client
            .head("http://127.0.0.1:1/")
            .send()
            .await
            .expect_err("Nothing listens on port 1");
        assert_eq!(categorize_reqwest_error(&err), FailureKind::Connect);
    }

    #[tokio::test]
    async fn test_categorize_timeout() {
        // Accept the connection but never answer
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let _holder = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(200))
            .build()
            .expect("Failed to build client");
        let err = client
            .head(format!("http://{addr}/"))
            .send()
            .await
            .expect_err("Silent server must time out");
        assert_eq!(categorize_reqwest_error(&err), FailureKind::Timeout);
    }
}
