//! Shared HTTP response helpers.
//!
//! Reads go through [`check_response`]. Writes go through [`expect_status`],
//! which insists on one exact status code.

use reqwest::StatusCode;

use crate::error::ClientError;

/// `action` for creates.
pub const WRITTEN: &str = "written to";
/// `action` for updates.
pub const UPDATED: &str = "updated on";

/// Check a read response for common error conditions.
///
/// - **429 Too Many Requests** → [`ClientError::RateLimited`] with
///   `Retry-After` parsing (falls back to 60 s if absent or unparseable).
/// - **Non-success status** → [`ClientError::Api`] with status code and
///   response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if resp.status() == StatusCode::TOO_MANY_REQUESTS {
        return Err(ClientError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        return Err(ClientError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Accept a write response only if it carries `expected`.
///
/// Anything else becomes [`ClientError::Rejected`] naming the record kind and
/// the attempted action.
pub async fn expect_status(
    resp: reqwest::Response,
    expected: StatusCode,
    action: &'static str,
    kind: &str,
) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status != expected {
        tracing::debug!(%status, %expected, kind, "write rejected");
        return Err(ClientError::Rejected {
            kind: kind.to_string(),
            action,
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    tracing::info!("{kind} {action} Labfolder");
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(60)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn mock_response(status: u16) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body("")
                .unwrap(),
        )
    }

    fn mock_response_with_body(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Retry-After", value)
                .body("")
                .unwrap(),
        )
    }

    #[rstest]
    #[case("120", 120)]
    #[case(" 5 ", 5)]
    #[case("not-a-number", 60)]
    fn parse_retry_after_header_values(#[case] header: &str, #[case] expected: u64) {
        let resp = mock_response_with_retry_after(429, header);
        assert_eq!(parse_retry_after(&resp), expected);
    }

    #[test]
    fn parse_retry_after_missing_header() {
        let resp = mock_response(429);
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[tokio::test]
    async fn check_response_rate_limited_with_header() {
        let resp = mock_response_with_retry_after(429, "30");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn check_response_api_error_keeps_body() {
        let resp = mock_response_with_body(404, "no such entry");
        match check_response(resp).await.unwrap_err() {
            ClientError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "no such entry");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_success() {
        assert!(check_response(mock_response(200)).await.is_ok());
        assert!(check_response(mock_response(204)).await.is_ok());
    }

    #[rstest]
    #[case(201, 201, true)]
    #[case(200, 201, false)]
    #[case(200, 200, true)]
    #[case(201, 200, false)]
    #[case(422, 201, false)]
    #[tokio::test]
    async fn expect_status_requires_exact_code(
        #[case] actual: u16,
        #[case] expected: u16,
        #[case] ok: bool,
    ) {
        let expected = StatusCode::from_u16(expected).unwrap();
        let result = expect_status(mock_response(actual), expected, WRITTEN, "TEXT").await;
        assert_eq!(result.is_ok(), ok);
    }

    #[tokio::test]
    async fn rejected_error_names_kind_and_action() {
        let err = expect_status(
            mock_response_with_body(409, "locked"),
            StatusCode::OK,
            UPDATED,
            "TABLE",
        )
        .await
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "TABLE could not be updated on Labfolder (409): locked"
        );
    }
}
