//! Assertions for the backend's error response contract:
//! status, `{ error, message }` body, `x-error-code` and `x-trace-id` headers.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Mirror of the backend's error body, kept independent of backend types.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct ErrorBodyLike {
    pub error: String,
    pub message: String,
}

/// Assert that response parts carry the expected error contract.
pub fn assert_error_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_status: StatusCode,
    expected_code: &str,
    expected_message: &str,
) -> ErrorBodyLike {
    assert_eq!(status, expected_status);

    let parsed: ErrorBodyLike =
        serde_json::from_slice(body).expect("error body should be {error, message} JSON");
    assert_eq!(parsed.message, expected_message);

    let expected_title = match expected_status.as_u16() {
        400 => "Bad Request",
        401 => "Unauthorized",
        _ => "Internal Server Error",
    };
    assert_eq!(parsed.error, expected_title);

    let code = headers
        .get("x-error-code")
        .expect("x-error-code header should be present")
        .to_str()
        .expect("x-error-code header should be valid UTF-8");
    assert_eq!(code, expected_code);

    let trace_id = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present");
    assert!(!trace_id.is_empty(), "x-trace-id header should not be empty");

    if expected_status == StatusCode::UNAUTHORIZED {
        assert_eq!(
            headers.get("www-authenticate").and_then(|v| v.to_str().ok()),
            Some("Bearer"),
            "401 responses must carry WWW-Authenticate: Bearer"
        );
    }

    parsed
}

/// Assert the error contract on a `ServiceResponse`.
pub async fn assert_error_response(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
    expected_message: &str,
) -> ErrorBodyLike {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_error_parts(
        status,
        &headers,
        &body,
        expected_status,
        expected_code,
        expected_message,
    )
}
