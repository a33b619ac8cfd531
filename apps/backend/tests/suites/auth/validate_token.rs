use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::error_body::assert_error_response;
use backend_test_support::unique_helpers::unique_subject;
use kilo_backend::state::builder::build_state;
use kilo_backend::state::security_config::SecurityConfig;
use serde_json::{json, Value};

use crate::support::auth::{mint_expired_token, mint_test_token};
use crate::support::{create_test_app, test_security};

const PATH: &str = "/auth/validate-token";

async fn post_json(body: Value) -> actix_web::dev::ServiceResponse {
    let state = build_state().with_security(test_security()).build();
    let app = create_test_app(state).with_prod_routes().build().await;
    let req = test::TestRequest::post().uri(PATH).set_json(body).to_request();
    test::call_service(&app, req).await
}

#[actix_web::test]
async fn test_valid_token_reports_claims() {
    let sub = unique_subject();
    let token = mint_test_token(&sub, "staging", &test_security());

    let resp = post_json(json!({ "token": token })).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["valid"], true);
    assert_eq!(body["kiloUserId"], sub.as_str());
    assert_eq!(body["env"], "staging");
    assert_eq!(body["version"], 3);
    let iat = body["iat"].as_i64().unwrap();
    let exp = body["exp"].as_i64().unwrap();
    assert_eq!(exp - iat, 3600);
}

#[actix_web::test]
async fn test_empty_body_requires_token() {
    let resp = post_json(json!({})).await;
    assert_error_response(
        resp,
        StatusCode::BAD_REQUEST,
        "TOKEN_REQUIRED",
        "Token is required.",
    )
    .await;
}

#[actix_web::test]
async fn test_null_and_empty_token_require_token() {
    for body in [json!({ "token": null }), json!({ "token": "" })] {
        let resp = post_json(body).await;
        assert_error_response(
            resp,
            StatusCode::BAD_REQUEST,
            "TOKEN_REQUIRED",
            "Token is required.",
        )
        .await;
    }
}

#[actix_web::test]
async fn test_garbage_token_is_invalid() {
    let resp = post_json(json!({ "token": "abc.def" })).await;
    assert_error_response(
        resp,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_INVALID_TOKEN",
        "Invalid token.",
    )
    .await;
}

#[actix_web::test]
async fn test_foreign_signature_is_invalid() {
    let token = mint_test_token(
        &unique_subject(),
        "production",
        &SecurityConfig::new("not-our-secret".as_bytes()),
    );

    let resp = post_json(json!({ "token": token })).await;
    assert_error_response(
        resp,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_INVALID_TOKEN",
        "Invalid token.",
    )
    .await;
}

#[actix_web::test]
async fn test_expired_token_is_reported() {
    let token = mint_expired_token(&unique_subject(), "production", &test_security());

    let resp = post_json(json!({ "token": token })).await;
    assert_error_response(
        resp,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_EXPIRED_TOKEN",
        "Token expired.",
    )
    .await;
}

#[actix_web::test]
async fn test_invalid_json_body() {
    let state = build_state().with_security(test_security()).build();
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri(PATH)
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"token\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    let body = assert_error_response(
        resp,
        StatusCode::BAD_REQUEST,
        "INVALID_JSON",
        "Invalid JSON: unexpected end of input.",
    )
    .await;
    assert_eq!(body.error, "Bad Request");
}

#[actix_web::test]
async fn test_non_string_token_is_invalid() {
    for body in [json!({ "token": 123 }), json!({ "token": true })] {
        let resp = post_json(body).await;
        assert_error_response(
            resp,
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED_INVALID_TOKEN",
            "Invalid token.",
        )
        .await;
    }
}

#[actix_web::test]
async fn test_falsy_token_requires_token() {
    for body in [json!({ "token": false }), json!({ "token": 0 })] {
        let resp = post_json(body).await;
        assert_error_response(
            resp,
            StatusCode::BAD_REQUEST,
            "TOKEN_REQUIRED",
            "Token is required.",
        )
        .await;
    }
}
