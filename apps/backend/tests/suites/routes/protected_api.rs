use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::error_body::assert_error_response;
use backend_test_support::unique_helpers::unique_subject;
use kilo_backend::state::builder::build_state;
use serde_json::{json, Value};

use crate::support::auth::{bearer_header, mint_test_token};
use crate::support::{create_test_app, test_security};

#[actix_web::test]
async fn test_me_returns_gate_identity() {
    let app = create_test_app(build_state().with_security(test_security()).build())
        .with_prod_routes()
        .build()
        .await;
    let sub = unique_subject();
    let token = mint_test_token(&sub, "production", &test_security());

    let req = test::TestRequest::get()
        .uri("/api/me")
        .insert_header(("Authorization", bearer_header(&token)))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, json!({ "kiloUserId": sub, "env": "production" }));
}

#[actix_web::test]
async fn test_me_requires_bearer() {
    let app = create_test_app(build_state().with_security(test_security()).build())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/api/me").to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_response(
        resp,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_MISSING_BEARER",
        "Bearer token not found.",
    )
    .await;
}
