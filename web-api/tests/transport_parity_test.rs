//! Both transport bindings must answer identically for the same input.

use actix_web::{test as actix_test, web, App};
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request},
};
use bfhl_core::IdentityConfig;
use serde_json::Value;
use tower::ServiceExt;

const BODIES: &[&str] = &[
    r#"{"data": ["a","b","C","23","4","t","9","34","a"]}"#,
    r#"{"data": ["1","2","AB","c"]}"#,
    r#"{"data": []}"#,
    r#"{"data": ["  42", "3.5", "1e3", "0x1F", "Infinity", "NaN", "", "Z", "z"]}"#,
    r#"{"data": ["q", "Q"], "ignored": {"nested": true}}"#,
    r#"{"data": ["b"], "data": ["a"]}"#,
    r#"{"data": "not-an-array"}"#,
    r#"{"data": [1, 2]}"#,
    r#"{"data": null}"#,
    r#"not json"#,
];

fn server_config() -> web_api::ServerConfig {
    web_api::ServerConfig {
        max_body_bytes: 4096,
        ..web_api::ServerConfig::default()
    }
}

async fn via_axum(identity: &IdentityConfig, body: &str) -> (u16, Value) {
    let app = web_api::app(web_api::AppState::new(identity.clone()), &server_config());
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/bfhl")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status().as_u16();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[actix_web::test]
async fn actix_and_axum_bindings_agree() {
    let identity = IdentityConfig::new("parity_user", "parity@example.com", "PAR001");

    let actix_app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(bfhl_service::AppState::new(identity.clone())))
            .app_data(web::PayloadConfig::new(4096))
            .configure(bfhl_service::configure),
    )
    .await;

    for body in BODIES {
        let req = actix_test::TestRequest::post()
            .uri("/api/bfhl")
            .insert_header(("content-type", "application/json"))
            .set_payload(body.to_string())
            .to_request();
        let resp = actix_test::call_service(&actix_app, req).await;
        let actix_status = resp.status().as_u16();
        let actix_body: Value = actix_test::read_body_json(resp).await;

        let (axum_status, axum_body) = via_axum(&identity, body).await;

        assert_eq!(actix_status, axum_status, "status mismatch for {body}");
        assert_eq!(actix_body, axum_body, "body mismatch for {body}");
    }

    let req = actix_test::TestRequest::get().uri("/api/bfhl").to_request();
    let actix_body: Value = actix_test::call_and_read_body_json(&actix_app, req).await;

    let app = web_api::app(web_api::AppState::default(), &server_config());
    let resp = app
        .oneshot(Request::builder().uri("/api/bfhl").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let axum_body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(actix_body, axum_body);
}
