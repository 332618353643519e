use actix_web::{http::StatusCode, test, web, App, HttpRequest, HttpResponse};
use bfhl_core::{AllowedOrigins, BfhlResponse, ErrorResponse, IdentityConfig};
use serde_json::{json, Value};

use bfhl_service::middleware::{
    build_cors, get_correlation_id, RequestMetrics, CORRELATION_ID_HEADER,
};
use bfhl_service::{configure, AppState};

macro_rules! init_app {
    () => {
        init_app!(AppState::default())
    };
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(web::PayloadConfig::new(1024))
                .wrap(RequestMetrics)
                .configure(configure),
        )
        .await
    };
}

fn post_json(body: Value) -> test::TestRequest {
    test::TestRequest::post().uri("/api/bfhl").set_json(body)
}

#[actix_web::test]
async fn post_mixed_tokens_returns_buckets() {
    let app = init_app!();

    let req = post_json(json!({"data": ["a","b","C","23","4","t","9","34","a"]})).to_request();
    let resp: BfhlResponse = test::call_and_read_body_json(&app, req).await;

    assert!(resp.is_success);
    assert_eq!(resp.user_id, "john_doe_17091999");
    assert_eq!(resp.email, "john@xyz.com");
    assert_eq!(resp.roll_number, "ABCD123");
    assert_eq!(resp.numbers, vec!["23", "4", "9", "34"]);
    assert_eq!(resp.alphabets, vec!["a", "b", "C", "t", "a"]);
    assert_eq!(resp.highest_alphabet, vec!["t"]);
}

#[actix_web::test]
async fn post_drops_multi_letter_tokens() {
    let app = init_app!();

    let req = post_json(json!({"data": ["1", "2", "AB", "c"]})).to_request();
    let resp: BfhlResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.numbers, vec!["1", "2"]);
    assert_eq!(resp.alphabets, vec!["c"]);
    assert_eq!(resp.highest_alphabet, vec!["c"]);
}

#[actix_web::test]
async fn post_empty_data_returns_empty_buckets() {
    let app = init_app!();

    let req = post_json(json!({"data": []})).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "is_success": true,
            "user_id": "john_doe_17091999",
            "email": "john@xyz.com",
            "roll_number": "ABCD123",
            "numbers": [],
            "alphabets": [],
            "highest_alphabet": []
        })
    );
}

#[actix_web::test]
async fn post_uses_injected_identity() {
    let identity = IdentityConfig::new("jane_roe_01012000", "jane@example.com", "XYZ987");
    let app = init_app!(AppState::new(identity));

    let req = post_json(json!({"data": ["5"]})).to_request();
    let resp: BfhlResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.user_id, "jane_roe_01012000");
    assert_eq!(resp.email, "jane@example.com");
    assert_eq!(resp.roll_number, "XYZ987");
}

#[actix_web::test]
async fn post_repeated_data_key_uses_last_value() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/bfhl")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"data": ["b"], "data": ["a"]}"#)
        .to_request();
    let resp: BfhlResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.alphabets, vec!["a"]);
    assert_eq!(resp.highest_alphabet, vec!["a"]);
}

#[actix_web::test]
async fn post_non_array_data_returns_400() {
    let app = init_app!();

    let req = post_json(json!({"data": "not-an-array"})).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body, ErrorResponse::new("Invalid input format"));
}

#[actix_web::test]
async fn post_non_string_elements_returns_400() {
    let app = init_app!();

    let req = post_json(json!({"data": [1, 2]})).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"is_success": false, "message": "Invalid input format"}));
}

#[actix_web::test]
async fn post_missing_or_malformed_body_returns_400() {
    let app = init_app!();

    for payload in ["{}", "{\"data\": null}", "{\"data\": [\"a\"", "", "[\"a\"]"] {
        let req = test::TestRequest::post()
            .uri("/api/bfhl")
            .insert_header(("content-type", "application/json"))
            .set_payload(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "payload {payload:?}");
    }
}

#[actix_web::test]
async fn post_oversized_body_is_rejected_before_validation() {
    let app = init_app!();

    let tokens: Vec<String> = (0..500).map(|i| i.to_string()).collect();
    let req = post_json(json!({ "data": tokens })).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[actix_web::test]
async fn get_returns_operation_code() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/bfhl").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, json!({"operation_code": 1}));
}

#[actix_web::test]
async fn unsupported_method_returns_405() {
    let app = init_app!();

    let req = test::TestRequest::delete().uri("/api/bfhl").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[actix_web::test]
async fn health_returns_ok() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let body = test::call_and_read_body(&app, req).await;

    assert_eq!(body, "OK");
}

#[actix_web::test]
async fn correlation_id_is_echoed_or_generated() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/bfhl")
        .insert_header((CORRELATION_ID_HEADER, "req-1234"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.headers().get(CORRELATION_ID_HEADER).unwrap(),
        "req-1234"
    );

    let req = test::TestRequest::get().uri("/api/bfhl").to_request();
    let resp = test::call_service(&app, req).await;
    let generated = resp
        .headers()
        .get(CORRELATION_ID_HEADER)
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(generated.len(), 36);
}

#[actix_web::test]
async fn metrics_expose_request_and_bucket_counters() {
    let app = init_app!();

    let req = post_json(json!({"data": ["1", "x"]})).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = post_json(json!({"data": 7})).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/metrics").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let text = String::from_utf8(body.to_vec()).unwrap();

    assert!(text.contains("bfhl_service_tokens_classified_total"));
    assert!(text.contains("bfhl_service_rejected_requests_total{kind=\"invalid_input\"}"));
    assert!(text.contains("bfhl_service_http_requests_total"));
    assert!(text.contains("path=\"/api/bfhl\""));
}

async fn explode() -> HttpResponse {
    panic!("classifier blew up");
}

async fn echo_correlation_id(req: HttpRequest) -> HttpResponse {
    HttpResponse::Ok().body(get_correlation_id(&req).unwrap_or_default())
}

#[actix_web::test]
async fn handler_panic_returns_internal_error_envelope() {
    let app = test::init_service(
        App::new()
            .wrap(RequestMetrics)
            .route("/boom", web::post().to(explode)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/boom")
        .insert_header((CORRELATION_ID_HEADER, "req-panic"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        resp.headers().get(CORRELATION_ID_HEADER).unwrap(),
        "req-panic"
    );

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"is_success": false, "message": "Internal server error"})
    );
}

#[actix_web::test]
async fn correlation_id_is_visible_to_handlers() {
    let app = test::init_service(
        App::new()
            .wrap(RequestMetrics)
            .route("/whoami", web::get().to(echo_correlation_id)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header((CORRELATION_ID_HEADER, "req-5678"))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;

    assert_eq!(body, "req-5678");
}

#[actix_web::test]
async fn cors_allows_only_listed_origins() {
    let origins: AllowedOrigins = "https://a.example".parse().unwrap();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::default()))
            .wrap(build_cors(&origins))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/bfhl")
        .insert_header(("origin", "https://a.example"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "https://a.example"
    );

    let req = test::TestRequest::get()
        .uri("/api/bfhl")
        .insert_header(("origin", "https://b.example"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.headers().get("access-control-allow-origin").is_none());
}
