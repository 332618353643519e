use actix_web::{http::header::ContentType, web, HttpRequest, HttpResponse};
use bfhl_core::{encode_json, BfhlError, OperationCodeResponse};

use crate::metrics;
use crate::middleware::get_correlation_id;
use crate::AppState;

/// POST /api/bfhl
///
/// The body is taken as raw bytes so that every shape problem, including a
/// missing or wrong content type, goes through the same validation path.
pub async fn process_data(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, BfhlError> {
    let response =
        bfhl_core::process(&state.identity, &body).map_err(|e| reject(&req, e))?;
    metrics::record_classification(&response);

    let payload = encode_json(&response).map_err(|e| reject(&req, e))?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(payload))
}

fn reject(req: &HttpRequest, err: BfhlError) -> BfhlError {
    metrics::record_rejection(&err);
    tracing::info!(
        correlation_id = get_correlation_id(req).as_deref().unwrap_or("-"),
        error = %err,
        "POST /api/bfhl rejected"
    );
    err
}

/// GET /api/bfhl
pub async fn operation_code() -> HttpResponse {
    HttpResponse::Ok().json(OperationCodeResponse::default())
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}
