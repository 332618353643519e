use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use bfhl_core::{encode_json, BfhlError, OperationCodeResponse};

use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/bfhl", get(operation_code).post(process_data))
}

/// POST /api/bfhl
///
/// Raw bytes rather than `Json<_>`: axum's JSON rejections would answer
/// with their own status codes and bodies instead of the fixed envelope.
async fn process_data(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, BfhlError> {
    let response = bfhl_core::process(&state.identity, &body)?;
    let payload = encode_json(&response)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], payload).into_response())
}

/// GET /api/bfhl
async fn operation_code() -> Json<OperationCodeResponse> {
    Json(OperationCodeResponse::default())
}
