//! Request boundary: validate the raw body, classify, assemble the envelope.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::classify::classify;
use crate::error::{BfhlError, Result};
use crate::identity::IdentityConfig;
use crate::models::{BfhlRequest, BfhlResponse};

/// Parse a raw POST body into a [`BfhlRequest`].
///
/// Malformed JSON, a non-object body, a missing or `null` `data` field, a
/// non-array `data`, and non-string elements all collapse into
/// [`BfhlError::InvalidInput`]. The serde message is kept for logs only.
///
/// When the body repeats the `data` key, the last occurrence wins, as with
/// ordinary JSON object parsing.
pub fn parse_request(body: &[u8]) -> Result<BfhlRequest> {
    let mut object: Map<String, Value> =
        serde_json::from_slice(body).map_err(BfhlError::invalid_input)?;
    let data = object
        .remove("data")
        .ok_or_else(|| BfhlError::invalid_input("missing field `data`"))?;
    let data = serde_json::from_value(data).map_err(BfhlError::invalid_input)?;

    Ok(BfhlRequest { data })
}

/// Handle one `POST /api/bfhl` body end to end.
pub fn process(identity: &IdentityConfig, body: &[u8]) -> Result<BfhlResponse> {
    let request = parse_request(body)?;
    let classification = classify(&request.data);

    tracing::debug!(
        tokens = request.data.len(),
        numbers = classification.numbers.len(),
        alphabets = classification.alphabets.len(),
        "Classified request tokens"
    );

    Ok(BfhlResponse::new(identity, classification))
}

/// Serialize a response body. Failure here is an internal error.
pub fn encode_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(BfhlError::internal)
}
