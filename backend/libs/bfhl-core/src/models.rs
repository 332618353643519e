//! Request and response envelopes for `/api/bfhl`.

use serde::{Deserialize, Serialize};

use crate::classify::Classification;
use crate::identity::IdentityConfig;

/// Value of `operation_code` returned by `GET /api/bfhl`.
pub const OPERATION_CODE: u8 = 1;

/// POST body. Fields other than `data` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BfhlRequest {
    pub data: Vec<String>,
}

/// Success envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BfhlResponse {
    pub is_success: bool,
    pub user_id: String,
    pub email: String,
    pub roll_number: String,
    pub numbers: Vec<String>,
    pub alphabets: Vec<String>,
    pub highest_alphabet: Vec<String>,
}

impl BfhlResponse {
    pub fn new(identity: &IdentityConfig, classification: Classification) -> Self {
        let Classification {
            numbers,
            alphabets,
            highest_alphabet,
        } = classification;

        Self {
            is_success: true,
            user_id: identity.user_id.clone(),
            email: identity.email.clone(),
            roll_number: identity.roll_number.clone(),
            numbers,
            alphabets,
            highest_alphabet,
        }
    }
}

/// Failure envelope. `message` is always one of the fixed public messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub is_success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            message: message.into(),
        }
    }
}

/// Body of `GET /api/bfhl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationCodeResponse {
    pub operation_code: u8,
}

impl Default for OperationCodeResponse {
    fn default() -> Self {
        Self {
            operation_code: OPERATION_CODE,
        }
    }
}
