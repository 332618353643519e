//! # bfhl-core
//!
//! Shared request handling for the `/api/bfhl` endpoint.
//!
//! Every transport binding (the actix-web service and the axum web API) goes
//! through this crate, so the classification rules live in exactly one place.
//!
//! ## Modules
//! - `numeric`: string-to-number coercion used to pick out numeric tokens
//! - `classify`: splits tokens into `numbers`, `alphabets` and `highest_alphabet`
//! - `models`: request/response envelopes
//! - `processor`: body validation and envelope assembly
//! - `cors`: allowed-origin list shared by both transports' configuration
//! - `identity`: the static identity fields echoed in every success response
//! - `error`: the two failure kinds, with optional `actix` / `axum` integrations
//!
//! ## Example
//! ```
//! use bfhl_core::{process, IdentityConfig};
//!
//! let identity = IdentityConfig::default();
//! let response = process(&identity, br#"{"data": ["1", "AB", "c"]}"#).unwrap();
//! assert_eq!(response.numbers, vec!["1"]);
//! assert_eq!(response.highest_alphabet, vec!["c"]);
//! ```

pub mod classify;
pub mod cors;
pub mod error;
pub mod identity;
pub mod models;
pub mod numeric;
pub mod processor;

pub use classify::{classify, highest_alphabet, is_single_letter, Classification};
pub use cors::{AllowedOrigins, OriginError};
pub use error::{BfhlError, Result};
pub use identity::IdentityConfig;
pub use models::{BfhlRequest, BfhlResponse, ErrorResponse, OperationCodeResponse};
pub use numeric::{coerce_number, is_numeric};
pub use processor::{encode_json, parse_request, process};
