//! Error taxonomy for the client.
//!
//! Every failure propagates synchronously to the caller of the resource
//! method that triggered it. There is no retry, suppression, or recovery at
//! this layer; retry policy belongs to the host application.

use serde_json::Value;

/// Errors produced while performing an API operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Connection, TLS, or timeout failure in the underlying transport.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a structured `{"error": ...}` envelope.
    #[error("api error {code}: {message}")]
    Api {
        message: String,
        code: i64,
        /// Extra payload some error codes attach (e.g. cooldown details).
        data: Option<Value>,
    },

    /// The response body was not valid JSON.
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// A request body could not be serialized.
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// The decoded body does not satisfy the target model's constraints:
    /// wrong type, out-of-range value, unknown enum member, missing field.
    #[error("validation failed: {0}")]
    Validation(serde_json::Error),

    /// The response envelope carried no `data` field where a model was
    /// required. Endpoints that legitimately answer 204 must go through the
    /// optioned request variant instead.
    #[error("response envelope missing `data` field")]
    MissingData,

    /// The bearer token contains bytes that cannot appear in an HTTP header.
    #[error("token is not a valid header value")]
    InvalidToken,

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(String),
}
