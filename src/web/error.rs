// Request rejection reasons for POST /check.
//
// Each variant is distinguishable in the logs, but they all render as the
// same 400 {"error": "Invalid request"} body.

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::warn;

use super::{api_error, INVALID_REQUEST};

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("request body could not be read")]
    Body(#[source] BytesRejection),
    #[error("request body is empty")]
    EmptyBody,
    #[error("request body is not valid JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),
    #[error("request body is JSON {0}, expected an object")]
    NotAnObject(&'static str),
    #[error("request body has no `text` field")]
    MissingText,
    #[error("`text` is JSON {0}, expected a string")]
    WrongType(&'static str),
    #[error("`text` is {len} characters, limit is {max}")]
    TooLong { len: usize, max: usize },
}

impl CheckError {
    /// Stable, low-cardinality label for log filtering.
    pub fn reason(&self) -> &'static str {
        match self {
            CheckError::Body(_) => "unreadable_body",
            CheckError::EmptyBody => "empty_body",
            CheckError::MalformedJson(_) => "malformed_json",
            CheckError::NotAnObject(_) => "not_an_object",
            CheckError::MissingText => "missing_text",
            CheckError::WrongType(_) => "wrong_type",
            CheckError::TooLong { .. } => "too_long",
        }
    }
}

impl IntoResponse for CheckError {
    fn into_response(self) -> Response {
        warn!(reason = self.reason(), error = %self, "Rejected check request");
        api_error(StatusCode::BAD_REQUEST, INVALID_REQUEST)
    }
}

/// JSON type name for log messages.
pub fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
