// POST /check: report whether the submitted text contains profanity.
//
// The body is taken as raw bytes and parsed here rather than through the Json
// extractor, so every malformed shape (empty body, bad JSON, wrong content
// type, missing or non-string `text`) ends in the same CheckError path. A body
// axum refuses to buffer (over its size limit) is mapped there too.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::web::error::{json_kind, CheckError};
use crate::web::AppState;

#[derive(Debug, Serialize, PartialEq)]
pub struct CheckResponse {
    pub contains_profanity: bool,
}

pub async fn check_text(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<CheckResponse>, CheckError> {
    let body = body.map_err(CheckError::Body)?;
    let text = extract_text(&body, state.config.max_text_length)?;
    let contains_profanity = state.filter.contains_profanity(&text);
    debug!(contains_profanity, chars = text.chars().count(), "Checked text");
    Ok(Json(CheckResponse { contains_profanity }))
}

/// Pull a string `text` field out of a JSON object body.
pub fn extract_text(body: &[u8], max_chars: Option<usize>) -> Result<String, CheckError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(CheckError::EmptyBody);
    }

    let value: Value = serde_json::from_slice(body).map_err(CheckError::MalformedJson)?;
    let mut fields = match value {
        Value::Object(fields) => fields,
        other => return Err(CheckError::NotAnObject(json_kind(&other))),
    };

    let text = match fields.remove("text") {
        Some(Value::String(text)) => text,
        Some(other) => return Err(CheckError::WrongType(json_kind(&other))),
        None => return Err(CheckError::MissingText),
    };

    if let Some(max) = max_chars {
        let len = text.chars().count();
        if len > max {
            return Err(CheckError::TooLong { len, max });
        }
    }
    Ok(text)
}
