use lambda_http::Body;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::error::HandlerError;

/// Borrow the request body as text. Non-UTF8 binary bodies read as empty.
pub fn body_text(body: &Body) -> &str {
    match body {
        Body::Text(text) => text,
        Body::Binary(bytes) => std::str::from_utf8(bytes).unwrap_or(""),
        Body::Empty => "",
    }
}

/// Parse a JSON request body. An absent or empty body deserializes to the
/// payload's default, so missing fields fall through to validation instead
/// of failing the parse.
pub fn parse_json<T>(body: &Body) -> Result<T, HandlerError>
where
    T: DeserializeOwned + Default,
{
    let text = body_text(body);
    if text.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(text).map_err(|e| HandlerError::Parse(e.to_string()))
}

/// Deserialize an explicit JSON `null` as an empty string, so a null field
/// falls through to validation the same way a missing one does.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
