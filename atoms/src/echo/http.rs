use chrono::Local;
use lambda_http::{http::StatusCode, Body, Error, Request, Response};

use crate::error::HandlerError;
use crate::request::body_text;

/// HTTP Handler: POST /echo
///
/// Connectivity test: reflects the parsed request body back with a
/// timestamp. The raw received event is logged for diagnostics.
pub async fn echo_handler(event: &Request) -> Result<Response<Body>, Error> {
    let text = body_text(event.body());
    tracing::info!(
        "Received event: {} {} headers: {:?} body: {}",
        event.method(),
        event.uri(),
        event.headers(),
        text
    );

    let received: serde_json::Value = if text.trim().is_empty() {
        serde_json::Value::Object(serde_json::Map::new())
    } else {
        match serde_json::from_str(text) {
            Ok(value) => value,
            Err(e) => {
                let err = HandlerError::Parse(e.to_string());
                return Ok(Response::builder()
                    .status(err.status_code())
                    .header("Content-Type", "application/json")
                    .body(
                        serde_json::json!({ "error": err.to_string() })
                            .to_string()
                            .into(),
                    )
                    .map_err(Box::new)?);
            }
        }
    };

    let response_body = serde_json::json!({
        "message": "Echo response",
        "received": received,
        "timestamp": Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
    });

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(response_body.to_string().into())
        .map_err(Box::new)?)
}
