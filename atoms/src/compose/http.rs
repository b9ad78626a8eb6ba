use lambda_http::{http::StatusCode, Body, Error, Response};

use super::model::GenerateDiaryPayload;
use super::service::{generate_content, TextGenerator};
use crate::error::HandlerError;
use crate::request::parse_json;

/// HTTP Handler: POST /diary/generate
pub async fn generate_diary_handler(
    generator: &dyn TextGenerator,
    body: &Body,
) -> Result<Response<Body>, Error> {
    let payload: GenerateDiaryPayload = match parse_json(body) {
        Ok(payload) => payload,
        Err(e) => return error_response(&e),
    };

    match generate_content(generator, payload).await {
        Ok(diary) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .body(serde_json::to_string(&diary)?.into())
            .map_err(Box::new)?),
        Err(e) => {
            if let HandlerError::Collaborator(msg) = &e {
                tracing::error!("Diary generation failed: {}", msg);
            }
            error_response(&e)
        }
    }
}

fn error_response(err: &HandlerError) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(err.status_code())
        .header("Content-Type", "application/json")
        .body(
            serde_json::json!({ "error": err.to_string() })
                .to_string()
                .into(),
        )
        .map_err(Box::new)?)
}
