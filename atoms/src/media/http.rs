use lambda_http::{http::StatusCode, Body, Error, Response};

use super::model::PresignUploadPayload;
use super::service::{issue_upload_url, UploadAuthorizer};
use crate::error::HandlerError;
use crate::request::parse_json;

/// HTTP Handler: POST /diary/upload-url
///
/// The body is optional; an empty request asks for the default jpg grant.
pub async fn presign_upload_handler(
    authorizer: &dyn UploadAuthorizer,
    body: &Body,
) -> Result<Response<Body>, Error> {
    let payload: PresignUploadPayload = match parse_json(body) {
        Ok(payload) => payload,
        Err(e) => return error_response(&e),
    };

    match issue_upload_url(authorizer, payload).await {
        Ok(auth) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .body(serde_json::to_string(&auth)?.into())
            .map_err(Box::new)?),
        Err(e) => {
            tracing::error!("Failed to issue upload URL: {}", e);
            error_response(&e)
        }
    }
}

fn error_response(err: &HandlerError) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(err.status_code())
        .header("Content-Type", "application/json")
        .body(
            serde_json::json!({
                "error": err.to_string(),
                "message": "署名付きURLの生成に失敗しました",
            })
            .to_string()
            .into(),
        )
        .map_err(Box::new)?)
}
