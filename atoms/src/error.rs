use lambda_http::http::StatusCode;
use thiserror::Error;

/// Failure kinds shared by all handlers.
///
/// Validation failures never reach a collaborator; parse and collaborator
/// failures surface as 500 with the underlying message in the body.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("{0}")]
    Validation(String),

    #[error("invalid request body: {0}")]
    Parse(String),

    #[error("{0}")]
    Collaborator(String),
}

impl HandlerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::Validation(_) => StatusCode::BAD_REQUEST,
            HandlerError::Parse(_) | HandlerError::Collaborator(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
