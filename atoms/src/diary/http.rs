use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::Serialize;

use super::model::{DiaryEntry, SaveDiaryPayload};
use super::service::{list_entries, save_entry, DiaryStore};
use crate::error::HandlerError;
use crate::request::parse_json;

#[derive(Serialize)]
struct SaveDiaryResponse {
    message: String,
    item: DiaryEntry,
}

#[derive(Serialize)]
struct DiaryListResponse {
    items: Vec<DiaryEntry>,
    count: usize,
}

/// HTTP Handler: POST /diary
pub async fn save_diary_handler(
    store: &dyn DiaryStore,
    body: &Body,
) -> Result<Response<Body>, Error> {
    let payload: SaveDiaryPayload = match parse_json(body) {
        Ok(payload) => payload,
        Err(e) => return error_response(&e),
    };

    match save_entry(store, payload).await {
        Ok(entry) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .body(
                serde_json::to_string(&SaveDiaryResponse {
                    message: "Data saved successfully".to_string(),
                    item: entry,
                })?
                .into(),
            )
            .map_err(Box::new)?),
        Err(e) => {
            tracing::error!("Failed to save diary entry: {}", e);
            error_response(&e)
        }
    }
}

/// HTTP Handler: GET /diary
pub async fn list_diary_handler(store: &dyn DiaryStore) -> Result<Response<Body>, Error> {
    match list_entries(store).await {
        Ok(items) => {
            let count = items.len();
            Ok(Response::builder()
                .status(StatusCode::OK)
                .header("Content-Type", "application/json")
                .body(serde_json::to_string(&DiaryListResponse { items, count })?.into())
                .map_err(Box::new)?)
        }
        Err(e) => {
            tracing::error!("Failed to list diary entries: {}", e);
            error_response(&e)
        }
    }
}

fn error_response(err: &HandlerError) -> Result<Response<Body>, Error> {
    let body = match err {
        HandlerError::Validation(msg) => serde_json::json!({ "error": msg }),
        _ => serde_json::json!({
            "error": "Internal server error",
            "details": err.to_string(),
        }),
    };
    Ok(Response::builder()
        .status(err.status_code())
        .header("Content-Type", "application/json")
        .body(body.to_string().into())
        .map_err(Box::new)?)
}
