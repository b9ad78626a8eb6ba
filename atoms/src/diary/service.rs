use async_trait::async_trait;
use chrono::Local;

use super::model::{DiaryEntry, SaveDiaryPayload};
use crate::error::HandlerError;

/// Key-value store holding diary entries.
///
/// `scan_entries` is a single unpaginated retrieval; correctness is bounded
/// by the store's default page size. Cursor-based pagination would go here
/// if the table ever outgrows one page.
#[async_trait]
pub trait DiaryStore: Send + Sync {
    async fn put_entry(&self, entry: &DiaryEntry) -> Result<(), HandlerError>;
    async fn scan_entries(&self) -> Result<Vec<DiaryEntry>, HandlerError>;
}

/// Local-time ISO-8601 with microsecond precision,
/// e.g. "2025-01-15T10:30:45.123456".
fn created_at_stamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Validate a submitted diary record, stamp it, and write it.
/// Overwrite semantics on a duplicate id are left to the store.
pub async fn save_entry(
    store: &dyn DiaryStore,
    payload: SaveDiaryPayload,
) -> Result<DiaryEntry, HandlerError> {
    if payload.date.is_empty() || payload.title.is_empty() || payload.content.is_empty() {
        return Err(HandlerError::Validation(
            "date, title, and content are required".to_string(),
        ));
    }

    let created_at = created_at_stamp();
    let entry = DiaryEntry {
        id: format!("{}#{}", payload.date, created_at),
        date: payload.date,
        title: payload.title,
        content: payload.content,
        created_at,
    };

    store.put_entry(&entry).await?;
    Ok(entry)
}

/// Fetch every stored entry, newest first. Entries without a `createdAt`
/// carry an empty string and therefore sort last.
pub async fn list_entries(store: &dyn DiaryStore) -> Result<Vec<DiaryEntry>, HandlerError> {
    let mut entries = store.scan_entries().await?;
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(entries)
}
