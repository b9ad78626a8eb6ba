use serde::{Deserialize, Serialize};

/// Diary entry domain model - one journal record in the store.
///
/// `id` and `createdAt` are server-generated; everything else is
/// caller-supplied. `id` is `<date>#<createdAt>`, unique in practice
/// because the timestamp carries microsecond precision.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DiaryEntry {
    pub id: String,
    pub date: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Caller fields deserialize missing or `null` as empty strings, so both
/// fall through to the same validation error.
#[derive(Debug, Default, Deserialize)]
pub struct SaveDiaryPayload {
    #[serde(default, deserialize_with = "crate::request::null_as_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "crate::request::null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::request::null_as_empty")]
    pub content: String,
}
