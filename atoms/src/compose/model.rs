use serde::{Deserialize, Serialize};

/// `title` deserializes missing or `null` as an empty string, so both fall
/// through to the same validation error.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateDiaryPayload {
    #[serde(default, deserialize_with = "crate::request::null_as_empty")]
    pub title: String,
}

/// Title plus the model-written diary content.
#[derive(Debug, Serialize)]
pub struct GeneratedDiary {
    pub title: String,
    pub content: String,
}
