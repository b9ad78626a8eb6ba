use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct PresignUploadPayload {
    pub file_extension: Option<String>,
}

/// Time-limited upload grant for one freshly generated object key.
/// Nothing is persisted here; the bucket tracks the uploaded object.
#[derive(Debug, Serialize)]
pub struct UploadAuthorization {
    pub upload_url: String,
    pub file_key: String,
    pub bucket_name: String,
    pub message: String,
}
