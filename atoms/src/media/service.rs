use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;

use super::model::{PresignUploadPayload, UploadAuthorization};
use crate::error::HandlerError;

/// Upload URLs stay valid for 5 minutes and are not renewable.
pub const UPLOAD_URL_TTL: Duration = Duration::from_secs(300);

const FILE_KEY_PREFIX: &str = "camera_images";
const DEFAULT_EXTENSION: &str = "jpg";

/// Object storage capability that can mint time-limited PUT authorizations.
#[async_trait]
pub trait UploadAuthorizer: Send + Sync {
    fn bucket_name(&self) -> &str;

    async fn presign_put(
        &self,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> Result<String, HandlerError>;
}

/// jpg/jpeg normalize to image/jpeg; everything else maps 1:1.
pub fn content_type_for(extension: &str) -> String {
    match extension {
        "jpg" | "jpeg" => "image/jpeg".to_string(),
        other => format!("image/{other}"),
    }
}

/// Fresh storage key: `camera_images/<YYYYMMDD_HHMMSS>_<8 hex>.<ext>`.
/// The random suffix keeps same-second requests from colliding.
pub fn build_file_key(extension: &str) -> String {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let unique = uuid::Uuid::new_v4().simple().to_string();
    format!("{FILE_KEY_PREFIX}/{stamp}_{}.{extension}", &unique[..8])
}

/// Issue an upload authorization for a caller-chosen file extension
/// (default jpg).
pub async fn issue_upload_url(
    authorizer: &dyn UploadAuthorizer,
    payload: PresignUploadPayload,
) -> Result<UploadAuthorization, HandlerError> {
    let extension = payload
        .file_extension
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
    let content_type = content_type_for(&extension);
    let file_key = build_file_key(&extension);

    let upload_url = authorizer
        .presign_put(&file_key, &content_type, UPLOAD_URL_TTL)
        .await?;

    Ok(UploadAuthorization {
        upload_url,
        file_key,
        bucket_name: authorizer.bucket_name().to_string(),
        message: "署名付きURLの生成に成功しました".to_string(),
    })
}
