use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client as S3Client;
use diary_atoms::error::HandlerError;
use diary_atoms::media::UploadAuthorizer;

/// Presigned PUT URLs scoped to one bucket.
pub struct S3UploadAuthorizer {
    client: S3Client,
    bucket_name: String,
}

impl S3UploadAuthorizer {
    pub fn new(client: S3Client, bucket_name: String) -> Self {
        Self {
            client,
            bucket_name,
        }
    }
}

#[async_trait]
impl UploadAuthorizer for S3UploadAuthorizer {
    fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    async fn presign_put(
        &self,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> Result<String, HandlerError> {
        let presigning = PresigningConfig::expires_in(expires_in)
            .map_err(|e| HandlerError::Collaborator(format!("invalid presign expiry: {e}")))?;

        let presigned = self
            .client
            .put_object()
            .bucket(&self.bucket_name)
            .key(key)
            .content_type(content_type)
            .presigned(presigning)
            .await
            .map_err(|e| HandlerError::Collaborator(format!("S3 presign error: {e}")))?;

        Ok(presigned.uri().to_string())
    }
}
