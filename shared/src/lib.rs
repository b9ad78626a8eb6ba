pub mod collaborators;
pub mod config;

pub use collaborators::{BedrockTextGenerator, DynamoDiaryStore, S3UploadAuthorizer};
pub use config::Config;

use std::sync::Arc;

use aws_config::{BehaviorVersion, Region};
use diary_atoms::compose::TextGenerator;
use diary_atoms::diary::DiaryStore;
use diary_atoms::media::UploadAuthorizer;
use lambda_http::Error;

/// Collaborator handles shared by every invocation, built once at startup
/// and passed into the handlers so tests can substitute fakes.
pub struct AppState {
    pub diary_store: Arc<dyn DiaryStore>,
    pub text_generator: Arc<dyn TextGenerator>,
    pub upload_authorizer: Arc<dyn UploadAuthorizer>,
}

impl AppState {
    /// Build the AWS clients from the Lambda environment. Bedrock gets its
    /// own SDK config because the generation model's region can differ
    /// from the function's region.
    pub async fn from_env() -> Result<Self, Error> {
        let config = Config::from_env()?;

        let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let bedrock_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.bedrock_region.clone()))
            .load()
            .await;

        Ok(Self {
            diary_store: Arc::new(DynamoDiaryStore::new(
                aws_sdk_dynamodb::Client::new(&aws_config),
                config.table_name,
            )),
            text_generator: Arc::new(BedrockTextGenerator::new(
                aws_sdk_bedrockruntime::Client::new(&bedrock_config),
                config.model_id,
            )),
            upload_authorizer: Arc::new(S3UploadAuthorizer::new(
                aws_sdk_s3::Client::new(&aws_config),
                config.bucket_name,
            )),
        })
    }
}
