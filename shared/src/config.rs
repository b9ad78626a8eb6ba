use std::env;

/// Environment configuration, read once at process start.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding diary entries.
    pub table_name: String,
    /// S3 bucket receiving camera uploads.
    pub bucket_name: String,
    /// Bedrock model used for diary generation.
    pub model_id: String,
    /// Region for the Bedrock runtime client. The generation model is not
    /// available in every region, so this is independent of the Lambda's
    /// own region.
    pub bedrock_region: String,
}

pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-3-5-haiku-20241022-v1:0";
pub const DEFAULT_BEDROCK_REGION: &str = "us-west-2";

impl Config {
    pub fn from_env() -> Result<Self, lambda_http::Error> {
        let table_name =
            env::var("TABLE_NAME").map_err(|_| "TABLE_NAME must be set".to_string())?;
        let bucket_name =
            env::var("BUCKET_NAME").map_err(|_| "BUCKET_NAME must be set".to_string())?;
        let model_id = env::var("MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string());
        let bedrock_region =
            env::var("BEDROCK_REGION").unwrap_or_else(|_| DEFAULT_BEDROCK_REGION.to_string());

        Ok(Config {
            table_name,
            bucket_name,
            model_id,
            bedrock_region,
        })
    }
}
