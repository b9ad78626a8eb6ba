//! AWS-backed implementations of the collaborator interfaces declared in
//! `diary-atoms`. Each wraps one SDK client constructed at startup.

pub mod bedrock;
pub mod dynamo;
pub mod s3;

pub use bedrock::BedrockTextGenerator;
pub use dynamo::DynamoDiaryStore;
pub use s3::S3UploadAuthorizer;
