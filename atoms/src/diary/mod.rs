// Re-export model types and service functions
pub mod http;
pub mod model;
pub mod service;

pub use http::*;
pub use model::{DiaryEntry, SaveDiaryPayload};
pub use service::*;
