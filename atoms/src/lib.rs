pub mod compose;
pub mod diary;
pub mod echo;
pub mod error;
pub mod media;
pub mod request;

pub use error::HandlerError;
