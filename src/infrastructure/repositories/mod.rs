// src/infrastructure/repositories/mod.rs
mod document_user;
mod document_video;
mod error;

pub use document_user::{DEFAULT_USER_COLLECTION, DocumentUserProfileRepository};
pub use document_video::{DEFAULT_VIDEO_COLLECTION, DocumentVideoRepository};
pub use error::map_store;
