// src/domain/video/mod.rs
pub mod entity;
pub mod recommendation;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::Video;
pub use recommendation::{RecommendationSet, select_recommendations};
pub use repository::{VideoReadRepository, VideoWriteRepository};
pub use value_objects::{Category, MediaUrl, VideoId};
