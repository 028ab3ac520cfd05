// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::UserProfile;
pub use repository::UserProfileRepository;
pub use value_objects::UserId;
