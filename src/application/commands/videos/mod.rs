// src/application/commands/videos/mod.rs
mod delete;
mod service;

pub use delete::DeleteVideoCommand;
pub use service::VideoCommandService;
