pub mod users;
pub mod videos;

pub use users::UserProfileDto;
pub use videos::VideoDto;
