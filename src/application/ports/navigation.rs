// src/application/ports/navigation.rs
use crate::domain::{user::UserId, video::VideoId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Video(VideoId),
    UserDetail(UserId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Video(id) => format!("/videoDetail/{id}"),
            Route::UserDetail(id) => format!("/userDetail/{id}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    /// Overwrite the current history entry so it cannot be reached by going back.
    Replace,
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route, mode: HistoryMode);
}
