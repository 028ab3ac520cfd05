use crate::domain::user::value_objects::UserId;
use crate::domain::video::entity::Video;

/// Only the uploader may delete a video. Anonymous callers never qualify.
pub struct CanDeleteVideoSpec<'a> {
    video: &'a Video,
    user_id: Option<&'a UserId>,
}

impl<'a> CanDeleteVideoSpec<'a> {
    pub fn new(video: &'a Video, user_id: Option<&'a UserId>) -> Self {
        Self { video, user_id }
    }

    pub fn is_satisfied(&self) -> bool {
        self.user_id
            .is_some_and(|user_id| self.video.is_owned_by(user_id))
    }
}
