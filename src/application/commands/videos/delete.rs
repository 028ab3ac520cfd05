// src/application/commands/videos/delete.rs
use super::VideoCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        user::UserId,
        video::{VideoId, specifications::CanDeleteVideoSpec},
    },
};

pub struct DeleteVideoCommand {
    pub id: VideoId,
}

impl VideoCommandService {
    pub async fn delete_video(
        &self,
        actor: &UserId,
        command: DeleteVideoCommand,
    ) -> ApplicationResult<()> {
        let video = self
            .read_repo
            .find_by_id(&command.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("video {} not found", command.id)))?;

        if !CanDeleteVideoSpec::new(&video, Some(actor)).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the uploader may delete this video",
            ));
        }

        self.write_repo.delete(&command.id).await?;
        tracing::info!(video_id = %command.id, actor = %actor, "video deleted");
        Ok(())
    }
}
