// src/application/workflows/deletion.rs
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use thiserror::Error;

use crate::{
    application::{
        commands::videos::{DeleteVideoCommand, VideoCommandService},
        error::ErrorKind,
        ports::{
            identity::IdentityProvider,
            navigation::{HistoryMode, Navigator, Route},
        },
    },
    domain::video::{Video, VideoId, specifications::CanDeleteVideoSpec},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletionConfirmation {
    #[default]
    Idle,
    AwaitingConfirmation,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeletionError {
    #[error("only the uploader may delete this video")]
    NotPermitted,
    #[error("a delete is already in progress")]
    InFlight,
    #[error("no delete is awaiting confirmation")]
    NotAwaitingConfirmation,
    #[error("could not delete the video, please try again: {0}")]
    Failed(String),
}

/// What the confirmation surface renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionView {
    pub confirmation: DeletionConfirmation,
    pub deleting: bool,
    pub error: Option<String>,
}

#[derive(Default)]
struct Inner {
    /// Bumped by `detach`; a delete only reports back to the epoch it started in.
    epoch: u64,
    confirmation: DeletionConfirmation,
    target: Option<VideoId>,
    in_flight: bool,
    last_error: Option<DeletionError>,
}

/// Two-step delete: the owner asks, then confirms or cancels. Only one
/// delete may be outstanding at a time.
pub struct DeletionWorkflow {
    commands: Arc<VideoCommandService>,
    identity: Arc<dyn IdentityProvider>,
    navigator: Arc<dyn Navigator>,
    inner: Mutex<Inner>,
}

impl DeletionWorkflow {
    pub fn new(
        commands: Arc<VideoCommandService>,
        identity: Arc<dyn IdentityProvider>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            commands,
            identity,
            navigator,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Whether the delete trigger should be offered at all for `video`.
    pub fn can_request(&self, video: &Video) -> bool {
        let current = self.identity.current_user();
        CanDeleteVideoSpec::new(video, current.as_ref()).is_satisfied()
    }

    pub fn confirmation(&self) -> DeletionConfirmation {
        self.lock().confirmation
    }

    pub fn view(&self) -> DeletionView {
        let inner = self.lock();
        DeletionView {
            confirmation: inner.confirmation,
            deleting: inner.in_flight,
            error: inner.last_error.as_ref().map(ToString::to_string),
        }
    }

    pub fn request_delete(&self, video: &Video) -> Result<(), DeletionError> {
        if !self.can_request(video) {
            return Err(DeletionError::NotPermitted);
        }

        let mut inner = self.lock();
        if inner.in_flight {
            return Err(DeletionError::InFlight);
        }
        inner.confirmation = DeletionConfirmation::AwaitingConfirmation;
        inner.target = Some(video.id.clone());
        inner.last_error = None;
        Ok(())
    }

    pub fn cancel_delete(&self) -> Result<(), DeletionError> {
        let mut inner = self.lock();
        if inner.in_flight {
            return Err(DeletionError::InFlight);
        }
        if inner.confirmation != DeletionConfirmation::AwaitingConfirmation {
            return Err(DeletionError::NotAwaitingConfirmation);
        }
        inner.confirmation = DeletionConfirmation::Idle;
        inner.target = None;
        Ok(())
    }

    /// Sends the delete. On success the user is taken home with the current
    /// history entry replaced; on failure nothing moves and the error stays
    /// visible until the next request.
    pub async fn confirm_delete(&self) -> Result<(), DeletionError> {
        let (video_id, actor, epoch) = {
            let mut inner = self.lock();
            if inner.in_flight {
                return Err(DeletionError::InFlight);
            }
            if inner.confirmation != DeletionConfirmation::AwaitingConfirmation {
                return Err(DeletionError::NotAwaitingConfirmation);
            }
            let Some(video_id) = inner.target.clone() else {
                return Err(DeletionError::NotAwaitingConfirmation);
            };
            let Some(actor) = self.identity.current_user() else {
                inner.confirmation = DeletionConfirmation::Idle;
                inner.target = None;
                return Err(DeletionError::NotPermitted);
            };
            inner.in_flight = true;
            (video_id, actor, inner.epoch)
        };

        let result = self
            .commands
            .delete_video(
                &actor,
                DeleteVideoCommand {
                    id: video_id.clone(),
                },
            )
            .await;

        let outcome = match result {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::info!(video_id = %video_id, "video already gone, treating delete as done");
                Ok(())
            }
            Err(err) => {
                tracing::error!(video_id = %video_id, error = %err, "video delete failed");
                Err(DeletionError::Failed(err.to_string()))
            }
        };

        {
            let mut inner = self.lock();
            if inner.epoch != epoch {
                tracing::info!(
                    video_id = %video_id,
                    succeeded = outcome.is_ok(),
                    "delete finished after the page moved on, not reporting back"
                );
                return outcome;
            }
            inner.in_flight = false;
            inner.confirmation = DeletionConfirmation::Idle;
            inner.target = None;
            inner.last_error = outcome.as_ref().err().cloned();
        }

        if outcome.is_ok() {
            self.navigator.navigate(Route::Home, HistoryMode::Replace);
        }
        outcome
    }

    /// Forgets everything about the current video, e.g. when the page
    /// switches to another one. An outstanding delete still runs to the end,
    /// but its outcome is only logged: it neither sets an error nor navigates.
    pub fn detach(&self) {
        let mut inner = self.lock();
        if let Some(video_id) = inner.target.as_ref().filter(|_| inner.in_flight) {
            tracing::debug!(video_id = %video_id, "detaching outstanding delete");
        }
        *inner = Inner {
            epoch: inner.epoch + 1,
            ..Inner::default()
        };
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
