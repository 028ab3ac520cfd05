// src/application/workflows/detail.rs
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use crate::{
    application::{
        error::{ApplicationError, ErrorKind},
        queries::videos::{
            GetOwnerProfileQuery, GetVideoQuery, ListRecommendationCandidatesQuery,
            VideoQueryService,
        },
    },
    domain::{
        user::UserProfile,
        video::{RecommendationSet, Video, VideoId, select_recommendations},
    },
};

/// Blocking error shown in place of the page when the video itself cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetailError {
    #[error("video not found: {0}")]
    NotFound(String),
    #[error("video could not be loaded: {0}")]
    Store(String),
}

impl DetailError {
    fn from_application(err: &ApplicationError) -> Self {
        match err.kind() {
            ErrorKind::NotFound | ErrorKind::Validation => Self::NotFound(err.to_string()),
            ErrorKind::Forbidden | ErrorKind::Store => Self::Store(err.to_string()),
        }
    }
}

/// Everything the detail page may render.
///
/// `error` is only ever set by a failed primary fetch, and then every data
/// field is absent. Secondary sections stay `None` while their fetch is
/// outstanding or after it failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailViewState {
    pub video_id: Option<VideoId>,
    pub loading: bool,
    pub video: Option<Video>,
    pub owner: Option<UserProfile>,
    pub recommendations: Option<RecommendationSet>,
    pub error: Option<DetailError>,
}

impl DetailViewState {
    fn loading(video_id: VideoId) -> Self {
        Self {
            video_id: Some(video_id),
            loading: true,
            ..Self::default()
        }
    }

    fn failed(video_id: Option<VideoId>, error: DetailError) -> Self {
        Self {
            video_id,
            error: Some(error),
            ..Self::default()
        }
    }
}

/// Handle for one `load_detail` call. Results are committed only while its
/// generation is still the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    video_id: Option<VideoId>,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Default)]
struct Inner {
    generation: u64,
    view: DetailViewState,
}

pub struct DetailAggregator {
    queries: Arc<VideoQueryService>,
    inner: Mutex<Inner>,
}

impl DetailAggregator {
    pub fn new(queries: Arc<VideoQueryService>) -> Self {
        Self {
            queries,
            inner: Mutex::new(Inner::default()),
        }
    }

    pub fn snapshot(&self) -> DetailViewState {
        self.lock().view.clone()
    }

    pub fn current_generation(&self) -> u64 {
        self.lock().generation
    }

    /// Starts over for `id` and drives every fetch to completion.
    pub async fn load_detail(&self, id: &str) -> LoadTicket {
        let ticket = self.begin(id);
        self.resolve(&ticket).await;
        ticket
    }

    /// Resets the state for `id` and supersedes any earlier load. An id that
    /// cannot name a video fails immediately.
    pub fn begin(&self, id: &str) -> LoadTicket {
        let mut inner = self.lock();
        inner.generation += 1;
        let generation = inner.generation;

        match VideoId::new(id) {
            Ok(video_id) => {
                tracing::debug!(video_id = %video_id, generation, "loading video detail");
                inner.view = DetailViewState::loading(video_id.clone());
                LoadTicket {
                    generation,
                    video_id: Some(video_id),
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, generation, "rejected video id");
                let error = DetailError::from_application(&ApplicationError::from(err));
                inner.view = DetailViewState::failed(None, error);
                LoadTicket {
                    generation,
                    video_id: None,
                }
            }
        }
    }

    /// Runs the fetches for `ticket`: video first, then recommendations and
    /// owner side by side. Each result lands on its own as soon as it arrives.
    pub async fn resolve(&self, ticket: &LoadTicket) {
        let Some(video_id) = ticket.video_id.clone() else {
            return;
        };

        let video = match self
            .queries
            .get_video(GetVideoQuery {
                id: video_id.clone(),
            })
            .await
        {
            Ok(video) => video,
            Err(err) => {
                tracing::warn!(video_id = %video_id, error = %err, "video fetch failed");
                let error = DetailError::from_application(&err);
                self.commit(ticket, "video", move |view| {
                    *view = DetailViewState::failed(Some(video_id), error);
                });
                return;
            }
        };

        let committed = self.commit(ticket, "video", |view| {
            view.video = Some(video.clone());
            view.loading = false;
        });
        if !committed {
            return;
        }

        let recommendations = self.resolve_recommendations(ticket, &video);
        let owner = self.resolve_owner(ticket, &video);
        tokio::join!(recommendations, owner);
    }

    async fn resolve_recommendations(&self, ticket: &LoadTicket, subject: &Video) {
        let query = ListRecommendationCandidatesQuery {
            category: subject.category.clone(),
            exclude: subject.id.clone(),
        };
        match self.queries.get_recommendations(query).await {
            Ok(candidates) => {
                let set = select_recommendations(subject, candidates);
                self.commit(ticket, "recommendations", move |view| {
                    view.recommendations = Some(set);
                });
            }
            Err(err) => {
                tracing::warn!(
                    video_id = %subject.id,
                    error = %err,
                    "recommendation fetch failed, omitting section"
                );
            }
        }
    }

    async fn resolve_owner(&self, ticket: &LoadTicket, subject: &Video) {
        let query = GetOwnerProfileQuery {
            user_id: subject.owner_id.clone(),
        };
        match self.queries.get_owner(query).await {
            Ok(profile) => {
                self.commit(ticket, "owner", move |view| {
                    view.owner = Some(profile);
                });
            }
            Err(err) => {
                tracing::warn!(
                    video_id = %subject.id,
                    owner_id = %subject.owner_id,
                    error = %err,
                    "owner fetch failed, omitting section"
                );
            }
        }
    }

    fn commit<F>(&self, ticket: &LoadTicket, what: &'static str, apply: F) -> bool
    where
        F: FnOnce(&mut DetailViewState),
    {
        let mut inner = self.lock();
        if inner.generation != ticket.generation {
            tracing::debug!(
                stale = ticket.generation,
                current = inner.generation,
                what,
                "discarding stale response"
            );
            return false;
        }
        apply(&mut inner.view);
        true
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
