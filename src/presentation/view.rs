// src/presentation/view.rs
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::{
    dto::{UserProfileDto, VideoDto},
    ports::navigation::Route,
    workflows::{DeletionView, DetailViewState},
};

use super::age::humanize_age;

/// Serializable snapshot of the whole detail page.
///
/// When `error` is set the page shows nothing else: `video`, `owner` and
/// `recommendations` are all absent. An empty recommendation list is
/// rendered as absent so the section is left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailPageView {
    pub video_id: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub video: Option<VideoDto>,
    pub uploaded: Option<String>,
    pub owner: Option<OwnerView>,
    pub recommendations: Option<Vec<VideoDto>>,
    pub can_delete: bool,
    pub deletion: DeletionView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerView {
    #[serde(flatten)]
    pub profile: UserProfileDto,
    pub profile_path: String,
}

pub(super) struct ViewContext<'a> {
    pub now: DateTime<Utc>,
    pub default_avatar_url: &'a str,
    pub can_delete: bool,
    pub deletion: DeletionView,
}

impl DetailPageView {
    pub(super) fn render(state: DetailViewState, ctx: ViewContext<'_>) -> Self {
        let DetailViewState {
            video_id,
            loading,
            video,
            owner,
            recommendations,
            error,
        } = state;

        let video_id = video_id.map(|id| id.into_inner());

        if let Some(error) = error {
            return Self {
                video_id,
                loading: false,
                error: Some(error.to_string()),
                video: None,
                uploaded: None,
                owner: None,
                recommendations: None,
                can_delete: false,
                deletion: ctx.deletion,
            };
        }

        let uploaded = video
            .as_ref()
            .and_then(|video| video.created_at())
            .map(|created_at| humanize_age(created_at, ctx.now));

        let owner = owner.map(|profile| {
            let profile_path = Route::UserDetail(profile.id.clone()).path();
            let mut profile = UserProfileDto::from(profile);
            if profile.avatar_url.is_none() {
                profile.avatar_url = Some(ctx.default_avatar_url.to_string());
            }
            OwnerView {
                profile,
                profile_path,
            }
        });

        let recommendations = recommendations
            .filter(|set| !set.is_empty())
            .map(|set| set.into_inner().into_iter().map(VideoDto::from).collect());

        Self {
            video_id,
            loading,
            error: None,
            can_delete: ctx.can_delete && video.is_some(),
            video: video.map(VideoDto::from),
            uploaded,
            owner,
            recommendations,
            deletion: ctx.deletion,
        }
    }
}
