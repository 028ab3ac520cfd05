// src/presentation/detail_page.rs
use std::sync::Arc;

use crate::application::{
    ports::{identity::IdentityProvider, navigation::Navigator, time::Clock},
    services::ApplicationServices,
    workflows::{DeletionError, DeletionWorkflow, DetailAggregator, LoadTicket},
};

use super::view::{DetailPageView, ViewContext};

/// The detail page as the UI sees it: four commands in, one view out.
pub struct VideoDetailPage {
    detail: Arc<DetailAggregator>,
    deletion: Arc<DeletionWorkflow>,
    clock: Arc<dyn Clock>,
    default_avatar_url: String,
}

impl VideoDetailPage {
    pub fn new(
        services: &ApplicationServices,
        identity: Arc<dyn IdentityProvider>,
        navigator: Arc<dyn Navigator>,
        clock: Arc<dyn Clock>,
        default_avatar_url: impl Into<String>,
    ) -> Self {
        let detail = Arc::new(DetailAggregator::new(Arc::clone(&services.video_queries)));
        let deletion = Arc::new(DeletionWorkflow::new(
            Arc::clone(&services.video_commands),
            identity,
            navigator,
        ));

        Self {
            detail,
            deletion,
            clock,
            default_avatar_url: default_avatar_url.into(),
        }
    }

    pub fn detail(&self) -> Arc<DetailAggregator> {
        Arc::clone(&self.detail)
    }

    pub fn deletion(&self) -> Arc<DeletionWorkflow> {
        Arc::clone(&self.deletion)
    }

    pub async fn load_detail(&self, id: &str) -> LoadTicket {
        self.deletion.detach();
        self.detail.load_detail(id).await
    }

    pub fn request_delete(&self) -> Result<(), DeletionError> {
        let state = self.detail.snapshot();
        let Some(video) = state.video.as_ref() else {
            return Err(DeletionError::NotPermitted);
        };
        self.deletion.request_delete(video)
    }

    pub fn cancel_delete(&self) -> Result<(), DeletionError> {
        self.deletion.cancel_delete()
    }

    pub async fn confirm_delete(&self) -> Result<(), DeletionError> {
        self.deletion.confirm_delete().await
    }

    pub fn view(&self) -> DetailPageView {
        let state = self.detail.snapshot();
        let can_delete = state
            .video
            .as_ref()
            .is_some_and(|video| self.deletion.can_request(video));

        DetailPageView::render(
            state,
            ViewContext {
                now: self.clock.now(),
                default_avatar_url: &self.default_avatar_url,
                can_delete,
                deletion: self.deletion.view(),
            },
        )
    }
}
