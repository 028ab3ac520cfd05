// tests/support/builders.rs
use std::sync::Arc;

use serde_json::{Value, json};
use video_detail_core::application::ports::navigation::Route;
use video_detail_core::application::services::ApplicationServices;
use video_detail_core::application::workflows::{DeletionWorkflow, DetailAggregator};
use video_detail_core::config::DEFAULT_AVATAR_URL;
use video_detail_core::domain::user::UserId;
use video_detail_core::infrastructure::identity::SessionIdentity;
use video_detail_core::infrastructure::navigation::HistoryNavigator;
use video_detail_core::infrastructure::repositories::{
    DocumentUserProfileRepository, DocumentVideoRepository,
};
use video_detail_core::presentation::VideoDetailPage;

use super::mocks::{FixedClock, GatedDocumentStore};

pub const VIDEOS: &str = "videos";
pub const USERS: &str = "users";

pub fn video_doc(id: &str, category: &str, owner: &str) -> Value {
    json!({
        "id": id,
        "title": format!("video {id}"),
        "content": "<p>description</p>",
        "category": category,
        "location": "Reykjavik",
        "videoUrl": format!("https://cdn.example/{id}.mp4"),
        "userId": owner,
    })
}

pub fn user_doc(uid: &str, display_name: &str) -> Value {
    json!({
        "uid": uid,
        "displayName": display_name,
    })
}

pub fn user_id(value: &str) -> UserId {
    UserId::new(value).expect("valid user id")
}

/// Store, repositories and ports wired together the way the binary does it.
pub struct Fixture {
    pub store: Arc<GatedDocumentStore>,
    pub services: ApplicationServices,
    pub identity: Arc<SessionIdentity>,
    pub navigator: Arc<HistoryNavigator>,
}

impl Fixture {
    pub fn new() -> Self {
        let store = Arc::new(GatedDocumentStore::new());
        let videos = Arc::new(DocumentVideoRepository::new(store.clone()));
        let users = Arc::new(DocumentUserProfileRepository::new(store.clone()));
        let services = ApplicationServices::new(videos.clone(), videos, users);

        Self {
            store,
            services,
            identity: Arc::new(SessionIdentity::anonymous()),
            navigator: Arc::new(HistoryNavigator::starting_at(Route::Home)),
        }
    }

    pub fn signed_in(user: &str) -> Self {
        let fixture = Self::new();
        fixture.identity.sign_in(user_id(user));
        fixture
    }

    pub fn seed_video(&self, id: &str, category: &str, owner: &str) {
        self.store.insert(VIDEOS, id, video_doc(id, category, owner));
    }

    pub fn seed_user(&self, uid: &str, display_name: &str) {
        self.store.insert(USERS, uid, user_doc(uid, display_name));
    }

    /// The scenario most tests start from: a nature video by `u1` and two siblings.
    pub fn seed_nature_scene(&self) {
        self.seed_video("1700000000000", "nature", "u1");
        self.seed_video("1700000000001", "nature", "u2");
        self.seed_video("1700000000002", "nature", "u1");
        self.seed_video("1700000000003", "music", "u1");
        self.seed_user("u1", "Ada");
        self.seed_user("u2", "Grace");
    }

    pub fn aggregator(&self) -> Arc<DetailAggregator> {
        Arc::new(DetailAggregator::new(self.services.video_queries.clone()))
    }

    pub fn deletion(&self) -> Arc<DeletionWorkflow> {
        Arc::new(DeletionWorkflow::new(
            self.services.video_commands.clone(),
            self.identity.clone(),
            self.navigator.clone(),
        ))
    }

    pub fn page(&self) -> VideoDetailPage {
        VideoDetailPage::new(
            &self.services,
            self.identity.clone(),
            self.navigator.clone(),
            Arc::new(FixedClock),
            DEFAULT_AVATAR_URL,
        )
    }
}
