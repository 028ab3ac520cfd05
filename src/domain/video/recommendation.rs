// src/domain/video/recommendation.rs
use crate::domain::video::entity::Video;
use std::cmp::Reverse;

/// Videos related to a subject: same category, never the subject itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationSet(Vec<Video>);

impl RecommendationSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Video> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<Video> {
        self.0
    }
}

impl<'a> IntoIterator for &'a RecommendationSet {
    type Item = &'a Video;
    type IntoIter = std::slice::Iter<'a, Video>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Builds the recommendation set for `subject` out of whatever the store
/// returned. The store query already filters by category and excludes the
/// subject, but the result is not trusted: this is where both rules hold.
/// Newest uploads come first.
pub fn select_recommendations(subject: &Video, candidates: Vec<Video>) -> RecommendationSet {
    let offered = candidates.len();
    let mut selected: Vec<Video> = candidates
        .into_iter()
        .filter(|candidate| candidate.id != subject.id)
        .filter(|candidate| candidate.category == subject.category)
        .collect();

    let dropped = offered - selected.len();
    if dropped > 0 {
        tracing::debug!(
            video_id = %subject.id,
            dropped,
            "dropped candidates that were the subject or outside its category"
        );
    }

    selected.sort_by_key(|video| Reverse((video.id.timestamp_millis(), video.id.clone())));
    RecommendationSet(selected)
}
