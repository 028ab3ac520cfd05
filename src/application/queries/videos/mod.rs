mod get_by_id;
mod owner;
mod recommendations;
mod service;

pub use get_by_id::GetVideoQuery;
pub use owner::GetOwnerProfileQuery;
pub use recommendations::ListRecommendationCandidatesQuery;
pub use service::VideoQueryService;
