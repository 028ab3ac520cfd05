// src/presentation/mod.rs
pub mod age;
pub mod detail_page;
pub mod view;

pub use detail_page::VideoDetailPage;
pub use view::DetailPageView;
