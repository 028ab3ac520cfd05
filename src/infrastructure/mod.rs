pub mod database;
pub mod identity;
pub mod navigation;
pub mod repositories;
pub mod store;
pub mod time;
