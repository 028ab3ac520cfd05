// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod store;
pub mod time;

pub use store::{GatedDocumentStore, settle};
pub use time::{FixedClock, fixed_now};
