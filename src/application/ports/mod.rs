// src/application/ports/mod.rs
pub mod identity;
pub mod navigation;
pub mod store;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type DocumentStorePort = dyn store::DocumentStore;
pub type IdentityPort = dyn identity::IdentityProvider;
pub type NavigatorPort = dyn navigation::Navigator;
pub type ClockPort = dyn time::Clock;
