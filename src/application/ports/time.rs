// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for relative upload ages, swapped for a fixed instant in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
