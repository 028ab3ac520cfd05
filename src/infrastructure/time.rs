// src/infrastructure/time.rs
use chrono::{DateTime, Utc};

use crate::application::ports::time::Clock;

/// Wall clock used by the binary when rendering upload ages.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
