// src/infrastructure/navigation.rs
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::application::ports::navigation::{HistoryMode, Navigator, Route};

#[derive(Default)]
struct History {
    entries: Vec<Route>,
    navigations: usize,
}

/// In-process history stack. `Replace` overwrites the top entry, so the
/// replaced route is gone from back-navigation.
#[derive(Default)]
pub struct HistoryNavigator {
    history: Mutex<History>,
}

impl HistoryNavigator {
    pub fn starting_at(route: Route) -> Self {
        Self {
            history: Mutex::new(History {
                entries: vec![route],
                navigations: 0,
            }),
        }
    }

    pub fn current(&self) -> Option<Route> {
        self.lock().entries.last().cloned()
    }

    pub fn entries(&self) -> Vec<Route> {
        self.lock().entries.clone()
    }

    /// How many times `navigate` has been called.
    pub fn navigation_count(&self) -> usize {
        self.lock().navigations
    }

    /// Goes back one entry, returning the route that becomes current.
    pub fn back(&self) -> Option<Route> {
        let mut history = self.lock();
        if history.entries.len() > 1 {
            history.entries.pop();
        }
        history.entries.last().cloned()
    }

    fn lock(&self) -> MutexGuard<'_, History> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, route: Route, mode: HistoryMode) {
        tracing::debug!(path = %route.path(), ?mode, "navigating");
        let mut history = self.lock();
        history.navigations += 1;
        match mode {
            HistoryMode::Push => history.entries.push(route),
            HistoryMode::Replace => {
                history.entries.pop();
                history.entries.push(route);
            }
        }
    }
}
