//! Client-side navigation between the employee pages.

use std::sync::{Mutex, MutexGuard, PoisonError};

use shared::RoutePath;
use tracing::info;

/// Performs a view transition to one of the known routes
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: RoutePath);
}

/// Tracks the current location and every transition made so far
pub struct Router {
    history: Mutex<Vec<RoutePath>>,
}

impl Router {
    pub fn new(start: RoutePath) -> Self {
        Self {
            history: Mutex::new(vec![start]),
        }
    }

    pub fn current(&self) -> RoutePath {
        self.lock().last().copied().unwrap_or(RoutePath::Login)
    }

    /// Location as a URL fragment, e.g. `#employee/bills`
    pub fn href(&self) -> &'static str {
        self.current().path()
    }

    pub fn history(&self) -> Vec<RoutePath> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RoutePath>> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(RoutePath::Login)
    }
}

impl Navigator for Router {
    fn navigate(&self, route: RoutePath) {
        info!(route = %route, "navigating");
        self.lock().push(route);
    }
}
