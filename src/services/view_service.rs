//! View state service layer: search text, filter and theme.

use super::SharedSession;
use crate::models::{Filter, Theme};
use async_trait::async_trait;
use tracing::debug;

/// View service trait.
#[async_trait]
pub trait ViewService: Send + Sync {
    async fn set_search(&self, search: String);

    async fn set_filter(&self, filter: Filter);

    /// Switch between light and dark; returns the new theme.
    async fn toggle_theme(&self) -> Theme;
}

/// Default implementation of ViewService.
pub struct ViewServiceImpl {
    session: SharedSession,
}

impl ViewServiceImpl {
    /// Create a new view service.
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl ViewService for ViewServiceImpl {
    async fn set_search(&self, search: String) {
        debug!(search = %search, "Search updated");
        self.session.write().await.set_search(search);
    }

    async fn set_filter(&self, filter: Filter) {
        debug!(filter = %filter, "Filter updated");
        self.session.write().await.set_filter(filter);
    }

    async fn toggle_theme(&self) -> Theme {
        let theme = self.session.write().await.toggle_theme();
        debug!(theme = %theme, "Theme toggled");
        theme
    }
}
