//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::DirectoryQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Source of the displayed roster.
    pub directory: Arc<dyn DirectoryQuery>,
}

impl HttpState {
    /// Construct state around a roster source.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::FixtureDirectoryQuery;
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureDirectoryQuery));
    /// let _directory = state.directory.clone();
    /// ```
    pub fn new(directory: Arc<dyn DirectoryQuery>) -> Self {
        Self { directory }
    }
}
