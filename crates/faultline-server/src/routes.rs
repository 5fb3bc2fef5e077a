use std::sync::Arc;

use faultline_dispatch::Handler;

/// Explicitly constructed route registrations
///
/// The embedding application builds the table at setup and hands it to
/// [`crate::Server::new`]; there is no ambient registration. Paths use
/// axum's route syntax and each maps to one handler for every method.
#[derive(Default)]
pub struct RouteTable {
    entries: Vec<(String, Arc<dyn Handler>)>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a path
    #[must_use]
    pub fn route(mut self, path: impl Into<String>, handler: impl Handler + 'static) -> Self {
        self.entries.push((path.into(), Arc::new(handler)));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_entries(self) -> Vec<(String, Arc<dyn Handler>)> {
        self.entries
    }
}
