use std::sync::atomic::{AtomicBool, Ordering};

use axum::response::Response;

/// One-shot guard around response emission
///
/// Committing is irreversible: the first writer wins and any later commit
/// is a programming error that fails loudly instead of corrupting the
/// output stream. One guard exists per dispatched request.
#[derive(Debug, Default)]
pub struct CommitGuard {
    committed: AtomicBool,
}

impl CommitGuard {
    pub const fn new() -> Self {
        Self {
            committed: AtomicBool::new(false),
        }
    }

    /// Mark the response as committed and pass it through
    ///
    /// # Panics
    ///
    /// Panics if a response was already committed for this request.
    pub fn commit(&self, response: Response) -> Response {
        if self.committed.swap(true, Ordering::SeqCst) {
            panic!("response already committed for this request");
        }
        response
    }

    /// Whether a response has been committed
    pub fn is_committed(&self) -> bool {
        self.committed.load(Ordering::SeqCst)
    }
}
