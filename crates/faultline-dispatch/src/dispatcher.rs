use std::future::Future;

use async_trait::async_trait;
use axum::Json;
use axum::extract::Request;
use axum::response::{IntoResponse, Response};
use faultline_core::{ErrorKind, Fault};

use crate::classify::{ClassifiedError, Classifier};
use crate::commit::CommitGuard;
use crate::respond::respond;

/// A route handler supplied by the surrounding application
///
/// Returns a success response or raises a [`Fault`]. The dispatcher does
/// not interpret success values. Handlers that stream or otherwise emit
/// output early must commit through the guard so a later failure is caught
/// as a double write instead of corrupting the stream.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, request: Request, guard: &CommitGuard) -> Result<Response, Fault>;
}

/// Adapter turning a plain async function into a [`Handler`]
///
/// Function handlers never commit early; the guard stays with the
/// dispatcher.
pub struct HandlerFn<F>(F);

/// Wrap an async `Fn(Request) -> Result<Response, Fault>` as a handler
pub fn handler_fn<F, Fut>(f: F) -> HandlerFn<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Response, Fault>> + Send,
{
    HandlerFn(f)
}

#[async_trait]
impl<F, Fut> Handler for HandlerFn<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Response, Fault>> + Send,
{
    async fn handle(&self, request: Request, _guard: &CommitGuard) -> Result<Response, Fault> {
        (self.0)(request).await
    }
}

/// Per-request wrapper guaranteeing exactly one well-formed response
///
/// Wraps exactly one handler invocation. On success the handler's response
/// passes through untouched; on failure the fault is logged, classified
/// once, rendered once, and committed once. Faults never cross this
/// boundary.
#[derive(Default)]
pub struct Dispatcher {
    classifier: Classifier,
}

impl Dispatcher {
    /// Build a dispatcher around an explicitly constructed rule table
    pub const fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    /// Run one handler invocation to a committed response
    pub async fn dispatch(&self, request: Request, handler: &dyn Handler) -> Response {
        let path = request.uri().path().to_owned();
        let guard = CommitGuard::new();

        match handler.handle(request, &guard).await {
            Ok(response) => guard.commit(response),
            Err(fault) => {
                let classified = self.classifier.classify(fault);
                log_fault(&classified, &path);

                let body = respond(&classified, &path);
                let status = classified.kind.status_code();
                guard.commit((status, Json(body)).into_response())
            }
        }
    }
}

/// Surface the raw fault in the server log; the wire body never sees it
fn log_fault(classified: &ClassifiedError, path: &str) {
    if classified.kind == ErrorKind::Internal {
        tracing::error!(path = %path, cause = ?classified.cause, "request failed");
    } else {
        tracing::warn!(
            path = %path,
            kind = classified.kind.label(),
            error = %classified.cause,
            "request failed"
        );
    }
}
