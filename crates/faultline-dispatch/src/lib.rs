#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

mod classify;
mod commit;
mod dispatcher;
mod respond;

pub use classify::{ClassifiedError, Classifier, Resolution, Rule, rules};
pub use commit::CommitGuard;
pub use dispatcher::{Dispatcher, Handler, HandlerFn, handler_fn};
pub use respond::{ErrorResponseBody, FieldError, respond};
