use faultline_core::Violation;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::classify::ClassifiedError;

/// Field-level detail as it appears on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl From<&Violation> for FieldError {
    fn from(violation: &Violation) -> Self {
        Self {
            field: violation.field.clone(),
            message: violation.message.clone(),
        }
    }
}

/// JSON error body sent for every failed request
///
/// `status` always matches the HTTP status line. Field names follow the
/// wire convention (`fieldErrors`), and the body deserializes back into an
/// equal structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponseBody {
    pub status: u16,
    pub error: String,
    pub message: String,
    pub field_errors: Vec<FieldError>,
    pub path: String,
    pub timestamp: Timestamp,
}

/// Render a classified error into the wire-level body
///
/// Stamps the current instant and the supplied request path. Infallible:
/// `ClassifiedError` is only ever built by the classifier, so there is no
/// malformed input to guard against.
pub fn respond(classified: &ClassifiedError, path: &str) -> ErrorResponseBody {
    ErrorResponseBody {
        status: classified.kind.status_code().as_u16(),
        error: classified.kind.label().to_owned(),
        message: classified.message.clone(),
        field_errors: classified.violations.iter().map(FieldError::from).collect(),
        path: path.to_owned(),
        timestamp: Timestamp::now(),
    }
}
