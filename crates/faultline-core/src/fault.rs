use thiserror::Error;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Name of the offending field
    pub field: String,
    /// What was wrong with it
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Failure value raised by a route handler
///
/// The tagged variants form the known set the classifier recognizes.
/// `Other` is the extensible tail: any application error converts into it
/// via `anyhow` and degrades to an internal error at the boundary.
#[derive(Debug, Error)]
pub enum Fault {
    /// Aggregate of field-level validation failures
    #[error("validation failed")]
    Validation {
        /// The individual violations, in the order they were detected
        violations: Vec<Violation>,
    },

    /// Caller is authenticated but not allowed to do this
    #[error("permission denied")]
    PermissionDenied,

    /// Caller identity could not be established
    #[error("authentication failed")]
    AuthenticationFailed,

    /// A referenced resource does not exist
    #[error("resource not found: {resource}")]
    MissingResource {
        /// Identifier of the missing resource
        resource: String,
    },

    /// Request conflicts with existing state; the message is caller-safe
    #[error("{0}")]
    Conflict(String),

    /// Unrecognized failure; detail is never exposed to the caller
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Fault {
    /// Build a validation aggregate from `(field, message)` pairs
    pub fn validation<F, M>(violations: impl IntoIterator<Item = (F, M)>) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Self::Validation {
            violations: violations
                .into_iter()
                .map(|(field, message)| Violation::new(field, message))
                .collect(),
        }
    }

    /// Build a missing-resource fault carrying the resource identifier
    pub fn missing_resource(resource: impl Into<String>) -> Self {
        Self::MissingResource {
            resource: resource.into(),
        }
    }
}
