use http::StatusCode;

/// Closed set of failure categories used for response mapping
///
/// Every fault a handler raises resolves to exactly one kind, and every
/// kind maps to exactly one HTTP status code. The mapping is consulted
/// only when the error body is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum ErrorKind {
    /// Malformed or failed-validation input
    InvalidRequest,
    /// Requested resource does not exist
    NotFound,
    /// Request conflicts with existing state
    Conflict,
    /// Caller is not allowed to perform the operation
    AccessDenied,
    /// Anything unanticipated
    Internal,
}

impl ErrorKind {
    /// HTTP status code for this kind
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::AccessDenied => StatusCode::FORBIDDEN,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Wire label placed in the `error` field of the response body
    pub const fn label(self) -> &'static str {
        match self {
            Self::InvalidRequest => "InvalidRequest",
            Self::NotFound => "NotFound",
            Self::Conflict => "Conflict",
            Self::AccessDenied => "AccessDenied",
            Self::Internal => "Internal",
        }
    }

    /// Whether the caller may retry the request unchanged
    ///
    /// Every current kind represents a client fault or a permanent server
    /// fault, so none are retryable.
    pub const fn is_retryable(self) -> bool {
        match self {
            Self::InvalidRequest
            | Self::NotFound
            | Self::Conflict
            | Self::AccessDenied
            | Self::Internal => false,
        }
    }
}
