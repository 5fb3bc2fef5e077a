use faultline_core::{ErrorKind, Fault, Violation};

/// Fixed message used whenever a fault falls through to `Internal`
const INTERNAL_MESSAGE: &str = "an internal error occurred";

/// A fault resolved to its taxonomy entry plus response context
///
/// Built by [`Classifier::classify`], consumed by the responder and the
/// dispatcher's log line. The original fault survives in `cause` for
/// logging only; it never reaches the wire.
#[derive(Debug)]
pub struct ClassifiedError {
    pub kind: ErrorKind,
    pub message: String,
    pub violations: Vec<Violation>,
    pub cause: Fault,
}

/// What a matched rule resolved, before the fault is attached as the cause
#[derive(Debug)]
pub struct Resolution {
    pub kind: ErrorKind,
    pub message: String,
    pub violations: Vec<Violation>,
}

impl Resolution {
    fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            violations: Vec::new(),
        }
    }
}

/// A single classification rule
///
/// Returns `Some` when the rule recognizes the fault. Rules are consulted
/// in table order and the first match wins.
pub type Rule = fn(&Fault) -> Option<Resolution>;

/// The built-in rules, exposed so callers can assemble custom tables
pub mod rules {
    use super::{ErrorKind, Fault, Resolution};

    /// Validation aggregates become `InvalidRequest` with field detail
    pub fn validation(fault: &Fault) -> Option<Resolution> {
        let Fault::Validation { violations } = fault else {
            return None;
        };
        Some(Resolution {
            kind: ErrorKind::InvalidRequest,
            message: "validation failed".to_owned(),
            violations: violations.clone(),
        })
    }

    /// Permission and authentication failures both become `AccessDenied`
    pub fn access(fault: &Fault) -> Option<Resolution> {
        match fault {
            Fault::PermissionDenied | Fault::AuthenticationFailed => {
                Some(Resolution::new(ErrorKind::AccessDenied, "access denied"))
            }
            _ => None,
        }
    }

    /// Missing resources become `NotFound`, naming the identifier
    pub fn missing_resource(fault: &Fault) -> Option<Resolution> {
        let Fault::MissingResource { resource } = fault else {
            return None;
        };
        Some(Resolution::new(
            ErrorKind::NotFound,
            format!("resource not found: {resource}"),
        ))
    }

    /// State conflicts become `Conflict`, keeping the caller-safe detail
    pub fn conflict(fault: &Fault) -> Option<Resolution> {
        let Fault::Conflict(detail) = fault else {
            return None;
        };
        Some(Resolution::new(ErrorKind::Conflict, detail.clone()))
    }
}

/// Ordered rule table mapping faults to taxonomy entries
///
/// Pure: the outcome depends only on the fault and the fixed table, so
/// classifying equal faults yields equal results. Unrecognized faults fall
/// through to `Internal` with a generic message.
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Classifier {
    /// Build a classifier from an explicit rule table
    pub const fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The standard table, in priority order
    pub fn with_default_rules() -> Self {
        Self::new(vec![
            rules::validation,
            rules::access,
            rules::missing_resource,
            rules::conflict,
        ])
    }

    /// Resolve a fault to its taxonomy entry; total, never fails
    pub fn classify(&self, fault: Fault) -> ClassifiedError {
        for rule in &self.rules {
            if let Some(resolution) = rule(&fault) {
                return ClassifiedError {
                    kind: resolution.kind,
                    message: resolution.message,
                    violations: resolution.violations,
                    cause: fault,
                };
            }
        }

        ClassifiedError {
            kind: ErrorKind::Internal,
            message: INTERNAL_MESSAGE.to_owned(),
            violations: Vec::new(),
            cause: fault,
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
