use std::fmt;

use thiserror::Error;

/// Errors raised while building guard configuration.
///
/// Request handling never fails: a guard either calls the wrapped handler or
/// answers the request itself. These errors only surface when a configured
/// URL or header cannot be carried in an HTTP header.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The login URL is not a valid header value.
    #[error("invalid login URL: {0:?}")]
    InvalidLoginUrl(String),
    /// An anonymous-only redirect target is not a valid header value.
    #[error("invalid redirect target: {0:?}")]
    InvalidRedirectTarget(String),
    /// The AJAX marker header name or value is malformed.
    #[error("invalid AJAX header: {0:?}")]
    InvalidAjaxHeader(String),
}

/// The reason a guard refused to run its handler.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct Violation {
    /// The kind of violation that occurred
    pub kind: ViolationKind,
    /// Human-readable message explaining the violation
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// The kind of guard violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Authentication is required but missing
    Unauthenticated {
        /// Whether the request was made over AJAX
        ajax: bool,
    },
    /// The request was not made over AJAX
    AjaxRequired,
    /// The caller is authenticated but the endpoint is for anonymous users
    AnonymousRequired,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Unauthenticated { .. } => write!(f, "Unauthenticated"),
            ViolationKind::AjaxRequired => write!(f, "AJAX required"),
            ViolationKind::AnonymousRequired => write!(f, "Anonymous required"),
        }
    }
}
