//! Errors raised by the controller surface.
//!
//! Every error is raised before the stage is touched.

use thiserror::Error;

/// Missing or mistyped call arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("missing page id")]
    MissingPageId,

    #[error("invalid page id argument (string expected)")]
    InvalidPageId,

    #[error("invalid transition type argument (string expected)")]
    InvalidTransitionKind,

    #[error("too many arguments: expected at most 2, got {0}")]
    TooManyArguments(usize),
}

/// Errors from `PageController::transit` and friends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    /// `None` when no kind was supplied at all.
    #[error("invalid transition type '{}'", .kind.as_deref().unwrap_or("<missing>"))]
    UnknownTransition { kind: Option<String> },

    #[error("transition to '{target}' rejected: a transition is still running")]
    InProgress { target: String },
}

impl From<crate::core::UnknownKind> for TransitError {
    fn from(err: crate::core::UnknownKind) -> Self {
        TransitError::UnknownTransition { kind: Some(err.0) }
    }
}

/// Errors from attaching the plugin to an element.
#[derive(Debug, Error)]
pub enum AttachError {
    #[error("invalid arguments")]
    InvalidArguments,

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
