//! Rest-state invariant violations.

use crate::core::{NodeRef, PageClass, StyleProperty};
use thiserror::Error;

/// A way in which a stage is not at rest.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvariantViolation {
    #[error("no page is active")]
    NoActivePage,

    #[error("{count} pages are active (expected exactly one)")]
    MultipleActivePages { count: usize },

    #[error("{node:?} still carries transient class '{class}'")]
    TransientClass { node: NodeRef, class: PageClass },

    #[error("{node:?} still has inline '{property}' set")]
    TransientStyle { node: NodeRef, property: StyleProperty },

    #[error("page {index} is both active and disabled")]
    ConflictingFlags { index: usize },

    #[error("a transition is still awaiting completion")]
    TransitionPending,
}
