//! Completion notifications from the styling layer.

use crate::core::NodeRef;
use serde::{Deserialize, Serialize};

/// A `transitionend` notification delivered by the host.
///
/// The completion listener sits on the page-group container, so events from
/// the container and from any page bubble up to it. Events on the root
/// element never reach it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEnd {
    pub target: NodeRef,
    /// CSS property whose transition finished
    pub property: String,
}

impl TransitionEnd {
    pub fn new(target: NodeRef, property: impl Into<String>) -> Self {
        Self {
            target,
            property: property.into(),
        }
    }

    /// Shorthand for the container finishing its transform transition.
    pub fn container() -> Self {
        Self::new(NodeRef::Container, "transform")
    }

    pub fn reaches_container(&self) -> bool {
        !matches!(self.target, NodeRef::Root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_events_bubble_to_container() {
        let from_page = TransitionEnd::new(NodeRef::Page(2), "opacity");
        let from_root = TransitionEnd::new(NodeRef::Root, "width");

        assert!(from_page.reaches_container());
        assert!(TransitionEnd::container().reaches_container());
        assert!(!from_root.reaches_container());
    }
}
