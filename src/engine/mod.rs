//! Transition engine.
//!
//! Every animated kind is a three-phase routine over a [`Stage`]:
//!
//! - **Setup** applies sizes, offsets, and positional marks synchronously
//! - **Trigger** applies the class or transform the stylesheet animates
//! - **Settle** runs once the styling layer reports completion and strips
//!   every transient class and style, flipping active/disabled
//!
//! The engine keeps no state between phases. Everything Settle needs is in
//! the [`Descriptor`], which the controller parks in a one-shot
//! [`Subscription`] until the completion notification arrives.

mod event;
mod flip;
mod slide;
mod subscription;
mod swap;

pub use event::TransitionEnd;
pub use subscription::{Subscription, SubscriptionId};

use crate::core::{Size, Stage, TransitionKind};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Everything one transit call resolved up front.
///
/// `from` and `to` are page indices; `None` is an empty selection and the
/// mutations meant for it touch nothing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    pub kind: TransitionKind,
    pub from: Option<usize>,
    pub to: Option<usize>,
    /// Root size measured when the call was made
    pub geometry: Size,
}

impl Descriptor {
    /// Resolve from/to pages and snapshot the geometry.
    pub fn resolve(stage: &Stage, data_name: &str, page_id: &str, kind: TransitionKind) -> Self {
        Self {
            kind,
            from: stage.active_index(),
            to: stage.find(data_name, page_id),
            geometry: stage.size(),
        }
    }

    /// Kind actually performed. Transiting to the page that is already
    /// active switches instantly whatever was requested.
    pub fn effective_kind(&self) -> TransitionKind {
        if self.from.is_some() && self.from == self.to {
            TransitionKind::None
        } else {
            self.kind
        }
    }
}

/// Where a transit call left the stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    /// The stage is already at rest.
    Settled,
    /// Trigger was applied; Settle must run on completion.
    Triggered,
}

/// Run Setup and Trigger for the descriptor's kind.
pub fn begin(stage: &mut Stage, descriptor: &Descriptor) -> Progress {
    match descriptor.effective_kind() {
        TransitionKind::None => {
            swap::apply(stage, descriptor);
            Progress::Settled
        }
        TransitionKind::SlideFrom(edge) => {
            trace!(%edge, "slide setup");
            slide::setup(stage, descriptor, edge);
            trace!(%edge, "slide trigger");
            slide::trigger(stage, descriptor, edge);
            Progress::Triggered
        }
        TransitionKind::FlipTowards(side) => {
            trace!(%side, "flip setup");
            flip::setup(stage, descriptor);
            trace!(%side, "flip trigger");
            flip::trigger(stage, side);
            Progress::Triggered
        }
    }
}

/// Run Settle for a previously triggered descriptor.
pub fn settle(stage: &mut Stage, descriptor: &Descriptor) {
    match descriptor.effective_kind() {
        TransitionKind::None => {}
        TransitionKind::SlideFrom(edge) => {
            trace!(%edge, "slide settle");
            slide::settle(stage, descriptor, edge);
        }
        TransitionKind::FlipTowards(side) => {
            trace!(%side, "flip settle");
            flip::settle(stage, descriptor, side);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Edge, Page, Side};

    fn stage() -> Stage {
        Stage::attach(
            Size::new(320.0, 480.0),
            vec![Page::tagged("page", "a"), Page::tagged("page", "b")],
        )
    }

    #[test]
    fn resolve_snapshots_pages_and_geometry() {
        let stage = stage();
        let d = Descriptor::resolve(&stage, "page", "b", TransitionKind::None);
        assert_eq!(d.from, Some(0));
        assert_eq!(d.to, Some(1));
        assert_eq!(d.geometry, Size::new(320.0, 480.0));
    }

    #[test]
    fn resolve_unknown_target_is_empty_selection() {
        let stage = stage();
        let d = Descriptor::resolve(&stage, "page", "missing", TransitionKind::None);
        assert_eq!(d.to, None);
    }

    #[test]
    fn same_page_transit_is_immediate() {
        let mut stage = stage();
        let before = stage.clone();
        let d = Descriptor::resolve(
            &stage,
            "page",
            "a",
            TransitionKind::SlideFrom(Edge::Right),
        );
        assert_eq!(d.effective_kind(), TransitionKind::None);
        assert_eq!(begin(&mut stage, &d), Progress::Settled);
        assert_eq!(stage, before);
    }

    #[test]
    fn animated_kinds_report_triggered() {
        for kind in [
            TransitionKind::SlideFrom(Edge::Top),
            TransitionKind::FlipTowards(Side::Left),
        ] {
            let mut stage = stage();
            let d = Descriptor::resolve(&stage, "page", "b", kind);
            assert_eq!(begin(&mut stage, &d), Progress::Triggered);
        }
    }
}
