//! Per-element controller and the attach/lookup surface.
//!
//! A [`PageController`] owns the explicit state of one attached element and
//! is the only entry point for transitions. Host bindings keep controllers in
//! a [`Registry`] keyed by element.

mod args;
mod error;
mod options;
mod registry;

pub use args::TransitArgs;
pub use error::{ArgumentError, AttachError, TransitError};
pub use options::PageOptions;
pub use registry::{ElementId, Mount, Registry};

use crate::core::{Page, Size, Stage, TransitHistory, TransitRecord, TransitionKind};
use crate::engine::{self, Descriptor, Progress, Subscription, SubscriptionId, TransitionEnd};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace, warn};

/// A triggered transition waiting for its completion notification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingTransit {
    pub descriptor: Descriptor,
    pub started_at: DateTime<Utc>,
}

/// What a transit call left behind.
#[derive(Clone, Debug, PartialEq)]
pub enum TransitOutcome {
    /// Switched synchronously; the stage is already at rest.
    Completed(TransitRecord),
    /// Trigger applied; settles on the next completion notification.
    Pending(SubscriptionId),
}

/// Controller of one attached element.
///
/// # Example
///
/// ```rust
/// use page_transit::controller::{ElementId, PageController, PageOptions, TransitOutcome};
/// use page_transit::core::{Page, PageState, Size};
/// use page_transit::engine::TransitionEnd;
///
/// let mut pages = PageController::attach(
///     ElementId::new(),
///     Size::new(320.0, 480.0),
///     vec![Page::tagged("page", "home"), Page::tagged("page", "detail")],
///     PageOptions::default(),
/// );
///
/// let outcome = pages.transit_named("detail", "slide-in-from-right").unwrap();
/// assert!(matches!(outcome, TransitOutcome::Pending(_)));
/// assert!(pages.is_transitioning());
///
/// let record = pages.notify(&TransitionEnd::container()).unwrap();
/// assert_eq!(record.to.as_deref(), Some("detail"));
/// assert_eq!(pages.stage().pages[1].state(), PageState::Active);
/// ```
#[derive(Debug)]
pub struct PageController {
    pub(crate) id: ElementId,
    pub(crate) options: PageOptions,
    pub(crate) stage: Stage,
    pub(crate) completion: Subscription<PendingTransit>,
    pub(crate) history: TransitHistory,
}

impl PageController {
    /// Wrap an element model as-is.
    pub fn new(id: ElementId, stage: Stage, options: PageOptions) -> Self {
        Self {
            id,
            options,
            stage,
            completion: Subscription::new(),
            history: TransitHistory::new(),
        }
    }

    /// Seed the page group (first page active, the rest disabled) and wrap it.
    pub fn attach(id: ElementId, size: Size, pages: Vec<Page>, options: PageOptions) -> Self {
        debug!(
            element = %id,
            pages = pages.len(),
            data_name = %options.data_name,
            "attaching page group"
        );
        Self::new(id, Stage::attach(size, pages), options)
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn options(&self) -> &PageOptions {
        &self.options
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn history(&self) -> &TransitHistory {
        &self.history
    }

    pub fn is_transitioning(&self) -> bool {
        self.completion.is_armed()
    }

    pub fn pending(&self) -> Option<&PendingTransit> {
        self.completion.pending()
    }

    /// Record a new rendered size of the root element.
    ///
    /// A running transition keeps the size it measured when it started.
    pub fn resize(&mut self, size: Size) {
        trace!(element = %self.id, width = size.width, height = size.height, "resize");
        self.stage.set_size(size);
    }

    /// Transit to the page whose identifier is `page_id`.
    ///
    /// An unknown `page_id` is not an error: the current page is deactivated
    /// and nothing replaces it.
    pub fn transit(
        &mut self,
        page_id: &str,
        kind: TransitionKind,
    ) -> Result<TransitOutcome, TransitError> {
        if self.completion.is_armed() {
            warn!(element = %self.id, page_id, "transit rejected while a transition is running");
            return Err(TransitError::InProgress {
                target: page_id.to_string(),
            });
        }

        let descriptor = Descriptor::resolve(&self.stage, &self.options.data_name, page_id, kind);
        if descriptor.to.is_none() {
            warn!(
                element = %self.id,
                page_id,
                attribute = %self.options.attribute_name(),
                "no page matches target id; current page will be left without replacement"
            );
        }
        debug!(
            element = %self.id,
            page_id,
            %kind,
            width = descriptor.geometry.width,
            height = descriptor.geometry.height,
            "transit"
        );

        let started_at = Utc::now();
        match engine::begin(&mut self.stage, &descriptor) {
            Progress::Settled => Ok(TransitOutcome::Completed(
                self.complete(&descriptor, started_at),
            )),
            Progress::Triggered => {
                let id = self
                    .completion
                    .arm(PendingTransit {
                        descriptor,
                        started_at,
                    })
                    .map_err(|_| TransitError::InProgress {
                        target: page_id.to_string(),
                    })?;
                trace!(element = %self.id, subscription = %id, "awaiting transition end");
                Ok(TransitOutcome::Pending(id))
            }
        }
    }

    /// Like [`transit`](Self::transit), parsing the kind name first.
    pub fn transit_named(
        &mut self,
        page_id: &str,
        kind: &str,
    ) -> Result<TransitOutcome, TransitError> {
        let kind: TransitionKind = kind.parse()?;
        self.transit(page_id, kind)
    }

    /// Transit from a loosely typed argument list `[pageId, kind?]`.
    ///
    /// Leaving out the kind is rejected as an unknown transition.
    pub fn transit_args(&mut self, args: &[Value]) -> Result<TransitOutcome, TransitError> {
        let args = TransitArgs::from_values(args)?;
        let kind = args
            .kind
            .ok_or(TransitError::UnknownTransition { kind: None })?;
        self.transit_named(&args.page_id, &kind)
    }

    /// Deliver a completion notification.
    ///
    /// Settles the running transition on the first notification that
    /// reaches the container and returns its record. Anything else is
    /// ignored.
    pub fn notify(&mut self, event: &TransitionEnd) -> Option<TransitRecord> {
        if !event.reaches_container() || self.stage.element(event.target).is_none() {
            trace!(element = %self.id, ?event, "event does not reach the container");
            return None;
        }
        let Some((id, pending)) = self.completion.fire() else {
            trace!(element = %self.id, ?event, "no transition awaiting completion");
            return None;
        };
        trace!(element = %self.id, subscription = %id, property = %event.property, "settling");
        engine::settle(&mut self.stage, &pending.descriptor);
        Some(self.complete(&pending.descriptor, pending.started_at))
    }

    /// Destroy the controller with its element, dropping any armed
    /// completion handler.
    pub fn teardown(mut self) -> Stage {
        if let Some(id) = self.completion.id() {
            warn!(element = %self.id, subscription = %id, "torn down mid-transition");
            self.completion.cancel(id);
        }
        self.stage
    }

    fn page_id(&self, index: Option<usize>) -> Option<String> {
        index
            .and_then(|i| self.stage.pages.get(i))
            .and_then(|p| p.identifier(&self.options.data_name))
            .map(str::to_string)
    }

    fn complete(&mut self, descriptor: &Descriptor, started_at: DateTime<Utc>) -> TransitRecord {
        let record = TransitRecord {
            from: self.page_id(descriptor.from),
            to: self.page_id(descriptor.to),
            kind: descriptor.effective_kind(),
            started_at,
            settled_at: Utc::now(),
        };
        debug!(
            element = %self.id,
            from = ?record.from,
            to = ?record.to,
            kind = %record.kind,
            elapsed_ms = record.elapsed().as_millis() as u64,
            "transit complete"
        );
        self.history = self.history.record(record.clone());
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Edge, PageClass, PageState, Side, Translate};
    use serde_json::json;

    fn controller(ids: &[&str]) -> PageController {
        PageController::attach(
            ElementId::new(),
            Size::new(320.0, 480.0),
            ids.iter().map(|id| Page::tagged("page", id)).collect(),
            PageOptions::default(),
        )
    }

    #[test]
    fn new_does_not_touch_stage() {
        let stage = Stage::new(Size::default(), vec![Page::tagged("page", "a")]);
        let controller =
            PageController::new(ElementId::new(), stage.clone(), PageOptions::default());
        assert_eq!(controller.stage(), &stage);
    }

    #[test]
    fn none_completes_synchronously() {
        let mut pages = controller(&["a", "b"]);
        let outcome = pages.transit("b", TransitionKind::None).unwrap();

        let TransitOutcome::Completed(record) = outcome else {
            panic!("expected immediate completion");
        };
        assert_eq!(record.from.as_deref(), Some("a"));
        assert_eq!(record.to.as_deref(), Some("b"));
        assert!(!pages.is_transitioning());
        assert_eq!(pages.history().records().len(), 1);
    }

    #[test]
    fn overlapping_transit_is_rejected_without_mutation() {
        let mut pages = controller(&["a", "b", "c"]);
        pages
            .transit("b", TransitionKind::FlipTowards(Side::Left))
            .unwrap();
        let during = pages.stage().clone();

        let err = pages.transit("c", TransitionKind::None).unwrap_err();
        assert_eq!(
            err,
            TransitError::InProgress {
                target: "c".to_string()
            }
        );
        assert_eq!(pages.stage(), &during);
    }

    #[test]
    fn second_notification_is_ignored() {
        let mut pages = controller(&["a", "b"]);
        pages
            .transit("b", TransitionKind::SlideFrom(Edge::Right))
            .unwrap();

        assert!(pages.notify(&TransitionEnd::container()).is_some());
        let settled = pages.stage().clone();
        assert!(pages.notify(&TransitionEnd::container()).is_none());
        assert_eq!(pages.stage(), &settled);
        assert_eq!(pages.history().records().len(), 1);
    }

    #[test]
    fn root_events_do_not_settle() {
        let mut pages = controller(&["a", "b"]);
        pages
            .transit("b", TransitionKind::FlipTowards(Side::Right))
            .unwrap();

        let root_event = TransitionEnd::new(crate::core::NodeRef::Root, "transform");
        assert!(pages.notify(&root_event).is_none());
        assert!(pages.is_transitioning());

        let page_event = TransitionEnd::new(crate::core::NodeRef::Page(0), "transform");
        assert!(pages.notify(&page_event).is_some());
        assert!(!pages.is_transitioning());
    }

    #[test]
    fn resize_mid_transition_keeps_snapshot() {
        let mut pages = controller(&["a", "b"]);
        pages
            .transit("b", TransitionKind::SlideFrom(Edge::Right))
            .unwrap();
        pages.resize(Size::new(1024.0, 768.0));

        assert_eq!(
            pages.stage().container.style.transform,
            Some(Translate::x(-320.0))
        );
        assert_eq!(
            pages.pending().map(|p| p.descriptor.geometry.width),
            Some(320.0)
        );
    }

    #[test]
    fn unknown_target_leaves_no_active_page() {
        let mut pages = controller(&["a", "b"]);
        pages.transit("nope", TransitionKind::None).unwrap();

        assert_eq!(pages.stage().active_count(), 0);
        assert_eq!(pages.history().last().and_then(|r| r.to.clone()), None);
    }

    #[test]
    fn transit_args_enforces_contract() {
        let mut pages = controller(&["a", "b"]);

        assert_eq!(
            pages.transit_args(&[]),
            Err(TransitError::Argument(ArgumentError::MissingPageId))
        );
        assert_eq!(
            pages.transit_args(&[json!(42)]),
            Err(TransitError::Argument(ArgumentError::InvalidPageId))
        );
        assert_eq!(
            pages.transit_args(&[json!("b")]),
            Err(TransitError::UnknownTransition { kind: None })
        );
        assert_eq!(
            pages.transit_args(&[json!("b"), json!("zoom")]),
            Err(TransitError::UnknownTransition {
                kind: Some("zoom".to_string())
            })
        );
        assert_eq!(pages.stage().pages[0].state(), PageState::Active);

        pages.transit_args(&[json!("b"), json!("none")]).unwrap();
        assert_eq!(pages.stage().pages[1].state(), PageState::Active);
    }

    #[test]
    fn animated_kind_to_active_page_records_none() {
        let mut pages = controller(&["a", "b"]);
        let outcome = pages
            .transit("a", TransitionKind::FlipTowards(Side::Left))
            .unwrap();

        let TransitOutcome::Completed(record) = outcome else {
            panic!("expected immediate completion");
        };
        assert_eq!(record.kind, TransitionKind::None);
        assert_eq!(
            pages.history().last().map(|r| r.kind),
            Some(TransitionKind::None)
        );
    }

    #[test]
    fn events_from_missing_pages_are_ignored() {
        let mut pages = controller(&["a", "b"]);
        pages
            .transit("b", TransitionKind::SlideFrom(Edge::Top))
            .unwrap();

        let stray = TransitionEnd::new(crate::core::NodeRef::Page(7), "transform");
        assert!(pages.notify(&stray).is_none());
        assert!(pages.is_transitioning());
    }

    #[test]
    fn teardown_drops_pending_settle() {
        let mut pages = controller(&["a", "b"]);
        pages
            .transit("b", TransitionKind::FlipTowards(Side::Left))
            .unwrap();

        let stage = pages.teardown();
        assert!(stage.container.classes.contains(PageClass::FlipLeft));
    }
}
