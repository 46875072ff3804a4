//! Page Transit: native-app style page transitions for single-page apps
//!
//! Page Transit switches between sibling page panels inside a container by
//! sliding or flipping them, the way mobile apps move between screens. The
//! crate is headless: it keeps an explicit model of the attached element's
//! classes and inline styles, and a host binding applies that model to the
//! real elements. The stylesheet does the actual animating and reports back
//! when it is done.
//!
//! # Core Concepts
//!
//! - **Stage**: explicit model of the root element, its page-group
//!   container, and the pages
//! - **Transition kinds**: `none`, `slide-in-from-{left,right,top,bottom}`,
//!   `flip-towards-{left,right}`
//! - **Setup / Trigger / Settle**: the three phases of each animated kind;
//!   Settle runs once on the first completion notification
//! - **Rest invariants**: exactly one active page and no transient state
//!   once a transition has settled
//!
//! # Example
//!
//! ```rust
//! use page_transit::controller::{ElementId, PageController, PageOptions};
//! use page_transit::core::{Page, PageClass, Size};
//! use page_transit::engine::TransitionEnd;
//!
//! let mut pages = PageController::attach(
//!     ElementId::new(),
//!     Size::new(320.0, 480.0),
//!     vec![Page::tagged("page", "inbox"), Page::tagged("page", "message")],
//!     PageOptions::default(),
//! );
//!
//! pages.transit_named("message", "flip-towards-left").unwrap();
//! assert!(pages.stage().container.classes.contains(PageClass::FlipLeft));
//!
//! pages.notify(&TransitionEnd::container());
//! assert!(pages.verify_rest().is_success());
//! ```

pub mod checkpoint;
pub mod controller;
pub mod core;
pub mod engine;
pub mod enforcement;

// Re-export commonly used types
pub use controller::{PageController, PageOptions, Registry, TransitError, TransitOutcome};
pub use core::{PageClass, Stage, TransitionKind};
pub use engine::TransitionEnd;
