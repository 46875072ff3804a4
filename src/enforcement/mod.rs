//! Validation of the rest-state invariants.
//!
//! Uses Stillwater's `Validation` to accumulate every violation instead of
//! stopping at the first one, so a host debugging a broken stylesheet (a
//! completion notification that never fires, say) sees the whole picture.
//!
//! # Example
//!
//! ```rust
//! use page_transit::core::{Page, Size, Stage};
//! use page_transit::enforcement::{check_rest, InvariantViolation};
//! use stillwater::validation::Validation;
//!
//! let stage = Stage::new(Size::new(320.0, 480.0), vec![Page::tagged("page", "a")]);
//! match check_rest(&stage) {
//!     Validation::Failure(errors) => {
//!         assert!(errors.iter().any(|e| *e == InvariantViolation::NoActivePage));
//!     }
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

pub mod rules;
pub mod violations;

pub use rules::check_rest;
pub use violations::InvariantViolation;
