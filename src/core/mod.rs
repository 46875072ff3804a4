//! Core page-group model.
//!
//! This module contains the pure data the engine operates on:
//! - The class vocabulary shared with the stylesheet
//! - Geometry and inline styles
//! - The explicit element model of one attached page group
//! - Transition kinds and the history of completed transitions
//!
//! Nothing here performs a transition; see [`crate::engine`].

mod class;
mod history;
mod kind;
mod page;
mod style;

pub use class::{ClassList, PageClass};
pub use history::{TransitHistory, TransitRecord};
pub use kind::{Edge, Side, TransitionKind, UnknownKind};
pub use page::{Element, NodeRef, Page, PageState, Stage};
pub use style::{InlineStyle, Size, StyleProperty, Translate};
