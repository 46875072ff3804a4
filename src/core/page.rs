//! Explicit element model of one attached page group.
//!
//! The host owns the real elements. `Stage` mirrors the parts of them the
//! transitions read and write: the root element the plugin is attached to,
//! the page-group container directly inside it, and the pages inside that.

use super::class::{ClassList, PageClass};
use super::style::{InlineStyle, Size};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Class list plus inline style of one element.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub classes: ClassList,
    pub style: InlineStyle,
}

impl Element {
    pub fn with_class(class: PageClass) -> Self {
        let mut element = Element::default();
        element.classes.add(class);
        element
    }
}

/// Steady or transient state of a page, derived from its classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageState {
    Active,
    Disabled,
    /// Between Setup and Settle; carries the positional mark.
    Transitioning(PageClass),
    /// Not yet seeded by attach.
    Unmarked,
}

/// One panel of the page group.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    attributes: BTreeMap<String, String>,
    pub element: Element,
}

impl Page {
    pub fn new(attributes: BTreeMap<String, String>) -> Self {
        Self {
            attributes,
            element: Element::default(),
        }
    }

    /// A page carrying `data-<data_name>="<id>"`.
    ///
    /// ```rust
    /// use page_transit::core::Page;
    ///
    /// let page = Page::tagged("page", "home");
    /// assert_eq!(page.attribute("data-page"), Some("home"));
    /// assert_eq!(page.identifier("page"), Some("home"));
    /// ```
    pub fn tagged(data_name: &str, id: &str) -> Self {
        let mut attributes = BTreeMap::new();
        attributes.insert(format!("data-{data_name}"), id.to_string());
        Self::new(attributes)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Identifier under the configured data attribute name.
    pub fn identifier(&self, data_name: &str) -> Option<&str> {
        self.attribute(&format!("data-{data_name}"))
    }

    pub fn is_active(&self) -> bool {
        self.element.classes.contains(PageClass::Active)
    }

    pub fn state(&self) -> PageState {
        let classes = &self.element.classes;
        if let Some(mark) = classes.transient().next() {
            PageState::Transitioning(mark)
        } else if classes.contains(PageClass::Active) {
            PageState::Active
        } else if classes.contains(PageClass::Disabled) {
            PageState::Disabled
        } else {
            PageState::Unmarked
        }
    }
}

/// Addresses an element of the stage, e.g. as an event target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeRef {
    Root,
    Container,
    Page(usize),
}

/// The attached element, its page-group container, and the pages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub root: Element,
    pub container: Element,
    pub pages: Vec<Page>,
    size: Size,
}

impl Stage {
    /// Mirror host elements without touching their classes.
    pub fn new(size: Size, pages: Vec<Page>) -> Self {
        Self {
            root: Element::default(),
            container: Element::default(),
            pages,
            size,
        }
    }

    /// Mark the structure and seed the steady state: every page disabled
    /// except the first, which becomes active.
    ///
    /// ```rust
    /// use page_transit::core::{Page, PageState, Size, Stage};
    ///
    /// let stage = Stage::attach(
    ///     Size::new(320.0, 480.0),
    ///     vec![Page::tagged("page", "a"), Page::tagged("page", "b")],
    /// );
    /// assert_eq!(stage.pages[0].state(), PageState::Active);
    /// assert_eq!(stage.pages[1].state(), PageState::Disabled);
    /// ```
    pub fn attach(size: Size, pages: Vec<Page>) -> Self {
        let mut stage = Self::new(size, pages);
        stage.root.classes.add(PageClass::Root);
        stage.container.classes.add(PageClass::Container);
        for page in &mut stage.pages {
            page.element.classes.add(PageClass::Disabled);
        }
        if let Some(first) = stage.pages.first_mut() {
            first
                .element
                .classes
                .remove(PageClass::Disabled)
                .add(PageClass::Active);
        }
        stage
    }

    /// Last measured size of the root element.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// First page carrying the active class.
    pub fn active_index(&self) -> Option<usize> {
        self.pages.iter().position(Page::is_active)
    }

    pub fn active_count(&self) -> usize {
        self.pages.iter().filter(|p| p.is_active()).count()
    }

    /// First page whose identifier matches `id`.
    pub fn find(&self, data_name: &str, id: &str) -> Option<usize> {
        self.pages
            .iter()
            .position(|p| p.identifier(data_name) == Some(id))
    }

    pub fn element(&self, node: NodeRef) -> Option<&Element> {
        match node {
            NodeRef::Root => Some(&self.root),
            NodeRef::Container => Some(&self.container),
            NodeRef::Page(i) => self.pages.get(i).map(|p| &p.element),
        }
    }

    /// Mutable page element, or `None` for an empty selection.
    pub(crate) fn page_mut(&mut self, index: Option<usize>) -> Option<&mut Element> {
        index
            .and_then(|i| self.pages.get_mut(i))
            .map(|p| &mut p.element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(ids: &[&str]) -> Vec<Page> {
        ids.iter().map(|id| Page::tagged("page", id)).collect()
    }

    #[test]
    fn attach_marks_structure() {
        let stage = Stage::attach(Size::new(100.0, 100.0), pages(&["a"]));
        assert!(stage.root.classes.contains(PageClass::Root));
        assert!(stage.container.classes.contains(PageClass::Container));
        assert_eq!(stage.pages[0].state(), PageState::Active);
    }

    #[test]
    fn attach_without_pages_has_no_active_page() {
        let stage = Stage::attach(Size::default(), Vec::new());
        assert_eq!(stage.active_index(), None);
    }

    #[test]
    fn new_stage_leaves_pages_unmarked() {
        let stage = Stage::new(Size::default(), pages(&["a", "b"]));
        assert!(stage
            .pages
            .iter()
            .all(|p| p.state() == PageState::Unmarked));
    }

    #[test]
    fn find_uses_configured_attribute() {
        let stage = Stage::attach(
            Size::default(),
            vec![Page::tagged("view", "x"), Page::tagged("view", "y")],
        );
        assert_eq!(stage.find("view", "y"), Some(1));
        assert_eq!(stage.find("page", "y"), None);
    }

    #[test]
    fn transient_mark_wins_over_active() {
        let mut page = Page::tagged("page", "a");
        page.element
            .classes
            .add(PageClass::Active)
            .add(PageClass::Front);
        assert_eq!(page.state(), PageState::Transitioning(PageClass::Front));
    }
}
