//! Class vocabulary shared with the stylesheet.
//!
//! The engine never animates anything itself. It only toggles these class
//! names, and the stylesheet binds them to CSS transition and transform
//! rules. Class lists are ordered the way the host applied them so that a
//! binding can diff them against the live element.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A class name from the fixed styling vocabulary.
///
/// # Example
///
/// ```rust
/// use page_transit::core::PageClass;
///
/// assert_eq!(PageClass::Active.as_str(), "jquery-page-active");
/// assert!(PageClass::Left.is_transient());
/// assert!(!PageClass::Disabled.is_transient());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageClass {
    /// Marks the element the plugin is attached to.
    #[serde(rename = "jquery-page")]
    Root,
    /// Marks the page-group wrapper.
    #[serde(rename = "jquery-page-container")]
    Container,
    #[serde(rename = "jquery-page-active")]
    Active,
    #[serde(rename = "jquery-page-disabled")]
    Disabled,
    #[serde(rename = "jquery-page-left")]
    Left,
    #[serde(rename = "jquery-page-right")]
    Right,
    #[serde(rename = "jquery-page-top")]
    Top,
    #[serde(rename = "jquery-page-bottom")]
    Bottom,
    #[serde(rename = "jquery-page-front")]
    Front,
    #[serde(rename = "jquery-page-back")]
    Back,
    #[serde(rename = "jquery-page-horizontal")]
    Horizontal,
    #[serde(rename = "jquery-page-vertical")]
    Vertical,
    #[serde(rename = "jquery-page-stacked")]
    Stacked,
    #[serde(rename = "jquery-page-slide")]
    Slide,
    #[serde(rename = "jquery-page-flip-left")]
    FlipLeft,
    #[serde(rename = "jquery-page-flip-right")]
    FlipRight,
}

impl PageClass {
    /// The CSS class name bound by the stylesheet.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Root => "jquery-page",
            Self::Container => "jquery-page-container",
            Self::Active => "jquery-page-active",
            Self::Disabled => "jquery-page-disabled",
            Self::Left => "jquery-page-left",
            Self::Right => "jquery-page-right",
            Self::Top => "jquery-page-top",
            Self::Bottom => "jquery-page-bottom",
            Self::Front => "jquery-page-front",
            Self::Back => "jquery-page-back",
            Self::Horizontal => "jquery-page-horizontal",
            Self::Vertical => "jquery-page-vertical",
            Self::Stacked => "jquery-page-stacked",
            Self::Slide => "jquery-page-slide",
            Self::FlipLeft => "jquery-page-flip-left",
            Self::FlipRight => "jquery-page-flip-right",
        }
    }

    /// Whether the class only exists between Setup and Settle.
    ///
    /// Structural classes (`Root`, `Container`) and the steady-state flags
    /// (`Active`, `Disabled`) are not transient.
    pub fn is_transient(self) -> bool {
        !matches!(
            self,
            Self::Root | Self::Container | Self::Active | Self::Disabled
        )
    }
}

impl fmt::Display for PageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered set of classes on one element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassList {
    classes: Vec<PageClass>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class; adding one that is already present is a no-op.
    pub fn add(&mut self, class: PageClass) -> &mut Self {
        if !self.contains(class) {
            self.classes.push(class);
        }
        self
    }

    /// Remove a class; removing one that is absent is a no-op.
    pub fn remove(&mut self, class: PageClass) -> &mut Self {
        self.classes.retain(|c| *c != class);
        self
    }

    pub fn contains(&self, class: PageClass) -> bool {
        self.classes.contains(&class)
    }

    pub fn iter(&self) -> impl Iterator<Item = PageClass> + '_ {
        self.classes.iter().copied()
    }

    /// Classes that must not survive a completed transition.
    pub fn transient(&self) -> impl Iterator<Item = PageClass> + '_ {
        self.iter().filter(|c| c.is_transient())
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl fmt::Display for ClassList {
    /// Renders the value of a `class` attribute.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, class) in self.classes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(class.as_str())?;
        }
        Ok(())
    }
}

impl FromIterator<PageClass> for ClassList {
    fn from_iter<I: IntoIterator<Item = PageClass>>(iter: I) -> Self {
        let mut list = ClassList::new();
        for class in iter {
            list.add(class);
        }
        list
    }
}
