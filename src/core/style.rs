//! Geometry and inline style state.
//!
//! All lengths are CSS pixels. Only the properties the transitions touch are
//! modelled; anything else on the host element is left to the host.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendered size of an element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A 2D translation, rendered as `translate(<x>,<y>)`.
///
/// Zero components are written without a unit, which is how the stylesheet
/// transitions expect them.
///
/// ```rust
/// use page_transit::core::Translate;
///
/// assert_eq!(Translate::x(-320.0).to_string(), "translate(-320px,0)");
/// assert_eq!(Translate::y(480.0).to_string(), "translate(0,480px)");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Translate {
    pub x: f64,
    pub y: f64,
}

impl Translate {
    pub fn x(x: f64) -> Self {
        Self { x, y: 0.0 }
    }

    pub fn y(y: f64) -> Self {
        Self { x: 0.0, y }
    }
}

fn write_length(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value == 0.0 {
        f.write_str("0")
    } else {
        write!(f, "{value}px")
    }
}

impl fmt::Display for Translate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("translate(")?;
        write_length(f, self.x)?;
        f.write_str(",")?;
        write_length(f, self.y)?;
        f.write_str(")")
    }
}

/// Inline style properties the engine writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleProperty {
    Width,
    Height,
    Left,
    Top,
    Transform,
}

impl StyleProperty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::Left => "left",
            Self::Top => "top",
            Self::Transform => "transform",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inline style of one element. `None` means the property is not set inline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineStyle {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub transform: Option<Translate>,
}

impl InlineStyle {
    /// Properties that are set and differ from the element's rest layout.
    ///
    /// A zero `top` is the container's resting offset after a vertical
    /// slide and does not count.
    pub fn transient(&self) -> Vec<StyleProperty> {
        let mut props = Vec::new();
        if self.width.is_some() {
            props.push(StyleProperty::Width);
        }
        if self.height.is_some() {
            props.push(StyleProperty::Height);
        }
        if self.left.is_some() {
            props.push(StyleProperty::Left);
        }
        if self.top.is_some_and(|top| top != 0.0) {
            props.push(StyleProperty::Top);
        }
        if self.transform.is_some() {
            props.push(StyleProperty::Transform);
        }
        props
    }

    pub fn is_at_rest(&self) -> bool {
        self.transient().is_empty()
    }

    /// Render the set properties as a `style` attribute value.
    ///
    /// ```rust
    /// use page_transit::core::{InlineStyle, Translate};
    ///
    /// let style = InlineStyle {
    ///     width: Some(640.0),
    ///     left: Some(-320.0),
    ///     transform: Some(Translate::x(320.0)),
    ///     ..InlineStyle::default()
    /// };
    /// assert_eq!(
    ///     style.to_css(),
    ///     "width: 640px; left: -320px; transform: translate(320px,0)"
    /// );
    /// ```
    pub fn to_css(&self) -> String {
        let mut decls = Vec::new();
        let lengths = [
            (StyleProperty::Width, self.width),
            (StyleProperty::Height, self.height),
            (StyleProperty::Left, self.left),
            (StyleProperty::Top, self.top),
        ];
        for (prop, value) in lengths {
            if let Some(value) = value {
                decls.push(format!("{prop}: {}", Length(value)));
            }
        }
        if let Some(transform) = self.transform {
            decls.push(format!("{}: {transform}", StyleProperty::Transform));
        }
        decls.join("; ")
    }
}

struct Length(f64);

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_length(f, self.0)
    }
}
