//! Transition kinds.
//!
//! Kind names are parsed once at the API boundary into a closed variant;
//! the engine only ever sees [`TransitionKind`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Edge a sliding page enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Direction a page flips towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Edge {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Whether the incoming page starts before the outgoing one on its axis.
    pub fn is_leading(self) -> bool {
        matches!(self, Self::Left | Self::Top)
    }
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a name matches no transition kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid transition type '{0}'")]
pub struct UnknownKind(pub String);

/// A requested transition.
///
/// # Example
///
/// ```rust
/// use page_transit::core::{Edge, Side, TransitionKind};
///
/// let kind: TransitionKind = "slide-in-from-left".parse().unwrap();
/// assert_eq!(kind, TransitionKind::SlideFrom(Edge::Left));
///
/// let kind: TransitionKind = "flip-towards-right".parse().unwrap();
/// assert_eq!(kind, TransitionKind::FlipTowards(Side::Right));
///
/// assert!("flip-towards-sideways".parse::<TransitionKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TransitionKind {
    /// Switch instantly.
    None,
    SlideFrom(Edge),
    FlipTowards(Side),
}

impl TransitionKind {
    /// Whether the kind waits for a completion notification.
    pub fn is_animated(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl FromStr for TransitionKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "none" {
            return Ok(Self::None);
        }
        if let Some(edge) = s.strip_prefix("slide-in-from-") {
            let edge = match edge {
                "left" => Edge::Left,
                "right" => Edge::Right,
                "top" => Edge::Top,
                "bottom" => Edge::Bottom,
                _ => return Err(UnknownKind(s.to_string())),
            };
            return Ok(Self::SlideFrom(edge));
        }
        if let Some(side) = s.strip_prefix("flip-towards-") {
            let side = match side {
                "left" => Side::Left,
                "right" => Side::Right,
                _ => return Err(UnknownKind(s.to_string())),
            };
            return Ok(Self::FlipTowards(side));
        }
        Err(UnknownKind(s.to_string()))
    }
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::SlideFrom(edge) => write!(f, "slide-in-from-{}", edge.as_str()),
            Self::FlipTowards(side) => write!(f, "flip-towards-{}", side.as_str()),
        }
    }
}

impl TryFrom<String> for TransitionKind {
    type Error = UnknownKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TransitionKind> for String {
    fn from(kind: TransitionKind) -> Self {
        kind.to_string()
    }
}
