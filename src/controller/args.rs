//! Argument contract for dynamically typed callers.
//!
//! Script bridges hand over loosely typed argument lists. They are checked
//! here, in one place, before anything reaches the engine.

use super::error::ArgumentError;
use serde_json::Value;

/// Validated arguments of a `transit(pageId, kind?)` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitArgs {
    pub page_id: String,
    /// Kind name as supplied; `None` if the caller left it out.
    pub kind: Option<String>,
}

impl TransitArgs {
    /// Check arity and argument types.
    ///
    /// ```rust
    /// use page_transit::controller::{ArgumentError, TransitArgs};
    /// use serde_json::json;
    ///
    /// let args = TransitArgs::from_values(&[json!("b"), json!("none")]).unwrap();
    /// assert_eq!(args.page_id, "b");
    ///
    /// assert_eq!(
    ///     TransitArgs::from_values(&[json!(42)]),
    ///     Err(ArgumentError::InvalidPageId)
    /// );
    /// ```
    pub fn from_values(args: &[Value]) -> Result<Self, ArgumentError> {
        let (page_id, kind) = match args {
            [] => return Err(ArgumentError::MissingPageId),
            [page_id] => (page_id, None),
            [page_id, kind] => (page_id, Some(kind)),
            _ => return Err(ArgumentError::TooManyArguments(args.len())),
        };

        let page_id = page_id
            .as_str()
            .ok_or(ArgumentError::InvalidPageId)?
            .to_string();
        let kind = kind
            .map(|kind| kind.as_str().ok_or(ArgumentError::InvalidTransitionKind))
            .transpose()?
            .map(str::to_string);

        Ok(Self { page_id, kind })
    }
}
