//! Per-element configuration.

use serde::{Deserialize, Serialize};

const DEFAULT_DATA_NAME: &str = "page";

fn default_data_name() -> String {
    DEFAULT_DATA_NAME.to_string()
}

/// Options accepted when attaching to an element.
///
/// The identifier attribute is `data-<data_name>`. Hosts may spell the key
/// `dataName` or `identifierAttributeName`.
///
/// ```rust
/// use page_transit::controller::PageOptions;
///
/// let options: PageOptions = serde_json::from_str("{}").unwrap();
/// assert_eq!(options.data_name, "page");
///
/// let options: PageOptions =
///     serde_json::from_str(r#"{"identifierAttributeName": "view"}"#).unwrap();
/// assert_eq!(options.attribute_name(), "data-view");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageOptions {
    #[serde(default = "default_data_name", alias = "identifierAttributeName")]
    pub data_name: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            data_name: default_data_name(),
        }
    }
}

impl PageOptions {
    pub fn with_data_name(data_name: impl Into<String>) -> Self {
        Self {
            data_name: data_name.into(),
        }
    }

    /// Full name of the identifier attribute.
    pub fn attribute_name(&self) -> String {
        format!("data-{}", self.data_name)
    }
}
