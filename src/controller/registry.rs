//! Element-to-controller association.

use super::error::AttachError;
use super::options::PageOptions;
use super::PageController;
use crate::core::{Page, Size};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;
use uuid::Uuid;

/// Stable identity of a host element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl ElementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// What the host reports about an element when attaching to it.
#[derive(Clone, Debug)]
pub struct Mount {
    pub id: ElementId,
    /// Rendered size of the element
    pub size: Size,
    /// Children of the page-group container, in document order
    pub pages: Vec<Page>,
}

/// Controllers of all attached elements.
///
/// ```rust
/// use page_transit::controller::{ElementId, Mount, PageOptions, Registry};
/// use page_transit::core::{Page, Size};
///
/// let mut registry = Registry::new();
/// let id = ElementId::new();
/// registry.attach(
///     Mount {
///         id,
///         size: Size::new(320.0, 480.0),
///         pages: vec![Page::tagged("page", "a")],
///     },
///     PageOptions::default(),
/// );
///
/// assert!(registry.lookup(id).is_some());
/// assert!(registry.detach(id).is_some());
/// assert!(registry.lookup(id).is_none());
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    controllers: HashMap<ElementId, PageController>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach to an element, replacing any controller it already had.
    pub fn attach(&mut self, mount: Mount, options: PageOptions) -> &mut PageController {
        let id = mount.id;
        let controller = PageController::attach(id, mount.size, mount.pages, options);
        match self.controllers.entry(id) {
            Entry::Occupied(mut slot) => {
                debug!(element = %id, "re-attached; previous controller discarded");
                slot.insert(controller).teardown();
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(controller),
        }
    }

    /// Attach with a loosely typed argument list: exactly one options object.
    pub fn attach_with_args(
        &mut self,
        mount: Mount,
        args: &[Value],
    ) -> Result<&mut PageController, AttachError> {
        let [options @ Value::Object(_)] = args else {
            return Err(AttachError::InvalidArguments);
        };
        let options: PageOptions = serde_json::from_value(options.clone())?;
        Ok(self.attach(mount, options))
    }

    pub fn lookup(&self, id: ElementId) -> Option<&PageController> {
        self.controllers.get(&id)
    }

    pub fn lookup_mut(&mut self, id: ElementId) -> Option<&mut PageController> {
        self.controllers.get_mut(&id)
    }

    /// Destroy the controller along with its element.
    pub fn detach(&mut self, id: ElementId) -> Option<crate::core::Stage> {
        let controller = self.controllers.remove(&id)?;
        debug!(element = %id, "detached");
        Some(controller.teardown())
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}
