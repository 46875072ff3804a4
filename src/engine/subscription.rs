//! Single-fire completion subscription.
//!
//! Register a payload, fire it at most once, and the slot empties itself.
//! The subscription is independent of how the host delivers its
//! notifications, so tests can fire it synthetically.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one armed subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// One-shot slot holding the payload a completion handler needs.
///
/// # Example
///
/// ```rust
/// use page_transit::engine::Subscription;
///
/// let mut slot = Subscription::new();
/// let id = slot.arm("settle").unwrap();
///
/// assert_eq!(slot.fire(), Some((id, "settle")));
/// assert_eq!(slot.fire(), None); // consumed
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Subscription<T> {
    armed: Option<(SubscriptionId, T)>,
    next_id: u64,
}

impl<T> Default for Subscription<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Subscription<T> {
    pub fn new() -> Self {
        Self {
            armed: None,
            next_id: 0,
        }
    }

    /// Register a payload. Hands it back if the slot is already armed.
    pub fn arm(&mut self, payload: T) -> Result<SubscriptionId, T> {
        if self.armed.is_some() {
            return Err(payload);
        }
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.armed = Some((id, payload));
        Ok(id)
    }

    /// Take the payload; later calls return `None` until re-armed.
    pub fn fire(&mut self) -> Option<(SubscriptionId, T)> {
        self.armed.take()
    }

    /// Drop the payload without firing, if `id` is the armed subscription.
    pub fn cancel(&mut self, id: SubscriptionId) -> Option<T> {
        match &self.armed {
            Some((armed, _)) if *armed == id => self.armed.take().map(|(_, payload)| payload),
            _ => None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn id(&self) -> Option<SubscriptionId> {
        self.armed.as_ref().map(|(id, _)| *id)
    }

    pub fn pending(&self) -> Option<&T> {
        self.armed.as_ref().map(|(_, payload)| payload)
    }
}
