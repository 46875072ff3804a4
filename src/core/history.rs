//! History of completed transitions.
//!
//! History is immutable: `record` returns a new history with the entry
//! appended, so a snapshot taken earlier never changes underneath a caller.

use super::kind::TransitionKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One completed transition.
///
/// `from`/`to` are page identifiers; `None` means the selection was empty
/// (no active page, or a target id that matched nothing).
///
/// # Example
///
/// ```rust
/// use page_transit::core::{TransitRecord, TransitionKind};
/// use chrono::Utc;
///
/// let now = Utc::now();
/// let record = TransitRecord {
///     from: Some("home".to_string()),
///     to: Some("settings".to_string()),
///     kind: TransitionKind::None,
///     started_at: now,
///     settled_at: now,
/// };
/// assert!(record.elapsed().is_zero());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitRecord {
    pub from: Option<String>,
    pub to: Option<String>,
    pub kind: TransitionKind,
    /// When Setup ran
    pub started_at: DateTime<Utc>,
    /// When Settle ran; equal to `started_at` for immediate kinds
    pub settled_at: DateTime<Utc>,
}

impl TransitRecord {
    pub fn elapsed(&self) -> Duration {
        self.settled_at
            .signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}

/// Ordered history of completed transitions.
///
/// ```rust
/// use page_transit::core::{TransitHistory, TransitRecord, TransitionKind};
/// use chrono::Utc;
///
/// let record = |from: &str, to: &str| TransitRecord {
///     from: Some(from.to_string()),
///     to: Some(to.to_string()),
///     kind: TransitionKind::None,
///     started_at: Utc::now(),
///     settled_at: Utc::now(),
/// };
///
/// let history = TransitHistory::new()
///     .record(record("a", "b"))
///     .record(record("b", "c"));
///
/// assert_eq!(history.path(), vec![Some("a"), Some("b"), Some("c")]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitHistory {
    records: Vec<TransitRecord>,
}

impl TransitHistory {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, record: TransitRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Page ids visited: the first `from`, then every `to`.
    pub fn path(&self) -> Vec<Option<&str>> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from.as_deref());
        }
        for record in &self.records {
            path.push(record.to.as_deref());
        }
        path
    }

    /// Time from the first Setup to the last Settle.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.settled_at
            .signed_duration_since(first.started_at)
            .to_std()
            .ok()
    }

    pub fn records(&self) -> &[TransitRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&TransitRecord> {
        self.records.last()
    }
}
