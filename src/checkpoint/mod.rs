//! Snapshots of a controller's state.
//!
//! A snapshot carries the full element model, including a transition that
//! is still waiting for its completion notification. Host bindings use the
//! JSON form to hand state across a script boundary; the binary form is for
//! persisting state across reloads.

use crate::controller::{ElementId, PageController, PageOptions, PendingTransit};
use crate::core::{Stage, TransitHistory};
use crate::engine::Subscription;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable state of one controller.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    pub element: ElementId,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    pub options: PageOptions,

    pub stage: Stage,

    /// Armed completion handler, if a transition is running
    pub completion: Subscription<PendingTransit>,

    pub history: TransitHistory,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let snapshot: Snapshot = bincode::deserialize(bytes)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Reject snapshots from another format version, and pending
    /// transitions that could not settle against the captured stage.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        let Some(pending) = self.completion.pending() else {
            return Ok(());
        };
        let pages = self.stage.pages.len();
        let d = &pending.descriptor;
        if let Some(index) = [d.from, d.to].into_iter().flatten().find(|&i| i >= pages) {
            return Err(CheckpointError::DanglingPage { index, pages });
        }
        // Trigger always leaves a slide or flip class on the container.
        if self.stage.container.classes.transient().next().is_none() {
            return Err(CheckpointError::StaleTransition);
        }
        Ok(())
    }
}

impl PageController {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            element: self.id,
            taken_at: Utc::now(),
            options: self.options.clone(),
            stage: self.stage.clone(),
            completion: self.completion.clone(),
            history: self.history.clone(),
        }
    }

    /// Rebuild a controller; a pending transition settles on the next
    /// completion notification as if nothing happened.
    pub fn restore(snapshot: Snapshot) -> Result<Self, CheckpointError> {
        snapshot.validate()?;
        debug!(
            element = %snapshot.element,
            pending = snapshot.completion.is_armed(),
            "restoring controller from snapshot"
        );
        Ok(Self {
            id: snapshot.element,
            options: snapshot.options,
            stage: snapshot.stage,
            completion: snapshot.completion,
            history: snapshot.history,
        })
    }
}
