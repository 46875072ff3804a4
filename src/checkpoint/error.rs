use thiserror::Error;

/// Why a snapshot could not be written or restored.
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot bytes: {0}")]
    Binary(#[from] bincode::Error),

    #[error("snapshot format v{found} cannot be restored (this build reads v{supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The armed transition names a page the stage no longer has.
    #[error("pending transition references page {index}, but the stage has {pages} pages")]
    DanglingPage { index: usize, pages: usize },

    /// The armed transition was captured mid-flight but the stage shows no
    /// trace of it having been triggered.
    #[error("pending transition has no transient marks on the container")]
    StaleTransition,
}
