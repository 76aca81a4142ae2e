//! Error types shared by the storage and controller layers.
//!
//! Nothing here reaches the user: readers degrade to defaults and the
//! controller logs write or preload failures and keeps rendering.

/// Failure to persist a preference.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No cookie jar is reachable (no window, no document, or SSR).
    #[error("cookie jar unavailable")]
    Unavailable,

    /// The host refused the cookie assignment.
    #[error("cookie write rejected: {0}")]
    Rejected(String),

    /// The daily record could not be serialized.
    #[error("daily record encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A single image asset that failed to load during preloading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("image preload failed: {path}")]
pub struct PreloadError {
    pub path: String,
}
