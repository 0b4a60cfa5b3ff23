//! Error types for image listing operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ListError`.
pub type Result<T> = std::result::Result<T, ListError>;

/// Errors raised by an [`ImageStore`](crate::ImageStore) while enumerating
/// its records.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The image index could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path of the index file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The image index is not a valid JSON array of image records.
    #[error("malformed image index {}: {source}", .path.display())]
    Malformed {
        /// Path of the index file.
        path: PathBuf,
        /// Decoding failure.
        #[source]
        source: serde_json::Error,
    },

    /// A record in the index violates the image record invariants.
    #[error("invalid image record at position {index}: {reason}")]
    InvalidRecord {
        /// Zero-based position of the record in the index.
        index: usize,
        /// What is wrong with the record.
        reason: String,
    },
}

/// Errors that can occur while producing an image report.
#[derive(Error, Debug)]
pub enum ListError {
    /// The store failed to enumerate its images.
    #[error("error reading images")]
    Store {
        /// The store's own failure.
        #[from]
        source: StoreError,
    },

    /// The JSON report could not be encoded.
    #[error("failed to encode images as JSON: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Writing the report to the output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ListError {
    /// Returns the store failure behind this error, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use imgls_core::ListError;
    /// use imgls_core::StoreError;
    ///
    /// let err = ListError::from(StoreError::InvalidRecord {
    ///     index: 0,
    ///     reason: "empty id".into(),
    /// });
    /// assert!(err.store_error().is_some());
    /// ```
    #[must_use]
    pub const fn store_error(&self) -> Option<&StoreError> {
        match self {
            Self::Store { source } => Some(source),
            _ => None,
        }
    }
}
