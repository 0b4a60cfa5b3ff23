//! Error conversion utilities for CLI.
//!
//! Converts imgls-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use imgls_core::ListError;
use imgls_core::StoreConfig;
use imgls_core::StoreError;
use std::io::ErrorKind;

/// Converts `ListError` to user-friendly anyhow error with context
pub fn convert_list_error(err: ListError, store: &StoreConfig) -> anyhow::Error {
    match err {
        ListError::Store {
            source: StoreError::Io { path, source },
        } if source.kind() == ErrorKind::PermissionDenied => {
            anyhow!(
                "error reading images: permission denied reading '{}'\n\
                 HINT: Run with sufficient privileges or point --root at a storage you can read.",
                path.display()
            )
        }
        ListError::Store {
            source: StoreError::Io { path, source },
        } => {
            anyhow!(
                "error reading images: cannot read '{}': {}\n\
                 HINT: Check that --root '{}' and --storage-driver '{}' name an existing storage.",
                path.display(),
                source,
                store.root.display(),
                store.driver
            )
        }
        ListError::Store {
            source: StoreError::Malformed { path, source },
        } => {
            anyhow!(
                "error reading images: image index '{}' is corrupted: {}",
                path.display(),
                source
            )
        }
        ListError::Io(io_err) if io_err.kind() == ErrorKind::BrokenPipe => {
            anyhow!("output closed before the report was complete")
        }
        _ => anyhow::Error::from(err),
    }
}

/// Adds storage context to a listing result
pub fn add_store_context<T>(
    result: Result<T, ListError>,
    store: &StoreConfig,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_list_error(e, store))
}
