//! Read interface to the image store.
//!
//! The lister only ever consumes [`ImageStore::images`]; how images are
//! created, removed or persisted is the store's business.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::Image;
use crate::StoreError;

/// Read-only handle on a collection of locally stored images.
pub trait ImageStore {
    /// Returns a complete snapshot of every image in the store.
    ///
    /// Records come back in the store's own order, which reports preserve.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be enumerated.
    fn images(&self) -> Result<Vec<Image>, StoreError>;
}

impl<S: ImageStore + ?Sized> ImageStore for &S {
    fn images(&self) -> Result<Vec<Image>, StoreError> {
        (**self).images()
    }
}

impl<S: ImageStore + ?Sized> ImageStore for Box<S> {
    fn images(&self) -> Result<Vec<Image>, StoreError> {
        (**self).images()
    }
}
