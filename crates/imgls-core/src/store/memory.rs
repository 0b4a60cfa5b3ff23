use crate::Image;
use crate::StoreError;

use super::ImageStore;

/// An image store held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    images: Vec<Image>,
}

impl MemoryStore {
    /// Creates a store holding `images` in the given order.
    pub fn new(images: Vec<Image>) -> Self {
        Self { images }
    }
}

impl From<Vec<Image>> for MemoryStore {
    fn from(images: Vec<Image>) -> Self {
        Self::new(images)
    }
}

impl ImageStore for MemoryStore {
    fn images(&self) -> Result<Vec<Image>, StoreError> {
        Ok(self.images.clone())
    }
}
