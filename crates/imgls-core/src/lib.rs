//! Read-only listing of locally stored container images.
//!
//! `imgls-core` queries an [`ImageStore`] for its image records and renders
//! them either as a column-aligned table or as a JSON array. The store is
//! always passed in explicitly; nothing here holds global state.
//!
//! # Examples
//!
//! ```no_run
//! use imgls_core::ImagesOptions;
//! use imgls_core::JsonFileStore;
//! use imgls_core::StoreConfig;
//! use imgls_core::list_images;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = JsonFileStore::new(&StoreConfig::default());
//! let options = ImagesOptions {
//!     json: true,
//!     ..Default::default()
//! };
//! list_images(&store, &options, &mut std::io::stdout().lock())?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod image;
pub mod store;

// Re-export main API types
pub use api::list_images;
pub use config::ImagesOptions;
pub use config::StoreConfig;
pub use error::ListError;
pub use error::Result;
pub use error::StoreError;
pub use image::Image;
pub use image::ImageSummary;
pub use store::ImageStore;
pub use store::JsonFileStore;
pub use store::MemoryStore;
