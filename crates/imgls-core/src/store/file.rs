use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

use log::debug;

use crate::Image;
use crate::StoreConfig;
use crate::StoreError;

use super::ImageStore;

/// Image store backed by a JSON index on disk.
///
/// The index is a JSON array of image records located at
/// `<root>/<driver>-images/images.json`. A store whose index does not exist
/// yet holds no images.
///
/// # Examples
///
/// ```no_run
/// use imgls_core::ImageStore;
/// use imgls_core::JsonFileStore;
/// use imgls_core::StoreConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = JsonFileStore::new(&StoreConfig::default());
/// for image in store.images()? {
///     println!("{}", image.id);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    index: PathBuf,
}

impl JsonFileStore {
    /// Creates a store reading the index described by `config`.
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            index: config.images_file(),
        }
    }

    /// Creates a store reading an explicit index file.
    pub fn from_index(index: impl AsRef<Path>) -> Self {
        Self {
            index: index.as_ref().to_path_buf(),
        }
    }

    /// Path of the index file this store reads.
    pub fn index_path(&self) -> &Path {
        &self.index
    }
}

impl ImageStore for JsonFileStore {
    fn images(&self) -> Result<Vec<Image>, StoreError> {
        let data = match fs::read(&self.index) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no image index at {}, store is empty", self.index.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.index.clone(),
                    source,
                });
            }
        };

        let images: Vec<Image> =
            serde_json::from_slice(&data).map_err(|source| StoreError::Malformed {
                path: self.index.clone(),
                source,
            })?;

        if let Some(index) = images.iter().position(|image| image.id.is_empty()) {
            return Err(StoreError::InvalidRecord {
                index,
                reason: "empty image id".to_string(),
            });
        }

        debug!(
            "read {} image(s) from {}",
            images.len(),
            self.index.display()
        );
        Ok(images)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with_index(contents: &str) -> (TempDir, JsonFileStore) {
        let temp = TempDir::new().unwrap();
        let config = StoreConfig::with_root(temp.path());
        fs::create_dir_all(config.images_dir()).unwrap();
        fs::write(config.images_file(), contents).unwrap();
        (temp, JsonFileStore::new(&config))
    }

    #[test]
    fn test_missing_index_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(&StoreConfig::with_root(temp.path()));
        assert!(store.images().unwrap().is_empty());
    }

    #[test]
    fn test_reads_records_in_file_order() {
        let (_temp, store) = store_with_index(
            r#"[{"id":"ffff","names":["z"]},{"id":"0000","names":["a","b"]}]"#,
        );
        let images = store.images().unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].id, "ffff");
        assert_eq!(images[1].names, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_malformed_index() {
        let (_temp, store) = store_with_index("{not json");
        let err = store.images().unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[test]
    fn test_empty_id_rejected() {
        let (_temp, store) = store_with_index(r#"[{"id":"abc"},{"id":"","names":["x"]}]"#);
        let err = store.images().unwrap_err();
        assert!(matches!(err, StoreError::InvalidRecord { index: 1, .. }));
    }

    #[test]
    fn test_unreadable_index_is_io_error() {
        let temp = TempDir::new().unwrap();
        // A directory where the index file should be cannot be read as a file.
        fs::create_dir_all(temp.path().join("images.json")).unwrap();
        let store = JsonFileStore::from_index(temp.path().join("images.json"));
        let err = store.images().unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
