//! Store location and report display options.

use std::path::Path;
use std::path::PathBuf;

/// Default root of the local image storage.
pub const DEFAULT_STORAGE_ROOT: &str = "/var/lib/containers/storage";

/// Default storage driver.
pub const DEFAULT_STORAGE_DRIVER: &str = "overlay";

/// Name of the image index inside the driver's images directory.
pub const IMAGES_INDEX_FILE: &str = "images.json";

/// Location of a local image store on disk.
///
/// Images are indexed in `<root>/<driver>-images/images.json`.
///
/// # Examples
///
/// ```
/// use imgls_core::StoreConfig;
/// use std::path::Path;
///
/// let config = StoreConfig::default();
/// assert_eq!(
///     config.images_file(),
///     Path::new("/var/lib/containers/storage/overlay-images/images.json")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Storage root directory.
    pub root: PathBuf,

    /// Storage driver name, used as the prefix of the images directory.
    pub driver: String,
}

impl Default for StoreConfig {
    /// Creates a `StoreConfig` pointing at the system-wide storage.
    ///
    /// Default values:
    /// - `root`: `/var/lib/containers/storage`
    /// - `driver`: `overlay`
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_STORAGE_ROOT),
            driver: DEFAULT_STORAGE_DRIVER.to_string(),
        }
    }
}

impl StoreConfig {
    /// Creates a config for the given root with the default driver.
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Directory holding the image index for this driver.
    pub fn images_dir(&self) -> PathBuf {
        self.root.join(format!("{}-images", self.driver))
    }

    /// Path of the image index file.
    pub fn images_file(&self) -> PathBuf {
        self.images_dir().join(IMAGES_INDEX_FILE)
    }
}

/// Display options for an image report.
///
/// When `json` is set every other option is ignored.
///
/// # Examples
///
/// ```
/// use imgls_core::ImagesOptions;
///
/// let options = ImagesOptions {
///     quiet: true,
///     ..Default::default()
/// };
/// assert!(options.truncate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImagesOptions {
    /// Print image IDs only.
    pub quiet: bool,

    /// Suppress the column heading row.
    pub no_heading: bool,

    /// Render IDs in a 12 character column instead of full length.
    pub truncate: bool,

    /// Emit a JSON array instead of a table.
    pub json: bool,
}

impl Default for ImagesOptions {
    /// Default values:
    /// - `quiet`: false
    /// - `no_heading`: false
    /// - `truncate`: true
    /// - `json`: false
    fn default() -> Self {
        Self {
            quiet: false,
            no_heading: false,
            truncate: true,
            json: false,
        }
    }
}
