//! High-level public API for image listing.

use std::io::Write;

use log::debug;

use crate::ImageStore;
use crate::ImagesOptions;
use crate::Result;
use crate::format::create_formatter;

/// Lists every image in `store` and writes a report to `out`.
///
/// The store is queried exactly once; its records are formatted as a table
/// or, when `options.json` is set, as a JSON array.
///
/// # Arguments
///
/// * `store` - Store to enumerate
/// * `options` - Display options
/// * `out` - Output sink receiving the report
///
/// # Errors
///
/// Returns an error if:
/// - The store cannot be enumerated ([`ListError::Store`](crate::ListError::Store))
/// - The JSON report cannot be encoded ([`ListError::Serialization`](crate::ListError::Serialization))
/// - Writing to `out` fails ([`ListError::Io`](crate::ListError::Io))
///
/// # Examples
///
/// ```
/// use imgls_core::Image;
/// use imgls_core::ImagesOptions;
/// use imgls_core::MemoryStore;
/// use imgls_core::list_images;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = MemoryStore::new(vec![Image::new(
///     "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef",
///     vec!["localhost/app:latest".to_string()],
/// )]);
///
/// let mut out = Vec::new();
/// list_images(&store, &ImagesOptions::default(), &mut out)?;
/// assert_eq!(
///     String::from_utf8(out)?,
///     "IMAGE ID     IMAGE NAME\n0123456789ab localhost/app:latest\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn list_images<S, W>(store: &S, options: &ImagesOptions, out: &mut W) -> Result<()>
where
    S: ImageStore + ?Sized,
    W: Write,
{
    let images = store.images()?;
    debug!("listing {} image(s) with {options:?}", images.len());

    create_formatter(options).write_report(&images, out)
}
