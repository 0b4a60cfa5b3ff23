//! Report formatters.
//!
//! A formatter turns a snapshot of image records into bytes on an output
//! sink. [`create_formatter`] picks the right one for a set of
//! [`ImagesOptions`].

mod json;
mod table;

pub use json::JsonFormatter;
pub use table::FULL_ID_WIDTH;
pub use table::TRUNCATED_ID_WIDTH;
pub use table::TableFormatter;

use std::io::Write;

use crate::Image;
use crate::ImagesOptions;
use crate::Result;

/// Common report formatter trait.
pub trait ReportFormatter {
    /// Writes a report for `images` to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be encoded or written.
    fn write_report(&self, images: &[Image], out: &mut dyn Write) -> Result<()>;
}

/// Creates a report formatter based on display options.
///
/// `json` wins over every other option.
pub fn create_formatter(options: &ImagesOptions) -> Box<dyn ReportFormatter> {
    if options.json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TableFormatter::new(options))
    }
}
