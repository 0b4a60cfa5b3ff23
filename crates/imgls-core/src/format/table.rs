//! Column-aligned table output.

use std::io::Write;

use log::trace;

use super::ReportFormatter;
use crate::Image;
use crate::ImagesOptions;
use crate::Result;

/// Width of the ID column when IDs are truncated.
pub const TRUNCATED_ID_WIDTH: usize = 12;

/// Width of the ID column when IDs are printed in full.
pub const FULL_ID_WIDTH: usize = 64;

const ID_HEADING: &str = "IMAGE ID";
const NAME_HEADING: &str = "IMAGE NAME";

/// Renders images as an `IMAGE ID` / `IMAGE NAME` table, one row per name.
#[derive(Debug, Clone, Copy)]
pub struct TableFormatter {
    quiet: bool,
    no_heading: bool,
    truncate: bool,
}

impl TableFormatter {
    /// Creates a table formatter from display options; `json` is ignored.
    pub fn new(options: &ImagesOptions) -> Self {
        Self {
            quiet: options.quiet,
            no_heading: options.no_heading,
            truncate: options.truncate,
        }
    }

    const fn id_width(&self) -> usize {
        if self.truncate {
            TRUNCATED_ID_WIDTH
        } else {
            FULL_ID_WIDTH
        }
    }

    fn write_heading(&self, out: &mut dyn Write) -> Result<()> {
        let width = self.id_width();
        writeln!(out, "{ID_HEADING:<width$} {NAME_HEADING}")?;
        Ok(())
    }

    fn write_row(&self, out: &mut dyn Write, id: &str, name: &str) -> Result<()> {
        let width = self.id_width();
        if self.truncate {
            writeln!(out, "{id:<width$.width$} {name}")?;
        } else {
            writeln!(out, "{id:<width$} {name}")?;
        }
        Ok(())
    }
}

impl ReportFormatter for TableFormatter {
    fn write_report(&self, images: &[Image], out: &mut dyn Write) -> Result<()> {
        if !images.is_empty() && !self.no_heading && !self.quiet {
            self.write_heading(out)?;
        }

        let mut rows = 0usize;
        for image in images {
            if self.quiet {
                writeln!(out, "{}", image.id)?;
                rows += 1;
                continue;
            }

            // An image without names still gets one row.
            if image.names.is_empty() {
                self.write_row(out, &image.id, "")?;
                rows += 1;
            } else {
                for name in &image.names {
                    self.write_row(out, &image.id, name)?;
                    rows += 1;
                }
            }
        }

        trace!("wrote {rows} row(s) for {} image(s)", images.len());
        Ok(())
    }
}
