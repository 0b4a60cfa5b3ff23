//! JSON output for machine-readable reports.

use std::io::Write;

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use super::ReportFormatter;
use crate::Image;
use crate::ImageSummary;
use crate::ListError;
use crate::Result;

const INDENT: &[u8] = b"    ";

/// Renders images as a JSON array of `{"id", "names"}` objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Encodes `images` as an indented JSON array, without a trailing newline.
    pub fn encode(images: &[Image]) -> Result<Vec<u8>> {
        let summaries: Vec<ImageSummary<'_>> = images.iter().map(Image::summary).collect();

        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        summaries
            .serialize(&mut ser)
            .map_err(ListError::Serialization)?;
        Ok(buf)
    }
}

impl ReportFormatter for JsonFormatter {
    fn write_report(&self, images: &[Image], out: &mut dyn Write) -> Result<()> {
        // Encode fully before touching the sink so a failure writes nothing.
        let mut data = Self::encode(images)?;
        data.push(b'\n');
        out.write_all(&data)?;
        Ok(())
    }
}
