//! Image records as exposed by a store.

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// Width of an ID rendered in truncated form.
pub const SHORT_ID_LEN: usize = 12;

/// A locally stored image.
///
/// Only `id` and `names` take part in reports. The remaining fields mirror
/// what the on-disk index carries and are dropped from every report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Content-derived identifier, never empty.
    pub id: String,

    /// Human-assigned aliases in insertion order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub names: Vec<String>,

    /// Manifest digest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,

    /// ID of the top layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,

    /// Creation timestamp as recorded by the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    /// Opaque metadata blob.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

impl Image {
    /// Creates an image record with only an ID and names.
    pub fn new(id: impl Into<String>, names: Vec<String>) -> Self {
        Self {
            id: id.into(),
            names,
            digest: None,
            layer: None,
            created: None,
            metadata: None,
        }
    }

    /// Returns the first 12 characters of the ID.
    ///
    /// # Examples
    ///
    /// ```
    /// use imgls_core::Image;
    ///
    /// let image = Image::new("0123456789abcdef", vec![]);
    /// assert_eq!(image.short_id(), "0123456789ab");
    /// ```
    pub fn short_id(&self) -> &str {
        self.id
            .char_indices()
            .nth(SHORT_ID_LEN)
            .map_or(self.id.as_str(), |(end, _)| &self.id[..end])
    }

    /// Borrowed projection of this record used for JSON reports.
    pub fn summary(&self) -> ImageSummary<'_> {
        ImageSummary {
            id: &self.id,
            names: &self.names,
        }
    }
}

/// The `id` and `names` of an image, and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageSummary<'a> {
    /// Image ID.
    pub id: &'a str,
    /// Image names in store order.
    pub names: &'a [String],
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
