//! Property-based tests for report formatting.
//!
//! These tests use proptest to generate arbitrary image sets and verify
//! the table and JSON layouts hold across a wide range of cases.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use imgls_core::Image;
use imgls_core::ImagesOptions;
use imgls_core::MemoryStore;
use imgls_core::format::FULL_ID_WIDTH;
use imgls_core::format::TRUNCATED_ID_WIDTH;
use imgls_core::list_images;
use proptest::prelude::*;

fn image_strategy() -> impl Strategy<Value = Image> {
    (
        "[0-9a-f]{64}",
        prop::collection::vec("[a-z0-9./:-]{1,24}", 0..4),
    )
        .prop_map(|(id, names)| Image::new(id, names))
}

fn images_strategy() -> impl Strategy<Value = Vec<Image>> {
    prop::collection::vec(image_strategy(), 0..8)
}

fn render(images: Vec<Image>, options: &ImagesOptions) -> String {
    let store = MemoryStore::new(images);
    let mut out = Vec::new();
    list_images(&store, options, &mut out).expect("listing should succeed");
    String::from_utf8(out).expect("report should be UTF-8")
}

fn expected_rows(images: &[Image]) -> usize {
    images.iter().map(|i| i.names.len().max(1)).sum()
}

proptest! {
    /// Quiet mode prints exactly the IDs, one per image.
    #[test]
    fn prop_quiet_one_line_per_image(images in images_strategy()) {
        let options = ImagesOptions { quiet: true, ..Default::default() };
        let output = render(images.clone(), &options);
        let lines: Vec<&str> = output.lines().collect();
        let ids: Vec<&str> = images.iter().map(|i| i.id.as_str()).collect();
        prop_assert_eq!(lines, ids);
    }

    /// Every row carries a 12 character ID column followed by a space.
    #[test]
    fn prop_truncated_column_width(images in images_strategy()) {
        let options = ImagesOptions { no_heading: true, ..Default::default() };
        let output = render(images.clone(), &options);

        prop_assert_eq!(output.lines().count(), expected_rows(&images));
        let mut lines = output.lines();
        for image in &images {
            let names: Vec<&str> = if image.names.is_empty() {
                vec![""]
            } else {
                image.names.iter().map(String::as_str).collect()
            };
            for name in names {
                let line = lines.next().unwrap();
                prop_assert_eq!(&line[..TRUNCATED_ID_WIDTH], image.short_id());
                prop_assert_eq!(&line[TRUNCATED_ID_WIDTH..=TRUNCATED_ID_WIDTH], " ");
                prop_assert_eq!(&line[TRUNCATED_ID_WIDTH + 1..], name);
            }
        }
    }

    /// Untruncated rows carry the full ID in a 64 character column.
    #[test]
    fn prop_full_column_width(images in images_strategy()) {
        let options = ImagesOptions { truncate: false, no_heading: true, ..Default::default() };
        let output = render(images.clone(), &options);

        prop_assert_eq!(output.lines().count(), expected_rows(&images));
        for line in output.lines() {
            prop_assert!(line.len() > FULL_ID_WIDTH);
            prop_assert_eq!(&line[FULL_ID_WIDTH..=FULL_ID_WIDTH], " ");
        }
    }

    /// The heading appears only for non-empty stores.
    #[test]
    fn prop_heading_only_when_images(images in images_strategy(), truncate in any::<bool>()) {
        let options = ImagesOptions { truncate, ..Default::default() };
        let output = render(images.clone(), &options);
        if images.is_empty() {
            prop_assert_eq!(output, "");
        } else {
            prop_assert!(output.starts_with("IMAGE ID "));
            prop_assert_eq!(output.lines().count(), expected_rows(&images) + 1);
        }
    }

    /// JSON output mirrors the store exactly, whatever the other options say.
    #[test]
    fn prop_json_mirrors_store(
        images in images_strategy(),
        quiet in any::<bool>(),
        no_heading in any::<bool>(),
        truncate in any::<bool>(),
    ) {
        let options = ImagesOptions { quiet, no_heading, truncate, json: true };
        let output = render(images.clone(), &options);
        prop_assert!(output.ends_with('\n'));

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let array = value.as_array().unwrap();
        prop_assert_eq!(array.len(), images.len());
        for (entry, image) in array.iter().zip(&images) {
            let object = entry.as_object().unwrap();
            prop_assert_eq!(object.len(), 2);
            prop_assert_eq!(object["id"].as_str().unwrap(), image.id.as_str());
            let names: Vec<&str> = object["names"]
                .as_array()
                .unwrap()
                .iter()
                .map(|n| n.as_str().unwrap())
                .collect();
            let expected: Vec<&str> = image.names.iter().map(String::as_str).collect();
            prop_assert_eq!(names, expected);
        }
    }
}
