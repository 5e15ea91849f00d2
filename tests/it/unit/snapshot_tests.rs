//! Snapshot tests using the insta crate.
//!
//! Inline snapshots keep the expected serialized form next to the test.
//! Update with:
//!
//! ```sh
//! cargo insta test --accept
//! ```

use moodboard::types::{ImageData, ItemContent};

#[test]
fn test_image_data_serialized_form() {
    let data = ImageData::new(image::RgbaImage::new(8, 6));
    insta::assert_json_snapshot!(data, @r###"
    {
      "width": 8,
      "height": 6
    }
    "###);
}

#[test]
fn test_note_content_serialized_form() {
    let content = ItemContent::Note {
        body: "buy paint".to_string(),
    };
    insta::assert_json_snapshot!(content, @r###"
    {
      "Note": {
        "body": "buy paint"
      }
    }
    "###);
}

#[test]
fn test_photo_content_serialized_form() {
    let content = ItemContent::Photo {
        image: ImageData::new(image::RgbaImage::new(4, 4)),
        caption: "summer".to_string(),
    };
    insta::assert_json_snapshot!(content, @r###"
    {
      "Photo": {
        "image": {
          "width": 4,
          "height": 4
        },
        "caption": "summer"
      }
    }
    "###);
}
