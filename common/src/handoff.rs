use std::fmt;

use api::{ImageMetadata, UploadResult};
use tracing::{debug, error};
use url::form_urlencoded;

use crate::format::{format_bytes, local_time, truncate_chars};

// query parameter names for the /upload details route
pub const IMAGE_ID: &str = "imageId";
pub const ORIGINAL_NAME: &str = "originalName";
pub const DESCRIPTION: &str = "description";
pub const METADATA: &str = "metadata";
pub const UPLOAD_TIME: &str = "uploadTime";

pub const EXIF_PREVIEW_ENTRIES: usize = 10;
pub const EXIF_VALUE_CHARS: usize = 50;

const UNKNOWN: &str = "Unknown";

// the details page has no server-side state, everything it shows travels in
// the url.  metadata is carried as the raw json string so that a bad value
// only breaks the metadata and not the whole route
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailsQuery {
    pub image_id: String,
    pub original_name: String,
    pub description: String,
    pub metadata: Option<String>,
    pub upload_time: String,
}

impl From<&UploadResult> for DetailsQuery {
    fn from(result: &UploadResult) -> Self {
        let metadata = match serde_json::to_string(&result.metadata) {
            Ok(json) => Some(json),
            Err(err) => {
                error!({ error = %err }, "failed to serialize upload metadata");
                None
            }
        };

        DetailsQuery {
            image_id: result.image_id.clone(),
            original_name: result.original_filename.clone(),
            description: result.description.clone(),
            metadata,
            upload_time: result.upload_time.clone(),
        }
    }
}

impl DetailsQuery {
    // unknown parameters are ignored and repeated ones keep the last value
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut details = DetailsQuery::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.into_owned();
            match key.as_ref() {
                IMAGE_ID => details.image_id = value,
                ORIGINAL_NAME => details.original_name = value,
                DESCRIPTION => details.description = value,
                METADATA => details.metadata = Some(value),
                UPLOAD_TIME => details.upload_time = value,
                other => debug!({ key = %other }, "ignoring unknown details parameter"),
            }
        }

        details
    }

    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        serializer
            .append_pair(IMAGE_ID, &self.image_id)
            .append_pair(ORIGINAL_NAME, &self.original_name)
            .append_pair(DESCRIPTION, &self.description);
        if let Some(metadata) = &self.metadata {
            serializer.append_pair(METADATA, metadata);
        }
        serializer.append_pair(UPLOAD_TIME, &self.upload_time);

        serializer.finish()
    }

    pub fn load(&self) -> DetailsState {
        let Some(raw) = self.metadata.as_deref() else {
            return DetailsState::Missing;
        };

        match serde_json::from_str::<ImageMetadata>(raw) {
            Ok(metadata) => DetailsState::Ready(UploadDetails::new(self, &metadata)),
            Err(err) => {
                error!({ error = %err }, "failed to parse metadata parameter");
                DetailsState::Malformed(err.to_string())
            }
        }
    }
}

// the router hands us the raw query string and renders us back with Display
impl From<&str> for DetailsQuery {
    fn from(query: &str) -> Self {
        DetailsQuery::parse(query)
    }
}

impl fmt::Display for DetailsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DetailsState {
    Ready(UploadDetails),
    // no metadata parameter at all, usually a bookmarked or hand-typed url
    Missing,
    // the parse error, for display
    Malformed(String),
}

// display strings for the details sidebar, with every gap already filled in
#[derive(Clone, Debug, PartialEq)]
pub struct UploadDetails {
    pub image_id: String,
    pub name: String,
    pub format: String,
    pub size: String,
    pub dimensions: String,
    pub upload_time: String,
    pub description: String,
    pub exif_count: usize,
    pub exif_preview: Vec<(String, String)>,
}

impl UploadDetails {
    pub fn new(query: &DetailsQuery, metadata: &ImageMetadata) -> Self {
        let exif_preview = metadata
            .exif_values()
            .take(EXIF_PREVIEW_ENTRIES)
            .map(|(tag, value)| (tag.to_owned(), truncate_chars(&value, EXIF_VALUE_CHARS)))
            .collect();

        UploadDetails {
            image_id: query.image_id.clone(),
            name: query.original_name.clone(),
            format: metadata.format().unwrap_or(UNKNOWN).to_owned(),
            size: metadata
                .file_size
                .map(format_bytes)
                .unwrap_or_else(|| String::from(UNKNOWN)),
            dimensions: metadata
                .dimensions()
                .map(|s| format!("{}x{}", s.width, s.height))
                .unwrap_or_else(|| String::from(UNKNOWN)),
            upload_time: local_time(&query.upload_time),
            // blank captions get the placeholder, anything else is shown as sent
            description: if query.description.trim().is_empty() {
                String::from("No description available")
            } else {
                query.description.clone()
            },
            exif_count: metadata.exif_entries(),
            exif_preview,
        }
    }
}

#[cfg(test)]
mod tests {
    use api::{ExifTags, ImageSize};
    use serde_json::Value;

    use super::*;

    fn sample_result() -> UploadResult {
        let exif = (0..12)
            .map(|i| (format!("Tag{i:02}"), Value::from(format!("value {i} {}", "x".repeat(60)))))
            .collect::<ExifTags>();

        UploadResult {
            image_id: String::from("9c1e.png"),
            description: String::from("an elephant & a calf, at 50% zoom?"),
            original_filename: String::from("my photo (1).png"),
            upload_time: String::from("2024-05-01T10:15:30.123456"),
            metadata: ImageMetadata {
                file_size: Some(1536),
                size: Some(ImageSize {
                    width: 1920,
                    height: 1080,
                }),
                format: Some(String::from("PNG")),
                exif: Some(exif),
            },
        }
    }

    #[test]
    fn metadata_survives_the_url() {
        let result = sample_result();

        let url_query = DetailsQuery::from(&result).to_string();
        let parsed = DetailsQuery::from(url_query.as_str());

        assert_eq!(parsed.image_id, result.image_id);
        assert_eq!(parsed.original_name, result.original_filename);
        assert_eq!(parsed.description, result.description);
        assert_eq!(parsed.upload_time, result.upload_time);

        let metadata: ImageMetadata = serde_json::from_str(parsed.metadata.as_deref().unwrap()).unwrap();
        assert_eq!(metadata, result.metadata);
    }

    #[test]
    fn query_uses_camel_case_names() {
        let query = DetailsQuery {
            image_id: String::from("a b"),
            original_name: String::from("x.jpg"),
            description: String::new(),
            metadata: Some(String::from("{}")),
            upload_time: String::from("t"),
        };

        assert_eq!(
            query.to_query_string(),
            "imageId=a+b&originalName=x.jpg&description=&metadata=%7B%7D&uploadTime=t"
        );
    }

    #[test]
    fn parse_accepts_leading_question_mark_and_ignores_extras() {
        let query = DetailsQuery::parse("?imageId=abc&utm_source=mail&metadata=%7B%7D");

        assert_eq!(query.image_id, "abc");
        assert_eq!(query.metadata.as_deref(), Some("{}"));
        assert_eq!(query.original_name, "");
    }

    #[test]
    fn load_fills_display_fields() {
        let query = DetailsQuery::from(&sample_result());

        let DetailsState::Ready(details) = query.load() else {
            panic!("expected details to load");
        };

        assert_eq!(details.name, "my photo (1).png");
        assert_eq!(details.format, "PNG");
        assert_eq!(details.size, "1.50 KB");
        assert_eq!(details.dimensions, "1920x1080");
        assert_eq!(details.upload_time, "2024-05-01 10:15:30");
        assert_eq!(details.exif_count, 12);
        assert_eq!(details.exif_preview.len(), EXIF_PREVIEW_ENTRIES);
        assert_eq!(details.exif_preview[0].0, "Tag00");
        assert_eq!(details.exif_preview[0].1.chars().count(), EXIF_VALUE_CHARS);
    }

    #[test]
    fn sparse_metadata_renders_unknown() {
        let query = DetailsQuery {
            metadata: Some(String::from(r#"{"size": {"width": 0, "height": 0}}"#)),
            ..Default::default()
        };

        let DetailsState::Ready(details) = query.load() else {
            panic!("expected details to load");
        };

        assert_eq!(details.format, "Unknown");
        assert_eq!(details.size, "Unknown");
        assert_eq!(details.dimensions, "Unknown");
        assert_eq!(details.upload_time, "-");
        assert_eq!(details.description, "No description available");
        assert_eq!(details.exif_count, 0);
        assert!(details.exif_preview.is_empty());
    }

    #[test]
    fn zero_byte_file_is_not_unknown() {
        let query = DetailsQuery {
            metadata: Some(String::from(r#"{"file_size": 0}"#)),
            ..Default::default()
        };

        let DetailsState::Ready(details) = query.load() else {
            panic!("expected details to load");
        };

        assert_eq!(details.size, "0 B");
    }

    #[test]
    fn exif_preview_follows_server_order() {
        // twelve tags, named so that alphabetical order would pick a different ten
        let tags = (0..12)
            .rev()
            .map(|i| format!(r#""T{i:02}": "v{i}""#))
            .collect::<Vec<_>>()
            .join(",");
        let query = DetailsQuery {
            metadata: Some(format!(r#"{{"exif": {{{tags}}}}}"#)),
            ..Default::default()
        };

        let DetailsState::Ready(details) = query.load() else {
            panic!("expected details to load");
        };

        assert_eq!(details.exif_count, 12);
        assert_eq!(details.exif_preview[0], (String::from("T11"), String::from("v11")));
        assert_eq!(details.exif_preview[9], (String::from("T02"), String::from("v2")));
    }

    #[test]
    fn description_is_shown_untrimmed() {
        let query = DetailsQuery {
            description: String::from("  spaced ?#& ünïcode  "),
            metadata: Some(String::from("{}")),
            ..Default::default()
        };

        let DetailsState::Ready(details) = query.load() else {
            panic!("expected details to load");
        };
        assert_eq!(details.description, "  spaced ?#& ünïcode  ");

        let blank = DetailsQuery {
            description: String::from("   "),
            metadata: Some(String::from("{}")),
            ..Default::default()
        };
        let DetailsState::Ready(details) = blank.load() else {
            panic!("expected details to load");
        };
        assert_eq!(details.description, "No description available");
    }

    #[test]
    fn malformed_metadata_is_an_explicit_error() {
        let query = DetailsQuery::parse("imageId=abc&metadata=%7Bnot+json");

        assert!(matches!(query.load(), DetailsState::Malformed(_)));
    }

    #[test]
    fn wrongly_typed_metadata_is_an_explicit_error() {
        let query = DetailsQuery::parse("metadata=%7B%22file_size%22%3A%22big%22%7D");

        assert!(matches!(query.load(), DetailsState::Malformed(_)));
    }

    #[test]
    fn missing_metadata_is_an_explicit_error() {
        let query = DetailsQuery::parse("imageId=abc&description=hello");

        assert_eq!(query.load(), DetailsState::Missing);
    }
}
