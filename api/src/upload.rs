use serde::{Deserialize, Serialize};
use serde_json::Value;

// tag name to value, kept in the order the server sent them
pub type ExifTags = serde_json::Map<String, Value>;

// the response body of POST /upload
//
// only image_id is strictly required; everything else is filled in by the
// server on a best-effort basis, so the views must cope with blanks
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    pub image_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub original_filename: String,
    #[serde(default)]
    pub upload_time: String,
    #[serde(default)]
    pub metadata: ImageMetadata,
}

// every field is optional because this struct is also reconstructed from a
// query parameter that the user is free to edit
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ImageSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exif: Option<ExifTags>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageMetadata {
    // a decoded image never has a zero side, so treat that the same as missing
    pub fn dimensions(&self) -> Option<ImageSize> {
        self.size.filter(|s| s.width > 0 && s.height > 0)
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref().filter(|f| !f.is_empty())
    }

    pub fn exif_entries(&self) -> usize {
        self.exif.as_ref().map_or(0, |e| e.len())
    }

    // string values are shown bare, anything else as its json text
    pub fn exif_values(&self) -> impl Iterator<Item = (&str, String)> {
        self.exif.iter().flatten().map(|(tag, value)| {
            let shown = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (tag.as_str(), shown)
        })
    }
}

// a file picked in the browser, already read into memory
#[derive(Clone, Debug, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        UploadFile {
            name: name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    // the server rejects anything that isn't declared as image/*, so fall back
    // on the extension when the browser didn't tell us
    pub fn mime_type(&self) -> String {
        if let Some(ct) = self.content_type.as_deref().filter(|ct| !ct.is_empty()) {
            return ct.to_owned();
        }

        mime_guess::from_path(&self.name)
            .first_raw()
            .unwrap_or("application/octet-stream")
            .to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPLOAD_RESPONSE: &str = r#"{
        "image_id": "5b7c0f7e-1d1c-4c55-9d6e-3f7a1f1e2a10.jpg",
        "description": "a cat sitting on a window sill",
        "original_filename": "cat.jpg",
        "upload_time": "2024-05-01T10:15:30.123456",
        "metadata": {
            "filename": "5b7c0f7e-1d1c-4c55-9d6e-3f7a1f1e2a10.jpg",
            "format": "JPEG",
            "mode": "RGB",
            "size": {"width": 1200, "height": 800},
            "file_size": 245760,
            "created_at": "2024-05-01T10:15:30.100000",
            "exif": {"Make": "Canon", "Model": "EOS 5D"}
        }
    }"#;

    #[test]
    fn decodes_server_response() {
        let result: UploadResult = serde_json::from_str(UPLOAD_RESPONSE).unwrap();

        assert_eq!(result.original_filename, "cat.jpg");
        assert_eq!(result.metadata.file_size, Some(245760));
        assert_eq!(
            result.metadata.dimensions(),
            Some(ImageSize {
                width: 1200,
                height: 800
            })
        );
        assert_eq!(result.metadata.format(), Some("JPEG"));
        assert_eq!(result.metadata.exif_entries(), 2);
    }

    #[test]
    fn exif_keeps_server_order() {
        let body = r#"{"exif": {"Software": "GIMP", "Make": "Canon", "ISOSpeedRatings": 400}}"#;

        let metadata: ImageMetadata = serde_json::from_str(body).unwrap();
        let tags = metadata.exif_values().collect::<Vec<_>>();

        assert_eq!(
            tags,
            vec![
                ("Software", String::from("GIMP")),
                ("Make", String::from("Canon")),
                ("ISOSpeedRatings", String::from("400")),
            ]
        );
    }

    #[test]
    fn tolerates_sparse_metadata() {
        let body = r#"{"image_id": "x", "metadata": {"format": null, "size": {"width": 0, "height": 10}}}"#;

        let result: UploadResult = serde_json::from_str(body).unwrap();

        assert_eq!(result.description, "");
        assert_eq!(result.metadata.format(), None);
        assert_eq!(result.metadata.dimensions(), None);
        assert_eq!(result.metadata.file_size, None);
        assert_eq!(result.metadata.exif_entries(), 0);
    }

    #[test]
    fn serialized_metadata_omits_missing_fields() {
        let metadata = ImageMetadata {
            file_size: Some(10),
            ..Default::default()
        };

        assert_eq!(serde_json::to_string(&metadata).unwrap(), r#"{"file_size":10}"#);
    }

    #[test]
    fn mime_type_prefers_declared_type() {
        let file = UploadFile::new("photo.bin", vec![1, 2, 3]).with_content_type("image/png");

        assert_eq!(file.mime_type(), "image/png");
    }

    #[test]
    fn mime_type_falls_back_to_extension() {
        assert_eq!(UploadFile::new("photo.jpeg", vec![]).mime_type(), "image/jpeg");
        assert_eq!(
            UploadFile::new("photo.webp", vec![]).with_content_type("").mime_type(),
            "image/webp"
        );
        assert_eq!(
            UploadFile::new("no_extension", vec![]).mime_type(),
            "application/octet-stream"
        );
    }
}
