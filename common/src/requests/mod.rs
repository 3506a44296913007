//! Multipart layout of the create and update product requests.

/// Part name shared by every newly attached image file.
pub const FILES_PART: &str = "files";

/// Part carrying the JSON array of previously stored images to keep.
pub const EXISTING_IMAGES_PART: &str = "existingImages";

/// A text field of the multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPart {
    pub name: &'static str,
    pub value: String,
}

impl TextPart {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// Serializes the kept image references so the backend can tell which
/// stored images survive the update.
pub fn existing_images_json(references: &[String]) -> String {
    serde_json::to_string(references).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_images_are_a_json_array() {
        let refs = vec!["a.png".to_string(), "b \"c\".png".to_string()];
        assert_eq!(existing_images_json(&refs), r#"["a.png","b \"c\".png"]"#);
        assert_eq!(existing_images_json(&[]), "[]");
    }
}
