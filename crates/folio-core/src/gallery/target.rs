//! Gallery Target - the data shown by one opening of the gallery modal.

use serde::{Deserialize, Serialize};

/// Images, layout hint and title for one gallery.
///
/// Targets are replaced wholesale when another gallery is opened; nothing
/// mutates a target in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryTarget {
    /// Raw image paths, in display order
    #[serde(default)]
    pub images: Vec<String>,
    /// Layout hint, e.g. "portrait", "16:9"
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Title shown in the modal header
    #[serde(default)]
    pub title: String,
}

impl GalleryTarget {
    pub fn new(title: impl Into<String>, images: Vec<String>) -> Self {
        Self {
            images,
            kind: None,
            title: title.into(),
        }
    }

    /// Builder-style layout hint
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_type_field() {
        let json = r#"{"images":["a.jpg","b.jpg"],"type":"portrait","title":"Trips"}"#;
        let target: GalleryTarget = serde_json::from_str(json).unwrap();
        assert_eq!(target.len(), 2);
        assert_eq!(target.kind.as_deref(), Some("portrait"));
        assert_eq!(target.title, "Trips");
    }

    #[test]
    fn test_missing_fields_default() {
        let target: GalleryTarget = serde_json::from_str("{}").unwrap();
        assert!(target.is_empty());
        assert!(target.kind.is_none());
        assert!(target.title.is_empty());
    }

    #[test]
    fn test_builder() {
        let target = GalleryTarget::new("Work", vec!["x.png".into()]).with_kind("16:9");
        assert_eq!(target.kind.as_deref(), Some("16:9"));
        assert!(!target.is_empty());
    }
}
