//! Static catalog of the file extensions the engine accepts.

use serde::ser::{Serialize, SerializeMap, Serializer};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// Grouping used when reporting supported extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum FormatCategory {
    Documents,
    Web,
    Text,
    Images,
    Audio,
    Other,
}

impl FormatCategory {
    /// Extensions (lower case, no leading dot) in this category.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            FormatCategory::Documents => &["pdf", "docx", "doc", "pptx", "ppt", "xlsx", "xls"],
            FormatCategory::Web => &["html", "htm", "xml"],
            FormatCategory::Text => &["txt", "md", "rst"],
            FormatCategory::Images => &["jpg", "jpeg", "png", "gif", "bmp", "tiff"],
            FormatCategory::Audio => &["mp3", "wav"],
            FormatCategory::Other => &["csv", "json", "eml", "msg", "epub", "ipynb"],
        }
    }
}

/// The full catalog. Serializes as an object keyed by category name, in
/// declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SupportedFormats;

impl SupportedFormats {
    pub fn categories(&self) -> impl Iterator<Item = FormatCategory> {
        FormatCategory::iter()
    }

    /// Number of extensions across every category.
    pub fn total(&self) -> usize {
        self.categories().map(|c| c.extensions().len()).sum()
    }

    /// Category an extension belongs to. Case-insensitive, leading dot optional.
    pub fn category_of(&self, extension: &str) -> Option<FormatCategory> {
        let ext = extension.trim_start_matches('.').to_ascii_lowercase();
        self.categories()
            .find(|c| c.extensions().contains(&ext.as_str()))
    }
}

impl Serialize for SupportedFormats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FormatCategory::iter().len()))?;
        for category in self.categories() {
            map.serialize_entry(category.as_ref(), category.extensions())?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_sum_of_categories() {
        let formats = SupportedFormats;
        let sum: usize = FormatCategory::iter().map(|c| c.extensions().len()).sum();
        assert_eq!(formats.total(), sum);
        assert_eq!(formats.total(), 27);
    }

    #[test]
    fn documents_list_matches_catalog() {
        assert_eq!(
            FormatCategory::Documents.extensions(),
            &["pdf", "docx", "doc", "pptx", "ppt", "xlsx", "xls"]
        );
    }

    #[test]
    fn serializes_in_declaration_order() {
        let json = serde_json::to_string(&SupportedFormats).unwrap();
        let keys: Vec<usize> = ["documents", "web", "text", "images", "audio", "other"]
            .iter()
            .map(|k| json.find(&format!("\"{k}\"")).unwrap())
            .collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]), "{json}");
    }

    #[test]
    fn category_lookup_ignores_case_and_dot() {
        let formats = SupportedFormats;
        assert_eq!(formats.category_of(".PDF"), Some(FormatCategory::Documents));
        assert_eq!(formats.category_of("ipynb"), Some(FormatCategory::Other));
        assert_eq!(formats.category_of("exe"), None);
    }
}
