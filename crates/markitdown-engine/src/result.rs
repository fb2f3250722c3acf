use std::borrow::Cow;

/// Output of a successful conversion.
///
/// The text is always available through [`ConversionResult::text_content`].
/// Internally the result remembers whether the engine produced well-formed
/// UTF-8; if it did not, the accessor falls back to a lossy string form of
/// the raw output (invalid sequences become U+FFFD).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    content: Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Content {
    Text(String),
    Raw(Vec<u8>),
}

impl ConversionResult {
    /// Wrap text the engine produced directly.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
        }
    }

    /// Wrap raw engine output, keeping it as text when it is valid UTF-8.
    pub fn from_output(bytes: Vec<u8>) -> Self {
        let content = match String::from_utf8(bytes) {
            Ok(text) => Content::Text(text),
            Err(e) => Content::Raw(e.into_bytes()),
        };
        Self { content }
    }

    /// The converted Markdown.
    pub fn text_content(&self) -> Cow<'_, str> {
        match &self.content {
            Content::Text(text) => Cow::Borrowed(text),
            Content::Raw(bytes) => String::from_utf8_lossy(bytes),
        }
    }

    /// Consume the result, returning the converted Markdown.
    pub fn into_text(self) -> String {
        match self.content {
            Content::Text(text) => text,
            Content::Raw(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    /// `false` when [`text_content`](Self::text_content) had to fall back to
    /// the lossy form.
    pub fn is_exact(&self) -> bool {
        matches!(self.content, Content::Text(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_output_is_kept_verbatim() {
        let result = ConversionResult::from_output("# Título\n\n| a | b |\n".as_bytes().to_vec());
        assert!(result.is_exact());
        assert_eq!(result.text_content(), "# Título\n\n| a | b |\n");
    }

    #[test]
    fn invalid_utf8_falls_back_to_lossy_text() {
        let result = ConversionResult::from_output(vec![b'#', b' ', 0xff, b'x']);
        assert!(!result.is_exact());
        assert_eq!(result.text_content(), "# \u{FFFD}x");
        assert_eq!(result.into_text(), "# \u{FFFD}x");
    }

    #[test]
    fn empty_output_is_empty_text() {
        let result = ConversionResult::from_output(Vec::new());
        assert!(result.is_exact());
        assert_eq!(result.into_text(), "");
    }
}
