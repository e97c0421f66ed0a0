/// Text segments of the first candidate returned by the model.
///
/// A segment is `None` when the model produced a non-text part at that position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelReply {
    pub segments: Vec<Option<String>>,
}

impl ModelReply {
    pub fn new(segments: Vec<Option<String>>) -> Self {
        Self { segments }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            segments: vec![Some(text.into())],
        }
    }

    /// Full reply text, or `None` when the first segment is missing or empty.
    pub fn text(&self) -> Option<String> {
        match self.segments.first() {
            Some(Some(first)) if !first.is_empty() => {
                Some(self.segments.iter().flatten().map(String::as_str).collect())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_concatenates_segments() {
        let reply = ModelReply::new(vec![
            Some("{\"dish_name\":".to_string()),
            None,
            Some("\"Soup\"}".to_string()),
        ]);
        assert_eq!(reply.text().as_deref(), Some("{\"dish_name\":\"Soup\"}"));
    }

    #[test]
    fn test_text_requires_non_empty_first_segment() {
        assert_eq!(ModelReply::default().text(), None);
        assert_eq!(ModelReply::from_text("").text(), None);
        assert_eq!(
            ModelReply::new(vec![None, Some("{}".to_string())]).text(),
            None
        );
    }
}
