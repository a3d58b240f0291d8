//! Shared media primitives used across slide kinds.

use serde::{Deserialize, Serialize};

/// Reference to an image asset by URL or bundle path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl ImageRef {
    /// Create a new image reference.
    pub fn new(src: impl Into<String>) -> Self {
        Self(src.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An image paired with its caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledImage {
    pub label: String,
    pub image: ImageRef,
}

impl LabeledImage {
    /// Create a new labeled image.
    pub fn new(label: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            image: ImageRef::new(image),
        }
    }
}

/// Teaching text for a slide.
///
/// Authors write either a single string or a list of paragraphs; both
/// shapes are accepted and normalized through [`Description::paragraphs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Paragraphs(Vec<String>),
}

impl Description {
    /// Create a single-paragraph description.
    pub fn text(text: impl Into<String>) -> Self {
        Description::Text(text.into())
    }

    /// Create a multi-paragraph description.
    pub fn paragraphs(paragraphs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Description::Paragraphs(paragraphs.into_iter().map(Into::into).collect())
    }

    /// View the description as a list of paragraphs.
    pub fn as_paragraphs(&self) -> Vec<&str> {
        match self {
            Description::Text(text) => vec![text.as_str()],
            Description::Paragraphs(list) => list.iter().map(String::as_str).collect(),
        }
    }

    /// Check whether there is any text at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Description::Text(text) => text.is_empty(),
            Description::Paragraphs(list) => list.iter().all(String::is_empty),
        }
    }
}

/// Spoken narration for a slide.
///
/// A recorded audio file is preferred when present; `speak_text` is the
/// text-to-speech fallback (and the only source when no file exists).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Narration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speak_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_file: Option<String>,
}

impl Narration {
    /// Narration spoken by text-to-speech.
    pub fn speak(text: impl Into<String>) -> Self {
        Self {
            speak_text: Some(text.into()),
            audio_file: None,
        }
    }

    /// Narration from a recorded audio file.
    pub fn file(src: impl Into<String>) -> Self {
        Self {
            speak_text: None,
            audio_file: Some(src.into()),
        }
    }

    /// Add text-to-speech fallback to a recorded narration.
    pub fn with_speak_text(mut self, text: impl Into<String>) -> Self {
        self.speak_text = Some(text.into());
        self
    }

    /// Check whether there is anything to play.
    pub fn is_empty(&self) -> bool {
        self.speak_text.is_none() && self.audio_file.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_shapes() {
        let single = Description::text("One block of text.");
        assert_eq!(single.as_paragraphs(), vec!["One block of text."]);

        let multi = Description::paragraphs(["First.", "Second."]);
        assert_eq!(multi.as_paragraphs(), vec!["First.", "Second."]);
    }

    #[test]
    fn test_description_deserializes_both_shapes() {
        let single: Description = serde_json::from_str(r#""Just text""#).unwrap();
        assert_eq!(single.as_paragraphs(), vec!["Just text"]);

        let multi: Description = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(multi.as_paragraphs(), vec!["a", "b"]);
    }

    #[test]
    fn test_narration_builders() {
        let spoken = Narration::speak("Hello there");
        assert!(!spoken.is_empty());
        assert!(spoken.audio_file.is_none());

        let recorded = Narration::file("audio/intro.mp3").with_speak_text("Hello there");
        assert_eq!(recorded.audio_file.as_deref(), Some("audio/intro.mp3"));
        assert_eq!(recorded.speak_text.as_deref(), Some("Hello there"));

        assert!(Narration::default().is_empty());
    }
}
