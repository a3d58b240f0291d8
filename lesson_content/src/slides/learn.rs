//! Learn slides - static teaching content.

use serde::{Deserialize, Serialize};

use super::{Description, ImageRef, LabeledImage, Narration};

/// A teaching slide with text, pictures, and optional narration.
///
/// Learn slides have no interaction; the player can always advance past
/// them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearnSlide {
    pub title: String,

    pub description: Description,

    /// Large illustration shown beside the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<ImageRef>,

    /// Small captioned example pictures shown in a row.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<LabeledImage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narration: Option<Narration>,
}

impl LearnSlide {
    /// Create a new learn slide with the given title and description.
    pub fn new(title: impl Into<String>, description: Description) -> Self {
        Self {
            title: title.into(),
            description,
            hero_image: None,
            examples: Vec::new(),
            narration: None,
        }
    }

    /// Set the hero image.
    pub fn with_hero_image(mut self, src: impl Into<String>) -> Self {
        self.hero_image = Some(ImageRef::new(src));
        self
    }

    /// Add an example picture.
    pub fn with_example(mut self, example: LabeledImage) -> Self {
        self.examples.push(example);
        self
    }

    /// Attach narration.
    pub fn with_narration(mut self, narration: Narration) -> Self {
        self.narration = Some(narration);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learn_slide_builder() {
        let slide = LearnSlide::new(
            "Natural and Man-Made",
            Description::paragraphs([
                "Some things around us were made by nature.",
                "Other things were made by people.",
            ]),
        )
        .with_hero_image("images/world.png")
        .with_example(LabeledImage::new("Tree", "images/tree.png"))
        .with_example(LabeledImage::new("Chair", "images/chair.png"))
        .with_narration(Narration::speak("Look at the world around us!"));

        assert_eq!(slide.title, "Natural and Man-Made");
        assert_eq!(slide.description.as_paragraphs().len(), 2);
        assert_eq!(slide.examples.len(), 2);
        assert!(slide.narration.is_some());
    }

    #[test]
    fn test_learn_slide_optional_fields_omitted() {
        let slide = LearnSlide::new("Short", Description::text("Just text."));
        let json = serde_json::to_string(&slide).unwrap();

        assert!(!json.contains("hero_image"));
        assert!(!json.contains("examples"));
        assert!(!json.contains("narration"));
    }
}
