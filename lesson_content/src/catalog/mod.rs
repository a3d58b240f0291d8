//! Content catalog - every standard, chapter, and slide the app can play.

mod builtin;

use serde::{Deserialize, Serialize};

use crate::slides::{find_duplicate, ContentError, SlideDescriptor};

/// The standard served when a requested one does not exist.
pub const DEFAULT_STANDARD: &str = "1";

/// The chapter served when a requested one does not exist.
pub const DEFAULT_CHAPTER: &str = "1";

/// Unique identifier for grade standards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StandardId(pub String);

impl StandardId {
    /// Create a new standard ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StandardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for chapters within a standard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChapterId(pub String);

impl ChapterId {
    /// Create a new chapter ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChapterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A chapter: one playable lesson plus whether a quiz follows it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub id: ChapterId,

    pub title: String,

    /// Whether a quiz follows this chapter's lesson.
    #[serde(default)]
    pub quiz: bool,

    pub slides: Vec<SlideDescriptor>,
}

impl Chapter {
    /// Create a new empty chapter.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: ChapterId::new(id),
            title: title.into(),
            quiz: false,
            slides: Vec::new(),
        }
    }

    /// Append a slide.
    pub fn with_slide(mut self, slide: SlideDescriptor) -> Self {
        self.slides.push(slide);
        self
    }

    /// Mark that a quiz follows this chapter.
    pub fn with_quiz(mut self) -> Self {
        self.quiz = true;
        self
    }
}

/// A grade standard grouping chapters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Standard {
    pub id: StandardId,

    pub title: String,

    pub chapters: Vec<Chapter>,
}

impl Standard {
    /// Create a new empty standard.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: StandardId::new(id),
            title: title.into(),
            chapters: Vec::new(),
        }
    }

    /// Append a chapter.
    pub fn with_chapter(mut self, chapter: Chapter) -> Self {
        self.chapters.push(chapter);
        self
    }

    /// Look up a chapter by ID.
    pub fn chapter(&self, id: &ChapterId) -> Option<&Chapter> {
        self.chapters.iter().find(|chapter| &chapter.id == id)
    }
}

/// A lesson resolved against the catalog, carrying the IDs that were
/// actually served (they differ from the request after a fallback).
#[derive(Debug, Clone, Copy)]
pub struct ResolvedLesson<'a> {
    pub standard: &'a StandardId,
    pub chapter: &'a Chapter,
}

/// The complete content catalog.
///
/// Lookups never fail outright: a request for content that does not
/// exist falls back to the default standard and chapter so the player
/// always lands somewhere playable.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Catalog {
    standards: Vec<Standard>,
}

impl Catalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a standard.
    pub fn with_standard(mut self, standard: Standard) -> Self {
        self.standards.push(standard);
        self
    }

    /// Parse a catalog from JSON and validate every slide in it.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// All standards in authored order.
    pub fn standards(&self) -> &[Standard] {
        &self.standards
    }

    /// Look up a standard by ID.
    pub fn standard(&self, id: &StandardId) -> Option<&Standard> {
        self.standards.iter().find(|standard| &standard.id == id)
    }

    /// Look up a chapter without any fallback.
    pub fn chapter(&self, standard: &StandardId, chapter: &ChapterId) -> Option<&Chapter> {
        self.standard(standard)?.chapter(chapter)
    }

    /// Chapters of a standard, falling back to the default standard
    /// when the requested one is unknown.
    pub fn chapters_by_standard(&self, id: &StandardId) -> &[Chapter] {
        if let Some(standard) = self.standard(id) {
            return &standard.chapters;
        }

        log::warn!(
            "unknown standard '{}', falling back to '{}'",
            id,
            DEFAULT_STANDARD
        );
        self.standard(&StandardId::new(DEFAULT_STANDARD))
            .map(|standard| standard.chapters.as_slice())
            .unwrap_or(&[])
    }

    /// Resolve a lesson request, falling back to the default lesson
    /// when the requested one is unknown.
    pub fn resolve_lesson(
        &self,
        standard: &StandardId,
        chapter: &ChapterId,
    ) -> Option<ResolvedLesson<'_>> {
        if let Some(found) = self.standard(standard) {
            if let Some(chapter) = found.chapter(chapter) {
                return Some(ResolvedLesson {
                    standard: &found.id,
                    chapter,
                });
            }
        }

        log::warn!(
            "unknown lesson {}-{}, falling back to {}-{}",
            standard,
            chapter,
            DEFAULT_STANDARD,
            DEFAULT_CHAPTER
        );

        let fallback = self.standard(&StandardId::new(DEFAULT_STANDARD))?;
        let chapter = fallback.chapter(&ChapterId::new(DEFAULT_CHAPTER))?;
        Some(ResolvedLesson {
            standard: &fallback.id,
            chapter,
        })
    }

    /// The slides of a lesson, after fallback. Empty only when the
    /// catalog has no default lesson either.
    pub fn lesson_content(&self, standard: &StandardId, chapter: &ChapterId) -> &[SlideDescriptor] {
        match self.resolve_lesson(standard, chapter) {
            Some(resolved) => &resolved.chapter.slides,
            None => {
                log::warn!("catalog has no default lesson content");
                &[]
            }
        }
    }

    /// Check every invariant of the catalog and all its slides.
    pub fn validate(&self) -> Result<(), ContentError> {
        if let Some(id) = find_duplicate(self.standards.iter().map(|s| s.id.as_str())) {
            return Err(ContentError::DuplicateStandard { id: id.to_string() });
        }

        for standard in &self.standards {
            if let Some(id) = find_duplicate(standard.chapters.iter().map(|c| c.id.as_str())) {
                return Err(ContentError::DuplicateChapter {
                    standard: standard.id.to_string(),
                    id: id.to_string(),
                });
            }

            for chapter in &standard.chapters {
                for slide in &chapter.slides {
                    slide.validate()?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::{Description, LearnSlide};

    fn two_standard_catalog() -> Catalog {
        Catalog::new()
            .with_standard(
                Standard::new("1", "Standard 1")
                    .with_chapter(
                        Chapter::new("1", "Our World").with_slide(SlideDescriptor::Learn(
                            LearnSlide::new("Welcome", Description::text("Hello!")),
                        )),
                    )
                    .with_chapter(Chapter::new("2", "Water").with_quiz()),
            )
            .with_standard(Standard::new("2", "Standard 2").with_chapter(Chapter::new(
                "1",
                "Plants",
            )))
    }

    #[test]
    fn test_exact_lookup() {
        let catalog = two_standard_catalog();

        let chapter = catalog
            .chapter(&StandardId::new("1"), &ChapterId::new("2"))
            .unwrap();
        assert_eq!(chapter.title, "Water");
        assert!(chapter.quiz);

        let resolved = catalog
            .resolve_lesson(&StandardId::new("2"), &ChapterId::new("1"))
            .unwrap();
        assert_eq!(resolved.standard.as_str(), "2");
        assert_eq!(resolved.chapter.title, "Plants");
    }

    #[test]
    fn test_unknown_lesson_falls_back_to_default() {
        let catalog = two_standard_catalog();

        let resolved = catalog
            .resolve_lesson(&StandardId::new("9"), &ChapterId::new("4"))
            .unwrap();
        assert_eq!(resolved.standard.as_str(), "1");
        assert_eq!(resolved.chapter.id.as_str(), "1");

        // Known standard, unknown chapter: same fallback.
        let resolved = catalog
            .resolve_lesson(&StandardId::new("2"), &ChapterId::new("7"))
            .unwrap();
        assert_eq!(resolved.standard.as_str(), "1");
    }

    #[test]
    fn test_chapters_by_standard_fallback() {
        let catalog = two_standard_catalog();

        assert_eq!(catalog.chapters_by_standard(&StandardId::new("2")).len(), 1);
        assert_eq!(catalog.chapters_by_standard(&StandardId::new("9")).len(), 2);
    }

    #[test]
    fn test_empty_catalog_has_no_fallback() {
        let catalog = Catalog::new();

        assert!(catalog
            .resolve_lesson(&StandardId::new("1"), &ChapterId::new("1"))
            .is_none());
        assert!(catalog
            .lesson_content(&StandardId::new("1"), &ChapterId::new("1"))
            .is_empty());
    }

    #[test]
    fn test_duplicate_standard_rejected() {
        let catalog = Catalog::new()
            .with_standard(Standard::new("1", "First"))
            .with_standard(Standard::new("1", "Second"));

        assert!(matches!(
            catalog.validate(),
            Err(ContentError::DuplicateStandard { .. })
        ));
    }

    #[test]
    fn test_duplicate_chapter_rejected() {
        let catalog = Catalog::new().with_standard(
            Standard::new("1", "First")
                .with_chapter(Chapter::new("1", "A"))
                .with_chapter(Chapter::new("1", "B")),
        );

        assert!(matches!(
            catalog.validate(),
            Err(ContentError::DuplicateChapter { .. })
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "standards": [{
                "id": "1",
                "title": "Standard 1",
                "chapters": [{
                    "id": "1",
                    "title": "Our World",
                    "quiz": true,
                    "slides": [
                        {
                            "format": "learn",
                            "title": "Welcome",
                            "description": ["Look around you.", "What do you see?"]
                        },
                        {
                            "format": "sort",
                            "title": "Sort the Things",
                            "instruction": "Drag each thing to its group",
                            "items": [
                                {"id": "t1", "label": "Tree", "category": "natural"},
                                {"id": "c1", "label": "Chair", "category": "man-made"}
                            ],
                            "targets": [
                                {"id": "natT", "label": "Natural", "category": "natural"},
                                {"id": "manT", "label": "Man-Made", "category": "man-made"}
                            ]
                        }
                    ]
                }]
            }]
        }"#;

        let catalog = Catalog::from_json(json).unwrap();
        let slides = catalog.lesson_content(&StandardId::new("1"), &ChapterId::new("1"));
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[1].title(), "Sort the Things");
    }

    #[test]
    fn test_from_json_rejects_invalid_slide() {
        // One correct option is required; this riddle has none.
        let json = r#"{
            "standards": [{
                "id": "1",
                "title": "Standard 1",
                "chapters": [{
                    "id": "1",
                    "title": "Riddles",
                    "slides": [{
                        "format": "who-am-i",
                        "riddle": "I am tall.",
                        "question": "Who am I?",
                        "options": [
                            {"id": "a", "text": "A tree"},
                            {"id": "b", "text": "A river"}
                        ]
                    }]
                }]
            }]
        }"#;

        assert!(matches!(
            Catalog::from_json(json),
            Err(ContentError::CorrectOptionCount { found: 0, .. })
        ));
    }

    #[test]
    fn test_from_json_rejects_unknown_format() {
        let json = r#"{
            "standards": [{
                "id": "1",
                "title": "Standard 1",
                "chapters": [{
                    "id": "1",
                    "title": "Video",
                    "slides": [{"format": "video", "title": "Clip"}]
                }]
            }]
        }"#;

        assert!(matches!(
            Catalog::from_json(json),
            Err(ContentError::Parse(_))
        ));
    }
}
