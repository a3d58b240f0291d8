//! Slide definitions for lesson content.

mod choice;
mod learn;
mod media;
mod sequence;
mod sorting;

pub use choice::*;
pub use learn::*;
pub use media::*;
pub use sequence::*;
pub use sorting::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique identifier for draggable items within a slide.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    /// Create a new item ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for drop targets (sorting boxes, buckets) within a slide.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(pub String);

impl TargetId {
    /// Create a new target ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for steps in an ordering activity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(pub String);

impl StepId {
    /// Create a new step ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for answer options in choice questions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionId(pub String);

impl OptionId {
    /// Create a new option ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The slide kinds a lesson can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlideKind {
    Learn,
    Sort,
    BucketMatch,
    Sequence,
    WhoAmI,
    Quiz,
}

impl SlideKind {
    /// The wire-format tag for this kind.
    pub fn format_tag(&self) -> &'static str {
        match self {
            SlideKind::Learn => "learn",
            SlideKind::Sort => "sort",
            SlideKind::BucketMatch => "bucket-match",
            SlideKind::Sequence => "sequence",
            SlideKind::WhoAmI => "who-am-i",
            SlideKind::Quiz => "quiz",
        }
    }
}

impl std::fmt::Display for SlideKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_tag())
    }
}

/// A fully described lesson slide.
///
/// The set of formats is closed: anything else in authored content is a
/// parse error, caught when the catalog is loaded rather than at render
/// time. Each variant carries everything a renderer needs to mount it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "kebab-case")]
pub enum SlideDescriptor {
    /// Static teaching content with text and pictures.
    Learn(LearnSlide),

    /// Drag items into the category box they belong to.
    Sort(SortSlide),

    /// Match each item to its single correct bucket.
    BucketMatch(BucketMatchSlide),

    /// Arrange steps into their correct order.
    Sequence(SequenceSlide),

    /// A riddle with one correct answer among the options.
    WhoAmI(ChoiceSlide),

    /// A quiz question with one correct answer and explanations.
    Quiz(QuizSlide),
}

impl SlideDescriptor {
    /// Get the kind of this slide.
    pub fn kind(&self) -> SlideKind {
        match self {
            SlideDescriptor::Learn(_) => SlideKind::Learn,
            SlideDescriptor::Sort(_) => SlideKind::Sort,
            SlideDescriptor::BucketMatch(_) => SlideKind::BucketMatch,
            SlideDescriptor::Sequence(_) => SlideKind::Sequence,
            SlideDescriptor::WhoAmI(_) => SlideKind::WhoAmI,
            SlideDescriptor::Quiz(_) => SlideKind::Quiz,
        }
    }

    /// The heading a player shows for this slide.
    pub fn title(&self) -> &str {
        match self {
            SlideDescriptor::Learn(slide) => &slide.title,
            SlideDescriptor::Sort(slide) => &slide.title,
            SlideDescriptor::BucketMatch(slide) => &slide.title,
            SlideDescriptor::Sequence(slide) => &slide.title,
            SlideDescriptor::WhoAmI(slide) => &slide.question,
            SlideDescriptor::Quiz(slide) => &slide.question,
        }
    }

    /// Narration attached to this slide, if any.
    pub fn narration(&self) -> Option<&Narration> {
        match self {
            SlideDescriptor::Learn(slide) => slide.narration.as_ref(),
            SlideDescriptor::Sort(slide) => slide.narration.as_ref(),
            SlideDescriptor::BucketMatch(slide) => slide.narration.as_ref(),
            SlideDescriptor::Sequence(_) => None,
            SlideDescriptor::WhoAmI(_) => None,
            SlideDescriptor::Quiz(_) => None,
        }
    }

    /// Check this slide's internal invariants.
    pub fn validate(&self) -> Result<(), ContentError> {
        match self {
            SlideDescriptor::Learn(_) => Ok(()),
            SlideDescriptor::Sort(slide) => slide.validate(),
            SlideDescriptor::BucketMatch(slide) => slide.validate(),
            SlideDescriptor::Sequence(slide) => slide.validate(),
            SlideDescriptor::WhoAmI(slide) => slide.validate(),
            SlideDescriptor::Quiz(slide) => slide.validate(),
        }
    }
}

/// Errors raised by malformed lesson content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// An item's category matches none of the slide's targets, so the
    /// slide could never be completed.
    #[error("slide '{slide}': item '{item}' has category '{category}' but no target accepts it")]
    UnmatchedCategory {
        slide: String,
        item: ItemId,
        category: Category,
    },

    /// Fewer pieces than the activity needs to make sense.
    #[error("slide '{slide}': needs at least {expected} {what}, found {found}")]
    NotEnough {
        slide: String,
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// Two pieces of the same slide share an ID.
    #[error("slide '{slide}': duplicate {what} id '{id}'")]
    DuplicateId {
        slide: String,
        what: &'static str,
        id: String,
    },

    /// A choice question must have exactly one correct option.
    #[error("slide '{slide}': expected exactly one correct option, found {found}")]
    CorrectOptionCount { slide: String, found: usize },

    /// The answer key of an ordering activity must use each step exactly once.
    #[error("slide '{slide}': correct order is not a permutation of the step ids")]
    OrderNotPermutation { slide: String },

    /// More items than buckets can hold.
    #[error("slide '{slide}': {items} items cannot all be matched into {buckets} buckets")]
    NotEnoughBuckets {
        slide: String,
        items: usize,
        buckets: usize,
    },

    /// A category has more items than buckets accepting that category.
    #[error("slide '{slide}': category '{category}' has {items} items but only {buckets} buckets")]
    CategoryOverflow {
        slide: String,
        category: Category,
        items: usize,
        buckets: usize,
    },

    /// Two standards in the catalog share an ID.
    #[error("catalog: duplicate standard id '{id}'")]
    DuplicateStandard { id: String },

    /// Two chapters of the same standard share an ID.
    #[error("standard '{standard}': duplicate chapter id '{id}'")]
    DuplicateChapter { standard: String, id: String },

    /// The catalog JSON could not be parsed.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Find the first ID that appears twice.
pub(crate) fn find_duplicate<'a>(ids: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}
