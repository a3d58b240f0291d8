//! Renderer dispatch - turning slide descriptors into mounted activities.

use lesson_content::SlideDescriptor;
use serde::{Deserialize, Serialize};

use crate::activities::{
    ActivityKind, BucketMatchEngine, ChoiceEngine, RecoveryPolicy, SequenceEngine, SortEngine,
};

/// What the continue button says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContinueLabel {
    /// Score the current arrangement instead of advancing.
    CheckAnswers,
    /// Advance to the next slide.
    Continue,
    /// Leave the lesson back to the chapter overview.
    FinishLesson,
    /// Leave the lesson into the chapter quiz.
    StartQuiz,
}

impl ContinueLabel {
    /// The button caption.
    pub fn text(&self) -> &'static str {
        match self {
            ContinueLabel::CheckAnswers => "Check Answers",
            ContinueLabel::Continue => "Continue",
            ContinueLabel::FinishLesson => "Finish Lesson",
            ContinueLabel::StartQuiz => "Start Quiz",
        }
    }
}

/// The continue button: its caption and whether pressing it does
/// anything right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinueControl {
    pub label: ContinueLabel,
    pub enabled: bool,
}

impl ContinueControl {
    pub fn enabled(label: ContinueLabel) -> Self {
        Self {
            label,
            enabled: true,
        }
    }

    pub fn disabled(label: ContinueLabel) -> Self {
        Self {
            label,
            enabled: false,
        }
    }
}

/// Everything the frame around a slide needs: progress, hearts, audio
/// availability, and the continue button.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideChrome {
    /// Progress through the lesson, 0.0 to 100.0.
    pub progress: f32,

    pub hearts: u8,

    /// Whether the audio button has anything to play.
    pub narration_available: bool,

    pub continue_control: ContinueControl,

    /// Whether the end-of-lesson celebration is showing.
    pub congratulations: bool,
}

/// The currently mounted slide.
///
/// Mounting is exhaustive over the slide formats: a descriptor that
/// parsed is always renderable, there is no placeholder case. Riddles
/// and quiz questions both mount the choice engine.
#[derive(Debug, Clone)]
pub enum ActiveSlide {
    Learn,
    Sort(SortEngine),
    BucketMatch(BucketMatchEngine),
    Sequence(SequenceEngine),
    Choice(ChoiceEngine),
}

impl ActiveSlide {
    /// Mount the right engine for a slide.
    pub fn mount(slide: &SlideDescriptor) -> Self {
        match slide {
            SlideDescriptor::Learn(_) => ActiveSlide::Learn,
            SlideDescriptor::Sort(slide) => ActiveSlide::Sort(SortEngine::new(slide)),
            SlideDescriptor::BucketMatch(slide) => {
                ActiveSlide::BucketMatch(BucketMatchEngine::new(slide))
            }
            SlideDescriptor::Sequence(slide) => ActiveSlide::Sequence(SequenceEngine::new(slide)),
            SlideDescriptor::WhoAmI(slide) => ActiveSlide::Choice(ChoiceEngine::for_riddle(slide)),
            SlideDescriptor::Quiz(slide) => ActiveSlide::Choice(ChoiceEngine::for_quiz(slide)),
        }
    }

    /// The kind of activity mounted.
    pub fn kind(&self) -> ActivityKind {
        match self {
            ActiveSlide::Learn => ActivityKind::Learn,
            ActiveSlide::Sort(_) => ActivityKind::Sort,
            ActiveSlide::BucketMatch(_) => ActivityKind::BucketMatch,
            ActiveSlide::Sequence(_) => ActivityKind::Sequence,
            ActiveSlide::Choice(_) => ActivityKind::Choice,
        }
    }

    /// Whether the slide is finished and the lesson may move on.
    pub fn is_complete(&self) -> bool {
        match self {
            ActiveSlide::Learn => true,
            ActiveSlide::Sort(engine) => engine.is_solved(),
            ActiveSlide::BucketMatch(engine) => engine.is_complete(),
            ActiveSlide::Sequence(engine) => engine.is_solved(),
            ActiveSlide::Choice(engine) => engine.is_solved(),
        }
    }

    /// Whether the continue button should read "Check Answers" instead
    /// of advancing.
    pub fn needs_check(&self) -> bool {
        match self {
            ActiveSlide::Sort(engine) => !engine.is_solved(),
            ActiveSlide::Sequence(engine) => !engine.is_solved(),
            _ => false,
        }
    }

    /// Whether a check would score the whole board.
    pub fn check_ready(&self) -> bool {
        match self {
            ActiveSlide::Sort(engine) => engine.all_placed(),
            ActiveSlide::Sequence(engine) => engine.all_placed(),
            _ => false,
        }
    }

    /// The recovery policy of the mounted board, if it has one.
    pub fn recovery_policy(&self) -> Option<RecoveryPolicy> {
        match self {
            ActiveSlide::Learn => None,
            ActiveSlide::Sort(engine) => Some(engine.recovery_policy()),
            ActiveSlide::BucketMatch(engine) => Some(engine.recovery_policy()),
            ActiveSlide::Sequence(engine) => Some(engine.recovery_policy()),
            ActiveSlide::Choice(_) => None,
        }
    }
}
