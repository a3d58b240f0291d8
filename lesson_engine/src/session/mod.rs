//! Lesson session - slide navigation, hearts, and the consequences of
//! activity outcomes.

mod timers;

pub use timers::{TimerId, TimerQueue};

use std::time::{Duration, Instant};

use lesson_content::{
    Catalog, ChapterId, ItemId, OptionId, SlideDescriptor, StandardId, StepId, TargetId,
};

use crate::activities::{
    ActivityError, ActivityKind, ChoiceOutcome, DropOutcome, PlaceOutcome, RecoveryPolicy,
    SequenceOutcome, SortOutcome,
};
use crate::audio::{Narrator, SpeechBackend, SpeechEvent, UtteranceId};
use crate::renderer::{ActiveSlide, ContinueControl, ContinueLabel, SlideChrome};

/// Hearts a lesson starts with.
pub const STARTING_HEARTS: u8 = 3;

/// Delays for the session's automatic transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTiming {
    /// Pause on the celebration before a completed bucket board moves on.
    pub celebration_delay: Duration,

    /// How long wrong sort placements stay visible before flying back.
    pub failure_reset_delay: Duration,

    /// Pause after a correct answer before the next slide.
    pub auto_advance_delay: Duration,
}

impl Default for SessionTiming {
    fn default() -> Self {
        Self {
            celebration_delay: Duration::from_millis(1200),
            failure_reset_delay: Duration::from_millis(1500),
            auto_advance_delay: Duration::from_millis(2000),
        }
    }
}

/// Where the host navigates when a lesson ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Back to the chapter overview of the lesson's standard.
    ChapterOverview {
        standard: StandardId,
        chapter: ChapterId,
    },

    /// Into the quiz that follows the chapter.
    Quiz {
        standard: StandardId,
        chapter: ChapterId,
    },
}

/// Delayed transitions the session schedules for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingTransition {
    /// Send a failed sort arrangement back to the pool.
    ResetPlacements,
    /// Move to the next slide.
    Advance,
}

/// What a tick made happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A failed arrangement flew back to the pool.
    PlacementsReset,
    /// The lesson moved to the next slide on its own.
    Advanced,
    /// The lesson ended; the host should navigate away.
    Finished(Navigation),
}

/// Feedback from checking an arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckFeedback {
    /// Not everything is placed yet; nothing was scored.
    KeepGoing,
    /// The arrangement is correct.
    Solved,
    /// The arrangement is wrong; a heart was spent if any remained.
    TryAgain { hearts: u8 },
}

/// Result of pressing the continue button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContinueOutcome {
    /// The press scored the arrangement instead of advancing.
    Checked(CheckFeedback),
    /// Moved to the next slide.
    Advanced,
    /// The lesson ended.
    Finished(Navigation),
    /// The press did nothing (button disabled or a prompt is open).
    Blocked,
}

/// Result of pressing the previous button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviousOutcome {
    /// Went back one slide.
    SteppedBack,
    /// Already at the first slide; asked for confirmation instead.
    ExitPromptOpened,
    /// The prompt is already open; the press did nothing.
    Blocked,
}

/// One play-through of a lesson.
///
/// The session owns the mounted activity, the hearts, the timers, and
/// the narrator. Interactions come in, outcomes go back out, and every
/// consequence (spent hearts, scheduled resets, narration cancelled on
/// navigation) is applied here so the engines stay pure.
#[derive(Debug)]
pub struct LessonSession {
    standard: StandardId,
    chapter: ChapterId,
    quiz_after: bool,
    slides: Vec<SlideDescriptor>,
    index: usize,
    hearts: u8,
    active: ActiveSlide,
    exit_prompt: bool,
    congratulations: bool,
    timing: SessionTiming,
    timers: TimerQueue<PendingTransition>,
    narrator: Narrator,
}

impl LessonSession {
    /// Start a lesson, resolving the requested standard and chapter
    /// against the catalog (with its fallback).
    pub fn start(
        catalog: &Catalog,
        standard: &StandardId,
        chapter: &ChapterId,
        backend: Box<dyn SpeechBackend>,
    ) -> Self {
        let mut session = Self {
            standard: standard.clone(),
            chapter: chapter.clone(),
            quiz_after: false,
            slides: Vec::new(),
            index: 0,
            hearts: STARTING_HEARTS,
            active: ActiveSlide::Learn,
            exit_prompt: false,
            congratulations: false,
            timing: SessionTiming::default(),
            timers: TimerQueue::new(),
            narrator: Narrator::new(backend),
        };
        session.load(catalog, standard, chapter);
        session
    }

    /// Override the transition delays.
    pub fn with_timing(mut self, timing: SessionTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Replace the lesson with another one: fresh slides, fresh hearts,
    /// back to the first slide.
    pub fn switch_content(
        &mut self,
        catalog: &Catalog,
        standard: &StandardId,
        chapter: &ChapterId,
    ) {
        self.load(catalog, standard, chapter);
    }

    fn load(&mut self, catalog: &Catalog, standard: &StandardId, chapter: &ChapterId) {
        match catalog.resolve_lesson(standard, chapter) {
            Some(resolved) => {
                self.standard = resolved.standard.clone();
                self.chapter = resolved.chapter.id.clone();
                self.quiz_after = resolved.chapter.quiz;
                self.slides = resolved.chapter.slides.clone();
            }
            None => {
                self.standard = standard.clone();
                self.chapter = chapter.clone();
                self.quiz_after = false;
                self.slides = Vec::new();
            }
        }
        self.index = 0;
        self.hearts = STARTING_HEARTS;
        self.mount_current();
    }

    /// Cancel everything tied to the old slide and mount the current one.
    fn mount_current(&mut self) {
        self.timers.cancel_all();
        self.narrator.cancel();
        self.congratulations = false;
        self.exit_prompt = false;
        self.active = match self.slides.get(self.index) {
            Some(slide) => ActiveSlide::mount(slide),
            None => ActiveSlide::Learn,
        };
    }

    /// The standard being played (after any catalog fallback).
    pub fn standard(&self) -> &StandardId {
        &self.standard
    }

    /// The chapter being played (after any catalog fallback).
    pub fn chapter(&self) -> &ChapterId {
        &self.chapter
    }

    /// Whether a quiz follows this lesson.
    pub fn quiz_after(&self) -> bool {
        self.quiz_after
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// The descriptor of the current slide.
    pub fn current_slide(&self) -> Option<&SlideDescriptor> {
        self.slides.get(self.index)
    }

    /// The mounted activity.
    pub fn active(&self) -> &ActiveSlide {
        &self.active
    }

    pub fn hearts(&self) -> u8 {
        self.hearts
    }

    pub fn narrator(&self) -> &Narrator {
        &self.narrator
    }

    /// Whether the current slide is the last one.
    pub fn is_final_slide(&self) -> bool {
        self.index + 1 >= self.slides.len()
    }

    pub fn exit_prompt_open(&self) -> bool {
        self.exit_prompt
    }

    /// Progress through the lesson as a percentage.
    pub fn progress(&self) -> f32 {
        if self.slides.is_empty() {
            return 0.0;
        }
        (self.index + 1) as f32 / self.slides.len() as f32 * 100.0
    }

    /// The continue button's current caption and enablement.
    ///
    /// A slide with an unscored arrangement turns the button into
    /// "Check Answers" (enabled once everything is placed); otherwise
    /// the button advances, switching to its terminal caption on the
    /// last slide.
    pub fn continue_control(&self) -> ContinueControl {
        if self.active.needs_check() {
            return if self.active.check_ready() {
                ContinueControl::enabled(ContinueLabel::CheckAnswers)
            } else {
                ContinueControl::disabled(ContinueLabel::CheckAnswers)
            };
        }

        let label = if self.is_final_slide() {
            if self.quiz_after {
                ContinueLabel::StartQuiz
            } else {
                ContinueLabel::FinishLesson
            }
        } else {
            ContinueLabel::Continue
        };

        if self.active.is_complete() {
            ContinueControl::enabled(label)
        } else {
            ContinueControl::disabled(label)
        }
    }

    /// Everything the frame around the slide needs right now.
    pub fn chrome(&self) -> SlideChrome {
        SlideChrome {
            progress: self.progress(),
            hearts: self.hearts,
            narration_available: self
                .current_slide()
                .and_then(|slide| slide.narration())
                .map(|narration| !narration.is_empty())
                .unwrap_or(false),
            continue_control: self.continue_control(),
            congratulations: self.congratulations,
        }
    }

    /// Press the continue button.
    ///
    /// The button is overloaded: on a slide whose arrangement has not
    /// been solved it checks instead of advancing, and on the last
    /// slide it ends the lesson.
    pub fn press_continue(&mut self, now: Instant) -> ContinueOutcome {
        if self.exit_prompt {
            return ContinueOutcome::Blocked;
        }

        let control = self.continue_control();
        if !control.enabled {
            return ContinueOutcome::Blocked;
        }

        match control.label {
            ContinueLabel::CheckAnswers => match self.check_answers(now) {
                Ok(feedback) => ContinueOutcome::Checked(feedback),
                // The caption only reads "Check Answers" on checkable slides.
                Err(_) => ContinueOutcome::Blocked,
            },
            ContinueLabel::Continue => {
                self.index += 1;
                self.mount_current();
                ContinueOutcome::Advanced
            }
            ContinueLabel::FinishLesson | ContinueLabel::StartQuiz => {
                ContinueOutcome::Finished(self.finish())
            }
        }
    }

    /// Press the previous button: step back, or ask before leaving the
    /// lesson from its first slide.
    pub fn press_previous(&mut self) -> PreviousOutcome {
        if self.exit_prompt {
            return PreviousOutcome::Blocked;
        }

        if self.index == 0 {
            self.exit_prompt = true;
            PreviousOutcome::ExitPromptOpened
        } else {
            self.index -= 1;
            self.mount_current();
            PreviousOutcome::SteppedBack
        }
    }

    /// Confirm the exit prompt and abandon the lesson.
    pub fn confirm_exit(&mut self) -> Navigation {
        self.exit_prompt = false;
        self.timers.cancel_all();
        self.narrator.cancel();
        Navigation::ChapterOverview {
            standard: self.standard.clone(),
            chapter: self.chapter.clone(),
        }
    }

    /// Dismiss the exit prompt and stay in the lesson.
    pub fn cancel_exit(&mut self) {
        self.exit_prompt = false;
    }

    /// Score the current arrangement (sort and sequence slides).
    ///
    /// A wrong arrangement costs a heart and kicks off the activity's
    /// own recovery; hearts never go below zero and checking stays
    /// allowed, so a struggling player keeps their retries.
    pub fn check_answers(&mut self, now: Instant) -> Result<CheckFeedback, ActivityError> {
        let policy = match &mut self.active {
            ActiveSlide::Sort(engine) => {
                if !engine.all_placed() {
                    return Ok(CheckFeedback::KeepGoing);
                }
                match engine.check_answers() {
                    SortOutcome::Success => {
                        self.timers.cancel_all();
                        return Ok(CheckFeedback::Solved);
                    }
                    SortOutcome::PartialFailure { .. } => engine.recovery_policy(),
                }
            }
            ActiveSlide::Sequence(engine) => match engine.check_answer() {
                SequenceOutcome::NotAllPlaced => return Ok(CheckFeedback::KeepGoing),
                SequenceOutcome::Success => {
                    self.timers.cancel_all();
                    return Ok(CheckFeedback::Solved);
                }
                SequenceOutcome::IncorrectAttempt { .. } => engine.recovery_policy(),
            },
            other => {
                return Err(ActivityError::NotCheckable {
                    found: other.kind(),
                })
            }
        };

        self.hearts = self.hearts.saturating_sub(1);

        if policy == RecoveryPolicy::ResetAll {
            // Replace any still-pending reset from the previous attempt.
            self.timers.cancel_all();
            self.timers.schedule(
                now,
                self.timing.failure_reset_delay,
                PendingTransition::ResetPlacements,
            );
        }

        Ok(CheckFeedback::TryAgain {
            hearts: self.hearts,
        })
    }

    /// Pick an answer option (riddle and quiz slides).
    pub fn choose_option(
        &mut self,
        option: &OptionId,
        now: Instant,
    ) -> Result<ChoiceOutcome, ActivityError> {
        let outcome = match &mut self.active {
            ActiveSlide::Choice(engine) => engine.select_option(option),
            other => {
                return Err(ActivityError::WrongActivity {
                    expected: ActivityKind::Choice,
                    found: other.kind(),
                })
            }
        };

        match outcome {
            ChoiceOutcome::Correct { final_question } => {
                if final_question {
                    self.congratulations = true;
                } else {
                    self.timers.schedule(
                        now,
                        self.timing.auto_advance_delay,
                        PendingTransition::Advance,
                    );
                }
            }
            ChoiceOutcome::Incorrect => {
                self.hearts = self.hearts.saturating_sub(1);
            }
            ChoiceOutcome::Ignored | ChoiceOutcome::UnknownOption => {}
        }

        Ok(outcome)
    }

    /// Drop an item onto a bucket (bucket-match slides). Completing the
    /// board schedules the advance after a celebration.
    pub fn drop_in_bucket(
        &mut self,
        item: &ItemId,
        bucket: &TargetId,
        now: Instant,
    ) -> Result<DropOutcome, ActivityError> {
        let outcome = match &mut self.active {
            ActiveSlide::BucketMatch(engine) => engine.drop_item(item, bucket),
            other => {
                return Err(ActivityError::WrongActivity {
                    expected: ActivityKind::BucketMatch,
                    found: other.kind(),
                })
            }
        };

        if outcome == DropOutcome::AllMatched {
            self.timers.schedule(
                now,
                self.timing.celebration_delay,
                PendingTransition::Advance,
            );
        }

        Ok(outcome)
    }

    /// Place an item onto a sort target.
    pub fn place_item(
        &mut self,
        item: &ItemId,
        target: &TargetId,
    ) -> Result<PlaceOutcome, ActivityError> {
        match &mut self.active {
            ActiveSlide::Sort(engine) => Ok(engine.place_item(item, target)),
            other => Err(ActivityError::WrongActivity {
                expected: ActivityKind::Sort,
                found: other.kind(),
            }),
        }
    }

    /// Send a sorted item back to the pool.
    pub fn remove_item(&mut self, item: &ItemId) -> Result<bool, ActivityError> {
        match &mut self.active {
            ActiveSlide::Sort(engine) => Ok(engine.remove_item(item)),
            other => Err(ActivityError::WrongActivity {
                expected: ActivityKind::Sort,
                found: other.kind(),
            }),
        }
    }

    /// Place a step into a sequence zone.
    pub fn place_in_zone(
        &mut self,
        step: &StepId,
        zone: usize,
    ) -> Result<PlaceOutcome, ActivityError> {
        match &mut self.active {
            ActiveSlide::Sequence(engine) => Ok(engine.place_in_zone(step, zone)),
            other => Err(ActivityError::WrongActivity {
                expected: ActivityKind::Sequence,
                found: other.kind(),
            }),
        }
    }

    /// Empty a sequence zone.
    pub fn remove_from_zone(&mut self, zone: usize) -> Result<Option<StepId>, ActivityError> {
        match &mut self.active {
            ActiveSlide::Sequence(engine) => Ok(engine.remove_from_zone(zone)),
            other => Err(ActivityError::WrongActivity {
                expected: ActivityKind::Sequence,
                found: other.kind(),
            }),
        }
    }

    /// Start the current activity over ("Play Again" / "Try Again").
    pub fn reset_activity(&mut self) {
        self.timers.cancel_all();
        match &mut self.active {
            ActiveSlide::Learn => {}
            ActiveSlide::Sort(engine) => engine.reset(),
            ActiveSlide::BucketMatch(engine) => engine.reset(),
            ActiveSlide::Sequence(engine) => engine.reset_game(),
            ActiveSlide::Choice(engine) => engine.reset(),
        }
    }

    /// Play the current slide's narration from the start.
    pub fn play_narration(&mut self) -> Option<UtteranceId> {
        let narration = self.current_slide()?.narration()?.clone();
        self.narrator.narrate(&narration)
    }

    /// Feed a speech backend report through to the narrator.
    pub fn handle_speech_event(&mut self, event: SpeechEvent) {
        self.narrator.handle_event(event);
    }

    /// Fire due timers and apply their transitions.
    pub fn tick(&mut self, now: Instant) -> Vec<SessionEvent> {
        let mut events = Vec::new();

        for transition in self.timers.fire_due(now) {
            match transition {
                PendingTransition::ResetPlacements => {
                    if let ActiveSlide::Sort(engine) = &mut self.active {
                        engine.reset_placements();
                        events.push(SessionEvent::PlacementsReset);
                    }
                }
                PendingTransition::Advance => {
                    if self.is_final_slide() {
                        events.push(SessionEvent::Finished(self.finish()));
                    } else {
                        self.index += 1;
                        self.mount_current();
                        events.push(SessionEvent::Advanced);
                    }
                }
            }
        }

        events
    }

    fn finish(&mut self) -> Navigation {
        self.timers.cancel_all();
        self.narrator.cancel();

        if self.quiz_after {
            Navigation::Quiz {
                standard: self.standard.clone(),
                chapter: self.chapter.clone(),
            }
        } else {
            Navigation::ChapterOverview {
                standard: self.standard.clone(),
                chapter: self.chapter.clone(),
            }
        }
    }
}
