//! Choice engine - single-shot answers for riddles and quiz questions.

use lesson_content::{ChoiceSlide, OptionId, QuizSlide};
use serde::{Deserialize, Serialize};

/// Result of selecting an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// The right answer was picked.
    Correct {
        /// Whether this question ends the lesson.
        final_question: bool,
    },
    /// A wrong answer was picked.
    Incorrect,
    /// The question was already answered; the click did nothing.
    Ignored,
    /// No option with that ID exists; the click did nothing.
    UnknownOption,
}

/// How a single option should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionAppearance {
    /// Default look: not answered yet, or a wrong option nobody picked.
    Unanswered,
    /// The correct option, picked by the player.
    CorrectRevealed,
    /// The wrong option the player picked.
    IncorrectSelected,
    /// The correct option, revealed after the player picked another.
    CorrectNotSelected,
}

#[derive(Debug, Clone)]
struct EngineOption {
    id: OptionId,
    correct: bool,
}

/// State of a mounted riddle or quiz question.
///
/// Exactly one selection counts: once an option is picked the question
/// locks and further clicks are ignored until the engine is reset. The
/// correct answer is revealed either way.
#[derive(Debug, Clone)]
pub struct ChoiceEngine {
    options: Vec<EngineOption>,
    final_question: bool,
    selected: Option<OptionId>,
    solved: bool,
}

impl ChoiceEngine {
    /// Mount the engine for a who-am-i riddle.
    pub fn for_riddle(slide: &ChoiceSlide) -> Self {
        Self {
            options: slide
                .options
                .iter()
                .map(|option| EngineOption {
                    id: option.id.clone(),
                    correct: option.correct,
                })
                .collect(),
            final_question: slide.final_question,
            selected: None,
            solved: false,
        }
    }

    /// Mount the engine for a quiz question.
    pub fn for_quiz(slide: &QuizSlide) -> Self {
        Self {
            options: slide
                .options
                .iter()
                .map(|option| EngineOption {
                    id: option.id.clone(),
                    correct: option.correct,
                })
                .collect(),
            final_question: false,
            selected: None,
            solved: false,
        }
    }

    /// Pick an option. Only the first pick counts.
    pub fn select_option(&mut self, id: &OptionId) -> ChoiceOutcome {
        if self.selected.is_some() {
            return ChoiceOutcome::Ignored;
        }

        let Some(option) = self.options.iter().find(|option| &option.id == id) else {
            return ChoiceOutcome::UnknownOption;
        };

        self.selected = Some(option.id.clone());
        if option.correct {
            self.solved = true;
            ChoiceOutcome::Correct {
                final_question: self.final_question,
            }
        } else {
            ChoiceOutcome::Incorrect
        }
    }

    /// How an option should currently look.
    pub fn option_appearance(&self, id: &OptionId) -> OptionAppearance {
        if self.selected.is_none() {
            return OptionAppearance::Unanswered;
        }

        let correct = self
            .options
            .iter()
            .any(|option| &option.id == id && option.correct);
        let selected = self.selected.as_ref() == Some(id);

        match (correct, selected) {
            (true, true) => OptionAppearance::CorrectRevealed,
            (true, false) => OptionAppearance::CorrectNotSelected,
            (false, true) => OptionAppearance::IncorrectSelected,
            (false, false) => OptionAppearance::Unanswered,
        }
    }

    /// The option the player picked, if any.
    pub fn selected(&self) -> Option<&OptionId> {
        self.selected.as_ref()
    }

    /// Whether the question has been answered.
    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    /// Whether the right answer was picked.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Whether this question ends the lesson.
    pub fn is_final_question(&self) -> bool {
        self.final_question
    }

    /// Unlock the question for another attempt.
    pub fn reset(&mut self) {
        self.selected = None;
        self.solved = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lesson_content::{ChoiceOption, Description, QuizOption};

    fn riddle() -> ChoiceSlide {
        ChoiceSlide::new(Description::text("I am tall with leaves."), "Who am I?")
            .with_option(ChoiceOption::new("river", "A river"))
            .with_option(ChoiceOption::correct("tree", "A tree"))
            .with_option(ChoiceOption::new("cloud", "A cloud"))
    }

    fn opt(id: &str) -> OptionId {
        OptionId::new(id)
    }

    #[test]
    fn test_correct_answer() {
        let mut engine = ChoiceEngine::for_riddle(&riddle());

        let outcome = engine.select_option(&opt("tree"));
        assert_eq!(
            outcome,
            ChoiceOutcome::Correct {
                final_question: false
            }
        );
        assert!(engine.is_solved());
    }

    #[test]
    fn test_final_question_flag_carries_through() {
        let slide = riddle().with_final_question();
        let mut engine = ChoiceEngine::for_riddle(&slide);

        assert_eq!(
            engine.select_option(&opt("tree")),
            ChoiceOutcome::Correct {
                final_question: true
            }
        );
    }

    #[test]
    fn test_only_the_first_pick_counts() {
        let mut engine = ChoiceEngine::for_riddle(&riddle());

        assert_eq!(engine.select_option(&opt("river")), ChoiceOutcome::Incorrect);
        // Clicking the right answer afterwards changes nothing.
        assert_eq!(engine.select_option(&opt("tree")), ChoiceOutcome::Ignored);
        assert!(!engine.is_solved());
        assert_eq!(engine.selected(), Some(&opt("river")));
    }

    #[test]
    fn test_appearance_matrix_after_wrong_answer() {
        let mut engine = ChoiceEngine::for_riddle(&riddle());

        assert_eq!(engine.option_appearance(&opt("tree")), OptionAppearance::Unanswered);

        engine.select_option(&opt("river"));

        assert_eq!(
            engine.option_appearance(&opt("river")),
            OptionAppearance::IncorrectSelected
        );
        // The correct answer is revealed even though it was not picked.
        assert_eq!(
            engine.option_appearance(&opt("tree")),
            OptionAppearance::CorrectNotSelected
        );
        assert_eq!(engine.option_appearance(&opt("cloud")), OptionAppearance::Unanswered);
    }

    #[test]
    fn test_appearance_after_correct_answer() {
        let mut engine = ChoiceEngine::for_riddle(&riddle());

        engine.select_option(&opt("tree"));

        assert_eq!(
            engine.option_appearance(&opt("tree")),
            OptionAppearance::CorrectRevealed
        );
        assert_eq!(engine.option_appearance(&opt("river")), OptionAppearance::Unanswered);
    }

    #[test]
    fn test_unknown_option_does_not_lock() {
        let mut engine = ChoiceEngine::for_riddle(&riddle());

        assert_eq!(engine.select_option(&opt("zzz")), ChoiceOutcome::UnknownOption);
        assert!(!engine.is_answered());

        // A real pick still works afterwards.
        assert_eq!(
            engine.select_option(&opt("tree")),
            ChoiceOutcome::Correct {
                final_question: false
            }
        );
    }

    #[test]
    fn test_reset_unlocks_for_another_attempt() {
        let mut engine = ChoiceEngine::for_riddle(&riddle());

        engine.select_option(&opt("river"));
        engine.reset();

        assert!(!engine.is_answered());
        assert_eq!(engine.option_appearance(&opt("river")), OptionAppearance::Unanswered);
        assert_eq!(
            engine.select_option(&opt("tree")),
            ChoiceOutcome::Correct {
                final_question: false
            }
        );
    }

    #[test]
    fn test_quiz_mount() {
        let slide = QuizSlide::new("Which is natural?")
            .with_option(QuizOption::correct("river", "A river"))
            .with_option(QuizOption::new("tap", "A tap"));

        let mut engine = ChoiceEngine::for_quiz(&slide);
        assert!(!engine.is_final_question());
        assert_eq!(
            engine.select_option(&opt("river")),
            ChoiceOutcome::Correct {
                final_question: false
            }
        );
    }
}
