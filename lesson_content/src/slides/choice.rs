//! Choice slides - riddles and quiz questions with one correct answer.

use serde::{Deserialize, Serialize};

use super::{find_duplicate, ContentError, Description, ImageRef, OptionId};

/// An answer option for a who-am-i riddle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub id: OptionId,
    pub text: String,
    #[serde(default)]
    pub correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

impl ChoiceOption {
    /// Create a wrong answer option.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: OptionId::new(id),
            text: text.into(),
            correct: false,
            image: None,
        }
    }

    /// Create the correct answer option.
    pub fn correct(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: OptionId::new(id),
            text: text.into(),
            correct: true,
            image: None,
        }
    }

    /// Set the option's picture.
    pub fn with_image(mut self, src: impl Into<String>) -> Self {
        self.image = Some(ImageRef::new(src));
        self
    }
}

/// A who-am-i riddle: clues, a question, and options to pick from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceSlide {
    /// The riddle clues read out to the player.
    pub riddle: Description,

    pub question: String,

    pub options: Vec<ChoiceOption>,

    /// Marks the lesson's final question; answering it correctly ends
    /// the lesson with a celebration instead of moving to another slide.
    #[serde(default)]
    pub final_question: bool,
}

impl ChoiceSlide {
    /// Create a new riddle slide.
    pub fn new(riddle: Description, question: impl Into<String>) -> Self {
        Self {
            riddle,
            question: question.into(),
            options: Vec::new(),
            final_question: false,
        }
    }

    /// Add an answer option.
    pub fn with_option(mut self, option: ChoiceOption) -> Self {
        self.options.push(option);
        self
    }

    /// Mark this as the lesson's final question.
    pub fn with_final_question(mut self) -> Self {
        self.final_question = true;
        self
    }

    /// Look up an option by ID.
    pub fn option(&self, id: &OptionId) -> Option<&ChoiceOption> {
        self.options.iter().find(|option| &option.id == id)
    }

    /// The correct option.
    pub fn correct_option(&self) -> Option<&ChoiceOption> {
        self.options.iter().find(|option| option.correct)
    }

    /// Check this slide's invariants.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.options.len() < 2 {
            return Err(ContentError::NotEnough {
                slide: self.question.clone(),
                what: "options",
                expected: 2,
                found: self.options.len(),
            });
        }

        if let Some(id) = find_duplicate(self.options.iter().map(|option| option.id.as_str())) {
            return Err(ContentError::DuplicateId {
                slide: self.question.clone(),
                what: "option",
                id: id.to_string(),
            });
        }

        let correct = self.options.iter().filter(|option| option.correct).count();
        if correct != 1 {
            return Err(ContentError::CorrectOptionCount {
                slide: self.question.clone(),
                found: correct,
            });
        }

        Ok(())
    }
}

/// An answer option for a quiz question, with an optional explanation
/// revealed after answering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: OptionId,
    pub text: String,
    #[serde(default)]
    pub correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuizOption {
    /// Create a wrong answer option.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: OptionId::new(id),
            text: text.into(),
            correct: false,
            explanation: None,
        }
    }

    /// Create the correct answer option.
    pub fn correct(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: OptionId::new(id),
            text: text.into(),
            correct: true,
            explanation: None,
        }
    }

    /// Add an explanation shown once the question is answered.
    pub fn with_explanation(mut self, text: impl Into<String>) -> Self {
        self.explanation = Some(text.into());
        self
    }
}

/// A quiz question with one correct answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSlide {
    pub question: String,

    pub options: Vec<QuizOption>,
}

impl QuizSlide {
    /// Create a new quiz slide.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            options: Vec::new(),
        }
    }

    /// Add an answer option.
    pub fn with_option(mut self, option: QuizOption) -> Self {
        self.options.push(option);
        self
    }

    /// Look up an option by ID.
    pub fn option(&self, id: &OptionId) -> Option<&QuizOption> {
        self.options.iter().find(|option| &option.id == id)
    }

    /// The correct option.
    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.correct)
    }

    /// Check this slide's invariants.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.options.len() < 2 {
            return Err(ContentError::NotEnough {
                slide: self.question.clone(),
                what: "options",
                expected: 2,
                found: self.options.len(),
            });
        }

        if let Some(id) = find_duplicate(self.options.iter().map(|option| option.id.as_str())) {
            return Err(ContentError::DuplicateId {
                slide: self.question.clone(),
                what: "option",
                id: id.to_string(),
            });
        }

        let correct = self.options.iter().filter(|option| option.correct).count();
        if correct != 1 {
            return Err(ContentError::CorrectOptionCount {
                slide: self.question.clone(),
                found: correct,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_riddle() -> ChoiceSlide {
        ChoiceSlide::new(
            Description::paragraphs([
                "I am very tall.",
                "I have leaves and branches.",
                "Birds build nests on me.",
            ]),
            "Who am I?",
        )
        .with_option(ChoiceOption::new("river", "A river"))
        .with_option(ChoiceOption::correct("tree", "A tree"))
        .with_option(ChoiceOption::new("cloud", "A cloud"))
    }

    #[test]
    fn test_valid_riddle() {
        let slide = tree_riddle();
        assert!(slide.validate().is_ok());
        assert_eq!(slide.correct_option().unwrap().id.as_str(), "tree");
        assert!(!slide.final_question);
    }

    #[test]
    fn test_final_question_flag() {
        let slide = tree_riddle().with_final_question();
        assert!(slide.final_question);
    }

    #[test]
    fn test_riddle_requires_exactly_one_correct() {
        let none_correct = ChoiceSlide::new(Description::text("Guess."), "Who am I?")
            .with_option(ChoiceOption::new("a", "A"))
            .with_option(ChoiceOption::new("b", "B"));
        assert!(matches!(
            none_correct.validate(),
            Err(ContentError::CorrectOptionCount { found: 0, .. })
        ));

        let two_correct = ChoiceSlide::new(Description::text("Guess."), "Who am I?")
            .with_option(ChoiceOption::correct("a", "A"))
            .with_option(ChoiceOption::correct("b", "B"));
        assert!(matches!(
            two_correct.validate(),
            Err(ContentError::CorrectOptionCount { found: 2, .. })
        ));
    }

    #[test]
    fn test_quiz_explanations() {
        let slide = QuizSlide::new("Which of these is natural?")
            .with_option(
                QuizOption::correct("mountain", "A mountain")
                    .with_explanation("Mountains formed without any help from people."),
            )
            .with_option(
                QuizOption::new("bridge", "A bridge")
                    .with_explanation("Bridges are built by people."),
            );

        assert!(slide.validate().is_ok());
        let correct = slide.correct_option().unwrap();
        assert_eq!(correct.id.as_str(), "mountain");
        assert!(correct.explanation.is_some());
    }

    #[test]
    fn test_quiz_rejects_duplicate_option_id() {
        let slide = QuizSlide::new("Pick one")
            .with_option(QuizOption::correct("a", "First"))
            .with_option(QuizOption::new("a", "Second"));

        assert!(matches!(
            slide.validate(),
            Err(ContentError::DuplicateId { what: "option", .. })
        ));
    }
}
