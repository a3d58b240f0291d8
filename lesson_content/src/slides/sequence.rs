//! Sequence slides - arrange steps into their correct order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{find_duplicate, ContentError, ImageRef, StepId};

/// One step of a process to be put in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub id: StepId,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

impl Step {
    /// Create a new step.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: StepId::new(id),
            content: content.into(),
            image: None,
        }
    }

    /// Set the step's picture.
    pub fn with_image(mut self, src: impl Into<String>) -> Self {
        self.image = Some(ImageRef::new(src));
        self
    }
}

/// An ordering activity: place every step into a numbered zone, then
/// check the arrangement against the answer key.
///
/// There are exactly as many zones as entries in `correct_order`; zone
/// `i` is correct when it holds `correct_order[i]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceSlide {
    pub title: String,

    pub instruction: String,

    /// Steps shown shuffled in the pool.
    pub steps: Vec<Step>,

    /// The answer key, one step ID per zone in order.
    pub correct_order: Vec<StepId>,
}

impl SequenceSlide {
    /// Create a new sequence slide.
    pub fn new(title: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            instruction: instruction.into(),
            steps: Vec::new(),
            correct_order: Vec::new(),
        }
    }

    /// Add a step to the pool.
    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Set the answer key.
    pub fn with_correct_order(
        mut self,
        order: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.correct_order = order.into_iter().map(StepId::new).collect();
        self
    }

    /// Number of drop zones.
    pub fn zone_count(&self) -> usize {
        self.correct_order.len()
    }

    /// Look up a step by ID.
    pub fn step(&self, id: &StepId) -> Option<&Step> {
        self.steps.iter().find(|step| &step.id == id)
    }

    /// The step that belongs in the given zone.
    pub fn expected_at(&self, zone: usize) -> Option<&StepId> {
        self.correct_order.get(zone)
    }

    /// Check this slide's invariants.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.steps.len() < 2 {
            return Err(ContentError::NotEnough {
                slide: self.title.clone(),
                what: "steps",
                expected: 2,
                found: self.steps.len(),
            });
        }

        if let Some(id) = find_duplicate(self.steps.iter().map(|step| step.id.as_str())) {
            return Err(ContentError::DuplicateId {
                slide: self.title.clone(),
                what: "step",
                id: id.to_string(),
            });
        }

        // The answer key must use each step exactly once.
        let step_ids: HashSet<&StepId> = self.steps.iter().map(|step| &step.id).collect();
        let order_ids: HashSet<&StepId> = self.correct_order.iter().collect();
        if self.correct_order.len() != self.steps.len() || order_ids != step_ids {
            return Err(ContentError::OrderNotPermutation {
                slide: self.title.clone(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant_growth() -> SequenceSlide {
        SequenceSlide::new("How a Plant Grows", "Put the steps in order")
            .with_step(Step::new("sprout", "A sprout appears"))
            .with_step(Step::new("seed", "A seed is planted"))
            .with_step(Step::new("tree", "It grows into a tree"))
            .with_correct_order(["seed", "sprout", "tree"])
    }

    #[test]
    fn test_valid_sequence_slide() {
        let slide = plant_growth();
        assert!(slide.validate().is_ok());
        assert_eq!(slide.zone_count(), 3);
        assert_eq!(slide.expected_at(0), Some(&StepId::new("seed")));
        assert_eq!(slide.expected_at(3), None);
    }

    #[test]
    fn test_order_must_cover_every_step() {
        let slide = SequenceSlide::new("Broken", "Order them")
            .with_step(Step::new("a", "First"))
            .with_step(Step::new("b", "Second"))
            .with_correct_order(["a"]);

        assert!(matches!(
            slide.validate(),
            Err(ContentError::OrderNotPermutation { .. })
        ));
    }

    #[test]
    fn test_order_rejects_unknown_step() {
        let slide = SequenceSlide::new("Broken", "Order them")
            .with_step(Step::new("a", "First"))
            .with_step(Step::new("b", "Second"))
            .with_correct_order(["a", "z"]);

        assert!(matches!(
            slide.validate(),
            Err(ContentError::OrderNotPermutation { .. })
        ));
    }

    #[test]
    fn test_sequence_requires_two_steps() {
        let slide = SequenceSlide::new("Tiny", "Order it")
            .with_step(Step::new("a", "Only"))
            .with_correct_order(["a"]);

        assert!(matches!(
            slide.validate(),
            Err(ContentError::NotEnough { what: "steps", .. })
        ));
    }
}
