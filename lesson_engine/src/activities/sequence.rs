//! Sequence engine - arrange steps into numbered zones and check.

use lesson_content::{SequenceSlide, Step, StepId};

use super::{PlaceOutcome, PlacementBoard, RecoveryPolicy, ZoneCapacity};

/// Result of checking a sequence arrangement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceOutcome {
    /// Some zones are still empty; nothing was scored.
    NotAllPlaced,
    /// Every zone holds its expected step.
    Success,
    /// The listed zones hold the wrong step. Placements stay put so the
    /// player can fix just those zones.
    IncorrectAttempt { incorrect_zones: Vec<usize> },
}

/// State of a mounted sequence activity.
///
/// Zones are numbered from zero and hold one step each; zone `i` wants
/// the step at position `i` of the answer key. After a failed check the
/// board keeps its placements and the per-zone marks, trading persistent
/// progress for the clean-slate restart the sorting activity uses.
#[derive(Debug, Clone)]
pub struct SequenceEngine {
    steps: Vec<Step>,
    correct_order: Vec<StepId>,
    board: PlacementBoard<StepId, usize>,
    solved: bool,
}

impl SequenceEngine {
    /// Mount the engine for a sequence slide.
    pub fn new(slide: &SequenceSlide) -> Self {
        let board = PlacementBoard::new(
            slide.steps.iter().map(|step| step.id.clone()),
            0..slide.zone_count(),
            ZoneCapacity::Single,
        );

        Self {
            steps: slide.steps.clone(),
            correct_order: slide.correct_order.clone(),
            board,
            solved: false,
        }
    }

    /// The steps of this activity.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of drop zones.
    pub fn zone_count(&self) -> usize {
        self.board.zone_count()
    }

    /// Place a step into a zone (or move it from another zone).
    pub fn place_in_zone(&mut self, step: &StepId, zone: usize) -> PlaceOutcome {
        self.board.place(step, &zone)
    }

    /// Empty a zone, sending its step back to the pool.
    pub fn remove_from_zone(&mut self, zone: usize) -> Option<StepId> {
        let step = self.board.occupant(&zone)?.clone();
        self.board.remove(&step);
        Some(step)
    }

    /// The step currently in a zone.
    pub fn occupant(&self, zone: usize) -> Option<&StepId> {
        self.board.occupant(&zone)
    }

    /// Steps still waiting in the pool, in original order.
    pub fn unplaced(&self) -> Vec<&StepId> {
        self.board.pool()
    }

    /// Whether every zone is filled.
    pub fn all_placed(&self) -> bool {
        self.board.all_placed()
    }

    /// Score the arrangement.
    ///
    /// Refuses to score while zones are empty; a half-finished attempt
    /// is not a wrong attempt.
    pub fn check_answer(&mut self) -> SequenceOutcome {
        if !self.board.all_placed() {
            return SequenceOutcome::NotAllPlaced;
        }

        let correct_order = &self.correct_order;
        let summary = self.board.check(|step, zone| {
            correct_order.get(*zone).map_or(false, |expected| expected == step)
        });

        if summary.all_correct() {
            self.solved = true;
            SequenceOutcome::Success
        } else {
            let incorrect_zones = (0..self.zone_count())
                .filter(|zone| matches!(self.zone_mark(*zone), Some(false)))
                .collect();
            SequenceOutcome::IncorrectAttempt { incorrect_zones }
        }
    }

    /// The mark of the step in a zone: right, wrong, or unscored.
    pub fn zone_mark(&self, zone: usize) -> Option<bool> {
        let step = self.board.occupant(&zone)?;
        self.board.mark(step)
    }

    /// Marks for every zone in order.
    pub fn zone_marks(&self) -> Vec<Option<bool>> {
        (0..self.zone_count()).map(|zone| self.zone_mark(zone)).collect()
    }

    /// Send every step back to the pool and start over.
    pub fn reset_game(&mut self) {
        self.board.reset();
        self.solved = false;
    }

    /// Whether the sequence has been solved.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Whether the current placements have been scored.
    pub fn checked(&self) -> bool {
        self.board.checked()
    }

    /// How this activity recovers from a failed check.
    pub fn recovery_policy(&self) -> RecoveryPolicy {
        RecoveryPolicy::RetainAndMark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lesson_content::SequenceSlide;

    fn abc_slide() -> SequenceSlide {
        SequenceSlide::new("In Order", "Put the steps in order")
            .with_step(Step::new("a", "First"))
            .with_step(Step::new("b", "Second"))
            .with_step(Step::new("c", "Third"))
            .with_correct_order(["a", "b", "c"])
    }

    fn step(id: &str) -> StepId {
        StepId::new(id)
    }

    #[test]
    fn test_half_finished_attempt_is_not_scored() {
        let mut engine = SequenceEngine::new(&abc_slide());

        engine.place_in_zone(&step("a"), 0);
        assert_eq!(engine.check_answer(), SequenceOutcome::NotAllPlaced);
        assert!(!engine.checked());
    }

    #[test]
    fn test_correct_order_succeeds() {
        let mut engine = SequenceEngine::new(&abc_slide());

        engine.place_in_zone(&step("a"), 0);
        engine.place_in_zone(&step("b"), 1);
        engine.place_in_zone(&step("c"), 2);

        assert_eq!(engine.check_answer(), SequenceOutcome::Success);
        assert!(engine.is_solved());
        assert_eq!(engine.zone_marks(), vec![Some(true), Some(true), Some(true)]);
    }

    #[test]
    fn test_wrong_zones_are_reported_and_placements_stay() {
        let mut engine = SequenceEngine::new(&abc_slide());

        engine.place_in_zone(&step("b"), 0);
        engine.place_in_zone(&step("a"), 1);
        engine.place_in_zone(&step("c"), 2);

        assert_eq!(
            engine.check_answer(),
            SequenceOutcome::IncorrectAttempt {
                incorrect_zones: vec![0, 1]
            }
        );

        // Nothing moved: the player fixes the wrong zones in place.
        assert_eq!(engine.occupant(0), Some(&step("b")));
        assert_eq!(engine.occupant(2), Some(&step("c")));
        assert_eq!(engine.zone_marks(), vec![Some(false), Some(false), Some(true)]);
    }

    #[test]
    fn test_fixing_only_wrong_zones_preserves_correct_ones() {
        let mut engine = SequenceEngine::new(&abc_slide());

        engine.place_in_zone(&step("b"), 0);
        engine.place_in_zone(&step("a"), 1);
        engine.place_in_zone(&step("c"), 2);
        engine.check_answer();

        // Swap the two wrong steps; zone 2 is never touched.
        engine.remove_from_zone(0);
        engine.remove_from_zone(1);
        engine.place_in_zone(&step("a"), 0);
        engine.place_in_zone(&step("b"), 1);

        // The untouched zone still shows its earlier mark.
        assert_eq!(engine.zone_mark(2), Some(true));

        assert_eq!(engine.check_answer(), SequenceOutcome::Success);
    }

    #[test]
    fn test_occupied_zone_rejects_second_step() {
        let mut engine = SequenceEngine::new(&abc_slide());

        engine.place_in_zone(&step("a"), 0);
        assert_eq!(engine.place_in_zone(&step("b"), 0), PlaceOutcome::ZoneOccupied);
        assert_eq!(engine.occupant(0), Some(&step("a")));
    }

    #[test]
    fn test_moving_a_step_between_zones() {
        let mut engine = SequenceEngine::new(&abc_slide());

        engine.place_in_zone(&step("a"), 1);
        assert_eq!(engine.place_in_zone(&step("a"), 0), PlaceOutcome::MovedBetweenZones);

        assert_eq!(engine.occupant(0), Some(&step("a")));
        assert_eq!(engine.occupant(1), None);
        assert_eq!(engine.unplaced(), vec![&step("b"), &step("c")]);
    }

    #[test]
    fn test_reset_game() {
        let mut engine = SequenceEngine::new(&abc_slide());

        engine.place_in_zone(&step("b"), 0);
        engine.place_in_zone(&step("a"), 1);
        engine.place_in_zone(&step("c"), 2);
        engine.check_answer();

        engine.reset_game();

        assert!(!engine.is_solved());
        assert_eq!(engine.unplaced().len(), 3);
        assert_eq!(engine.zone_marks(), vec![None, None, None]);
    }
}
