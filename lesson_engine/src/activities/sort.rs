//! Sorting engine - place every item, then check the whole arrangement.

use lesson_content::{Item, ItemId, SortSlide, Target, TargetId};

use super::{PlaceOutcome, PlacementBoard, RecoveryPolicy, ZoneCapacity};

/// Result of checking a sorting arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOutcome {
    /// Every item is placed on a matching target.
    Success,
    /// At least one item is missing or misplaced.
    PartialFailure { incorrect: usize },
}

/// State of a mounted sorting activity.
///
/// Targets accept any number of items while the player arranges them;
/// nothing is judged until the arrangement is checked as a whole. A
/// failed check sends everything back to the pool (after the session's
/// feedback delay), so each attempt starts clean.
#[derive(Debug, Clone)]
pub struct SortEngine {
    items: Vec<Item>,
    targets: Vec<Target>,
    board: PlacementBoard<ItemId, TargetId>,
    solved: bool,
}

impl SortEngine {
    /// Mount the engine for a sorting slide.
    pub fn new(slide: &SortSlide) -> Self {
        let board = PlacementBoard::new(
            slide.items.iter().map(|item| item.id.clone()),
            slide.targets.iter().map(|target| target.id.clone()),
            ZoneCapacity::Unbounded,
        );

        Self {
            items: slide.items.clone(),
            targets: slide.targets.clone(),
            board,
            solved: false,
        }
    }

    /// The items of this activity.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The targets of this activity.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Place an item onto a target (or move it from another target).
    pub fn place_item(&mut self, item: &ItemId, target: &TargetId) -> PlaceOutcome {
        self.board.place(item, target)
    }

    /// Send a placed item back to the pool.
    pub fn remove_item(&mut self, item: &ItemId) -> bool {
        self.board.remove(item)
    }

    /// Items still waiting in the pool, in original order.
    pub fn unplaced(&self) -> Vec<&ItemId> {
        self.board.pool()
    }

    /// Whether every item has been placed somewhere.
    pub fn all_placed(&self) -> bool {
        self.board.all_placed()
    }

    /// The items currently on a target.
    pub fn items_on(&self, target: &TargetId) -> &[ItemId] {
        self.board.items_in(target)
    }

    /// Score the arrangement: an item is correct when its category
    /// matches the category of the target it sits on.
    ///
    /// Items still in the pool are not scored, so the arrangement can
    /// only succeed once everything is placed.
    pub fn check_answers(&mut self) -> SortOutcome {
        let items = &self.items;
        let targets = &self.targets;

        let summary = self.board.check(|item_id, target_id| {
            let item = items.iter().find(|item| &item.id == item_id);
            let target = targets.iter().find(|target| &target.id == target_id);
            match (item, target) {
                (Some(item), Some(target)) => item.category == target.category,
                _ => false,
            }
        });

        if summary.all_correct() && self.board.all_placed() {
            self.solved = true;
            SortOutcome::Success
        } else {
            SortOutcome::PartialFailure {
                incorrect: summary.incorrect,
            }
        }
    }

    /// Send every item back to the pool after a failed attempt.
    pub fn reset_placements(&mut self) {
        self.board.reset();
    }

    /// Full reset, forgetting a solved state too.
    pub fn reset(&mut self) {
        self.board.reset();
        self.solved = false;
    }

    /// The mark an item received in the latest check.
    pub fn mark(&self, item: &ItemId) -> Option<bool> {
        self.board.mark(item)
    }

    /// Whether the current placements have been scored.
    pub fn checked(&self) -> bool {
        self.board.checked()
    }

    /// Whether the arrangement has been solved.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// How this activity recovers from a failed check.
    pub fn recovery_policy(&self) -> RecoveryPolicy {
        RecoveryPolicy::ResetAll
    }
}
