//! Placement board - shared state for drag-and-drop activities.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How many pieces a zone can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneCapacity {
    /// At most one piece; further drops are rejected.
    Single,
    /// Any number of pieces.
    Unbounded,
}

/// Result of a placement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// Picked up from the pool and placed.
    PlacedFromPool,
    /// Moved out of another zone; a piece is never in two places.
    MovedBetweenZones,
    /// Dropped onto the zone it was already in; nothing changed.
    AlreadyInZone,
    /// The zone holds a piece and only takes one.
    ZoneOccupied,
    /// No such zone on this board.
    UnknownZone,
    /// No such piece on this board.
    UnknownItem,
}

impl PlaceOutcome {
    /// Whether the drop was accepted (including the no-op same-zone drop).
    pub fn accepted(&self) -> bool {
        matches!(
            self,
            PlaceOutcome::PlacedFromPool
                | PlaceOutcome::MovedBetweenZones
                | PlaceOutcome::AlreadyInZone
        )
    }
}

/// Tally of one scoring pass over the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckSummary {
    pub placed: usize,
    pub correct: usize,
    pub incorrect: usize,
}

impl CheckSummary {
    /// Whether every placed piece was correct.
    pub fn all_correct(&self) -> bool {
        self.incorrect == 0
    }
}

/// The state of a drag-and-drop board: a pool of pieces and a fixed set
/// of zones they can be placed into.
///
/// The zones are the single source of truth; the pool is whatever has
/// not been placed, always listed in the board's original piece order.
/// A piece is never in two places at once: placing it removes it from
/// wherever it was, and any mark it carried from an earlier check is
/// dropped because it no longer applies.
#[derive(Debug, Clone)]
pub struct PlacementBoard<I, Z> {
    /// Every piece in canonical pool order.
    order: Vec<I>,

    /// Zone contents, keyed by zone. Keys are fixed at construction.
    zones: BTreeMap<Z, Vec<I>>,

    capacity: ZoneCapacity,

    /// Right/wrong marks from the most recent check.
    marks: BTreeMap<I, bool>,

    /// Whether the current placements have been scored.
    checked: bool,
}

impl<I, Z> PlacementBoard<I, Z>
where
    I: Clone + Ord,
    Z: Clone + Ord,
{
    /// Create a board with the given pieces and zones.
    pub fn new(
        pieces: impl IntoIterator<Item = I>,
        zones: impl IntoIterator<Item = Z>,
        capacity: ZoneCapacity,
    ) -> Self {
        Self {
            order: pieces.into_iter().collect(),
            zones: zones.into_iter().map(|zone| (zone, Vec::new())).collect(),
            capacity,
            marks: BTreeMap::new(),
            checked: false,
        }
    }

    /// Place a piece into a zone, detaching it from the pool or from
    /// the zone it previously occupied.
    pub fn place(&mut self, piece: &I, zone: &Z) -> PlaceOutcome {
        if !self.order.contains(piece) {
            return PlaceOutcome::UnknownItem;
        }
        if !self.zones.contains_key(zone) {
            return PlaceOutcome::UnknownZone;
        }

        let from = self.zone_containing(piece).cloned();
        if from.as_ref() == Some(zone) {
            return PlaceOutcome::AlreadyInZone;
        }

        if self.capacity == ZoneCapacity::Single && !self.items_in(zone).is_empty() {
            return PlaceOutcome::ZoneOccupied;
        }

        if let Some(previous) = &from {
            if let Some(contents) = self.zones.get_mut(previous) {
                contents.retain(|other| other != piece);
            }
        }
        if let Some(contents) = self.zones.get_mut(zone) {
            contents.push(piece.clone());
        }

        self.marks.remove(piece);
        self.checked = false;

        if from.is_some() {
            PlaceOutcome::MovedBetweenZones
        } else {
            PlaceOutcome::PlacedFromPool
        }
    }

    /// Send a placed piece back to the pool. Returns false if the piece
    /// was not placed anywhere.
    pub fn remove(&mut self, piece: &I) -> bool {
        let Some(zone) = self.zone_containing(piece).cloned() else {
            return false;
        };

        if let Some(contents) = self.zones.get_mut(&zone) {
            contents.retain(|other| other != piece);
        }
        self.marks.remove(piece);
        self.checked = false;
        true
    }

    /// Return every piece to the pool and forget all marks.
    pub fn reset(&mut self) {
        for contents in self.zones.values_mut() {
            contents.clear();
        }
        self.marks.clear();
        self.checked = false;
    }

    /// The zone currently holding a piece.
    pub fn zone_containing(&self, piece: &I) -> Option<&Z> {
        self.zones
            .iter()
            .find(|(_, contents)| contents.contains(piece))
            .map(|(zone, _)| zone)
    }

    /// The pieces in a zone, in placement order.
    pub fn items_in(&self, zone: &Z) -> &[I] {
        self.zones.get(zone).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The single occupant of a zone, if any.
    pub fn occupant(&self, zone: &Z) -> Option<&I> {
        self.items_in(zone).first()
    }

    /// Whether a piece is currently placed in some zone.
    pub fn is_placed(&self, piece: &I) -> bool {
        self.zone_containing(piece).is_some()
    }

    /// Unplaced pieces, in canonical pool order.
    pub fn pool(&self) -> Vec<&I> {
        self.order
            .iter()
            .filter(|piece| !self.is_placed(piece))
            .collect()
    }

    /// Total number of pieces on the board (placed or not).
    pub fn piece_count(&self) -> usize {
        self.order.len()
    }

    /// Number of zones.
    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// Number of pieces currently placed.
    pub fn placed_count(&self) -> usize {
        self.zones.values().map(Vec::len).sum()
    }

    /// Whether every piece has been placed.
    pub fn all_placed(&self) -> bool {
        self.placed_count() == self.order.len()
    }

    /// Score every placed piece against the rule and remember the marks.
    pub fn check<F>(&mut self, rule: F) -> CheckSummary
    where
        F: Fn(&I, &Z) -> bool,
    {
        let mut summary = CheckSummary::default();
        let mut marks = BTreeMap::new();

        for (zone, contents) in &self.zones {
            for piece in contents {
                let correct = rule(piece, zone);
                marks.insert(piece.clone(), correct);
                summary.placed += 1;
                if correct {
                    summary.correct += 1;
                } else {
                    summary.incorrect += 1;
                }
            }
        }

        self.marks = marks;
        self.checked = true;
        summary
    }

    /// The mark a piece received, if it has been scored since it last
    /// moved.
    pub fn mark(&self, piece: &I) -> Option<bool> {
        self.marks.get(piece).copied()
    }

    /// Record a mark outside of a full check (used by boards that score
    /// each drop as it lands).
    pub fn set_mark(&mut self, piece: &I, correct: bool) {
        if self.order.contains(piece) {
            self.marks.insert(piece.clone(), correct);
        }
    }

    /// Whether the current placements have been scored.
    pub fn checked(&self) -> bool {
        self.checked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> PlacementBoard<&'static str, &'static str> {
        PlacementBoard::new(
            ["tree", "river", "chair"],
            ["left", "right"],
            ZoneCapacity::Unbounded,
        )
    }

    #[test]
    fn test_place_from_pool() {
        let mut board = board();

        assert_eq!(board.place(&"tree", &"left"), PlaceOutcome::PlacedFromPool);
        assert!(board.is_placed(&"tree"));
        assert_eq!(board.items_in(&"left"), &["tree"]);
        assert_eq!(board.pool(), vec![&"river", &"chair"]);
    }

    #[test]
    fn test_move_never_duplicates() {
        let mut board = board();

        board.place(&"tree", &"left");
        assert_eq!(board.place(&"tree", &"right"), PlaceOutcome::MovedBetweenZones);

        assert!(board.items_in(&"left").is_empty());
        assert_eq!(board.items_in(&"right"), &["tree"]);
        assert_eq!(board.placed_count(), 1);
    }

    #[test]
    fn test_same_zone_drop_is_noop() {
        let mut board = board();

        board.place(&"tree", &"left");
        board.check(|_, _| true);
        assert_eq!(board.mark(&"tree"), Some(true));

        assert_eq!(board.place(&"tree", &"left"), PlaceOutcome::AlreadyInZone);
        // The mark survives because nothing moved.
        assert_eq!(board.mark(&"tree"), Some(true));
        assert!(board.checked());
    }

    #[test]
    fn test_unknown_ids_are_rejected() {
        let mut board = board();

        assert_eq!(board.place(&"rock", &"left"), PlaceOutcome::UnknownItem);
        assert_eq!(board.place(&"tree", &"middle"), PlaceOutcome::UnknownZone);
        assert_eq!(board.placed_count(), 0);
    }

    #[test]
    fn test_single_capacity_rejects_occupied() {
        let mut board = PlacementBoard::new(
            ["dog", "bird"],
            ["kennel", "nest"],
            ZoneCapacity::Single,
        );

        assert_eq!(board.place(&"dog", &"kennel"), PlaceOutcome::PlacedFromPool);
        assert_eq!(board.place(&"bird", &"kennel"), PlaceOutcome::ZoneOccupied);
        assert_eq!(board.occupant(&"kennel"), Some(&"dog"));
        assert!(!board.is_placed(&"bird"));
    }

    #[test]
    fn test_remove_restores_pool_order() {
        let mut board = board();

        board.place(&"chair", &"left");
        board.place(&"tree", &"left");
        assert_eq!(board.pool(), vec![&"river"]);

        assert!(board.remove(&"chair"));
        // Canonical order, not removal order.
        assert_eq!(board.pool(), vec![&"river", &"chair"]);

        assert!(!board.remove(&"chair"));
    }

    #[test]
    fn test_check_marks_only_placed_pieces() {
        let mut board = board();

        board.place(&"tree", &"left");
        board.place(&"chair", &"right");

        let summary = board.check(|piece, zone| match *zone {
            "left" => *piece == "tree" || *piece == "river",
            _ => *piece == "chair",
        });

        assert_eq!(summary.placed, 2);
        assert_eq!(summary.correct, 2);
        assert!(summary.all_correct());
        assert_eq!(board.mark(&"river"), None);
        assert!(board.checked());
    }

    #[test]
    fn test_moving_a_piece_clears_its_mark() {
        let mut board = board();

        board.place(&"tree", &"left");
        board.place(&"chair", &"right");
        board.check(|piece, zone| (*zone == "left") == (*piece == "tree"));

        assert_eq!(board.mark(&"tree"), Some(true));
        assert_eq!(board.mark(&"chair"), Some(true));

        board.place(&"chair", &"left");
        assert_eq!(board.mark(&"chair"), None);
        assert_eq!(board.mark(&"tree"), Some(true));
        assert!(!board.checked());
    }

    #[test]
    fn test_reset() {
        let mut board = board();

        board.place(&"tree", &"left");
        board.place(&"river", &"right");
        board.check(|_, _| false);

        board.reset();

        assert_eq!(board.placed_count(), 0);
        assert_eq!(board.pool(), vec![&"tree", &"river", &"chair"]);
        assert_eq!(board.mark(&"tree"), None);
        assert!(!board.checked());
    }

    #[test]
    fn test_all_placed() {
        let mut board = board();
        assert!(!board.all_placed());

        board.place(&"tree", &"left");
        board.place(&"river", &"left");
        board.place(&"chair", &"right");
        assert!(board.all_placed());
    }
}
