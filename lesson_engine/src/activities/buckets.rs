//! Bucket-match engine - every drop is judged the moment it lands.

use lesson_content::{BucketMatchSlide, Item, ItemId, Target, TargetId};

use super::{PlaceOutcome, PlacementBoard, RecoveryPolicy, ZoneCapacity};

/// Why a drop bounced back to the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropRejection {
    /// The item belongs to a different bucket.
    WrongCategory,
    /// The bucket already holds its matched item.
    BucketFilled,
    /// The item was already matched into another bucket.
    AlreadyMatched,
    /// No such bucket on this slide.
    UnknownBucket,
    /// No such item on this slide.
    UnknownItem,
}

/// Result of dropping an item onto a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The item matched and stays in the bucket.
    Accepted,
    /// The item matched and the whole board is now complete.
    AllMatched,
    /// The drop bounced back; the board is unchanged.
    Rejected(DropRejection),
}

impl DropOutcome {
    /// Whether the drop landed.
    pub fn accepted(&self) -> bool {
        matches!(self, DropOutcome::Accepted | DropOutcome::AllMatched)
    }
}

/// State of a mounted bucket-match activity.
///
/// Unlike sorting there is no separate check step: a wrong drop never
/// lands, a right drop locks in immediately, and the activity completes
/// by itself when the last item is matched. No attempt at this activity
/// can ever be scored wrong after the fact.
#[derive(Debug, Clone)]
pub struct BucketMatchEngine {
    items: Vec<Item>,
    buckets: Vec<Target>,
    board: PlacementBoard<ItemId, TargetId>,
}

impl BucketMatchEngine {
    /// Mount the engine for a bucket-match slide.
    pub fn new(slide: &BucketMatchSlide) -> Self {
        let board = PlacementBoard::new(
            slide.items.iter().map(|item| item.id.clone()),
            slide.buckets.iter().map(|bucket| bucket.id.clone()),
            ZoneCapacity::Single,
        );

        Self {
            items: slide.items.clone(),
            buckets: slide.buckets.clone(),
            board,
        }
    }

    /// The items of this activity.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The buckets of this activity.
    pub fn buckets(&self) -> &[Target] {
        &self.buckets
    }

    /// Drop an item onto a bucket.
    ///
    /// A filled bucket rejects everything, whatever the category; a
    /// matched item can never be picked up and dropped again.
    pub fn drop_item(&mut self, item_id: &ItemId, bucket_id: &TargetId) -> DropOutcome {
        let Some(item) = self.items.iter().find(|item| &item.id == item_id) else {
            return DropOutcome::Rejected(DropRejection::UnknownItem);
        };
        let Some(bucket) = self.buckets.iter().find(|bucket| &bucket.id == bucket_id) else {
            return DropOutcome::Rejected(DropRejection::UnknownBucket);
        };

        if self.board.is_placed(item_id) {
            return DropOutcome::Rejected(DropRejection::AlreadyMatched);
        }
        if self.board.occupant(bucket_id).is_some() {
            return DropOutcome::Rejected(DropRejection::BucketFilled);
        }
        if item.category != bucket.category {
            return DropOutcome::Rejected(DropRejection::WrongCategory);
        }

        match self.board.place(item_id, bucket_id) {
            PlaceOutcome::PlacedFromPool => {
                self.board.set_mark(item_id, true);
                if self.is_complete() {
                    DropOutcome::AllMatched
                } else {
                    DropOutcome::Accepted
                }
            }
            // The guards above already handled every rejection.
            _ => DropOutcome::Rejected(DropRejection::BucketFilled),
        }
    }

    /// The item matched into a bucket, if any.
    pub fn bucket_occupant(&self, bucket: &TargetId) -> Option<&ItemId> {
        self.board.occupant(bucket)
    }

    /// Whether a bucket already holds its matched item.
    pub fn bucket_filled(&self, bucket: &TargetId) -> bool {
        self.board.occupant(bucket).is_some()
    }

    /// Items not yet matched, in original order.
    pub fn unmatched(&self) -> Vec<&ItemId> {
        self.board.pool()
    }

    /// Number of items matched so far.
    pub fn matched_count(&self) -> usize {
        self.board.placed_count()
    }

    /// Whether every item has been matched.
    pub fn is_complete(&self) -> bool {
        self.board.all_placed()
    }

    /// Empty every bucket and start over.
    pub fn reset(&mut self) {
        self.board.reset();
    }

    /// How this activity recovers from mistakes.
    pub fn recovery_policy(&self) -> RecoveryPolicy {
        RecoveryPolicy::RejectOnDrop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lesson_content::BucketMatchSlide;

    fn homes_slide() -> BucketMatchSlide {
        BucketMatchSlide::new("Match the Homes", "Drop each animal onto its home")
            .with_item(Item::new("dog", "Dog", "dog"))
            .with_item(Item::new("bird", "Bird", "bird"))
            .with_item(Item::new("bee", "Bee", "bee"))
            .with_bucket(Target::new("kennel", "Kennel", "dog"))
            .with_bucket(Target::new("nest", "Nest", "bird"))
            .with_bucket(Target::new("hive", "Hive", "bee"))
    }

    #[test]
    fn test_correct_drop_locks_in() {
        let mut engine = BucketMatchEngine::new(&homes_slide());

        let outcome = engine.drop_item(&ItemId::new("dog"), &TargetId::new("kennel"));
        assert_eq!(outcome, DropOutcome::Accepted);
        assert!(engine.bucket_filled(&TargetId::new("kennel")));
        assert_eq!(engine.matched_count(), 1);
    }

    #[test]
    fn test_wrong_drop_bounces_back() {
        let mut engine = BucketMatchEngine::new(&homes_slide());

        let outcome = engine.drop_item(&ItemId::new("dog"), &TargetId::new("nest"));
        assert_eq!(outcome, DropOutcome::Rejected(DropRejection::WrongCategory));
        assert_eq!(engine.matched_count(), 0);
        assert_eq!(engine.unmatched().len(), 3);
    }

    #[test]
    fn test_filled_bucket_rejects_any_drop() {
        let mut engine = BucketMatchEngine::new(&homes_slide());

        engine.drop_item(&ItemId::new("dog"), &TargetId::new("kennel"));

        // Wrong category and right category alike: the bucket is done.
        assert_eq!(
            engine.drop_item(&ItemId::new("bird"), &TargetId::new("kennel")),
            DropOutcome::Rejected(DropRejection::BucketFilled)
        );
        assert_eq!(engine.bucket_occupant(&TargetId::new("kennel")), Some(&ItemId::new("dog")));
    }

    #[test]
    fn test_matched_item_cannot_move() {
        let mut engine = BucketMatchEngine::new(&homes_slide());

        engine.drop_item(&ItemId::new("dog"), &TargetId::new("kennel"));

        assert_eq!(
            engine.drop_item(&ItemId::new("dog"), &TargetId::new("nest")),
            DropOutcome::Rejected(DropRejection::AlreadyMatched)
        );
    }

    #[test]
    fn test_last_drop_reports_all_matched() {
        let mut engine = BucketMatchEngine::new(&homes_slide());

        assert_eq!(
            engine.drop_item(&ItemId::new("dog"), &TargetId::new("kennel")),
            DropOutcome::Accepted
        );
        assert_eq!(
            engine.drop_item(&ItemId::new("bird"), &TargetId::new("nest")),
            DropOutcome::Accepted
        );
        assert_eq!(
            engine.drop_item(&ItemId::new("bee"), &TargetId::new("hive")),
            DropOutcome::AllMatched
        );
        assert!(engine.is_complete());
    }

    #[test]
    fn test_unknown_ids_are_rejected() {
        let mut engine = BucketMatchEngine::new(&homes_slide());

        assert_eq!(
            engine.drop_item(&ItemId::new("cat"), &TargetId::new("kennel")),
            DropOutcome::Rejected(DropRejection::UnknownItem)
        );
        assert_eq!(
            engine.drop_item(&ItemId::new("dog"), &TargetId::new("cave")),
            DropOutcome::Rejected(DropRejection::UnknownBucket)
        );
    }

    #[test]
    fn test_reset_empties_every_bucket() {
        let mut engine = BucketMatchEngine::new(&homes_slide());

        engine.drop_item(&ItemId::new("dog"), &TargetId::new("kennel"));
        engine.drop_item(&ItemId::new("bird"), &TargetId::new("nest"));

        engine.reset();

        assert_eq!(engine.matched_count(), 0);
        assert!(!engine.bucket_filled(&TargetId::new("kennel")));
        assert_eq!(engine.unmatched().len(), 3);
    }
}
