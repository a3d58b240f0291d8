//! Interactive activity engines - pure scoring state machines.
//!
//! Each engine owns the state of one mounted activity slide and knows
//! nothing about rendering, hearts, or navigation; the session layer
//! applies consequences to the outcomes returned here.

mod buckets;
mod choice;
mod placement;
mod sequence;
mod sort;

pub use buckets::*;
pub use choice::*;
pub use placement::*;
pub use sequence::*;
pub use sort::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kinds of activity a slide can mount.
///
/// Riddles and quiz questions share one engine, so there are fewer
/// activity kinds than slide formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    Learn,
    Sort,
    BucketMatch,
    Sequence,
    Choice,
}

impl ActivityKind {
    /// Human-readable name for messages.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Learn => "learn",
            ActivityKind::Sort => "sort",
            ActivityKind::BucketMatch => "bucket-match",
            ActivityKind::Sequence => "sequence",
            ActivityKind::Choice => "choice",
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How an activity recovers after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecoveryPolicy {
    /// Every placement returns to the pool and the player starts over.
    ResetAll,

    /// Placements stay where they are, marked right or wrong, so the
    /// player can fix only the wrong ones.
    RetainAndMark,

    /// Wrong moves never land at all; they bounce back the moment they
    /// are dropped.
    RejectOnDrop,
}

/// Errors raised when an interaction reaches the wrong kind of slide.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActivityError {
    /// The interaction belongs to a different activity kind.
    #[error("expected a {expected} activity on the current slide, found {found}")]
    WrongActivity {
        expected: ActivityKind,
        found: ActivityKind,
    },

    /// The current slide has nothing to check.
    #[error("the current {found} slide has no check step")]
    NotCheckable { found: ActivityKind },
}
