//! # Lesson Content
//!
//! The "Lesson Bible" crate - contains every slide format, the content
//! invariants, and the catalog of standards and chapters. This crate is
//! the single source of truth for what a lesson contains and does not
//! hold any playback state.

pub mod catalog;
pub mod slides;

pub use catalog::*;
pub use slides::*;
