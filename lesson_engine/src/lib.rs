//! # Lesson Engine
//!
//! The playback half of Slate. This crate mounts the slides described by
//! `lesson_content`, scores the interactive activities, and runs the
//! lesson session from the first slide to the closing navigation.
//!
//! ## Core Components
//!
//! - **activities**: Scoring engines for the interactive slide kinds
//! - **renderer**: Maps slide descriptors onto mounted activities and frame state
//! - **session**: Slide navigation, hearts, timers, and activity consequences
//! - **audio**: Narration playback over a pluggable speech backend
//!
//! ## Design Philosophy
//!
//! - **Pure engines**: Activity engines judge arrangements; all consequences
//!   (hearts, resets, advancing) live in the session
//! - **Host-driven time**: Nothing sleeps; the host ticks the session with
//!   its own clock and applies the transitions that come back
//! - **Pluggable output**: Speech is a trait, so hosts decide how narration
//!   actually sounds

pub mod activities;
pub mod audio;
pub mod renderer;
pub mod session;

pub use activities::*;
pub use audio::*;
pub use renderer::*;
pub use session::*;
