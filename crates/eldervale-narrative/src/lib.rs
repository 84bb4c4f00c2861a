//! Eldervale narrator — turn orchestration core.
//!
//! Accepts one finalized player utterance per turn, picks the next scene of
//! a fixed-length short story from the turn number, updates the player's
//! memory record, and returns the narration to speak.

pub mod application;
pub mod domain;
