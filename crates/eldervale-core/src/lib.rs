//! Eldervale Core — shared abstractions.
//!
//! This crate defines the traits and types that the narrator core and its
//! collaborators depend on: time, commands, errors, the per-turn
//! observability sink, and the voice boundary. It contains no
//! infrastructure code.

pub mod clock;
pub mod command;
pub mod error;
pub mod turn;
pub mod voice;
