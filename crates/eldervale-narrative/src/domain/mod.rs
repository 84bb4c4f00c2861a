//! Domain model: memory record, turn schedule, scene catalog and the
//! session that ties them together.

pub mod aggregates;
pub mod commands;
pub mod config;
pub mod memory;
pub mod scenes;
pub mod schedule;
