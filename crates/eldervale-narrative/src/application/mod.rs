//! Application layer: command and query handlers, the live session
//! registry, and the voice turn loop.

pub mod command_handlers;
pub mod query_handlers;
pub mod registry;
pub mod voice;
