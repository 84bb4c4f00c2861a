//! Shared test doubles for the Eldervale narrator.

mod clock;
mod sink;
mod voice;

pub use clock::{FixedClock, fixed_clock};
pub use sink::RecordingTurnSink;
pub use voice::{FailingNarrationOutput, RecordingNarrationOutput, ScriptedUtteranceFeed};
