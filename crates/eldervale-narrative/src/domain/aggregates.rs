//! The narrative session: the turn state machine for one player.

use eldervale_core::clock::Clock;
use eldervale_core::turn::{TurnRecord, TurnSink};
use uuid::Uuid;

use super::config::SessionConfig;
use super::memory::PlayerMemory;
use super::scenes::SceneCatalog;
use super::schedule::{Step, TurnSchedule};

/// What a single turn produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedTurn {
    /// The step that ran.
    pub step: Step,
    /// The narration to speak.
    pub narration: String,
}

/// One player's run through the story.
///
/// Owns the turn counter and the player's memory for as long as the
/// connection lives. Turns must be delivered one at a time; the session is
/// never shared between players.
#[derive(Debug)]
pub struct NarrativeSession {
    /// Session identifier.
    pub id: Uuid,
    /// Number of turns played so far.
    turn_index: u32,
    config: SessionConfig,
    schedule: TurnSchedule,
    memory: PlayerMemory,
}

impl NarrativeSession {
    /// Creates a session at turn 0 with a fresh memory record.
    #[must_use]
    pub fn new(id: Uuid, player_name: impl Into<String>, config: SessionConfig) -> Self {
        Self {
            id,
            turn_index: 0,
            config,
            schedule: TurnSchedule::new(config.max_turns()),
            memory: PlayerMemory::new(player_name),
        }
    }

    /// Plays one turn and returns the narration to speak.
    ///
    /// Not idempotent: every call advances the turn counter, including calls
    /// made after the final scene, which simply repeat it.
    pub fn advance_turn(
        &mut self,
        utterance: &str,
        clock: &dyn Clock,
        sink: &dyn TurnSink,
    ) -> String {
        self.play_turn(utterance, clock, sink).narration
    }

    /// Plays one turn like [`Self::advance_turn`], also reporting which step
    /// ran.
    pub fn play_turn(
        &mut self,
        utterance: &str,
        clock: &dyn Clock,
        sink: &dyn TurnSink,
    ) -> PlayedTurn {
        self.turn_index = self.turn_index.saturating_add(1);

        if !utterance.is_empty() {
            self.memory.log_action(utterance, self.config.action_log_limit());
        }

        let step = self.schedule.step_for(self.turn_index);
        let narration = SceneCatalog::play(step, utterance, &mut self.memory);

        sink.record(&TurnRecord {
            session_id: self.id,
            turn_index: self.turn_index,
            step: step.as_str(),
            narration: narration.clone(),
            occurred_at: clock.now(),
        });

        PlayedTurn { step, narration }
    }

    /// Number of turns played so far.
    #[must_use]
    pub fn turn_index(&self) -> u32 {
        self.turn_index
    }

    /// The player's memory record.
    #[must_use]
    pub fn memory(&self) -> &PlayerMemory {
        &self.memory
    }

    /// The session's configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The step played on the most recent turn, if any.
    #[must_use]
    pub fn current_step(&self) -> Option<Step> {
        (self.turn_index > 0).then(|| self.schedule.step_for(self.turn_index))
    }

    /// Whether the final scene has been reached. Further turns are still
    /// accepted and replay the final scene.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.turn_index >= self.config.max_turns()
    }
}
