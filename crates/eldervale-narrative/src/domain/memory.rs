//! The player's memory record.
//!
//! Collections only ever grow; nothing removes or reorders an entry once it
//! has been written.

use serde::Serialize;

/// Name given to the player when the session does not supply one.
pub const DEFAULT_PLAYER_NAME: &str = "Arin";

/// Health every player starts with.
pub const STARTING_HEALTH: i32 = 100;

/// Evolving world-state for one player, owned by a single session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerMemory {
    name: String,
    health: i32,
    inventory: Vec<String>,
    allies: Vec<String>,
    visited_places: Vec<String>,
    past_actions: Vec<String>,
}

impl PlayerMemory {
    /// Creates a fresh record for the named player.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: STARTING_HEALTH,
            inventory: Vec::new(),
            allies: Vec::new(),
            visited_places: Vec::new(),
            past_actions: Vec::new(),
        }
    }

    /// The player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current health. May be negative; no floor is applied.
    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Items picked up, in order.
    #[must_use]
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// Allies met, in order.
    #[must_use]
    pub fn allies(&self) -> &[String] {
        &self.allies
    }

    /// Places visited, in order. Repeat visits appear twice.
    #[must_use]
    pub fn visited_places(&self) -> &[String] {
        &self.visited_places
    }

    /// Excerpts of the player's utterances, one per non-empty turn.
    #[must_use]
    pub fn past_actions(&self) -> &[String] {
        &self.past_actions
    }

    pub(crate) fn visit(&mut self, place: &str) {
        self.visited_places.push(place.to_owned());
    }

    pub(crate) fn add_item(&mut self, item: &str) {
        self.inventory.push(item.to_owned());
    }

    pub(crate) fn add_ally(&mut self, ally: &str) {
        self.allies.push(ally.to_owned());
    }

    pub(crate) fn adjust_health(&mut self, delta: i32) {
        self.health = self.health.saturating_add(delta);
    }

    /// Logs the first `limit` characters of `utterance`.
    pub(crate) fn log_action(&mut self, utterance: &str, limit: usize) {
        self.past_actions.push(utterance.chars().take(limit).collect());
    }
}

impl Default for PlayerMemory {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_NAME)
    }
}
