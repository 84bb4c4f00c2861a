//! Turn schedule: which narrative step runs on which turn.

use std::fmt;

use serde::Serialize;

/// One narrative step of the short story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// The tavern, the gnome and the stolen map.
    OpeningScene,
    /// Fenrix the ranger joins the player.
    AllyIntroduction,
    /// A scrap of the map turns up in the forest.
    ForestDiscovery,
    /// Wolves attack.
    WolfEncounter,
    /// The world echoes whatever the player just said.
    GenericReaction,
    /// The stone door opens and the story ends.
    FinalScene,
}

impl Step {
    /// Stable snake_case name used in logs and views.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpeningScene => "opening_scene",
            Self::AllyIntroduction => "ally_introduction",
            Self::ForestDiscovery => "forest_discovery",
            Self::WolfEncounter => "wolf_encounter",
            Self::GenericReaction => "generic_reaction",
            Self::FinalScene => "final_scene",
        }
    }

    /// Whether this step ends the story arc.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::FinalScene)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scripted steps for the opening turns; entry `n` runs on turn `n + 1`.
pub const SCRIPTED_STEPS: [Step; 4] = [
    Step::OpeningScene,
    Step::AllyIntroduction,
    Step::ForestDiscovery,
    Step::WolfEncounter,
];

/// Total mapping from turn index to step for a given session length.
///
/// The terminal rule is checked first, so a session shorter than the
/// scripted opening ends on time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnSchedule {
    max_turns: u32,
}

impl TurnSchedule {
    /// Creates a schedule that reaches `FinalScene` at `max_turns`.
    #[must_use]
    pub const fn new(max_turns: u32) -> Self {
        Self { max_turns }
    }

    /// The turn at which the final scene starts.
    #[must_use]
    pub const fn max_turns(self) -> u32 {
        self.max_turns
    }

    /// Returns the step for `turn_index` (the first turn is 1).
    #[must_use]
    pub fn step_for(self, turn_index: u32) -> Step {
        if turn_index >= self.max_turns {
            return Step::FinalScene;
        }
        turn_index
            .checked_sub(1)
            .and_then(|slot| usize::try_from(slot).ok())
            .and_then(|slot| SCRIPTED_STEPS.get(slot))
            .copied()
            .unwrap_or(Step::GenericReaction)
    }
}
