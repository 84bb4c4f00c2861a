//! Scene catalog: fixed narration and memory effects for each step.

use super::memory::PlayerMemory;
use super::schedule::Step;

/// Every non-terminal narration ends with this prompt.
pub const CLOSING_PROMPT: &str = "What do you do?";

/// Instructions for a language-model narrator voicing this story.
pub const NARRATOR_PERSONA: &str = "You are the Game Master (GM). \
Universe: Fantasy land called \"Eldervale\". \
Tone: spooky but simple. \
You describe scenes and ask the player what they do. \
Always end with: \"What do you do?\"";

/// Where the story opens.
pub const TAVERN: &str = "Tavern";
/// Where the map scrap is found.
pub const FOREST: &str = "Forest";
/// The ranger who joins the player.
pub const RANGER: &str = "Fenrix";
/// The only item in the story.
pub const MAP_SCRAP: &str = "Map Scrap";

/// Health lost to the wolf attack.
pub const WOLF_DAMAGE: i32 = 10;

const OPENING_SCENE: &str = "You are in a quiet tavern near a dark forest. The fire is low. \
A small gnome says someone stole a map.";
const ALLY_INTRODUCTION: &str =
    "A hooded ranger named Fenrix stands up. He offers to help you find the map.";
const FOREST_DISCOVERY: &str = "You walk into the forest. \
You find a small piece of paper with a star mark on it. It might be part of the map.";
const WOLF_ENCOUNTER: &str = "You hear wolves. One jumps out and scares you. \
You lose a little health. Fenrix draws his bow to protect you.";
const FINAL_SCENE: &str = "You reach a stone door with a glowing star mark. \
Fenrix nods at you. The door opens slowly. A new quest begins.";

/// Stateless catalog of scenes. Holds nothing between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneCatalog;

impl SceneCatalog {
    /// Applies the step's memory effect and returns its narration.
    pub fn play(step: Step, utterance: &str, memory: &mut PlayerMemory) -> String {
        match step {
            Step::OpeningScene => memory.visit(TAVERN),
            Step::AllyIntroduction => memory.add_ally(RANGER),
            Step::ForestDiscovery => {
                memory.visit(FOREST);
                memory.add_item(MAP_SCRAP);
            }
            Step::WolfEncounter => memory.adjust_health(-WOLF_DAMAGE),
            Step::GenericReaction | Step::FinalScene => {}
        }
        Self::narration(step, utterance)
    }

    /// The narration for `step`, without touching any memory.
    #[must_use]
    pub fn narration(step: Step, utterance: &str) -> String {
        let body = match step {
            Step::OpeningScene => OPENING_SCENE.to_owned(),
            Step::AllyIntroduction => ALLY_INTRODUCTION.to_owned(),
            Step::ForestDiscovery => FOREST_DISCOVERY.to_owned(),
            Step::WolfEncounter => WOLF_ENCOUNTER.to_owned(),
            Step::GenericReaction => format!(
                "The world reacts to your action: {utterance}. \
                 You see the path ahead glowing with stars."
            ),
            Step::FinalScene => return FINAL_SCENE.to_owned(),
        };
        format!("{body} {CLOSING_PROMPT}")
    }
}
