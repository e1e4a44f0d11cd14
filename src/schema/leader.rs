use serde::{Deserialize, Serialize};

use super::effect::Effect;
use super::meta::GenerationMeta;

/// Starting stats for a leader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub approval: i32,
    pub economy: i32,
    pub absurdity: i32,
    pub reputation: i32,
    pub panic: i32,
}

/// A leader's once-per-game special ability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub effects: Vec<Effect>,
}

/// A playable leader. Serialized as-is for the authoring format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leader {
    pub id: String,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub stats: StatBlock,
    pub trait_tags: Vec<String>,
    pub ability: Ability,
    pub starting_deck: Vec<String>,
    #[serde(flatten)]
    pub meta: GenerationMeta,
}

/// The lean leader record consumed by the game engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderRecord {
    pub id: String,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub stats: StatBlock,
    pub trait_tags: Vec<String>,
    pub ability: Ability,
    pub starting_deck: Vec<String>,
    pub portrait_key: String,
}

impl Leader {
    pub fn record(&self) -> LeaderRecord {
        LeaderRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            title: self.title.clone(),
            bio: self.bio.clone(),
            stats: self.stats,
            trait_tags: self.trait_tags.clone(),
            ability: self.ability.clone(),
            starting_deck: self.starting_deck.clone(),
            portrait_key: format!("art/portraits/{}", self.id),
        }
    }
}
