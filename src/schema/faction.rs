use serde::{Deserialize, Serialize};

use super::effect::Stat;
use super::meta::GenerationMeta;

/// Influence change when the player plays a card carrying `tag`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionRule {
    pub tag: String,
    pub influence_delta: i32,
}

/// Once influence reaches `threshold`, `stat` gains are multiplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBonus {
    pub threshold: u32,
    pub stat: Stat,
    pub multiplier: f64,
}

/// A political faction. Serialized as-is for the authoring format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faction {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub tags: Vec<String>,
    pub base_influence: u32,
    pub volatility: f64,
    pub reactions: Vec<ReactionRule>,
    pub threshold_bonuses: Vec<ThresholdBonus>,
    pub unlockable_cards: Vec<String>,
    #[serde(flatten)]
    pub meta: GenerationMeta,
}

/// The lean faction record consumed by the game engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactionRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub tags: Vec<String>,
    pub base_influence: u32,
    pub volatility: f64,
    pub reactions: Vec<ReactionRule>,
    pub threshold_bonuses: Vec<ThresholdBonus>,
    pub unlockable_cards: Vec<String>,
}

impl Faction {
    pub fn record(&self) -> FactionRecord {
        FactionRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            color: self.color.clone(),
            tags: self.tags.clone(),
            base_influence: self.base_influence,
            volatility: self.volatility,
            reactions: self.reactions.clone(),
            threshold_bonuses: self.threshold_bonuses.clone(),
            unlockable_cards: self.unlockable_cards.clone(),
        }
    }
}
