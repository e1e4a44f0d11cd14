use serde::{Deserialize, Serialize};

use super::effect::Effect;
use super::meta::GenerationMeta;

/// Card rarity, drawn by weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Rarity {
    /// Draw weights, out of 100.
    pub const WEIGHTS: [(Rarity, u32); 4] = [
        (Rarity::Common, 60),
        (Rarity::Uncommon, 25),
        (Rarity::Rare, 12),
        (Rarity::Legendary, 3),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Legendary => "legendary",
        }
    }
}

/// A bonus effect that applies when the card is played alongside
/// another entity sharing `with_tag`. The tag is always one of the
/// card's own tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Synergy {
    pub with_tag: String,
    pub bonus: Effect,
}

/// A playable policy card. Serialized as-is for the authoring format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cost: u8,
    pub rarity: Rarity,
    pub tags: Vec<String>,
    pub effects: Vec<Effect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synergy: Option<Synergy>,
    #[serde(flatten)]
    pub meta: GenerationMeta,
}

/// The lean card record consumed by the game engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cost: u8,
    pub rarity: Rarity,
    pub tags: Vec<String>,
    pub effects: Vec<Effect>,
    pub art_key: String,
}

impl Card {
    /// Project to the engine record. A synergy becomes one more effect,
    /// conditional on its tag.
    pub fn record(&self) -> CardRecord {
        let mut effects = self.effects.clone();
        if let Some(ref synergy) = self.synergy {
            effects.push(synergy.bonus.clone().conditional_on(synergy.with_tag.clone()));
        }
        CardRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            cost: self.cost,
            rarity: self.rarity,
            tags: self.tags.clone(),
            effects,
            art_key: format!("art/cards/{}", self.id),
        }
    }
}
