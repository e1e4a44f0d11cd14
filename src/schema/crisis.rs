use serde::{Deserialize, Serialize};

use super::effect::{Effect, Stat};
use super::meta::GenerationMeta;

/// Severity class of a crisis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Minor,
    Major,
    Catastrophic,
}

impl Severity {
    /// Numeric severity on the engine's 1..=5 scale.
    pub fn level(&self) -> u8 {
        match self {
            Self::Minor => 1,
            Self::Major => 3,
            Self::Catastrophic => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minor => "minor",
            Self::Major => "major",
            Self::Catastrophic => "catastrophic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    Above,
    Below,
}

/// Inclusive turn window in which the crisis may fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnRange {
    pub min_turn: u32,
    pub max_turn: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatThreshold {
    pub stat: Stat,
    pub comparison: Comparison,
    pub value: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerConditions {
    pub turns: TurnRange,
    pub thresholds: Vec<StatThreshold>,
}

/// One way the player can respond to a crisis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseOption {
    pub label: String,
    pub effects: Vec<Effect>,
    /// Card whose effects this option borrows, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_card_id: Option<String>,
}

/// Link to the crisis that follows this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainEvent {
    pub crisis_id: String,
}

/// A crisis event. Serialized as-is for the authoring format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crisis {
    pub id: String,
    pub name: String,
    pub severity: Severity,
    pub category: String,
    pub headline: String,
    pub description: String,
    pub tags: Vec<String>,
    pub triggers: TriggerConditions,
    pub responses: Vec<ResponseOption>,
    pub chain_events: Vec<ChainEvent>,
    #[serde(flatten)]
    pub meta: GenerationMeta,
}

/// The lean crisis record consumed by the game engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrisisRecord {
    pub id: String,
    pub name: String,
    pub headline: String,
    pub description: String,
    pub severity: u8,
    pub severity_class: Severity,
    pub category: String,
    pub tags: Vec<String>,
    pub triggers: TriggerConditions,
    pub responses: Vec<ResponseOption>,
    pub chain_events: Vec<ChainEvent>,
}

impl Crisis {
    pub fn record(&self) -> CrisisRecord {
        CrisisRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            headline: self.headline.clone(),
            description: self.description.clone(),
            severity: self.severity.level(),
            severity_class: self.severity,
            category: self.category.clone(),
            tags: self.tags.clone(),
            triggers: self.triggers.clone(),
            responses: self.responses.clone(),
            chain_events: self.chain_events.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_levels() {
        assert_eq!(Severity::Minor.level(), 1);
        assert_eq!(Severity::Major.level(), 3);
        assert_eq!(Severity::Catastrophic.level(), 5);
    }

    #[test]
    fn chain_event_json_key() {
        let json = serde_json::to_string(&ChainEvent {
            crisis_id: "moon_unionizes_02".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"crisisId":"moon_unionizes_02"}"#);
    }
}
