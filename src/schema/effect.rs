use serde::{Deserialize, Serialize};

/// A game stat that effects, thresholds, and bonuses act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Approval,
    Economy,
    Absurdity,
    Reputation,
    Panic,
}

impl Stat {
    pub const ALL: [Stat; 5] = [
        Stat::Approval,
        Stat::Economy,
        Stat::Absurdity,
        Stat::Reputation,
        Stat::Panic,
    ];
}

/// The fixed five-entry effect catalog. Serialized with the names the
/// game engine's importer expects (`ApprovalDelta`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectType {
    ApprovalDelta,
    EconomyDelta,
    AbsurdityDelta,
    ReputationDelta,
    PanicDelta,
}

impl EffectType {
    pub const ALL: [EffectType; 5] = [
        EffectType::ApprovalDelta,
        EffectType::EconomyDelta,
        EffectType::AbsurdityDelta,
        EffectType::ReputationDelta,
        EffectType::PanicDelta,
    ];

    /// The stat this effect modifies.
    pub fn stat(&self) -> Stat {
        match self {
            Self::ApprovalDelta => Stat::Approval,
            Self::EconomyDelta => Stat::Economy,
            Self::AbsurdityDelta => Stat::Absurdity,
            Self::ReputationDelta => Stat::Reputation,
            Self::PanicDelta => Stat::Panic,
        }
    }
}

/// A signed stat delta, optionally conditional on a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    #[serde(rename = "type")]
    pub effect_type: EffectType,
    pub value: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl Effect {
    pub fn new(effect_type: EffectType, value: i32) -> Self {
        Self {
            effect_type,
            value,
            with_tag: None,
            target: None,
        }
    }

    /// Make this effect conditional on `tag`, applied to the owning entity.
    pub fn conditional_on(mut self, tag: impl Into<String>) -> Self {
        self.with_tag = Some(tag.into());
        self.target = Some("self".to_string());
        self
    }
}
