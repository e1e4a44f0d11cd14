use serde::{Deserialize, Serialize};

/// The four generated content categories, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cards,
    Leaders,
    Crises,
    Factions,
}

impl Category {
    /// Generation order. Later categories reference ids from earlier ones.
    pub const ALL: [Category; 4] = [
        Category::Cards,
        Category::Leaders,
        Category::Crises,
        Category::Factions,
    ];

    /// Plural name, used as the authoring subdirectory, the aggregate file
    /// stem, and the aggregate document's top-level key.
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Cards => "cards",
            Self::Leaders => "leaders",
            Self::Crises => "crises",
            Self::Factions => "factions",
        }
    }

    /// File-name prefix for generated authoring files (`card_001.yaml`).
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Cards => "card",
            Self::Leaders => "leader",
            Self::Crises => "crisis",
            Self::Factions => "faction",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.plural())
    }
}
