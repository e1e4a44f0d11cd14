//! Consistency checks over a generated content pack.
//!
//! Operates on the lean aggregate records so the same checks run against
//! freshly generated content and against files already on disk.

use rustc_hash::FxHashSet;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::schema::card::CardRecord;
use crate::schema::category::Category;
use crate::schema::crisis::CrisisRecord;
use crate::schema::faction::FactionRecord;
use crate::schema::leader::LeaderRecord;

#[derive(Debug, Error)]
pub enum LintError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Findings of a lint pass. Errors break referential integrity; warnings
/// are worth a look but leave the pack usable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// The four aggregate documents, deserialized.
#[derive(Debug, Clone, Default)]
pub struct LoadedPack {
    pub cards: Vec<CardRecord>,
    pub leaders: Vec<LeaderRecord>,
    pub crises: Vec<CrisisRecord>,
    pub factions: Vec<FactionRecord>,
}

pub fn lint_pack(
    cards: &[CardRecord],
    leaders: &[LeaderRecord],
    crises: &[CrisisRecord],
    factions: &[FactionRecord],
) -> LintReport {
    let mut report = LintReport::default();

    let card_ids = unique_ids(Category::Cards, cards.iter().map(|c| c.id.as_str()), &mut report);
    unique_ids(Category::Leaders, leaders.iter().map(|l| l.id.as_str()), &mut report);
    let crisis_ids = unique_ids(Category::Crises, crises.iter().map(|c| c.id.as_str()), &mut report);
    unique_ids(Category::Factions, factions.iter().map(|f| f.id.as_str()), &mut report);

    for (category, len) in [
        (Category::Cards, cards.len()),
        (Category::Leaders, leaders.len()),
        (Category::Crises, crises.len()),
        (Category::Factions, factions.len()),
    ] {
        if len == 0 {
            report.warnings.push(format!("No {} in pack", category));
        }
    }

    for card in cards {
        if card.effects.is_empty() {
            report
                .warnings
                .push(format!("Card '{}' has no effects", card.id));
        }
    }

    for leader in leaders {
        for id in &leader.starting_deck {
            if !card_ids.contains(id.as_str()) {
                report.errors.push(format!(
                    "Leader '{}' starting deck references unknown card '{}'",
                    leader.id, id
                ));
            }
        }
    }

    for faction in factions {
        for id in &faction.unlockable_cards {
            if !card_ids.contains(id.as_str()) {
                report.errors.push(format!(
                    "Faction '{}' unlocks unknown card '{}'",
                    faction.id, id
                ));
            }
        }
    }

    for crisis in crises {
        for response in &crisis.responses {
            if let Some(id) = &response.source_card_id {
                if !card_ids.contains(id.as_str()) {
                    report.errors.push(format!(
                        "Crisis '{}' response '{}' borrows from unknown card '{}'",
                        crisis.id, response.label, id
                    ));
                }
            }
        }
        for event in &crisis.chain_events {
            if !crisis_ids.contains(event.crisis_id.as_str()) {
                report.errors.push(format!(
                    "Crisis '{}' chains to unknown crisis '{}'",
                    crisis.id, event.crisis_id
                ));
            }
        }
    }

    check_chain(crises, &mut report);
    report
}

/// Crises must form one forward path in list order: each links to the
/// next, the last links nowhere.
fn check_chain(crises: &[CrisisRecord], report: &mut LintReport) {
    for (i, crisis) in crises.iter().enumerate() {
        let expected = crises.get(i + 1).map(|next| next.id.as_str());
        let actual: Vec<&str> = crisis
            .chain_events
            .iter()
            .map(|e| e.crisis_id.as_str())
            .collect();
        let ok = match expected {
            Some(next) => actual == [next],
            None => actual.is_empty(),
        };
        if !ok {
            report.errors.push(format!(
                "Crisis '{}' breaks the chain: expected {:?}, found {:?}",
                crisis.id, expected, actual
            ));
        }
    }
}

fn unique_ids<'a>(
    category: Category,
    ids: impl Iterator<Item = &'a str>,
    report: &mut LintReport,
) -> FxHashSet<&'a str> {
    let mut seen = FxHashSet::default();
    for id in ids {
        if !seen.insert(id) {
            report
                .errors
                .push(format!("Duplicate {} id '{}'", category.prefix(), id));
        }
    }
    seen
}

/// Read `<dir>/{cards,leaders,crises,factions}.json`.
pub fn load_directory(dir: &Path) -> Result<LoadedPack, LintError> {
    Ok(LoadedPack {
        cards: load_category(dir, Category::Cards)?,
        leaders: load_category(dir, Category::Leaders)?,
        crises: load_category(dir, Category::Crises)?,
        factions: load_category(dir, Category::Factions)?,
    })
}

pub fn lint_directory(dir: &Path) -> Result<LintReport, LintError> {
    let pack = load_directory(dir)?;
    Ok(lint_pack(&pack.cards, &pack.leaders, &pack.crises, &pack.factions))
}

fn load_category<T: DeserializeOwned>(dir: &Path, category: Category) -> Result<Vec<T>, LintError> {
    let path = dir.join(format!("{}.json", category.plural()));
    let text = std::fs::read_to_string(&path).map_err(|source| LintError::Io {
        path: path.clone(),
        source,
    })?;
    let mut doc: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&text).map_err(|source| LintError::Parse {
            path: path.clone(),
            source,
        })?;
    let list = doc
        .remove(category.plural())
        .unwrap_or(serde_json::Value::Array(Vec::new()));
    serde_json::from_value(list).map_err(|source| LintError::Parse { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pipeline::generate;
    use crate::schema::crisis::ChainEvent;
    use crate::schema::theme::Theme;

    fn records() -> LoadedPack {
        let pack = generate(&Theme::default(), 42).unwrap();
        LoadedPack {
            cards: pack.cards.iter().map(|c| c.record()).collect(),
            leaders: pack.leaders.iter().map(|l| l.record()).collect(),
            crises: pack.crises.iter().map(|c| c.record()).collect(),
            factions: pack.factions.iter().map(|f| f.record()).collect(),
        }
    }

    fn lint(pack: &LoadedPack) -> LintReport {
        lint_pack(&pack.cards, &pack.leaders, &pack.crises, &pack.factions)
    }

    #[test]
    fn generated_pack_is_clean() {
        let report = lint(&records());
        assert!(report.is_clean(), "{:?}", report.errors);
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    }

    #[test]
    fn dangling_deck_reference() {
        let mut pack = records();
        pack.leaders[0].starting_deck[0] = "card_missing".to_string();
        let report = lint(&pack);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("card_missing"));
    }

    #[test]
    fn duplicate_ids() {
        let mut pack = records();
        pack.factions[1].id = pack.factions[0].id.clone();
        let report = lint(&pack);
        assert!(report.errors.iter().any(|e| e.starts_with("Duplicate faction id")));
    }

    #[test]
    fn broken_chain() {
        let mut pack = records();
        let last = pack.crises.len() - 1;
        let first_id = pack.crises[0].id.clone();
        pack.crises[last]
            .chain_events
            .push(ChainEvent { crisis_id: first_id });
        let report = lint(&pack);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("breaks the chain"));
    }

    #[test]
    fn empty_pack_only_warns() {
        let report = lint_pack(&[], &[], &[], &[]);
        assert!(report.is_clean());
        assert_eq!(report.warnings.len(), 4);
    }
}
