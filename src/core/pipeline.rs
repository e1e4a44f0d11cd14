//! The content pipeline: Theme → Cards → Leaders → Crises → Factions → files.
//!
//! Each stage owns the random stream and hands it to the next, so the
//! category order (and with it the draw order) is fixed by the types.
//! Generation is pure; persistence happens only in `run`.

use log::info;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::cards::{generate_cards, CardDeck, GenerationError};
use crate::core::cleanup::{clean_all, CleanupError};
use crate::core::crises::generate_crises;
use crate::core::factions::generate_factions;
use crate::core::leaders::generate_leaders;
use crate::core::sequence::{ContentRng, DEFAULT_SEED};
use crate::core::theme::{load_theme, ThemeError};
use crate::core::writer::{CategoryReport, ContentWriter, WriterError};
use crate::schema::card::Card;
use crate::schema::crisis::Crisis;
use crate::schema::faction::Faction;
use crate::schema::leader::Leader;
use crate::schema::theme::Theme;

/// Default root for per-entity authoring files.
pub const DEFAULT_AUTHORING_ROOT: &str = "data";
/// Default root for the aggregate documents the game engine imports.
pub const DEFAULT_AGGREGATE_ROOT: &str = "unity/Assets/Game/Data";

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("theme error: {0}")]
    Theme(#[from] ThemeError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("cleanup error: {0}")]
    Cleanup(#[from] CleanupError),
    #[error("writer error: {0}")]
    Writer(#[from] WriterError),
}

/// Entry point of the staged pipeline.
pub struct ContentPipeline<'t> {
    theme: &'t Theme,
    rng: ContentRng,
}

/// Cards generated; leaders come next.
pub struct CardStage<'t> {
    theme: &'t Theme,
    rng: ContentRng,
    deck: CardDeck,
}

/// Leaders generated; crises come next.
pub struct LeaderStage<'t> {
    theme: &'t Theme,
    rng: ContentRng,
    deck: CardDeck,
    leaders: Vec<Leader>,
}

/// Crises generated; factions come next.
pub struct CrisisStage<'t> {
    theme: &'t Theme,
    rng: ContentRng,
    deck: CardDeck,
    leaders: Vec<Leader>,
    crises: Vec<Crisis>,
}

/// A complete, in-memory generation result.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentPack {
    pub seed: u64,
    pub cards: Vec<Card>,
    pub leaders: Vec<Leader>,
    pub crises: Vec<Crisis>,
    pub factions: Vec<Faction>,
    /// Random draws consumed across all stages.
    pub draws: u64,
}

impl<'t> ContentPipeline<'t> {
    pub fn new(theme: &'t Theme, seed: u64) -> Self {
        Self {
            theme,
            rng: ContentRng::new(seed),
        }
    }

    pub fn cards(mut self) -> Result<CardStage<'t>, GenerationError> {
        let deck = generate_cards(self.theme, &mut self.rng)?;
        Ok(CardStage {
            theme: self.theme,
            rng: self.rng,
            deck,
        })
    }
}

impl<'t> CardStage<'t> {
    pub fn deck(&self) -> &CardDeck {
        &self.deck
    }

    pub fn leaders(mut self) -> LeaderStage<'t> {
        let leaders = generate_leaders(self.theme, &self.deck, &mut self.rng);
        LeaderStage {
            theme: self.theme,
            rng: self.rng,
            deck: self.deck,
            leaders,
        }
    }
}

impl<'t> LeaderStage<'t> {
    pub fn crises(mut self) -> CrisisStage<'t> {
        let crises = generate_crises(self.theme, &self.deck, &mut self.rng);
        CrisisStage {
            theme: self.theme,
            rng: self.rng,
            deck: self.deck,
            leaders: self.leaders,
            crises,
        }
    }
}

impl<'t> CrisisStage<'t> {
    pub fn factions(mut self) -> ContentPack {
        let factions = generate_factions(self.theme, &self.deck, &mut self.rng);
        ContentPack {
            seed: self.rng.seed(),
            draws: self.rng.draws(),
            cards: self.deck.into_cards(),
            leaders: self.leaders,
            crises: self.crises,
            factions,
        }
    }
}

/// Generate a full content pack in memory.
pub fn generate(theme: &Theme, seed: u64) -> Result<ContentPack, GenerationError> {
    Ok(ContentPipeline::new(theme, seed)
        .cards()?
        .leaders()
        .crises()
        .factions())
}

/// Settings for a full generate-and-write run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Descriptor to load. `None` means the built-in theme.
    pub theme_path: Option<PathBuf>,
    pub seed: u64,
    pub authoring_root: PathBuf,
    pub aggregate_root: PathBuf,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            theme_path: None,
            seed: DEFAULT_SEED,
            authoring_root: PathBuf::from(DEFAULT_AUTHORING_ROOT),
            aggregate_root: PathBuf::from(DEFAULT_AGGREGATE_ROOT),
        }
    }
}

/// Outcome of `run`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub seed: u64,
    pub cards: usize,
    pub leaders: usize,
    pub crises: usize,
    pub factions: usize,
    pub files_removed: usize,
    pub files_written: usize,
    pub reports: Vec<CategoryReport>,
}

/// Write every category of `pack` in generation order.
pub fn write_pack(
    writer: &ContentWriter,
    pack: &ContentPack,
) -> Result<Vec<CategoryReport>, WriterError> {
    Ok(vec![
        writer.write_category(&pack.cards)?,
        writer.write_category(&pack.leaders)?,
        writer.write_category(&pack.crises)?,
        writer.write_category(&pack.factions)?,
    ])
}

/// Load the theme, remove stale authoring files, generate, and write both
/// formats. Any failure aborts the run; nothing is rolled back.
pub fn run(options: &RunOptions) -> Result<RunSummary, PipelineError> {
    let theme = load_theme(options.theme_path.as_deref())?;
    let files_removed = clean_all(&options.authoring_root)?;

    info!("generating content with seed {}", options.seed);
    let pack = generate(&theme, options.seed)?;

    let writer = ContentWriter::new(&options.authoring_root, &options.aggregate_root);
    let reports = write_pack(&writer, &pack)?;
    let files_written = reports
        .iter()
        .map(|r| r.authoring_files.len() + 1)
        .sum();

    info!(
        "content pack complete: {} draws, {} files written",
        pack.draws, files_written
    );

    Ok(RunSummary {
        seed: options.seed,
        cards: pack.cards.len(),
        leaders: pack.leaders.len(),
        crises: pack.crises.len(),
        factions: pack.factions.len(),
        files_removed,
        files_written,
        reports,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_run_in_order() {
        let theme = Theme::default();
        let cards = ContentPipeline::new(&theme, 42).cards().unwrap();
        assert_eq!(cards.deck().len(), 20);
        let pack = cards.leaders().crises().factions();
        assert_eq!(pack.leaders.len(), 4);
        assert_eq!(pack.crises.len(), 10);
        assert_eq!(pack.factions.len(), 4);
        assert_eq!(pack.seed, 42);
        assert!(pack.draws > 0);
    }

    #[test]
    fn generate_is_deterministic() {
        let theme = Theme::default();
        assert_eq!(generate(&theme, 42).unwrap(), generate(&theme, 42).unwrap());
    }

    #[test]
    fn seed_changes_output() {
        let theme = Theme::default();
        let a = generate(&theme, 1).unwrap();
        let b = generate(&theme, 2).unwrap();
        assert_ne!(a.cards, b.cards);
    }

    #[test]
    fn default_options() {
        let options = RunOptions::default();
        assert_eq!(options.seed, 42);
        assert_eq!(options.authoring_root, PathBuf::from("data"));
        assert_eq!(options.aggregate_root, PathBuf::from("unity/Assets/Game/Data"));
        assert!(options.theme_path.is_none());
    }

    #[test]
    fn run_writes_into_given_roots() {
        let tmp = tempfile::tempdir().unwrap();
        let options = RunOptions {
            authoring_root: tmp.path().join("data"),
            aggregate_root: tmp.path().join("game"),
            ..RunOptions::default()
        };
        let summary = run(&options).unwrap();
        assert_eq!(summary.cards, 20);
        assert_eq!(summary.files_removed, 0);
        assert_eq!(summary.files_written, 20 + 4 + 10 + 4 + 4);
        assert!(tmp.path().join("game/crises.json").is_file());
        assert!(tmp.path().join("data/leaders/leader_004.yaml").is_file());
    }
}
