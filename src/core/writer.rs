//! Dual-format emission.
//!
//! Each entity gets one authoring file (YAML, full detail plus generation
//! prompts) under `<authoring_root>/<category>/<prefix>_<NNN>.yaml`. Each
//! category gets one aggregate JSON document under
//! `<aggregate_root>/<category>.json` of the form `{ "<category>": [...] }`
//! holding the lean records in generation order.

use log::{debug, info};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::schema::card::{Card, CardRecord};
use crate::schema::category::Category;
use crate::schema::crisis::{Crisis, CrisisRecord};
use crate::schema::faction::{Faction, FactionRecord};
use crate::schema::leader::{Leader, LeaderRecord};

#[derive(Debug, Error)]
pub enum WriterError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// An entity that can be written in both formats.
pub trait ContentEntity: Serialize {
    const CATEGORY: Category;
    type Record: Serialize;

    fn id(&self) -> &str;
    fn record(&self) -> Self::Record;
}

impl ContentEntity for Card {
    const CATEGORY: Category = Category::Cards;
    type Record = CardRecord;

    fn id(&self) -> &str {
        &self.id
    }

    fn record(&self) -> CardRecord {
        Card::record(self)
    }
}

impl ContentEntity for Leader {
    const CATEGORY: Category = Category::Leaders;
    type Record = LeaderRecord;

    fn id(&self) -> &str {
        &self.id
    }

    fn record(&self) -> LeaderRecord {
        Leader::record(self)
    }
}

impl ContentEntity for Crisis {
    const CATEGORY: Category = Category::Crises;
    type Record = CrisisRecord;

    fn id(&self) -> &str {
        &self.id
    }

    fn record(&self) -> CrisisRecord {
        Crisis::record(self)
    }
}

impl ContentEntity for Faction {
    const CATEGORY: Category = Category::Factions;
    type Record = FactionRecord;

    fn id(&self) -> &str {
        &self.id
    }

    fn record(&self) -> FactionRecord {
        Faction::record(self)
    }
}

/// What was written for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    pub category: Category,
    pub authoring_files: Vec<PathBuf>,
    pub aggregate_file: PathBuf,
}

/// Writes authoring files and aggregate documents under two roots.
#[derive(Debug, Clone)]
pub struct ContentWriter {
    authoring_root: PathBuf,
    aggregate_root: PathBuf,
}

impl ContentWriter {
    pub fn new(authoring_root: impl Into<PathBuf>, aggregate_root: impl Into<PathBuf>) -> Self {
        Self {
            authoring_root: authoring_root.into(),
            aggregate_root: aggregate_root.into(),
        }
    }

    pub fn authoring_root(&self) -> &Path {
        &self.authoring_root
    }

    pub fn aggregate_root(&self) -> &Path {
        &self.aggregate_root
    }

    /// Path of the authoring file for the `index`th (zero-based) entity.
    pub fn authoring_path(&self, category: Category, index: usize) -> PathBuf {
        self.authoring_root
            .join(category.plural())
            .join(authoring_file_name(category, index))
    }

    pub fn aggregate_path(&self, category: Category) -> PathBuf {
        self.aggregate_root
            .join(format!("{}.json", category.plural()))
    }

    /// Write every entity's authoring file, then the category aggregate.
    pub fn write_category<E: ContentEntity>(
        &self,
        entities: &[E],
    ) -> Result<CategoryReport, WriterError> {
        let category = E::CATEGORY;
        let dir = self.authoring_root.join(category.plural());
        create_dir(&dir)?;

        let mut records = Vec::with_capacity(entities.len());
        let mut authoring_files = Vec::with_capacity(entities.len());
        for (index, entity) in entities.iter().enumerate() {
            let path = self.authoring_path(category, index);
            let yaml = serde_yaml::to_string(entity)?;
            write_file(&path, yaml.as_bytes())?;
            debug!("wrote {} ({})", path.display(), entity.id());
            authoring_files.push(path);
            records.push(entity.record());
        }

        let mut doc = serde_json::Map::new();
        doc.insert(category.plural().to_string(), serde_json::to_value(&records)?);
        let mut json = serde_json::to_string_pretty(&serde_json::Value::Object(doc))?;
        json.push('\n');

        create_dir(&self.aggregate_root)?;
        let aggregate_file = self.aggregate_path(category);
        write_file(&aggregate_file, json.as_bytes())?;
        info!(
            "wrote {} {} to {}",
            records.len(),
            category,
            aggregate_file.display()
        );

        Ok(CategoryReport {
            category,
            authoring_files,
            aggregate_file,
        })
    }
}

/// `card_001.yaml`, `crisis_012.yaml`, ... (one-based, at least three digits).
pub fn authoring_file_name(category: Category, index: usize) -> String {
    format!("{}_{:03}.yaml", category.prefix(), index + 1)
}

fn create_dir(dir: &Path) -> Result<(), WriterError> {
    std::fs::create_dir_all(dir).map_err(|source| WriterError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), WriterError> {
    std::fs::write(path, contents).map_err(|source| WriterError::Io {
        path: path.to_path_buf(),
        source,
    })
}
