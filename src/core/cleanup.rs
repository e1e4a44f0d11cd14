//! Removal of previously generated authoring files.
//!
//! Only files matching `<prefix>_<digits>.yaml` inside a category directory
//! are removed; hand-authored files next to them are left alone.

use log::{debug, info};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::schema::category::Category;

#[derive(Debug, Error)]
pub enum CleanupError {
    #[error("failed to clean {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Whether `file_name` follows the generated naming convention for
/// `category`.
pub fn is_generated_file(category: Category, file_name: &str) -> bool {
    let Some(rest) = file_name.strip_prefix(category.prefix()) else {
        return false;
    };
    let Some(rest) = rest.strip_prefix('_') else {
        return false;
    };
    let Some(digits) = rest.strip_suffix(".yaml") else {
        return false;
    };
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Delete generated files for one category. A missing directory counts as
/// already clean.
pub fn clean_category(authoring_root: &Path, category: Category) -> Result<usize, CleanupError> {
    let dir = authoring_root.join(category.plural());
    let entries = match std::fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(source) => return Err(CleanupError::Io { path: dir, source }),
    };

    let mut removed = 0;
    for entry in entries {
        let entry = entry.map_err(|source| CleanupError::Io {
            path: dir.clone(),
            source,
        })?;
        let path = entry.path();
        let is_match = path.is_file()
            && path
                .file_name()
                .and_then(|s| s.to_str())
                .is_some_and(|name| is_generated_file(category, name));
        if is_match {
            std::fs::remove_file(&path).map_err(|source| CleanupError::Io {
                path: path.clone(),
                source,
            })?;
            debug!("removed {}", path.display());
            removed += 1;
        }
    }

    info!("removed {} stale {} files", removed, category);
    Ok(removed)
}

/// Clean every category. Returns the total number of files removed.
pub fn clean_all(authoring_root: &Path) -> Result<usize, CleanupError> {
    let mut total = 0;
    for category in Category::ALL {
        total += clean_category(authoring_root, category)?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naming_convention() {
        assert!(is_generated_file(Category::Cards, "card_001.yaml"));
        assert!(is_generated_file(Category::Cards, "card_1000.yaml"));
        assert!(is_generated_file(Category::Crises, "crisis_7.yaml"));
        assert!(!is_generated_file(Category::Cards, "card_.yaml"));
        assert!(!is_generated_file(Category::Cards, "card_001.yml"));
        assert!(!is_generated_file(Category::Cards, "card_special.yaml"));
        assert!(!is_generated_file(Category::Cards, "leader_001.yaml"));
        assert!(!is_generated_file(Category::Cards, "cards_001.yaml"));
    }

    #[test]
    fn removes_only_generated_files() {
        let tmp = tempfile::tempdir().unwrap();
        let cards = tmp.path().join("cards");
        std::fs::create_dir_all(&cards).unwrap();
        std::fs::write(cards.join("card_001.yaml"), "id: a").unwrap();
        std::fs::write(cards.join("card_002.yaml"), "id: b").unwrap();
        std::fs::write(cards.join("hand_made.yaml"), "id: c").unwrap();

        assert_eq!(clean_category(tmp.path(), Category::Cards).unwrap(), 2);
        assert!(!cards.join("card_001.yaml").exists());
        assert!(cards.join("hand_made.yaml").exists());
    }

    #[test]
    fn missing_root_is_clean() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(clean_all(&tmp.path().join("nowhere")).unwrap(), 0);
    }
}
