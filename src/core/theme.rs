//! Theme loading: resolves a `Theme` from an optional descriptor file.
//!
//! The descriptor may be JSON, YAML, or RON (picked by extension). Every
//! field is optional; a missing or malformed field falls back to its own
//! default and is reported with `log::warn!`. Only an unreadable file or a
//! document that does not parse at all is an error.

use log::{info, warn};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::schema::theme::{ArtDirection, AudioDirection, ContentCounts, Theme, ThemeTags};

/// Conventional descriptor location, relative to the working directory.
pub const DEFAULT_THEME_PATH: &str = "config/theme.yaml";

/// Upper bound for leader, crisis and faction counts. Card counts are
/// bounded by the name grammar instead.
pub const MAX_COUNT: usize = 1000;

const ROOT_KEYS: &[&str] = &[
    "content_counts",
    "themes",
    "art_direction",
    "audio_direction",
    "tone",
];
const COUNT_KEYS: &[&str] = &["cards", "leaders", "crises", "factions"];
const THEME_KEYS: &[&str] = &["primary", "secondary", "satire_level"];
const ART_KEYS: &[&str] = &["cards", "leaders", "crises", "factions", "palette"];
const AUDIO_KEYS: &[&str] = &["music", "sfx", "voice"];

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme descriptor {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {format} theme descriptor {origin}: {message}")]
    Parse {
        origin: String,
        format: &'static str,
        message: String,
    },
}

/// Document syntax of a theme descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorFormat {
    Json,
    Yaml,
    Ron,
}

impl DescriptorFormat {
    /// `.yaml`/`.yml` → YAML, `.ron` → RON, anything else → JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            Some("ron") => Self::Ron,
            _ => Self::Json,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
            Self::Ron => "RON",
        }
    }

    fn parse(&self, input: &str) -> Result<Value, String> {
        match self {
            Self::Json => serde_json::from_str(input).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(input).map_err(|e| e.to_string()),
            Self::Ron => ron::from_str::<ron::Value>(input)
                .map(ron_to_document)
                .map_err(|e| e.to_string()),
        }
    }
}

/// Struct syntax `(cards: 6)` arrives as a map keyed by field name, so
/// RON descriptors share the JSON/YAML document model.
fn ron_to_document(value: ron::Value) -> Value {
    match value {
        ron::Value::Bool(b) => Value::Bool(b),
        ron::Value::Char(c) => Value::String(c.to_string()),
        ron::Value::String(s) => Value::String(s),
        ron::Value::Number(ron::Number::Integer(n)) => Value::from(n),
        ron::Value::Number(ron::Number::Float(f)) => serde_json::Number::from_f64(f.get())
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ron::Value::Option(Some(inner)) => ron_to_document(*inner),
        ron::Value::Option(None) | ron::Value::Unit => Value::Null,
        ron::Value::Seq(items) => Value::Array(items.into_iter().map(ron_to_document).collect()),
        ron::Value::Map(map) => {
            let mut out = Map::new();
            for (key, value) in map {
                let key = match key {
                    ron::Value::String(s) => s,
                    other => ron_to_document(other).to_string(),
                };
                out.insert(key, ron_to_document(value));
            }
            Value::Object(out)
        }
    }
}

/// Pick the descriptor to load: an explicit path always wins, otherwise
/// `fallback` is used if it exists.
pub fn resolve_theme_path(explicit: Option<&Path>, fallback: &Path) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None if fallback.is_file() => Some(fallback.to_path_buf()),
        None => None,
    }
}

/// Load a theme. `None` or a path that does not exist yields the built-in
/// theme unchanged.
pub fn load_theme(path: Option<&Path>) -> Result<Theme, ThemeError> {
    let Some(path) = path else {
        info!("no theme descriptor given, using built-in theme");
        return Ok(Theme::default());
    };
    if !path.exists() {
        warn!(
            "theme descriptor {} not found, using built-in theme",
            path.display()
        );
        return Ok(Theme::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format = DescriptorFormat::from_path(path);
    let doc = format.parse(&contents).map_err(|message| ThemeError::Parse {
        origin: path.display().to_string(),
        format: format.name(),
        message,
    })?;

    info!("loaded {} theme descriptor {}", format.name(), path.display());
    Ok(theme_from_document(&doc))
}

/// Parse a descriptor held in memory.
pub fn parse_theme(input: &str, format: DescriptorFormat) -> Result<Theme, ThemeError> {
    let doc = format.parse(input).map_err(|message| ThemeError::Parse {
        origin: "<inline>".to_string(),
        format: format.name(),
        message,
    })?;
    Ok(theme_from_document(&doc))
}

/// Build a theme from an already-parsed document, field by field.
pub fn theme_from_document(doc: &Value) -> Theme {
    let defaults = Theme::default();
    let Some(root) = doc.as_object() else {
        warn!(
            "theme descriptor is {} rather than a table, using built-in theme",
            kind(doc)
        );
        return defaults;
    };
    warn_unknown("theme", root, ROOT_KEYS);

    let top = Section {
        name: "theme",
        fields: Some(root),
    };
    let counts = Section::of(root, "content_counts", COUNT_KEYS);
    let themes = Section::of(root, "themes", THEME_KEYS);
    let art = Section::of(root, "art_direction", ART_KEYS);
    let audio = Section::of(root, "audio_direction", AUDIO_KEYS);

    let d = &defaults;
    Theme {
        content_counts: ContentCounts {
            cards: counts.count("cards", d.content_counts.cards, None),
            leaders: counts.count("leaders", d.content_counts.leaders, Some(MAX_COUNT)),
            crises: counts.count("crises", d.content_counts.crises, Some(MAX_COUNT)),
            factions: counts.count("factions", d.content_counts.factions, Some(MAX_COUNT)),
        },
        themes: ThemeTags {
            primary: themes.text("primary", &d.themes.primary),
            secondary: themes.text_list("secondary", &d.themes.secondary),
            satire_level: themes.level("satire_level", d.themes.satire_level),
        },
        art_direction: ArtDirection {
            cards: art.text("cards", &d.art_direction.cards),
            leaders: art.text("leaders", &d.art_direction.leaders),
            crises: art.text("crises", &d.art_direction.crises),
            factions: art.text("factions", &d.art_direction.factions),
            palette: art.palette("palette", &d.art_direction.palette),
        },
        audio_direction: AudioDirection {
            music: audio.text("music", &d.audio_direction.music),
            sfx: audio.text("sfx", &d.audio_direction.sfx),
            voice: audio.text("voice", &d.audio_direction.voice),
        },
        tone: top.text("tone", &d.tone),
    }
}

/// One table of the descriptor. Absent or malformed tables behave as empty.
struct Section<'a> {
    name: &'static str,
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> Section<'a> {
    fn of(root: &'a Map<String, Value>, name: &'static str, known: &[&str]) -> Self {
        let fields = match root.get(name) {
            None => None,
            Some(Value::Object(map)) => {
                warn_unknown(name, map, known);
                Some(map)
            }
            Some(other) => {
                warn!(
                    "theme: '{}' should be a table, got {}; using defaults",
                    name,
                    kind(other)
                );
                None
            }
        };
        Self { name, fields }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields?.get(key)
    }

    fn malformed(&self, key: &str, value: &Value) {
        warn!(
            "theme: {}.{} is malformed ({}), using default",
            self.name,
            key,
            kind(value)
        );
    }

    fn count(&self, key: &str, default: usize, limit: Option<usize>) -> usize {
        let Some(value) = self.get(key) else {
            return default;
        };
        match value.as_u64() {
            Some(n) => {
                let n = usize::try_from(n).unwrap_or(usize::MAX);
                match limit {
                    Some(max) if n > max => {
                        warn!(
                            "theme: {}.{} = {} exceeds {}, clamping",
                            self.name, key, n, max
                        );
                        max
                    }
                    _ => n,
                }
            }
            None => {
                self.malformed(key, value);
                default
            }
        }
    }

    fn text(&self, key: &str, default: &str) -> String {
        let Some(value) = self.get(key) else {
            return default.to_string();
        };
        match value.as_str().map(str::trim) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => {
                self.malformed(key, value);
                default.to_string()
            }
        }
    }

    fn text_list(&self, key: &str, default: &[String]) -> Vec<String> {
        let Some(value) = self.get(key) else {
            return default.to_vec();
        };
        let Some(items) = value.as_array() else {
            self.malformed(key, value);
            return default.to_vec();
        };
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            match item.as_str().map(str::trim) {
                Some(s) if !s.is_empty() => out.push(s.to_string()),
                _ => warn!(
                    "theme: dropping non-string entry ({}) from {}.{}",
                    kind(item),
                    self.name,
                    key
                ),
            }
        }
        out
    }

    fn level(&self, key: &str, default: u8) -> u8 {
        let Some(value) = self.get(key) else {
            return default;
        };
        match value.as_i64() {
            Some(n) => {
                let clamped = n.clamp(1, 10);
                if clamped != n {
                    warn!(
                        "theme: {}.{} = {} is outside 1..=10, clamping",
                        self.name, key, n
                    );
                }
                clamped as u8
            }
            None => {
                self.malformed(key, value);
                default
            }
        }
    }

    fn palette(&self, key: &str, default: &[String]) -> Vec<String> {
        let Some(value) = self.get(key) else {
            return default.to_vec();
        };
        // Any non-empty string is a color; hex and named colors both pass.
        let colors = self.text_list(key, &[]);
        if colors.is_empty() {
            self.malformed(key, value);
            return default.to_vec();
        }
        colors
    }
}

fn warn_unknown(section: &str, map: &Map<String, Value>, known: &[&str]) {
    for key in map.keys() {
        if !known.contains(&key.as_str()) {
            warn!("theme: ignoring unknown key '{}' in {}", key, section);
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a table",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_path_gives_defaults() {
        assert_eq!(load_theme(None).unwrap(), Theme::default());
        let theme = load_theme(Some(Path::new("does/not/exist.yaml"))).unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let theme = parse_theme(
            r#"{ "content_counts": { "cards": 7 }, "tone": "deadpan" }"#,
            DescriptorFormat::Json,
        )
        .unwrap();
        assert_eq!(theme.content_counts.cards, 7);
        assert_eq!(theme.content_counts.leaders, 4);
        assert_eq!(theme.tone, "deadpan");
        assert_eq!(theme.art_direction, ArtDirection::default());
    }

    #[test]
    fn malformed_fields_fall_back_individually() {
        let theme = parse_theme(
            r#"{
                "content_counts": { "cards": "many", "leaders": -2, "crises": 3 },
                "themes": { "primary": 12, "secondary": ["memes", 4, ""], "satire_level": "high" },
                "art_direction": "bold",
                "tone": ""
            }"#,
            DescriptorFormat::Json,
        )
        .unwrap();
        let d = Theme::default();
        assert_eq!(theme.content_counts.cards, d.content_counts.cards);
        assert_eq!(theme.content_counts.leaders, d.content_counts.leaders);
        assert_eq!(theme.content_counts.crises, 3);
        assert_eq!(theme.themes.primary, d.themes.primary);
        assert_eq!(theme.themes.secondary, vec!["memes".to_string()]);
        assert_eq!(theme.themes.satire_level, d.themes.satire_level);
        assert_eq!(theme.art_direction, d.art_direction);
        assert_eq!(theme.tone, d.tone);
    }

    #[test]
    fn dependent_counts_are_clamped() {
        let theme = parse_theme(
            r#"{ "content_counts": { "leaders": 5000, "crises": 999999, "factions": 1001 } }"#,
            DescriptorFormat::Json,
        )
        .unwrap();
        assert_eq!(theme.content_counts.leaders, MAX_COUNT);
        assert_eq!(theme.content_counts.crises, MAX_COUNT);
        assert_eq!(theme.content_counts.factions, MAX_COUNT);
    }

    #[test]
    fn card_count_is_kept_as_requested() {
        let theme = parse_theme(
            r#"{ "content_counts": { "cards": 5000 } }"#,
            DescriptorFormat::Json,
        )
        .unwrap();
        assert_eq!(theme.content_counts.cards, 5000);
    }

    #[test]
    fn satire_level_is_clamped() {
        let theme =
            parse_theme(r#"{ "themes": { "satire_level": 42 } }"#, DescriptorFormat::Json).unwrap();
        assert_eq!(theme.themes.satire_level, 10);
    }

    #[test]
    fn unknown_keys_are_dropped() {
        let theme = parse_theme(
            r#"{ "soundtrack": "kazoo", "content_counts": { "mascots": 3 } }"#,
            DescriptorFormat::Json,
        )
        .unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn palette_keeps_hex_and_named_colors() {
        let theme = parse_theme(
            r##"{ "art_direction": { "palette": ["#112233", "red", 7, "", "#AABBCCDD"] } }"##,
            DescriptorFormat::Json,
        )
        .unwrap();
        assert_eq!(
            theme.art_direction.palette,
            vec!["#112233".to_string(), "red".to_string(), "#AABBCCDD".to_string()]
        );
    }

    #[test]
    fn palette_with_no_usable_colors_uses_default() {
        let theme = parse_theme(
            r#"{ "art_direction": { "palette": [1, "", null] } }"#,
            DescriptorFormat::Json,
        )
        .unwrap();
        assert_eq!(theme.art_direction.palette, ArtDirection::default().palette);
    }

    #[test]
    fn yaml_descriptor() {
        let theme = parse_theme(
            "content_counts:\n  factions: 6\naudio_direction:\n  voice: town_crier\n",
            DescriptorFormat::Yaml,
        )
        .unwrap();
        assert_eq!(theme.content_counts.factions, 6);
        assert_eq!(theme.audio_direction.voice, "town_crier");
        assert_eq!(theme.audio_direction.music, "brass_parody_march");
    }

    #[test]
    fn ron_struct_syntax() {
        let theme = parse_theme(
            r##"(
                content_counts: (cards: 6, factions: 2),
                themes: (secondary: ["memos"], satire_level: 3),
                art_direction: (palette: ["#101010", "teal"]),
                tone: "grim",
            )"##,
            DescriptorFormat::Ron,
        )
        .unwrap();
        assert_eq!(theme.content_counts.cards, 6);
        assert_eq!(theme.content_counts.factions, 2);
        assert_eq!(theme.content_counts.leaders, 4);
        assert_eq!(theme.themes.secondary, vec!["memos".to_string()]);
        assert_eq!(theme.themes.satire_level, 3);
        assert_eq!(theme.art_direction.palette, vec!["#101010", "teal"]);
        assert_eq!(theme.tone, "grim");
    }

    #[test]
    fn named_ron_struct() {
        let theme = parse_theme("Theme(tone: \"dry\")", DescriptorFormat::Ron).unwrap();
        assert_eq!(theme.tone, "dry");
    }

    #[test]
    fn ron_descriptor() {
        let theme = parse_theme(
            r#"{ "content_counts": { "crises": 2 }, "tone": "grim" }"#,
            DescriptorFormat::Ron,
        )
        .unwrap();
        assert_eq!(theme.content_counts.crises, 2);
        assert_eq!(theme.tone, "grim");
    }

    #[test]
    fn non_table_document_gives_defaults() {
        let theme = parse_theme("[1, 2, 3]", DescriptorFormat::Json).unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = load_theme(Some(file.path())).unwrap_err();
        assert!(matches!(err, ThemeError::Parse { format: "JSON", .. }));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(DescriptorFormat::from_path(Path::new("t.yml")), DescriptorFormat::Yaml);
        assert_eq!(DescriptorFormat::from_path(Path::new("t.YAML")), DescriptorFormat::Yaml);
        assert_eq!(DescriptorFormat::from_path(Path::new("t.ron")), DescriptorFormat::Ron);
        assert_eq!(DescriptorFormat::from_path(Path::new("t.json")), DescriptorFormat::Json);
        assert_eq!(DescriptorFormat::from_path(Path::new("theme")), DescriptorFormat::Json);
    }

    #[test]
    fn explicit_path_wins_over_fallback() {
        let resolved = resolve_theme_path(Some(Path::new("a.json")), Path::new("Cargo.toml"));
        assert_eq!(resolved, Some(PathBuf::from("a.json")));
        let resolved = resolve_theme_path(None, Path::new("no/such/theme.yaml"));
        assert_eq!(resolved, None);
    }
}
