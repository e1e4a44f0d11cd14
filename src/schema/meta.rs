use serde::{Deserialize, Serialize};

/// Prompts and keys consumed by the downstream art and audio generators.
///
/// Flattened into every authoring record, so the generators find
/// `artPrompt`, `sfxKey`, `voLine`, and friends at the top level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationMeta {
    pub art_prompt: String,
    pub art_style: String,
    pub sfx_key: String,
    pub vo_line: String,
    pub voice_style: String,
    #[serde(
        rename = "theme_music",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub theme_music: Option<String>,
}
