//! Theme: the configuration that controls counts, tone, and style of a
//! generation run. Immutable once loaded; see `core::theme` for loading.

use serde::{Deserialize, Serialize};

/// How many entities of each category to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCounts {
    pub cards: usize,
    pub leaders: usize,
    pub crises: usize,
    pub factions: usize,
}

impl Default for ContentCounts {
    fn default() -> Self {
        Self {
            cards: 20,
            leaders: 4,
            crises: 10,
            factions: 4,
        }
    }
}

/// Thematic tags mixed into card tag pools and crisis tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeTags {
    pub primary: String,
    pub secondary: Vec<String>,
    /// 1 (gentle ribbing) ..= 10 (full farce).
    pub satire_level: u8,
}

impl Default for ThemeTags {
    fn default() -> Self {
        Self {
            primary: "political_chaos".to_string(),
            secondary: vec![
                "bureaucracy".to_string(),
                "media_frenzy".to_string(),
                "economic_absurdity".to_string(),
            ],
            satire_level: 8,
        }
    }
}

/// Art style names per category plus the shared color palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtDirection {
    pub cards: String,
    pub leaders: String,
    pub crises: String,
    pub factions: String,
    /// Ordered `#RRGGBB` / `#RRGGBBAA` colors. Never empty.
    pub palette: Vec<String>,
}

impl Default for ArtDirection {
    fn default() -> Self {
        Self {
            cards: "satirical_poster_v1".to_string(),
            leaders: "professional_portrait".to_string(),
            crises: "breaking_news_v1".to_string(),
            factions: "propaganda_emblem".to_string(),
            palette: vec![
                "#4E9F3D".to_string(),
                "#E84545".to_string(),
                "#1E3A8A".to_string(),
                "#F59E0B".to_string(),
                "#6B21A8".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioDirection {
    pub music: String,
    pub sfx: String,
    pub voice: String,
}

impl Default for AudioDirection {
    fn default() -> Self {
        Self {
            music: "brass_parody_march".to_string(),
            sfx: "cartoon_bureaucracy".to_string(),
            voice: "news_anchor".to_string(),
        }
    }
}

/// A complete theme. `Theme::default()` is the built-in theme used when
/// no descriptor is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub content_counts: ContentCounts,
    pub themes: ThemeTags,
    pub art_direction: ArtDirection,
    pub audio_direction: AudioDirection,
    pub tone: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            content_counts: ContentCounts::default(),
            themes: ThemeTags::default(),
            art_direction: ArtDirection::default(),
            audio_direction: AudioDirection::default(),
            tone: "satirical".to_string(),
        }
    }
}

impl Theme {
    /// Palette color for the `index`th entity, cycling through the palette.
    pub fn palette_color(&self, index: usize) -> &str {
        let palette = &self.art_direction.palette;
        if palette.is_empty() {
            return "#FFFFFF";
        }
        &palette[index % palette.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_counts() {
        let theme = Theme::default();
        assert_eq!(theme.content_counts.cards, 20);
        assert_eq!(theme.content_counts.leaders, 4);
        assert_eq!(theme.content_counts.crises, 10);
        assert_eq!(theme.content_counts.factions, 4);
    }

    #[test]
    fn default_is_pure() {
        assert_eq!(Theme::default(), Theme::default());
    }

    #[test]
    fn palette_color_cycles() {
        let theme = Theme::default();
        assert_eq!(theme.palette_color(0), "#4E9F3D");
        assert_eq!(theme.palette_color(5), "#4E9F3D");
        assert_eq!(theme.palette_color(7), "#1E3A8A");
    }
}
