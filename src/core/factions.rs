//! Faction generation.

use log::{debug, info};

use crate::core::cards::CardDeck;
use crate::core::sequence::ContentRng;
use crate::core::slug::slugify;
use crate::schema::effect::Stat;
use crate::schema::faction::{Faction, ReactionRule, ThresholdBonus};
use crate::schema::meta::GenerationMeta;
use crate::schema::theme::Theme;

/// Faction name and ideology tags, cycled by generation index.
const ARCHETYPES: &[(&str, &[&str])] = &[
    ("Bureaucrats", &["order", "economy"]),
    ("Meme Syndicate", &["memes", "chaos"]),
    ("Pigeon Liberation Front", &["nature", "absurd"]),
    ("Concerned Billionaires", &["economy", "greed"]),
    ("Union of Exhausted Interns", &["labor", "panic"]),
    ("Conspiracy Book Club", &["media", "paranoia"]),
    ("Ministry of Vibes", &["culture", "absurd"]),
    ("Artisanal Farmers Coalition", &["nature", "economy"]),
    ("Cable News Collective", &["media", "panic"]),
    ("Retired Generals Bridge Club", &["order", "nostalgia"]),
];

/// Unlockable cards per faction, when that many exist.
pub const UNLOCKABLE_CARDS: usize = 5;

/// Generate `theme.content_counts.factions` factions. Reaction tags and
/// unlockable cards come from `deck`.
pub fn generate_factions(theme: &Theme, deck: &CardDeck, rng: &mut ContentRng) -> Vec<Faction> {
    let count = theme.content_counts.factions;
    let mut factions = Vec::with_capacity(count);

    for index in 0..count {
        let faction = build_faction(theme, deck, rng, index);
        debug!(
            "faction {}: {} ({})",
            index + 1,
            faction.id,
            faction.color
        );
        factions.push(faction);
    }

    info!("generated {} factions", factions.len());
    factions
}

fn build_faction(theme: &Theme, deck: &CardDeck, rng: &mut ContentRng, index: usize) -> Faction {
    let (name, ideology) = ARCHETYPES[index % ARCHETYPES.len()];
    let id = format!("{}_{:02}", slugify(name), index + 1);
    let tags: Vec<String> = ideology.iter().map(|t| t.to_string()).collect();

    let base_influence = rng.range(20..=60) as u32;
    let volatility = f64::from(rng.range(10..=90)) / 100.0;

    let mut reactions = Vec::new();
    if let Some(card) = rng.choose(deck.cards()) {
        if let Some(tag) = rng.choose(&card.tags) {
            reactions.push(ReactionRule {
                tag: tag.clone(),
                influence_delta: rng.range(5..=15),
            });
        }
    }

    let threshold_bonuses = vec![ThresholdBonus {
        threshold: rng.range(60..=90) as u32,
        stat: Stat::Approval,
        multiplier: f64::from(rng.range(105..=130)) / 100.0,
    }];

    let unlockable_cards = rng.sample(deck.ids(), UNLOCKABLE_CARDS);
    let color = theme.palette_color(index).to_string();

    let description = format!(
        "The {} care about {} and little else. Influence starts at {}.",
        name,
        tags.join(" and "),
        base_influence
    );

    let meta = GenerationMeta {
        art_prompt: format!(
            "Emblem of the {}, {} tone, dominant color {}",
            name, theme.tone, color
        ),
        art_style: theme.art_direction.factions.clone(),
        sfx_key: format!("sfx_faction_{}", slugify(name)),
        vo_line: format!("The {} demand more {}!", name, tags[0]),
        voice_style: theme.audio_direction.voice.clone(),
        theme_music: Some(theme.audio_direction.music.clone()),
    };

    Faction {
        id,
        name: name.to_string(),
        description,
        color,
        tags,
        base_influence,
        volatility,
        reactions,
        threshold_bonuses,
        unlockable_cards,
        meta,
    }
}
