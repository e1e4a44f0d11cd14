//! Card generation: the base entity set every later category draws on.

use log::{debug, info};
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::core::sequence::ContentRng;
use crate::core::slug::slugify;
use crate::schema::card::{Card, Rarity, Synergy};
use crate::schema::effect::{Effect, EffectType};
use crate::schema::meta::GenerationMeta;
use crate::schema::theme::Theme;

const VERBS: &[&str] = &[
    "Ban",
    "Tax",
    "Privatize",
    "Subsidize",
    "Nationalize",
    "Outlaw",
    "Mandate",
    "Rebrand",
    "Audit",
    "Legalize",
    "Deregulate",
    "Crowdfund",
    "Rename",
    "Outsource",
    "Filibuster",
    "Veto",
    "Gamify",
    "Annex",
    "Monetize",
    "Recall",
    "Redact",
    "Livestream",
    "Overregulate",
    "Unionize",
    "Cancel",
];

const SUBJECTS: &[&str] = &[
    "Birds",
    "Oxygen",
    "Memes",
    "Mondays",
    "Gravity",
    "Clouds",
    "Pigeons",
    "Sarcasm",
    "Spreadsheets",
    "Weather",
    "Naps",
    "Traffic Cones",
    "Tuesdays",
    "Potholes",
    "Lunch Breaks",
    "Moustaches",
    "Umbrellas",
    "Squirrels",
    "Elevator Music",
    "Daylight",
    "Fonts",
    "Queues",
    "Small Talk",
    "Paperwork",
    "Puddles",
];

const MODIFIERS: &[&str] = &[
    "Immediately",
    "Retroactively",
    "For Charity",
    "On Weekends",
    "By Decree",
    "Twice",
    "Ironically",
    "Nationwide",
    "At Midnight",
    "Quietly",
    "Indefinitely",
    "Temporarily",
    "Off The Record",
    "In Triplicate",
    "By Referendum",
    "Unanimously",
    "With Glitter",
    "Before Lunch",
    "Under Protest",
    "For Science",
];

/// Tags every card may draw from, on top of the theme's own tags.
const BASE_TAGS: &[&str] = &["absurd", "policy", "media", "economy", "panic"];

const MAX_TAGS: usize = 3;
const MAX_COST: i32 = 4;
const MAGNITUDE: std::ops::RangeInclusive<i32> = 2..=9;
const SYNERGY_BONUS: std::ops::RangeInclusive<i32> = 1..=3;
const SYNERGY_CHANCE: f64 = 0.35;

/// Redraw budget for a single unique card name.
pub const MAX_NAME_ATTEMPTS: u32 = 10_000;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("cannot name {requested} unique cards: the name grammar only has {capacity} combinations")]
    NameSpaceExhausted { requested: usize, capacity: usize },
    #[error("no unused card name found after {attempts} attempts ({generated} cards generated)")]
    RetriesExhausted { attempts: u32, generated: usize },
}

/// Number of distinct card names the grammar can produce.
pub fn name_capacity() -> usize {
    VERBS.len() * SUBJECTS.len() * MODIFIERS.len()
}

/// The generated card set. Only `generate_cards` builds one, so holding a
/// `CardDeck` proves every id in it exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDeck {
    cards: Vec<Card>,
    ids: Vec<String>,
}

impl CardDeck {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Card ids in generation order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|known| known == id)
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

/// Generate `theme.content_counts.cards` cards with unique ids.
pub fn generate_cards(theme: &Theme, rng: &mut ContentRng) -> Result<CardDeck, GenerationError> {
    let count = theme.content_counts.cards;
    let capacity = name_capacity();
    if count > capacity {
        return Err(GenerationError::NameSpaceExhausted {
            requested: count,
            capacity,
        });
    }

    let tag_pool = tag_pool(theme);
    let mut used: FxHashSet<String> = FxHashSet::default();
    let mut cards = Vec::with_capacity(count);

    for index in 0..count {
        let name = draw_unique_name(rng, &mut used, index)?;
        let card = build_card(theme, rng, name, &tag_pool);
        debug!("card {}: {} ({})", index + 1, card.id, card.rarity.as_str());
        cards.push(card);
    }

    info!("generated {} cards", cards.len());
    let ids = cards.iter().map(|c| c.id.clone()).collect();
    Ok(CardDeck { cards, ids })
}

/// Draw a card rarity using the fixed weights.
pub fn roll_rarity(rng: &mut ContentRng) -> Rarity {
    rng.weighted(&Rarity::WEIGHTS)
        .copied()
        .unwrap_or(Rarity::Common)
}

/// Theme primary tag, then secondary tags, then the base pool, without
/// duplicates and in that order.
fn tag_pool(theme: &Theme) -> Vec<String> {
    let mut pool: Vec<String> = Vec::new();
    let candidates = std::iter::once(theme.themes.primary.as_str())
        .chain(theme.themes.secondary.iter().map(String::as_str))
        .chain(BASE_TAGS.iter().copied());
    for tag in candidates {
        if !pool.iter().any(|t| t == tag) {
            pool.push(tag.to_string());
        }
    }
    pool
}

struct CardName {
    verb: &'static str,
    subject: &'static str,
    modifier: &'static str,
}

impl CardName {
    fn display(&self) -> String {
        format!("{} {} {}", self.verb, self.subject, self.modifier)
    }
}

fn draw_unique_name(
    rng: &mut ContentRng,
    used: &mut FxHashSet<String>,
    generated: usize,
) -> Result<CardName, GenerationError> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let name = CardName {
            verb: rng.pick(VERBS),
            subject: rng.pick(SUBJECTS),
            modifier: rng.pick(MODIFIERS),
        };
        if used.insert(slugify(&name.display())) {
            return Ok(name);
        }
    }
    Err(GenerationError::RetriesExhausted {
        attempts: MAX_NAME_ATTEMPTS,
        generated,
    })
}

fn build_card(theme: &Theme, rng: &mut ContentRng, name: CardName, tag_pool: &[String]) -> Card {
    let display = name.display();
    let id = slugify(&display);

    let rarity = roll_rarity(rng);
    let cost = rng.range(0..=MAX_COST) as u8;
    let tags = rng.sample(tag_pool, MAX_TAGS);
    let effects = roll_effects(rng);

    let synergy = if rng.chance(SYNERGY_CHANCE) {
        rng.choose(&tags).cloned().map(|with_tag| {
            let bonus_type = *rng.choose(&EffectType::ALL).unwrap_or(&EffectType::ApprovalDelta);
            Synergy {
                with_tag,
                bonus: Effect::new(bonus_type, rng.range(SYNERGY_BONUS)),
            }
        })
    } else {
        None
    };

    let description = format!(
        "A {} {} policy: {} {}, {}.",
        rarity.as_str(),
        theme.tone,
        name.verb.to_lowercase(),
        name.subject.to_lowercase(),
        name.modifier.to_lowercase()
    );

    let meta = GenerationMeta {
        art_prompt: format!(
            "{}, {} satire, {} tone, satire level {}/10, palette {}",
            display,
            theme.themes.primary,
            theme.tone,
            theme.themes.satire_level,
            theme.art_direction.palette.join(" ")
        ),
        art_style: theme.art_direction.cards.clone(),
        sfx_key: format!("sfx_card_{}", rarity.as_str()),
        vo_line: format!(
            "Effective {}, we {} {}!",
            name.modifier.to_lowercase(),
            name.verb.to_lowercase(),
            name.subject.to_lowercase()
        ),
        voice_style: theme.audio_direction.voice.clone(),
        theme_music: None,
    };

    Card {
        id,
        name: display,
        description,
        cost,
        rarity,
        tags,
        effects,
        synergy,
        meta,
    }
}

/// 1–3 distinct effect types, each with a signed magnitude in 2..=9.
fn roll_effects(rng: &mut ContentRng) -> Vec<Effect> {
    let count = rng.range(1..=3) as usize;
    let types = rng.sample(&EffectType::ALL, count);
    types
        .into_iter()
        .map(|effect_type| {
            let magnitude = rng.range(MAGNITUDE);
            let sign = rng.sign();
            Effect::new(effect_type, magnitude * sign)
        })
        .collect()
}
