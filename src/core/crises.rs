//! Crisis generation and chain linking.

use log::{debug, info};

use crate::core::cards::CardDeck;
use crate::core::sequence::ContentRng;
use crate::core::slug::slugify;
use crate::schema::crisis::{
    ChainEvent, Comparison, Crisis, ResponseOption, Severity, StatThreshold, TriggerConditions,
    TurnRange,
};
use crate::schema::effect::{Effect, EffectType, Stat};
use crate::schema::meta::GenerationMeta;
use crate::schema::theme::Theme;

/// Cycled by generation index so categories are spread evenly.
const SEVERITY_TABLE: &[(Severity, &str)] = &[
    (Severity::Minor, "nature"),
    (Severity::Major, "economy"),
    (Severity::Catastrophic, "media"),
    (Severity::Minor, "bureaucracy"),
    (Severity::Major, "diplomacy"),
];

const HEADLINE_SUBJECTS: &[&str] = &[
    "Pigeons",
    "The Stock Market",
    "Parliament's Printer",
    "Celebrity Chefs",
    "The Moon",
    "Unpaid Interns",
    "Self-Driving Buses",
    "The National Mascot",
];

const HEADLINE_EVENTS: &[&str] = &[
    "Declare Independence",
    "Go On Strike",
    "Unionize",
    "Trend Worldwide",
    "Demand A Recount",
    "Short-Circuit",
    "Leak Everything",
    "Refuse To Leave",
];

const COUNTERMEASURE_LABEL: &str = "Deploy Countermeasure";

/// Generate `theme.content_counts.crises` crises, then link each one to
/// its successor.
pub fn generate_crises(theme: &Theme, deck: &CardDeck, rng: &mut ContentRng) -> Vec<Crisis> {
    let count = theme.content_counts.crises;
    let mut crises = Vec::with_capacity(count);

    for index in 0..count {
        let crisis = build_crisis(theme, deck, rng, index);
        debug!(
            "crisis {}: {} ({} {})",
            index + 1,
            crisis.id,
            crisis.severity.as_str(),
            crisis.category
        );
        crises.push(crisis);
    }

    link_chain(&mut crises);
    info!("generated {} crises", crises.len());
    crises
}

/// Point every crisis except the last at the one generated after it.
/// Draws nothing from the random stream.
pub fn link_chain(crises: &mut [Crisis]) {
    let next_ids: Vec<String> = crises.iter().skip(1).map(|c| c.id.clone()).collect();
    for (crisis, next_id) in crises.iter_mut().zip(next_ids) {
        crisis.chain_events = vec![ChainEvent { crisis_id: next_id }];
    }
    if let Some(last) = crises.last_mut() {
        last.chain_events.clear();
    }
}

fn build_crisis(theme: &Theme, deck: &CardDeck, rng: &mut ContentRng, index: usize) -> Crisis {
    let (severity, category) = SEVERITY_TABLE[index % SEVERITY_TABLE.len()];

    let subject = rng.pick(HEADLINE_SUBJECTS);
    let event = rng.pick(HEADLINE_EVENTS);
    let name = format!("{} {}", subject, event);
    let id = format!("{}_{:02}", slugify(&name), index + 1);
    let headline = format!("BREAKING: {} {}!", subject, event);

    let min_turn = rng.range(1..=10) as u32;
    let max_turn = min_turn + rng.range(3..=12) as u32;
    let stat = *rng.choose(&Stat::ALL).unwrap_or(&Stat::Panic);
    let comparison = if rng.chance(0.5) {
        Comparison::Above
    } else {
        Comparison::Below
    };
    let triggers = TriggerConditions {
        turns: TurnRange { min_turn, max_turn },
        thresholds: vec![StatThreshold {
            stat,
            comparison,
            value: rng.range(20..=80),
        }],
    };

    // Borrowing a card's effects ties crisis outcomes to card balance.
    let borrowed = match rng.choose(deck.cards()) {
        Some(card) => ResponseOption {
            label: format!("Invoke {}", card.name),
            effects: card.effects.clone(),
            source_card_id: Some(card.id.clone()),
        },
        None => ResponseOption {
            label: "Issue A Strongly Worded Statement".to_string(),
            effects: Vec::new(),
            source_card_id: None,
        },
    };
    let countermeasure = ResponseOption {
        label: COUNTERMEASURE_LABEL.to_string(),
        effects: vec![Effect::new(EffectType::AbsurdityDelta, rng.range(4..=9))],
        source_card_id: None,
    };

    let mut tags = vec![category.to_string()];
    if theme.themes.primary != category {
        tags.push(theme.themes.primary.clone());
    }

    let description = format!(
        "A {} {} crisis. {} and the public reaction is {}.",
        severity.as_str(),
        category,
        headline,
        theme.tone
    );

    let meta = GenerationMeta {
        art_prompt: format!(
            "Breaking news still: {}, {} tone, palette {}",
            name.to_lowercase(),
            theme.tone,
            theme.art_direction.palette.join(" ")
        ),
        art_style: theme.art_direction.crises.clone(),
        sfx_key: format!("sfx_crisis_{}", severity.as_str()),
        vo_line: headline.clone(),
        voice_style: theme.audio_direction.voice.clone(),
        theme_music: None,
    };

    Crisis {
        id,
        name,
        severity,
        category: category.to_string(),
        headline,
        description,
        tags,
        triggers,
        responses: vec![borrowed, countermeasure],
        chain_events: Vec::new(),
        meta,
    }
}
