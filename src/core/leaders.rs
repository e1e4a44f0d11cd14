//! Leader generation.

use log::{debug, info};

use crate::core::cards::CardDeck;
use crate::core::sequence::ContentRng;
use crate::core::slug::slugify;
use crate::schema::effect::{Effect, EffectType};
use crate::schema::leader::{Ability, Leader, StatBlock};
use crate::schema::meta::GenerationMeta;
use crate::schema::theme::Theme;

/// Archetype title and trait tags.
const ARCHETYPES: &[(&str, &[&str])] = &[
    ("The Corrupt Executive", &["greed", "spin"]),
    ("The Meme Politician", &["memes", "charisma"]),
    ("The Technocrat", &["data", "austerity"]),
    ("The Populist Firebrand", &["rally", "chaos"]),
    ("The Career Bureaucrat", &["order", "paperwork"]),
    ("The Celebrity Outsider", &["fame", "improv"]),
];

const HONORIFICS: &[&str] = &[
    "President",
    "Chancellor",
    "Premier",
    "Governor",
    "Supreme Chairperson",
    "Acting Mayor",
];

const ROLES: &[&str] = &[
    "the Unelected",
    "the Recounted",
    "the Disruptor",
    "the Twice-Impeached",
    "the Focus-Grouped",
    "the Interim",
];

const SURNAMES: &[&str] = &[
    "Blunderbuss",
    "Quagmire",
    "Filibuster",
    "Loophole",
    "Gerrymander",
    "Spinwell",
    "Redtape",
    "Porkbarrel",
    "Bluster",
    "Scandalworth",
];

const ABILITY_NAMES: &[&str] = &[
    "Executive Overreach",
    "Emergency Press Conference",
    "Strategic Distraction",
    "Budget Magic",
    "Photo Op",
    "Midnight Decree",
];

/// Stats an ability's principal effect may target. Absurdity is covered by
/// the guaranteed second effect.
const PRINCIPAL_EFFECTS: &[EffectType] = &[
    EffectType::ApprovalDelta,
    EffectType::EconomyDelta,
    EffectType::ReputationDelta,
    EffectType::PanicDelta,
];

/// Number of cards in a starting deck, when that many exist.
pub const STARTING_DECK_SIZE: usize = 8;

/// Generate `theme.content_counts.leaders` leaders. Starting decks are
/// sampled from `deck`.
pub fn generate_leaders(theme: &Theme, deck: &CardDeck, rng: &mut ContentRng) -> Vec<Leader> {
    let count = theme.content_counts.leaders;
    let mut leaders = Vec::with_capacity(count);

    for index in 0..count {
        let leader = build_leader(theme, deck, rng, index);
        debug!(
            "leader {}: {} with {} starting cards",
            index + 1,
            leader.id,
            leader.starting_deck.len()
        );
        leaders.push(leader);
    }

    info!("generated {} leaders", leaders.len());
    leaders
}

fn build_leader(theme: &Theme, deck: &CardDeck, rng: &mut ContentRng, index: usize) -> Leader {
    let (title, traits) = *rng.choose(ARCHETYPES).unwrap_or(&ARCHETYPES[0]);
    let honorific = rng.pick(HONORIFICS);
    let role = rng.pick(ROLES);
    let surname = rng.pick(SURNAMES);

    let name = format!("{} {} {}", honorific, surname, role);
    // Ordinal + surname keeps ids unique without a redraw loop.
    let id = slugify(&format!("leader {:02} {}", index + 1, surname));

    let stats = StatBlock {
        approval: rng.range(30..=70),
        economy: rng.range(30..=70),
        absurdity: rng.range(0..=30),
        reputation: rng.range(20..=80),
        panic: rng.range(0..=25),
    };

    let ability_name = rng.pick(ABILITY_NAMES);
    let principal = *rng
        .choose(PRINCIPAL_EFFECTS)
        .unwrap_or(&EffectType::ApprovalDelta);
    let magnitude = rng.range(3..=8);
    // Lowering panic is the beneficial direction.
    let principal_value = if principal == EffectType::PanicDelta {
        -magnitude
    } else {
        magnitude
    };
    let ability = Ability {
        name: ability_name.to_string(),
        effects: vec![
            Effect::new(principal, principal_value),
            Effect::new(EffectType::AbsurdityDelta, rng.range(1..=5)),
        ],
    };

    let starting_deck = rng.sample(deck.ids(), STARTING_DECK_SIZE);
    let trait_tags: Vec<String> = traits.iter().map(|t| t.to_string()).collect();

    let bio = format!(
        "{}. {} campaigns on {} in a {} {} climate.",
        title,
        name,
        trait_tags.join(" and "),
        theme.tone,
        theme.themes.primary
    );

    let meta = GenerationMeta {
        art_prompt: format!(
            "Portrait of {}, {}, {} tone, palette {}",
            name,
            title.to_lowercase(),
            theme.tone,
            theme.art_direction.palette.join(" ")
        ),
        art_style: theme.art_direction.leaders.clone(),
        sfx_key: format!("sfx_ability_{}", slugify(ability_name)),
        vo_line: format!("I, {}, hereby invoke {}!", name, ability_name),
        voice_style: theme.audio_direction.voice.clone(),
        theme_music: Some(theme.audio_direction.music.clone()),
    };

    Leader {
        id,
        name,
        title: title.to_string(),
        bio,
        stats,
        trait_tags,
        ability,
        starting_deck,
        meta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cards::generate_cards;

    fn deck_of(cards: usize, rng: &mut ContentRng) -> CardDeck {
        let mut theme = Theme::default();
        theme.content_counts.cards = cards;
        generate_cards(&theme, rng).unwrap()
    }

    #[test]
    fn starting_deck_is_subset_without_repeats() {
        let mut rng = ContentRng::new(42);
        let deck = deck_of(20, &mut rng);
        let leaders = generate_leaders(&Theme::default(), &deck, &mut rng);
        assert_eq!(leaders.len(), 4);
        for leader in &leaders {
            assert_eq!(leader.starting_deck.len(), STARTING_DECK_SIZE);
            let mut ids = leader.starting_deck.clone();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), STARTING_DECK_SIZE);
            assert!(leader.starting_deck.iter().all(|id| deck.contains(id)));
        }
    }

    #[test]
    fn starting_deck_clamps_to_available_cards() {
        let mut rng = ContentRng::new(42);
        let deck = deck_of(3, &mut rng);
        let leaders = generate_leaders(&Theme::default(), &deck, &mut rng);
        assert!(leaders.iter().all(|l| l.starting_deck.len() == 3));

        let empty = deck_of(0, &mut rng);
        let leaders = generate_leaders(&Theme::default(), &empty, &mut rng);
        assert!(leaders.iter().all(|l| l.starting_deck.is_empty()));
    }

    #[test]
    fn ids_are_unique_even_with_repeated_surnames() {
        let mut rng = ContentRng::new(3);
        let deck = deck_of(10, &mut rng);
        let mut theme = Theme::default();
        theme.content_counts.leaders = 40;
        let leaders = generate_leaders(&theme, &deck, &mut rng);
        let mut ids: Vec<&String> = leaders.iter().map(|l| &l.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 40);
        assert!(leaders[0].id.starts_with("leader_01_"));
    }

    #[test]
    fn stats_and_ability_in_bounds() {
        let mut rng = ContentRng::new(17);
        let deck = deck_of(10, &mut rng);
        let mut theme = Theme::default();
        theme.content_counts.leaders = 50;
        for leader in generate_leaders(&theme, &deck, &mut rng) {
            let s = leader.stats;
            assert!((30..=70).contains(&s.approval));
            assert!((30..=70).contains(&s.economy));
            assert!((0..=30).contains(&s.absurdity));
            assert!((20..=80).contains(&s.reputation));
            assert!((0..=25).contains(&s.panic));

            assert_eq!(leader.ability.effects.len(), 2);
            assert!((3..=8).contains(&leader.ability.effects[0].value.abs()));
            let absurdity = &leader.ability.effects[1];
            assert_eq!(absurdity.effect_type, EffectType::AbsurdityDelta);
            assert!((1..=5).contains(&absurdity.value));
            assert_eq!(leader.trait_tags.len(), 2);
        }
    }
}
