//! Executive Disorder content generator.
//!
//! Turns a theme descriptor into a deterministic content pack of cards,
//! leaders, crises and factions, written both as per-entity YAML authoring
//! files and as per-category JSON documents for the game engine.

pub mod core;
pub mod schema;
