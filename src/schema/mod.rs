//! Content data model: the records the generators produce and the writer emits.

pub mod card;
pub mod category;
pub mod crisis;
pub mod effect;
pub mod faction;
pub mod leader;
pub mod meta;
pub mod theme;
