pub mod cards;
pub mod cleanup;
pub mod crises;
pub mod factions;
pub mod leaders;
pub mod lint;
pub mod pipeline;
pub mod sequence;
pub mod slug;
pub mod theme;
pub mod writer;
