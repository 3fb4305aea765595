pub mod card_behavior;
pub mod card_entities;
pub mod cardtypes;
pub mod cost;
pub mod mana;
pub mod raw_card;
pub mod zones;
