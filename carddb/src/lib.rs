pub mod card_builder;
pub mod carddb;
pub mod config;
pub mod mana_tap;
pub mod spawn_error;
pub mod tokenize;
