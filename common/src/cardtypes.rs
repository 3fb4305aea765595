use log::debug;
use schemars::JsonSchema;
use serde_derive::{Deserialize, Serialize};
use std::hash::Hash;
use std::str::FromStr;
use strum_macros::EnumString;

pub trait ParseType {
    //Reads the type strings of a record, dropping any this model doesn't know about
    fn parse_all<S>(names: &[S]) -> Vec<Self>
    where
        Self: Sized + FromStr + PartialEq,
        S: AsRef<str>,
    {
        let mut res = Vec::new();
        for name in names {
            match Self::from_str(name.as_ref()) {
                Ok(parsed) if !res.contains(&parsed) => res.push(parsed),
                Ok(_) => {}
                Err(_) => debug!("ignoring unknown type {:?}", name.as_ref()),
            }
        }
        res
    }
    fn listed_in<S>(self, names: &[S]) -> bool
    where
        Self: Sized + FromStr + PartialEq,
        S: AsRef<str>,
    {
        names
            .iter()
            .any(|name| Self::from_str(name.as_ref()).map_or(false, |parsed| parsed == self))
    }
}
impl ParseType for Type {}
impl ParseType for Supertype {}

#[derive(
    Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize, JsonSchema, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Type {
    Artifact,
    Battle,
    Creature,
    Enchantment,
    Instant,
    #[strum(serialize = "kindred", serialize = "tribal")]
    Kindred,
    Land,
    Planeswalker,
    Sorcery,
}
#[derive(
    Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize, JsonSchema, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Supertype {
    Basic,
    Legendary,
    Snow,
    World,
}
