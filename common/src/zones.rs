use schemars::JsonSchema;
use serde_derive::{Deserialize, Serialize};
use strum_macros::EnumString;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Zone {
    #[default]
    Library,
    Hand,
    Battlefield,
    Graveyard,
    Exile,
}
