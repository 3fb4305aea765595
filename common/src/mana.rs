use enum_map::{Enum, EnumMap};
use schemars::JsonSchema;
use serde_derive::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use strum::EnumString;

//The declaration order is the color enumeration order used for display
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Enum,
    JsonSchema,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Color {
    #[strum(to_string = "white", serialize = "w")]
    White,
    #[strum(to_string = "blue", serialize = "u")]
    Blue,
    #[strum(to_string = "black", serialize = "b")]
    Black,
    #[strum(to_string = "red", serialize = "r")]
    Red,
    #[strum(to_string = "green", serialize = "g")]
    Green,
    #[strum(to_string = "colorless", serialize = "c")]
    Colorless,
}
impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Colorless,
    ];
    pub fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Blue => "blue",
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Colorless => "colorless",
        }
    }
    //The letter used in mana symbols
    pub fn code(self) -> char {
        match self {
            Self::White => 'W',
            Self::Blue => 'U',
            Self::Black => 'B',
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Colorless => 'C',
        }
    }
    //Maps a single letter color code, as found in colorIdentity
    pub fn from_code(code: &str) -> Option<Color> {
        if code.chars().count() != 1 {
            return None;
        }
        Color::from_str(code).ok()
    }
    //Maps a bracketed mana production symbol such as {G} to its color.
    //Generic, hybrid, phyrexian and other symbols produce None.
    pub fn from_symbol(symbol: &str) -> Option<Color> {
        let inner = symbol.strip_prefix('{')?.strip_suffix('}')?;
        Color::from_code(inner)
    }
}
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How much mana of each color a permanent's tap abilities produce.
///
/// Counts are tallies of the symbols listed in the tap clauses, not a casting cost.
/// When `mutually_exclusive` is set at least one clause offers its symbols as a choice
/// ("{T}: Add {R} or {G}.") rather than producing all of them at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ManaTapProfile {
    #[schemars(with = "BTreeMap<Color, u32>")]
    pub amounts: EnumMap<Color, u32>,
    pub mutually_exclusive: bool,
}
impl ManaTapProfile {
    pub fn new() -> Self {
        Self::default()
    }
    //Counts saturate, text can list any number of symbols
    pub fn add(&mut self, color: Color) {
        self.amounts[color] = self.amounts[color].saturating_add(1);
    }
    pub fn get(&self, color: Color) -> u32 {
        self.amounts[color]
    }
    pub fn total(&self) -> u32 {
        self.amounts.values().copied().fold(0, u32::saturating_add)
    }
    pub fn is_empty(&self) -> bool {
        self.total() == 0 && !self.mutually_exclusive
    }
    //Colors with a nonzero count, in color order
    pub fn colors(&self) -> Vec<Color> {
        self.amounts
            .iter()
            .filter(|(_, amount)| **amount > 0)
            .map(|(color, _)| color)
            .collect()
    }
    pub fn merge(&mut self, other: &ManaTapProfile) {
        for (color, amount) in other.amounts.iter() {
            self.amounts[color] = self.amounts[color].saturating_add(*amount);
        }
        self.mutually_exclusive |= other.mutually_exclusive;
    }
}
impl fmt::Display for ManaTapProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (color, amount) in self.amounts.iter() {
            if *amount == 0 {
                continue;
            }
            if !first {
                f.write_str(if self.mutually_exclusive { " or " } else { " and " })?;
            }
            first = false;
            write!(f, "{} {}", amount, color)?;
        }
        if first {
            f.write_str("no mana")?;
        }
        Ok(())
    }
}
