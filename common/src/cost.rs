use crate::mana::Color;
use enum_map::EnumMap;
use log::debug;
use nom::bytes::complete::is_not;
use nom::character::complete::char;
use nom::multi::many0;
use nom::sequence::delimited;
use nom::IResult;
use schemars::JsonSchema;
use serde_derive::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub type Payment = (Color, u32);

//A symbol that can be paid more than one way
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, JsonSchema)]
pub enum HybridCost {
    Hybrid(Color, Color),          //{G/W}
    GenericHybrid(u32, Color),     //{2/U}
    Phyrexian(Color),              //{B/P}, the color or 2 life
    PhyrexianHybrid(Color, Color), //{G/W/P}
}
impl HybridCost {
    //Contribution to the mana value
    pub fn mana_value(&self) -> u32 {
        match self {
            Self::GenericHybrid(generic, _) => *generic,
            _ => 1,
        }
    }
    fn parse(symbol: &str) -> Option<Self> {
        let parts: Vec<&str> = symbol.split('/').collect();
        let phyrexian = |part: &str| part.eq_ignore_ascii_case("p");
        match parts.as_slice() {
            [color, last] if phyrexian(*last) => Color::from_code(color).map(Self::Phyrexian),
            [first, second] => {
                let second = Color::from_code(second)?;
                if let Ok(generic) = first.parse::<u32>() {
                    return Some(Self::GenericHybrid(generic, second));
                }
                Some(Self::Hybrid(Color::from_code(first)?, second))
            }
            [first, second, last] if phyrexian(*last) => Some(Self::PhyrexianHybrid(
                Color::from_code(first)?,
                Color::from_code(second)?,
            )),
            _ => None,
        }
    }
}
impl fmt::Display for HybridCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hybrid(first, second) => write!(f, "{{{}/{}}}", first.code(), second.code()),
            Self::GenericHybrid(generic, color) => write!(f, "{{{}/{}}}", generic, color.code()),
            Self::Phyrexian(color) => write!(f, "{{{}/P}}", color.code()),
            Self::PhyrexianHybrid(first, second) => {
                write!(f, "{{{}/{}/P}}", first.code(), second.code())
            }
        }
    }
}

//A casting cost, one amount per color. Generic mana is tracked as colorless.
//Variable ({X}), snow ({S}) and hybrid symbols are kept beside the color map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Cost {
    #[schemars(with = "BTreeMap<Color, u32>")]
    colors: EnumMap<Color, u32>,
    variable: u32,
    snow: u32,
    hybrid: Vec<HybridCost>,
}
impl Cost {
    pub fn new() -> Self {
        Self::default()
    }
    //Repeated payments of the same color add up
    pub fn from_payments(payments: &[Payment]) -> Self {
        let mut cost = Self::new();
        for (color, amount) in payments {
            cost.pay(*color, *amount);
        }
        cost
    }
    fn pay(&mut self, color: Color, amount: u32) {
        self.colors[color] = self.colors[color].saturating_add(amount);
    }
    //Reads a mana cost line such as "{2}{G}{G}".
    //Numbers are generic mana, counted as colorless. Amounts saturate instead of overflowing.
    pub fn parse(mana_cost: &str) -> Self {
        let mut cost = Self::new();
        let (rest, symbols) = match parse_mana(mana_cost) {
            Ok(parsed) => parsed,
            Err(_) => return cost,
        };
        if !rest.is_empty() {
            debug!("unparsed mana cost text {:?} in {:?}", rest, mana_cost);
        }
        for symbol in symbols {
            if let Ok(generic) = symbol.parse::<u32>() {
                cost.pay(Color::Colorless, generic);
            } else if let Some(color) = Color::from_code(symbol) {
                cost.pay(color, 1);
            } else if ["x", "y", "z"].iter().any(|var| symbol.eq_ignore_ascii_case(var)) {
                cost.variable = cost.variable.saturating_add(1);
            } else if symbol.eq_ignore_ascii_case("s") {
                cost.snow = cost.snow.saturating_add(1);
            } else if let Some(hybrid) = HybridCost::parse(symbol) {
                cost.hybrid.push(hybrid);
            } else {
                debug!("skipping mana symbol {{{}}} in {:?}", symbol, mana_cost);
            }
        }
        cost
    }
    pub fn get(&self, color: Color) -> u32 {
        self.colors[color]
    }
    //Number of {X} style symbols
    pub fn variable(&self) -> u32 {
        self.variable
    }
    pub fn snow(&self) -> u32 {
        self.snow
    }
    pub fn hybrid(&self) -> &[HybridCost] {
        &self.hybrid
    }
    //Mana value, with every variable symbol counted as zero
    pub fn total(&self) -> u32 {
        self.colors
            .values()
            .chain(std::iter::once(&self.snow))
            .copied()
            .chain(self.hybrid.iter().map(HybridCost::mana_value))
            .fold(0, u32::saturating_add)
    }
    pub fn is_empty(&self) -> bool {
        self.total() == 0 && self.variable == 0
    }
}
impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (color, amount)) in self.colors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", color, amount)?;
        }
        if self.variable > 0 {
            write!(f, ", variable: {}", self.variable)?;
        }
        if self.snow > 0 {
            write!(f, ", snow: {}", self.snow)?;
        }
        for hybrid in &self.hybrid {
            write!(f, ", hybrid: {}", hybrid)?;
        }
        Ok(())
    }
}

fn parse_manasymbol(input: &str) -> IResult<&str, &str, ()> {
    delimited(char('{'), is_not("{}"), char('}'))(input)
}

fn parse_mana(input: &str) -> IResult<&str, Vec<&str>, ()> {
    many0(parse_manasymbol)(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cost_is_zero() {
        let cost = Cost::new();
        assert!(cost.is_empty());
        for color in Color::ALL {
            assert_eq!(cost.get(color), 0);
        }
    }

    #[test]
    fn display_follows_color_order() {
        let cost = Cost::from_payments(&[(Color::Green, 2), (Color::White, 1)]);
        assert_eq!(
            cost.to_string(),
            "white: 1, blue: 0, black: 0, red: 0, green: 2, colorless: 0"
        );
    }

    #[test]
    fn repeated_payments_add_up() {
        let cost = Cost::from_payments(&[(Color::Green, 1), (Color::Green, 3)]);
        assert_eq!(cost.get(Color::Green), 4);
        assert_eq!(cost.total(), 4);
    }

    #[test]
    fn parses_mana_cost_lines() {
        let cost = Cost::parse("{G}{G}{3}{R}{r}{U}{w}{B}");
        assert_eq!(cost.get(Color::Green), 2);
        assert_eq!(cost.get(Color::Colorless), 3);
        assert_eq!(cost.get(Color::Red), 2);
        assert_eq!(cost.get(Color::Blue), 1);
        assert_eq!(cost.get(Color::White), 1);
        assert_eq!(cost.get(Color::Black), 1);
    }

    #[test_log::test]
    fn maps_variable_and_snow_costs() {
        let cost = Cost::parse("{X}{X}{S}{G}");
        assert_eq!(cost.variable(), 2);
        assert_eq!(cost.snow(), 1);
        assert_eq!(cost.get(Color::Green), 1);
        assert_eq!(cost.total(), 2);
        assert_eq!(
            cost.to_string(),
            "white: 0, blue: 0, black: 0, red: 0, green: 1, colorless: 0, variable: 2, snow: 1"
        );
        assert!(!Cost::parse("{X}").is_empty());
    }

    #[test_log::test]
    fn hybrids_are_single_alternatives() {
        let cost = Cost::parse("{G/W}{G/W}");
        assert_eq!(
            cost.hybrid(),
            &[
                HybridCost::Hybrid(Color::Green, Color::White),
                HybridCost::Hybrid(Color::Green, Color::White)
            ]
        );
        assert_eq!(cost.get(Color::White), 0);
        assert_eq!(cost.get(Color::Green), 0);
        assert_eq!(cost.total(), 2);

        let cost = Cost::parse("{2/U}{2/U}");
        assert_eq!(cost.hybrid(), &[HybridCost::GenericHybrid(2, Color::Blue); 2]);
        assert_eq!(cost.get(Color::Colorless), 0);
        assert_eq!(cost.total(), 4);
    }

    #[test_log::test]
    fn phyrexian_costs() {
        let cost = Cost::parse("{X}{X}{G/W}{2/U}{B/P}{G/U/P}{G}");
        assert_eq!(
            cost.hybrid(),
            &[
                HybridCost::Hybrid(Color::Green, Color::White),
                HybridCost::GenericHybrid(2, Color::Blue),
                HybridCost::Phyrexian(Color::Black),
                HybridCost::PhyrexianHybrid(Color::Green, Color::Blue),
            ]
        );
        assert_eq!(cost.variable(), 2);
        assert_eq!(cost.total(), 6);
        assert!(cost
            .to_string()
            .ends_with("variable: 2, hybrid: {G/W}, hybrid: {2/U}, hybrid: {B/P}, hybrid: {G/U/P}"));
    }

    #[test_log::test]
    fn unknown_symbols_are_skipped() {
        let cost = Cost::parse("{Q}{G/Q}{1/2}{G}");
        assert_eq!(cost.total(), 1);
        assert!(cost.hybrid().is_empty());
    }

    #[test_log::test]
    fn huge_amounts_saturate() {
        let cost = Cost::parse("{4294967295}{1}{99999999999}");
        assert_eq!(cost.get(Color::Colorless), u32::MAX);
        let cost = Cost::parse("{4294967295}{G}{2/U}");
        assert_eq!(cost.total(), u32::MAX);
        let cost = Cost::from_payments(&[(Color::Red, u32::MAX), (Color::Red, 5)]);
        assert_eq!(cost.get(Color::Red), u32::MAX);
    }

    #[test_log::test]
    fn empty_and_garbage_costs_are_zero() {
        assert!(Cost::parse("").is_empty());
        assert!(Cost::parse("not a cost").is_empty());
        assert_eq!(Cost::parse("{1}{").total(), 1);
    }

    #[test]
    fn serializes_as_color_map() {
        let cost = Cost::parse("{1}{R}");
        let json = serde_json::to_value(cost).unwrap();
        assert_eq!(json["colors"]["Red"], 1);
        assert_eq!(json["colors"]["Colorless"], 1);
        assert_eq!(json["colors"]["White"], 0);
        assert_eq!(json["variable"], 0);
        assert!(json["hybrid"].as_array().unwrap().is_empty());
    }
}
