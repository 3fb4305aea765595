use crate::{
    card_behavior::{CardBehavior, TapPurpose},
    cardtypes::Type,
    cost::Cost,
    mana::{Color, ManaTapProfile},
    raw_card::RawCard,
    zones::Zone,
};
use derivative::*;
use schemars::JsonSchema;
use serde_derive::Serialize;
use std::sync::Arc;

//What kind of card this is, with the data only that kind carries
#[derive(Clone, Debug, PartialEq, Serialize, JsonSchema)]
#[serde(tag = "variant")]
pub enum CardKind {
    Standard,
    BasicLand {
        mana: ManaTapProfile,
    },
    NonbasicLand {
        mana: ManaTapProfile,
        //Purpose of each tap ability in text order, mana and otherwise
        tap_purposes: Vec<TapPurpose>,
    },
}

//Everything a card is built from besides its kind and record
#[derive(Clone, Debug)]
pub struct CardParts {
    pub card_type: Type,
    pub colors: Vec<Color>,
    pub cost: Cost,
    pub name: String,
    pub description: String,
    pub behavior: CardBehavior,
    pub zone: Zone,
}

#[derive(Derivative)]
#[derivative(Debug, PartialEq)]
#[derive(Serialize, Clone, JsonSchema)]
pub struct Card {
    pub name: String,
    pub card_type: Type,
    pub colors: Vec<Color>,
    pub cost: Cost,
    pub description: String,
    pub behavior: CardBehavior,
    pub zone: Zone,
    pub kind: CardKind,
    #[serde(skip)]
    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    raw: Arc<RawCard>, //The record this card was built from, shared and never mutated
}
impl Card {
    pub fn new(parts: CardParts, kind: CardKind, raw: Arc<RawCard>) -> Self {
        let mut behavior = parts.behavior;
        behavior.visibility.zone = parts.zone;
        Self {
            name: parts.name,
            card_type: parts.card_type,
            colors: parts.colors,
            cost: parts.cost,
            description: parts.description,
            behavior,
            zone: parts.zone,
            kind,
            raw,
        }
    }
    pub fn raw(&self) -> &RawCard {
        &self.raw
    }
    pub fn mana_tap_profile(&self) -> Option<&ManaTapProfile> {
        match &self.kind {
            CardKind::Standard => None,
            CardKind::BasicLand { mana } => Some(mana),
            CardKind::NonbasicLand { mana, .. } => Some(mana),
        }
    }
    pub fn is_land(&self) -> bool {
        self.card_type == Type::Land
    }
    pub fn is_basic_land(&self) -> bool {
        matches!(self.kind, CardKind::BasicLand { .. })
    }
    //Zone changes are driven by the game state, this keeps the two copies of the zone in step
    pub fn move_to(&mut self, zone: Zone) {
        self.zone = zone;
        self.behavior.visibility.zone = zone;
        if zone != Zone::Battlefield {
            self.behavior.battlefield.is_tapped = false;
        }
    }
    pub fn set_tapped(&mut self, tapped: bool) {
        self.behavior.battlefield.is_tapped = tapped;
    }
    //Always read from the current zone, it changes under the card
    pub fn can_tap_for_mana(&self) -> bool {
        let battlefield = &self.behavior.battlefield;
        self.zone == Zone::Battlefield
            && battlefield.can_tap
            && !battlefield.is_tapped
            && battlefield.tap_purpose == TapPurpose::Mana
    }
}
