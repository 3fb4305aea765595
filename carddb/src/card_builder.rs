use crate::mana_tap::{merge_mana, resolve_mana_tap, tap_clauses};
use crate::spawn_error::SpawnError;
use common::card_behavior::{
    BattlefieldBehavior, CardBehavior, EntranceBehavior, ExitBehavior, TapPurpose,
    VisibilityBehavior,
};
use common::card_entities::{Card, CardKind, CardParts};
use common::cardtypes::{ParseType, Supertype, Type};
use common::cost::Cost;
use common::mana::Color;
use common::raw_card::RawCard;
use common::zones::Zone;
use log::debug;
use std::sync::Arc;

fn enters_tapped(description: &str) -> bool {
    let description = description.to_lowercase();
    description.contains("enters the battlefield tapped") || description.contains("enters tapped")
}

//Lands never attack or block and tap only for mana
pub fn basic_land_behavior(description: &str) -> CardBehavior {
    CardBehavior::new(
        VisibilityBehavior {
            zone: Zone::Library,
            revealed: false,
        },
        EntranceBehavior {
            can_have_summoning_sickness: false,
            enters_on_instant_stack: false,
            enters_tapped: enters_tapped(description),
        },
        BattlefieldBehavior {
            can_attack: false,
            can_block: false,
            can_tap: true,
            can_turn_face_up: false,
            is_tapped: false,
            is_face_down: false,
            is_summon_sick: false,
            tap_purpose: TapPurpose::Mana,
        },
        ExitBehavior::to_graveyard(),
    )
}

pub fn standard_behavior(raw: &RawCard) -> CardBehavior {
    let description = raw.description();
    let is_creature = Type::Creature.listed_in(&raw.types);
    //Creatures without a tap ability can't tap
    let clauses = tap_clauses(description);
    let can_tap = !clauses.is_empty();
    let tap_purpose = if !can_tap {
        TapPurpose::None
    } else if clauses.iter().any(|clause| clause.purpose == TapPurpose::Mana) {
        TapPurpose::Mana
    } else {
        TapPurpose::Action
    };
    CardBehavior::new(
        VisibilityBehavior {
            zone: Zone::Library,
            revealed: false,
        },
        EntranceBehavior {
            can_have_summoning_sickness: is_creature,
            enters_on_instant_stack: Type::Instant.listed_in(&raw.types) || raw.has_keyword("Flash"),
            enters_tapped: enters_tapped(description),
        },
        BattlefieldBehavior {
            can_attack: is_creature && !raw.has_keyword("Defender"),
            can_block: is_creature,
            can_tap,
            can_turn_face_up: raw.has_keyword("Disguise") || raw.has_keyword("Morph"),
            is_tapped: false,
            is_face_down: false,
            is_summon_sick: false,
            tap_purpose,
        },
        ExitBehavior::to_graveyard(),
    )
}

//Color identity codes in record order. Cards without any are colorless.
pub fn card_colors(raw: &RawCard) -> Vec<Color> {
    let mut colors = Vec::new();
    for code in &raw.color_identity {
        match Color::from_code(code) {
            Some(color) if !colors.contains(&color) => colors.push(color),
            Some(_) => {}
            None => debug!("{}: ignoring color identity {:?}", raw.name, code),
        }
    }
    if colors.is_empty() {
        colors.push(Color::Colorless);
    }
    colors
}

pub struct StandardCardParts {
    pub card_type: Type,
    pub colors: Vec<Color>,
    pub cost: Cost,
    pub name: String,
    pub description: String,
    pub behavior: CardBehavior,
    pub raw: Arc<RawCard>,
    pub zone: Option<Zone>, //Library when unset
}
impl StandardCardParts {
    pub fn build(self) -> Card {
        let parts = CardParts {
            card_type: self.card_type,
            colors: self.colors,
            cost: self.cost,
            name: self.name,
            description: self.description,
            behavior: self.behavior,
            zone: self.zone.unwrap_or_default(),
        };
        Card::new(parts, CardKind::Standard, self.raw)
    }
}

pub fn standard_card(parts: StandardCardParts) -> Card {
    parts.build()
}

fn land_parts(raw: &RawCard) -> CardParts {
    let description = raw.description();
    CardParts {
        card_type: Type::Land,
        colors: card_colors(raw),
        cost: Cost::new(),
        name: raw.name.clone(),
        description: description.to_string(),
        behavior: basic_land_behavior(description),
        zone: Zone::Library,
    }
}

pub fn basic_land(raw: Arc<RawCard>) -> Card {
    let parts = land_parts(&raw);
    let mana = resolve_mana_tap(&parts.description);
    debug!("{}: basic land producing {}", parts.name, mana);
    Card::new(parts, CardKind::BasicLand { mana }, raw)
}

//Tap abilities that don't add mana are kept only as their purpose
pub fn nonbasic_land(raw: Arc<RawCard>) -> Card {
    let parts = land_parts(&raw);
    let clauses = tap_clauses(&parts.description);
    let mana = merge_mana(&clauses);
    let tap_purposes = clauses.iter().map(|clause| clause.purpose).collect();
    debug!("{}: nonbasic land producing {}", parts.name, mana);
    Card::new(parts, CardKind::NonbasicLand { mana, tap_purposes }, raw)
}

//The primary type is the first type on the record this model recognizes
pub fn card_from_record(raw: Arc<RawCard>) -> Result<Card, SpawnError> {
    let types = Type::parse_all(&raw.types);
    let card_type = *types
        .first()
        .ok_or_else(|| SpawnError::UnknownType(raw.name.clone()))?;
    if types.contains(&Type::Land) {
        if Supertype::Basic.listed_in(&raw.supertypes) {
            return Ok(basic_land(raw));
        }
        return Ok(nonbasic_land(raw));
    }
    let cost = Cost::parse(raw.mana_cost.as_deref().unwrap_or(""));
    let parts = StandardCardParts {
        card_type,
        colors: card_colors(&raw),
        cost,
        name: raw.name.clone(),
        description: raw.description().to_string(),
        behavior: standard_behavior(&raw),
        raw,
        zone: None,
    };
    Ok(standard_card(parts))
}
