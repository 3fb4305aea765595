use crate::zones::Zone;
use schemars::JsonSchema;
use serde_derive::{Deserialize, Serialize};

/*
CardBehavior describes what a card can physically do while it is being played:
where it sits, how it enters and leaves the battlefield and what it may do there.
It carries no rules logic, archetype recipes fill it in.
*/
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct CardBehavior {
    pub visibility: VisibilityBehavior,
    pub entrance: EntranceBehavior,
    pub battlefield: BattlefieldBehavior,
    pub exit: ExitBehavior,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct VisibilityBehavior {
    pub zone: Zone,
    pub revealed: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct EntranceBehavior {
    pub can_have_summoning_sickness: bool,
    pub enters_on_instant_stack: bool,
    pub enters_tapped: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum TapPurpose {
    Mana,
    Action,
    #[default]
    None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct BattlefieldBehavior {
    pub can_attack: bool,    //Is it possible for the card to attack at all?
    pub can_block: bool,     //Is it possible for the card to block at all?
    pub can_tap: bool,       //Is it possible for the card to tap at all?
    pub can_turn_face_up: bool,
    pub is_tapped: bool,
    pub is_face_down: bool,
    pub is_summon_sick: bool,
    pub tap_purpose: TapPurpose,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum DeathZone {
    #[default]
    Graveyard,
    Exile,
}
impl DeathZone {
    pub fn zone(self) -> Zone {
        match self {
            Self::Graveyard => Zone::Graveyard,
            Self::Exile => Zone::Exile,
        }
    }
}

//Only one destination is stored so the graveyard and exile flags can never disagree.
//It is serialized as the flags the front end reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(into = "ExitFlags")]
pub struct ExitBehavior {
    destination: DeathZone,
}
#[derive(Serialize, JsonSchema)]
struct ExitFlags {
    hits_graveyard_on_death: bool,
    hits_exile_on_death: bool,
    location_on_death: Zone,
}
impl From<ExitBehavior> for ExitFlags {
    fn from(exit: ExitBehavior) -> Self {
        Self {
            hits_graveyard_on_death: exit.hits_graveyard_on_death(),
            hits_exile_on_death: exit.hits_exile_on_death(),
            location_on_death: exit.location_on_death(),
        }
    }
}
impl JsonSchema for ExitBehavior {
    fn schema_name() -> String {
        "ExitBehavior".to_string()
    }
    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        <ExitFlags as JsonSchema>::json_schema(gen)
    }
}
impl ExitBehavior {
    pub fn new(destination: DeathZone) -> Self {
        Self { destination }
    }
    pub fn to_graveyard() -> Self {
        Self::new(DeathZone::Graveyard)
    }
    pub fn to_exile() -> Self {
        Self::new(DeathZone::Exile)
    }
    pub fn hits_graveyard_on_death(&self) -> bool {
        self.destination == DeathZone::Graveyard
    }
    pub fn hits_exile_on_death(&self) -> bool {
        self.destination == DeathZone::Exile
    }
    pub fn location_on_death(&self) -> Zone {
        self.destination.zone()
    }
}

impl CardBehavior {
    pub fn new(
        visibility: VisibilityBehavior,
        entrance: EntranceBehavior,
        battlefield: BattlefieldBehavior,
        exit: ExitBehavior,
    ) -> Self {
        Self {
            visibility,
            entrance,
            battlefield,
            exit,
        }
    }
    pub fn zone(&self) -> Zone {
        self.visibility.zone
    }
    pub fn can_have_summoning_sickness(&self) -> bool {
        self.entrance.can_have_summoning_sickness
    }
}
