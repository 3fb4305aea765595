use crate::card_builder::{basic_land, card_from_record, nonbasic_land};
use crate::spawn_error::{LoadError, SpawnError};
use common::card_entities::Card;
use common::cardtypes::{ParseType, Supertype, Type};
use common::raw_card::RawCard;
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde_derive::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

//Every print variant of every card, keyed by card name
pub struct CardDB {
    cards: BTreeMap<String, Vec<Arc<RawCard>>>,
}

impl fmt::Debug for CardDB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardDB")
            .field("cards", &self.cards.len())
            .finish()
    }
}

//The atomic dataset keeps its cards under "data", the trimmed export under "library"
#[derive(Deserialize)]
struct Dataset {
    #[serde(alias = "library")]
    data: BTreeMap<String, Vec<RawCard>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LandSelection {
    #[default]
    All,
    Named(BTreeSet<String>),
}
impl LandSelection {
    pub fn named<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Named(names.into_iter().map(Into::into).collect())
    }
    pub fn includes(&self, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(names) => names.contains(name),
        }
    }
}

//Cards ready for play. Built once and then handed to whoever needs them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, JsonSchema)]
pub struct CardRepository {
    pub library: Vec<Card>, //Basic lands
    pub lands: Vec<Card>,   //Selected nonbasic lands
}
impl CardRepository {
    pub fn find(&self, name: &str) -> Option<&Card> {
        self.library
            .iter()
            .chain(self.lands.iter())
            .find(|card| card.name == name)
    }
    pub fn len(&self) -> usize {
        self.library.len() + self.lands.len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CardDB {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        info!("loading cards from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
    pub fn from_reader(reader: impl Read) -> Result<Self, LoadError> {
        let dataset: Dataset = serde_json::from_reader(reader)?;
        Ok(Self::from_dataset(dataset))
    }
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        Ok(Self::from_dataset(dataset))
    }
    fn from_dataset(dataset: Dataset) -> Self {
        let cards: BTreeMap<_, _> = dataset
            .data
            .into_iter()
            .map(|(name, printings)| (name, printings.into_iter().map(Arc::new).collect()))
            .collect();
        info!("loaded {} cards", cards.len());
        CardDB { cards }
    }
    //First printing of the card
    pub fn get(&self, card_name: &str) -> Option<&Arc<RawCard>> {
        self.cards.get(card_name).and_then(|printings| printings.first())
    }
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cards.keys().map(String::as_str)
    }
    pub fn spawn_card(&self, card_name: &str) -> Result<Card, SpawnError> {
        debug!("spawning {}", card_name);
        let printings = self
            .cards
            .get(card_name)
            .ok_or_else(|| SpawnError::CardNotFound(card_name.to_string()))?;
        let raw = printings
            .first()
            .ok_or_else(|| SpawnError::NoPrintings(card_name.to_string()))?;
        card_from_record(raw.clone())
    }
    //Basic lands all go to the library, nonbasic lands only when selected.
    //Everything that isn't a land is left out.
    pub fn build_repository(&self, selection: &LandSelection) -> CardRepository {
        let mut repository = CardRepository::default();
        for (name, printings) in &self.cards {
            let raw = match printings.first() {
                Some(raw) => raw,
                None => {
                    warn!("skipping {}: {}", name, SpawnError::NoPrintings(name.clone()));
                    continue;
                }
            };
            if !Type::Land.listed_in(&raw.types) {
                continue;
            }
            if Supertype::Basic.listed_in(&raw.supertypes) {
                repository.library.push(basic_land(raw.clone()));
            } else if selection.includes(name) {
                repository.lands.push(nonbasic_land(raw.clone()));
            }
        }
        if let LandSelection::Named(names) = selection {
            for missing in names.iter().filter(|name| repository.find(name).is_none()) {
                warn!("selected land {} is not in the database", missing);
            }
        }
        info!(
            "built {} basic lands and {} nonbasic lands",
            repository.library.len(),
            repository.lands.len()
        );
        repository
    }
}
