use crate::carddb::LandSelection;
use log::debug;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATASET: &str = "noForeignModernAtomic.json";
pub const DATASET_VAR: &str = "LANDTAP_DATASET";
pub const LANDS_VAR: &str = "LANDTAP_LANDS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DbConfig {
    pub dataset_path: PathBuf,
    pub land_selection: LandSelection,
}
impl Default for DbConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET),
            land_selection: LandSelection::All,
        }
    }
}
impl DbConfig {
    pub fn from_env() -> Self {
        Self::from_vars(env::var(DATASET_VAR).ok(), env::var(LANDS_VAR).ok())
    }
    //Unset or blank values keep the defaults
    pub fn from_vars(dataset: Option<String>, lands: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(dataset) = dataset.filter(|path| !path.trim().is_empty()) {
            config.dataset_path = PathBuf::from(dataset);
        }
        if let Some(lands) = lands {
            config.land_selection = parse_land_list(&lands);
        }
        debug!("card db config {:?}", config);
        config
    }
}

//Names are separated by ';' since land names can contain commas
pub fn parse_land_list(list: &str) -> LandSelection {
    let names: Vec<&str> = list
        .split(';')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();
    if names.is_empty() {
        LandSelection::All
    } else {
        LandSelection::named(names)
    }
}
