use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpawnError {
    CardNotFound(String),
    NoPrintings(String),
    UnknownType(String),
}
impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CardNotFound(name) => write!(f, "card {:?} is not in the database", name),
            Self::NoPrintings(name) => write!(f, "card {:?} has no printings", name),
            Self::UnknownType(name) => write!(f, "card {:?} has no recognized card type", name),
        }
    }
}
impl Error for SpawnError {}

#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Json(serde_json::Error),
}
impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "couldn't read card dataset: {}", err),
            Self::Json(err) => write!(f, "couldn't parse card dataset: {}", err),
        }
    }
}
impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}
