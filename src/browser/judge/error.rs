extern crate reqwest;
extern crate serde_json;

use std::{error::Error as StdError, fmt, result::Result as StdResult};

#[derive(Debug)]
pub enum Error {
    Builder(reqwest::Error),
    Network(reqwest::Error),
    Decode(serde_json::Error),
    Api { comment: Option<String> },
    InvalidHandle { comment: Option<String> },
}

pub type Result<T> = StdResult<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builder(e) => write!(f, "Error building client: {}", e),
            Self::Network(e) => write!(f, "Error sending request: {}", e),
            Self::Decode(e) => write!(f, "Error decoding response: {}", e),
            Self::Api { comment } => match comment {
                Some(c) => write!(f, "API request failed: {}", c),
                None => write!(f, "API request failed"),
            },
            Self::InvalidHandle { comment } => match comment {
                Some(c) => write!(f, "Invalid handle: {}", c),
                None => write!(f, "Invalid handle"),
            },
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Builder(e) | Self::Network(e) => Some(e),
            Self::Decode(e) => Some(e),
            Self::Api { .. } | Self::InvalidHandle { .. } => None,
        }
    }
}

impl Error {
    pub fn is_invalid_handle(&self) -> bool {
        matches!(self, Self::InvalidHandle { .. })
    }
}
