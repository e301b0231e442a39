extern crate serde;
extern crate serde_yaml;

use serde::{de::DeserializeOwned, Serialize};
use std::{
    error::Error as StdError,
    fmt, fs,
    io::{self, ErrorKind, Read, Write},
    path::Path,
};

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Yaml(serde_yaml::Error),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Error accessing file: {}", e),
            Self::Yaml(e) => write!(f, "Error processing file: {}", e),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Yaml(e) => Some(e),
        }
    }
}

pub fn load<T: DeserializeOwned, R: Read>(rdr: R) -> Result<T, Error> {
    serde_yaml::from_reader(rdr).map_err(Error::Yaml)
}
pub fn save<T: Serialize, W: Write>(wdr: W, value: &T) -> Result<(), Error> {
    serde_yaml::to_writer(wdr, value).map_err(Error::Yaml)
}

/// `Ok(None)` when the file does not exist yet.
pub fn load_path<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Option<T>, Error> {
    match fs::File::open(path) {
        Ok(f) => load(f).map(Some),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::Io(e)),
    }
}

pub fn save_path<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<(), Error> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(Error::Io)?;
    }
    save(fs::File::create(path).map_err(Error::Io)?, value)
}
