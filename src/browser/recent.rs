extern crate serde;

use crate::{config::recent::LIMIT, storage, types::Problem};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The problems most recently picked up for coding, newest first,
/// deduplicated by problem key and capped at ten entries. Full problem
/// records are stored so the list renders before any catalog fetch.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentProblems {
    list: Vec<Problem>,
}

impl RecentProblems {
    pub fn new() -> Self {
        RecentProblems { list: Vec::new() }
    }

    pub fn add(&mut self, problem: &Problem) {
        let key = problem.key();
        self.list.retain(|p| p.key() != key);
        self.list.insert(0, problem.clone());
        self.list.truncate(LIMIT);
    }

    pub fn list(&self) -> &[Problem] {
        &self.list
    }

    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, storage::Error> {
        Ok(storage::load_path(path)?.unwrap_or_default())
    }
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), storage::Error> {
        storage::save_path(path, self)
    }
}
