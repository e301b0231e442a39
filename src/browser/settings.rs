extern crate serde;

use crate::{catalog::SortOrder, storage};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// User configuration, stored as yaml with the original plugin's
/// camelCase key names. Missing keys fall back to defaults so a
/// hand-edited partial file stays valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub user_handle: String,
    pub sort_order: SortOrder,
    pub difficulty_sort_order: SortOrder,
    pub preferred_coding_language: String,
    pub default_solutions_folder_path: String,
    pub solution_template: String,
    pub notify_solution_template: bool,
    pub notify_preferred_language: bool,
    pub verify_feed_order: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            user_handle: String::new(),
            sort_order: SortOrder::None,
            difficulty_sort_order: SortOrder::RatingAsc,
            preferred_coding_language: String::new(),
            default_solutions_folder_path: String::new(),
            solution_template: String::new(),
            notify_solution_template: true,
            notify_preferred_language: true,
            verify_feed_order: false,
        }
    }
}

impl Settings {
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, storage::Error> {
        Ok(storage::load_path(path)?.unwrap_or_default())
    }
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), storage::Error> {
        storage::save_path(path, self)
    }
}
