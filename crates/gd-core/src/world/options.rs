//! Ghost generation options
//!
//! Read from a JSON file; every field is optional and falls back to the
//! game defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::OptionsError;
use crate::consts::MAX_GHOSTS;

/// User-configurable ghost options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GhostOptions {
    /// Ghosts a single level may hold, the player's own included
    pub max_ghosts: i32,
    /// Announce every ghost added to a roster
    pub announce_ghosts: bool,
    /// Run the integrity check over every roster that gets built
    pub check_roster: bool,
}

impl Default for GhostOptions {
    fn default() -> Self {
        Self {
            max_ghosts: MAX_GHOSTS,
            announce_ghosts: true,
            check_roster: false,
        }
    }
}

impl GhostOptions {
    pub fn from_json_str(text: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load options from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
