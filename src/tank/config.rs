use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{AquariumError, AquariumResult};

/// How the tank picks the fish it shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Every saltwater fish in the catalog.
    All,
    /// `maxFish` fish picked once on load.
    Limited,
    /// `maxFish` fish with one swapped out every `rotateInterval`.
    Rotate,
    /// The same `maxFish` fish for everyone on a given UTC day.
    #[default]
    Daily,
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Limited => "limited",
            Self::Rotate => "rotate",
            Self::Daily => "daily",
        })
    }
}

/// Display policy read by the selection engine and the roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AquariumConfig {
    /// Selection policy.
    pub display_mode: DisplayMode,
    /// Fish shown at once outside `all` mode.
    pub max_fish: usize,
    /// Milliseconds between rotations in `rotate` mode.
    pub rotate_interval: u64,
    /// Shuffle the catalog before taking fish; catalog order otherwise.
    pub shuffle_on_load: bool,
    /// Prefer varied shapes and colors over a plain shuffle.
    pub enable_diverse_selection: bool,
}

impl Default for AquariumConfig {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::Daily,
            max_fish: 8,
            rotate_interval: 30_000,
            shuffle_on_load: true,
            enable_diverse_selection: true,
        }
    }
}

impl AquariumConfig {
    /// Parse a JSON config; missing fields keep their defaults.
    pub fn from_reader<R: Read>(r: R) -> AquariumResult<Self> {
        let config: Self = serde_json::from_reader(r)
            .map_err(|e| AquariumError::validation(format!("parse aquarium config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> AquariumResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            AquariumError::validation(format!("open aquarium config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject values the tank cannot run with.
    pub fn validate(&self) -> AquariumResult<()> {
        if self.max_fish == 0 {
            return Err(AquariumError::validation("maxFish must be at least 1"));
        }
        if self.rotate_interval == 0 {
            return Err(AquariumError::validation(
                "rotateInterval must be a positive number of milliseconds",
            ));
        }
        Ok(())
    }
}
