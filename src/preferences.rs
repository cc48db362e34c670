use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PreferencesError;

/// Persisted preference values. Unknown fields in the file are ignored and
/// missing ones fall back to their defaults, so old files keep loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct Values {
    use_native_dialog: bool,
}

impl Default for Values {
    fn default() -> Self {
        Self {
            use_native_dialog: true,
        }
    }
}

/// Preference store persisted as JSON.
///
/// A missing or unreadable file falls back to defaults; corruption is logged,
/// never fatal.
pub struct Preferences {
    path: PathBuf,
    values: Values,
}

impl Preferences {
    pub fn load(path: &Path) -> Self {
        let values = match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(values) => values,
                Err(err) => {
                    log::warn!("ignoring corrupt preferences at {}: {err}", path.display());
                    Values::default()
                }
            },
            Err(err) => {
                log::debug!("no preferences at {} ({err}), using defaults", path.display());
                Values::default()
            }
        };
        Self {
            path: path.to_owned(),
            values,
        }
    }

    /// Whether file choosers should be the platform-native ones.
    pub fn use_native_dialog(&self) -> bool {
        self.values.use_native_dialog
    }

    pub fn set_use_native_dialog(&mut self, native: bool) {
        self.values.use_native_dialog = native;
    }

    /// Persist all values to the backing file.
    pub fn save_all(&self) -> Result<(), PreferencesError> {
        let contents = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, contents)?;
        log::debug!("preferences written to {}", self.path.display());
        Ok(())
    }
}
