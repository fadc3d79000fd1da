use std::fs;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Persistent state between runs. Only the last scanned folder is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub last_folder: Option<PathBuf>,
}

impl Settings {
    /// Reads `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let file = match fs::File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(Error::Settings {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        serde_json::from_reader(BufReader::new(file)).map_err(|e| Error::Settings {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let err = |source: io::Error| Error::Settings {
            path: path.to_path_buf(),
            source,
        };
        let s = serde_json::to_string_pretty(self).map_err(|e| err(e.into()))?;
        fs::write(path, s).map_err(err)
    }
}
