//! Game settings, persisted as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Target tick rate used when no settings file says otherwise.
pub const DEFAULT_FPS: u32 = 60;

fn default_fps() -> u32 {
    DEFAULT_FPS
}

/// User-tunable configuration. Unknown fields in the file are ignored so
/// old builds can read newer settings files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Target tick rate of the run loop.
    #[serde(default = "default_fps")]
    pub fps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self { fps: DEFAULT_FPS }
    }
}

impl Settings {
    /// Load settings. Any problem — missing file, bad JSON — is logged and
    /// answered with the defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!(
                        "settings file {} is malformed ({}), using defaults",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                log::info!(
                    "no settings file at {} ({}), using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Write settings out as pretty JSON.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).expect("settings always serialize");
        std::fs::write(path, json)
    }
}
