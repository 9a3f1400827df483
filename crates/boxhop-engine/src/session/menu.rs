//! Menu-layer glue: the level list, the score ledger, and the settings,
//! wired together so a frontend only has to say "play this id".
//!
//! Levels are a plain association list built once from a directory scan —
//! each entry pairs a level id with its file path, and the play call
//! captures everything else.

use std::path::{Path, PathBuf};

use crate::assets::registry::TextureRegistry;
use crate::level::format::{LevelData, LevelError};
use crate::level::library::{scan_levels, LevelEntry};
use crate::renderer::traits::Frontend;
use crate::session::run::{RunOutcome, Session};
use crate::session::scores::ScoreLedger;
use crate::session::settings::Settings;

/// Result of one play call: how the run ended, and whether it set a new
/// best time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayReport {
    pub outcome: RunOutcome,
    pub improved: bool,
}

/// The level-select screen's model: discovered levels, best times, and
/// the tick-rate setting.
pub struct LevelSelect {
    entries: Vec<LevelEntry>,
    ledger: ScoreLedger,
    settings: Settings,
}

impl LevelSelect {
    /// Scan the level directory and load the ledger and settings. Every
    /// discovered level is noted in the ledger so the display can show
    /// "no record" rows.
    pub fn load(levels_dir: &Path, ledger_path: impl Into<PathBuf>, settings_path: &Path) -> Self {
        let entries = scan_levels(levels_dir);
        let mut ledger = ScoreLedger::load(ledger_path);
        for entry in &entries {
            ledger.note_level(&entry.id);
        }
        let settings = Settings::load(settings_path);
        log::info!(
            "level select: {} levels, {} fps target",
            entries.len(),
            settings.fps
        );
        Self {
            entries,
            ledger,
            settings,
        }
    }

    /// The discovered levels, sorted by id.
    pub fn entries(&self) -> &[LevelEntry] {
        &self.entries
    }

    /// Best recorded time for a level, if any.
    pub fn best(&self, level_id: &str) -> Option<f64> {
        self.ledger.get_best(level_id)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Load, run and score one level.
    ///
    /// A `Finished` outcome is rounded to centiseconds and reported to the
    /// ledger; `improved` tells the caller whether its displayed record is
    /// stale. A `Quit` changes nothing.
    pub fn play(
        &mut self,
        level_id: &str,
        frontend: &mut dyn Frontend,
        registry: &TextureRegistry,
    ) -> Result<PlayReport, LevelError> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.id == level_id)
            .ok_or_else(|| {
                LevelError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("no level named `{}`", level_id),
                ))
            })?;

        let level = LevelData::load(&entry.path)?;
        let mut session = Session::new(&level, self.settings.fps);
        let outcome = session.run(frontend, registry);

        let improved = match outcome {
            RunOutcome::Finished(time) => {
                let time = (time as f64 * 100.0).round() / 100.0;
                self.ledger.report_finish(level_id, time)
            }
            RunOutcome::Quit => false,
        };

        Ok(PlayReport { outcome, improved })
    }
}
