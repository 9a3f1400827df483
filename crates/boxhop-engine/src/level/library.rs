//! Level discovery: a directory listing turned into a plain association
//! list of level id → file path. The menu layer iterates this to build its
//! buttons; nothing here knows about widgets.

use std::path::{Path, PathBuf};

/// File extension of level files (without the dot).
pub const LEVEL_EXT: &str = "lvl";

/// One playable level on disk. The id is the file stem and doubles as the
/// score ledger key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelEntry {
    pub id: String,
    pub path: PathBuf,
}

/// Scan a directory for level files, sorted by id.
/// An unreadable directory is logged and yields an empty list.
pub fn scan_levels(dir: &Path) -> Vec<LevelEntry> {
    let mut entries = Vec::new();

    let read = match std::fs::read_dir(dir) {
        Ok(read) => read,
        Err(e) => {
            log::warn!("level directory {} unreadable: {}", dir.display(), e);
            return entries;
        }
    };

    for entry in read.filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some(LEVEL_EXT) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            entries.push(LevelEntry {
                id: stem.to_string(),
                path,
            });
        }
    }

    entries.sort_by(|a, b| a.id.cmp(&b.id));
    entries
}
