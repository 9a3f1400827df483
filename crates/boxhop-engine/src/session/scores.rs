//! Best-time ledger.
//!
//! One JSON object mapping level id → best completion time in seconds, or
//! the literal string `"no record"` for levels played but never finished.
//! Read once at menu entry, rewritten in full on every improvement.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Sentinel written for a level with no recorded time yet.
pub const NO_RECORD: &str = "no record";

/// Stored value per level: either a time or the sentinel. Any string in
/// the file is treated as "no record yet".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredBest {
    Time(f64),
    Sentinel(String),
}

/// Persistent mapping of level id → best completion time.
pub struct ScoreLedger {
    path: PathBuf,
    records: BTreeMap<String, StoredBest>,
}

impl ScoreLedger {
    /// Load the ledger. A missing or unreadable file means "no records
    /// yet" — logged, never fatal.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(records) => records,
                Err(e) => {
                    log::warn!(
                        "score ledger {} is malformed ({}), starting fresh",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            },
            Err(e) => {
                log::info!(
                    "no score ledger at {} ({}), starting fresh",
                    path.display(),
                    e
                );
                BTreeMap::new()
            }
        };
        Self { path, records }
    }

    /// The best recorded time for a level, if any.
    pub fn get_best(&self, level_id: &str) -> Option<f64> {
        match self.records.get(level_id) {
            Some(StoredBest::Time(t)) => Some(*t),
            _ => None,
        }
    }

    /// Make sure a level appears in the ledger, with the sentinel if it
    /// has no time yet. Called for every discovered level file.
    pub fn note_level(&mut self, level_id: &str) {
        self.records
            .entry(level_id.to_string())
            .or_insert_with(|| StoredBest::Sentinel(NO_RECORD.to_string()));
    }

    /// Report a finished run. Records and persists the time only when it
    /// is strictly better than the existing best (or there is none).
    /// Returns whether an update occurred.
    pub fn report_finish(&mut self, level_id: &str, time: f64) -> bool {
        let improved = match self.get_best(level_id) {
            Some(best) => time < best,
            None => true,
        };
        if improved {
            self.records
                .insert(level_id.to_string(), StoredBest::Time(time));
            self.persist();
        }
        improved
    }

    /// Number of levels the ledger knows about (with or without a time).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn persist(&self) {
        let json = match serde_json::to_string_pretty(&self.records) {
            Ok(json) => json,
            Err(e) => {
                log::error!("failed to serialize score ledger: {}", e);
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, json) {
            log::error!(
                "failed to write score ledger {}: {}",
                self.path.display(),
                e
            );
        }
    }
}
