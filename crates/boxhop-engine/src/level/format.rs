//! Level text format.
//!
//! A level is a sequence of semicolon-terminated records; newlines are
//! cosmetic and stripped before splitting. Record shapes:
//!
//! ```text
//! player <x> <y>;
//! object <x> <y> <w> <h>;
//! spike  <x> <y> <w> <h>;
//! finish <x> <y> <w> <h>;
//! ```
//!
//! Exactly one `player` record is required. Any malformed record aborts the
//! parse — a partially loaded level is worse than no level.

use std::fmt;
use std::path::Path;

use glam::Vec2;

use crate::api::types::RoleTag;

/// A static level fixture: obstacle, hazard or finish zone.
/// The role is never `Player` — the parser routes player records into the
/// spawn position instead.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureDesc {
    pub role: RoleTag,
    pub pos: Vec2,
    pub size: Vec2,
}

/// Parsed level: the player spawn position plus the static fixtures, in
/// file order.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelData {
    pub spawn: Vec2,
    pub fixtures: Vec<FixtureDesc>,
}

/// Everything that can go wrong turning a level file into a `LevelData`.
#[derive(Debug)]
pub enum LevelError {
    Io(std::io::Error),
    /// A record with an unknown keyword, wrong field count or non-numeric
    /// coordinate. Carries the offending record verbatim.
    BadRecord { record: String, reason: String },
    /// No `player` record in the level.
    MissingSpawn,
    /// More than one `player` record in the level.
    DuplicateSpawn,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Io(e) => write!(f, "level file unreadable: {}", e),
            LevelError::BadRecord { record, reason } => {
                write!(f, "bad level record `{}`: {}", record, reason)
            }
            LevelError::MissingSpawn => write!(f, "level has no player record"),
            LevelError::DuplicateSpawn => write!(f, "level has more than one player record"),
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LevelError {
    fn from(e: std::io::Error) -> Self {
        LevelError::Io(e)
    }
}

fn parse_number(record: &str, field: &str) -> Result<f32, LevelError> {
    field.parse::<f32>().map_err(|_| LevelError::BadRecord {
        record: record.to_string(),
        reason: format!("`{}` is not a number", field),
    })
}

fn expect_fields(record: &str, fields: &[&str], expected: usize) -> Result<(), LevelError> {
    if fields.len() == expected {
        Ok(())
    } else {
        Err(LevelError::BadRecord {
            record: record.to_string(),
            reason: format!("expected {} fields, got {}", expected, fields.len()),
        })
    }
}

impl LevelData {
    /// Parse level text. Newlines anywhere (even inside a record) are
    /// stripped first; records are then split on `;`.
    pub fn parse(text: &str) -> Result<Self, LevelError> {
        let flat: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();

        let mut spawn = None;
        let mut fixtures = Vec::new();

        for record in flat.split(';') {
            let record = record.trim();
            if record.is_empty() {
                continue;
            }
            let fields: Vec<&str> = record.split_whitespace().collect();

            match RoleTag::from_keyword(fields[0]) {
                Some(RoleTag::Player) => {
                    expect_fields(record, &fields, 3)?;
                    if spawn.is_some() {
                        return Err(LevelError::DuplicateSpawn);
                    }
                    spawn = Some(Vec2::new(
                        parse_number(record, fields[1])?,
                        parse_number(record, fields[2])?,
                    ));
                }
                Some(role) => {
                    expect_fields(record, &fields, 5)?;
                    fixtures.push(FixtureDesc {
                        role,
                        pos: Vec2::new(
                            parse_number(record, fields[1])?,
                            parse_number(record, fields[2])?,
                        ),
                        size: Vec2::new(
                            parse_number(record, fields[3])?,
                            parse_number(record, fields[4])?,
                        ),
                    });
                }
                None => {
                    return Err(LevelError::BadRecord {
                        record: record.to_string(),
                        reason: format!("unknown record type `{}`", fields[0]),
                    });
                }
            }
        }

        Ok(LevelData {
            spawn: spawn.ok_or(LevelError::MissingSpawn)?,
            fixtures,
        })
    }

    /// Read and parse a level file.
    pub fn load(path: &Path) -> Result<Self, LevelError> {
        Self::parse(&std::fs::read_to_string(path)?)
    }

    /// Serialize back to the text format, one record per line.
    /// `parse(to_text(level))` reproduces the level exactly.
    pub fn to_text(&self) -> String {
        let mut out = format!("player {} {};\n", self.spawn.x, self.spawn.y);
        for fixture in &self.fixtures {
            out.push_str(&format!(
                "{} {} {} {} {};\n",
                fixture.role.keyword(),
                fixture.pos.x,
                fixture.pos.y,
                fixture.size.x,
                fixture.size.y,
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_level() {
        let level = LevelData::parse("player 100 200;").unwrap();
        assert_eq!(level.spawn, Vec2::new(100.0, 200.0));
        assert!(level.fixtures.is_empty());
    }

    #[test]
    fn parse_full_level() {
        let text = "player 540 100;\n\
                    object 540 600 800 50;\n\
                    spike 300 560 40 30;\n\
                    finish 900 550 50 50;\n";
        let level = LevelData::parse(text).unwrap();
        assert_eq!(level.spawn, Vec2::new(540.0, 100.0));
        assert_eq!(level.fixtures.len(), 3);
        assert_eq!(level.fixtures[0].role, RoleTag::Obstacle);
        assert_eq!(level.fixtures[0].size, Vec2::new(800.0, 50.0));
        assert_eq!(level.fixtures[1].role, RoleTag::Hazard);
        assert_eq!(level.fixtures[2].role, RoleTag::Finish);
        assert_eq!(level.fixtures[2].pos, Vec2::new(900.0, 550.0));
    }

    #[test]
    fn newlines_inside_records_are_tolerated() {
        let level = LevelData::parse("player 10\n 20;object 1 2\n 3 4;").unwrap();
        assert_eq!(level.spawn, Vec2::new(10.0, 20.0));
        assert_eq!(level.fixtures.len(), 1);
    }

    #[test]
    fn negative_and_fractional_coordinates() {
        let level = LevelData::parse("player -10.5 0.25; object -1 -2 3.5 4;").unwrap();
        assert_eq!(level.spawn, Vec2::new(-10.5, 0.25));
        assert_eq!(level.fixtures[0].pos, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn missing_spawn_is_an_error() {
        let err = LevelData::parse("object 1 2 3 4;").unwrap_err();
        assert!(matches!(err, LevelError::MissingSpawn));
    }

    #[test]
    fn duplicate_spawn_is_an_error() {
        let err = LevelData::parse("player 1 2; player 3 4;").unwrap_err();
        assert!(matches!(err, LevelError::DuplicateSpawn));
    }

    #[test]
    fn wrong_field_count_names_the_record() {
        let err = LevelData::parse("player 1 2; spike 1 2 3;").unwrap_err();
        match err {
            LevelError::BadRecord { record, .. } => assert_eq!(record, "spike 1 2 3"),
            other => panic!("expected BadRecord, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_coordinate_names_the_field() {
        let err = LevelData::parse("player 1 two;").unwrap_err();
        match err {
            LevelError::BadRecord { reason, .. } => assert!(reason.contains("two")),
            other => panic!("expected BadRecord, got {:?}", other),
        }
    }

    #[test]
    fn unknown_keyword_is_an_error() {
        let err = LevelData::parse("player 1 2; teleporter 1 2 3 4;").unwrap_err();
        assert!(matches!(err, LevelError::BadRecord { .. }));
    }

    #[test]
    fn text_round_trip_is_exact() {
        let text = "player 540 100;\n\
                    object 540.5 600 800 50;\n\
                    spike -300 560.25 40 30;\n\
                    finish 900 550 50 50;\n";
        let level = LevelData::parse(text).unwrap();
        let reparsed = LevelData::parse(&level.to_text()).unwrap();
        assert_eq!(level, reparsed);
    }
}
