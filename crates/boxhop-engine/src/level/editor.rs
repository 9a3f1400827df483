//! Headless level editor document.
//!
//! Holds the editable state behind an editor UI: placed fixtures, the
//! player spawn, a selection, and an undo stack. The UI layer maps clicks
//! and keys onto these operations; saving goes through the level text
//! format so edited levels round-trip through the same parser the game
//! loads with.

use std::path::Path;

use glam::Vec2;

use crate::api::types::RoleTag;
use crate::level::format::{FixtureDesc, LevelData};
use crate::systems::effects::Rng;

/// Size newly placed fixtures start with.
pub const DEFAULT_FIXTURE_SIZE: f32 = 50.0;
/// Smallest a fixture can be resized to, per axis.
pub const MIN_FIXTURE_SIZE: f32 = 10.0;

/// The editable document.
pub struct EditorDoc {
    player_pos: Vec2,
    fixtures: Vec<FixtureDesc>,
    selected: Option<usize>,
    active_role: RoleTag,
    undo_stack: Vec<(Vec2, Vec<FixtureDesc>)>,
}

impl EditorDoc {
    pub fn new(player_pos: Vec2) -> Self {
        Self {
            player_pos,
            fixtures: Vec::new(),
            selected: None,
            active_role: RoleTag::Obstacle,
            undo_stack: Vec::new(),
        }
    }

    /// Start editing an existing level.
    pub fn from_level(level: &LevelData) -> Self {
        Self {
            player_pos: level.spawn,
            fixtures: level.fixtures.clone(),
            selected: None,
            active_role: RoleTag::Obstacle,
            undo_stack: Vec::new(),
        }
    }

    pub fn player_pos(&self) -> Vec2 {
        self.player_pos
    }

    pub fn fixtures(&self) -> &[FixtureDesc] {
        &self.fixtures
    }

    pub fn selected(&self) -> Option<&FixtureDesc> {
        self.selected.and_then(|i| self.fixtures.get(i))
    }

    pub fn active_role(&self) -> RoleTag {
        self.active_role
    }

    /// Choose which fixture kind subsequent placements create.
    /// `Player` is not a fixture; selecting it is ignored.
    pub fn set_active_role(&mut self, role: RoleTag) {
        if role != RoleTag::Player {
            self.active_role = role;
        }
    }

    /// Place a new fixture of the active role at `pos` and select it.
    pub fn place(&mut self, pos: Vec2) {
        self.push_undo();
        self.fixtures.push(FixtureDesc {
            role: self.active_role,
            pos,
            size: Vec2::splat(DEFAULT_FIXTURE_SIZE),
        });
        self.selected = Some(self.fixtures.len() - 1);
    }

    /// Move the player spawn marker.
    pub fn set_player(&mut self, pos: Vec2) {
        self.push_undo();
        self.player_pos = pos;
    }

    /// Nudge the selected fixture.
    pub fn move_selected(&mut self, delta: Vec2) {
        if let Some(fixture) = self.selected.and_then(|i| self.fixtures.get_mut(i)) {
            fixture.pos += delta;
        }
    }

    /// Grow or shrink the selected fixture, clamped to the minimum size.
    pub fn resize_selected(&mut self, delta: Vec2) {
        if let Some(fixture) = self.selected.and_then(|i| self.fixtures.get_mut(i)) {
            fixture.size = (fixture.size + delta).max(Vec2::splat(MIN_FIXTURE_SIZE));
        }
    }

    /// Revert to the state before the most recent placement.
    pub fn undo(&mut self) {
        if let Some((player_pos, fixtures)) = self.undo_stack.pop() {
            self.player_pos = player_pos;
            self.fixtures = fixtures;
            self.selected = None;
        }
    }

    /// Snapshot the document as level data.
    pub fn to_level(&self) -> LevelData {
        LevelData {
            spawn: self.player_pos,
            fixtures: self.fixtures.clone(),
        }
    }

    /// Write the document to a level file.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_level().to_text())
    }

    fn push_undo(&mut self) {
        self.undo_stack.push((self.player_pos, self.fixtures.clone()));
    }
}

const NAME_ADJECTIVES: &[&str] = &[
    "realistic", "unmatched", "hydrogen", "light", "heavy", "rainy", "iron",
    "great", "amazing", "revised", "restored", "astronomic",
];
const NAME_MODIFIERS: &[&str] = &[
    "giga", "mega", "ultra", "systematic", "downward", "unexplored", "warped",
    "blessed", "silent", "loud", "compact",
];
const NAME_NOUNS: &[&str] = &[
    "level", "map", "world", "hellscape", "ruins", "spike pit", "island",
    "street", "continent", "frog", "zebra",
];

/// Generate a silly-but-unique-enough name for a freshly saved level.
pub fn random_level_name(rng: &mut Rng) -> String {
    let adjective = NAME_ADJECTIVES[rng.next_int(NAME_ADJECTIVES.len() as u32) as usize];
    let modifier = NAME_MODIFIERS[rng.next_int(NAME_MODIFIERS.len() as u32) as usize];
    let noun = NAME_NOUNS[rng.next_int(NAME_NOUNS.len() as u32) as usize];
    format!("{} {} {} {}", adjective, modifier, noun, rng.next_int(100_000))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn place_uses_active_role_and_selects() {
        let mut doc = EditorDoc::new(Vec2::new(540.0, 360.0));
        doc.place(Vec2::new(100.0, 100.0));
        assert_eq!(doc.fixtures().len(), 1);
        assert_eq!(doc.fixtures()[0].role, RoleTag::Obstacle);

        doc.set_active_role(RoleTag::Hazard);
        doc.place(Vec2::new(200.0, 100.0));
        assert_eq!(doc.fixtures()[1].role, RoleTag::Hazard);
        assert_eq!(doc.selected().unwrap().pos, Vec2::new(200.0, 100.0));
    }

    #[test]
    fn player_is_not_a_placeable_role() {
        let mut doc = EditorDoc::new(Vec2::ZERO);
        doc.set_active_role(RoleTag::Player);
        assert_eq!(doc.active_role(), RoleTag::Obstacle);
    }

    #[test]
    fn move_and_resize_selected() {
        let mut doc = EditorDoc::new(Vec2::ZERO);
        doc.place(Vec2::new(100.0, 100.0));
        doc.move_selected(Vec2::new(10.0, -5.0));
        doc.resize_selected(Vec2::new(20.0, 0.0));

        let fixture = doc.selected().unwrap();
        assert_eq!(fixture.pos, Vec2::new(110.0, 95.0));
        assert_eq!(fixture.size, Vec2::new(70.0, 50.0));
    }

    #[test]
    fn resize_clamps_to_minimum() {
        let mut doc = EditorDoc::new(Vec2::ZERO);
        doc.place(Vec2::ZERO);
        doc.resize_selected(Vec2::new(-500.0, -500.0));
        let fixture = doc.selected().unwrap();
        assert_eq!(fixture.size, Vec2::splat(MIN_FIXTURE_SIZE));
    }

    #[test]
    fn undo_reverts_the_last_placement() {
        let mut doc = EditorDoc::new(Vec2::ZERO);
        doc.place(Vec2::new(1.0, 1.0));
        doc.place(Vec2::new(2.0, 2.0));
        doc.undo();
        assert_eq!(doc.fixtures().len(), 1);
        doc.undo();
        assert!(doc.fixtures().is_empty());
        // Nothing left to undo: a no-op.
        doc.undo();
        assert!(doc.fixtures().is_empty());
    }

    #[test]
    fn save_round_trips_through_the_parser() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("draft.lvl");

        let mut doc = EditorDoc::new(Vec2::new(540.0, 360.0));
        doc.place(Vec2::new(100.0, 500.0));
        doc.set_active_role(RoleTag::Finish);
        doc.place(Vec2::new(900.0, 500.0));
        doc.save(&path).unwrap();

        let loaded = LevelData::load(&path).unwrap();
        assert_eq!(loaded, doc.to_level());
    }

    #[test]
    fn random_names_are_deterministic_per_seed() {
        let mut rng1 = Rng::new(99);
        let mut rng2 = Rng::new(99);
        let a = random_level_name(&mut rng1);
        let b = random_level_name(&mut rng2);
        assert_eq!(a, b);
        assert!(!a.is_empty());
        assert!(a.split(' ').count() >= 4);
    }
}
