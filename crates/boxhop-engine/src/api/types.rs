/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// Gameplay classification carried by every collision shape.
///
/// The tag drives both sides of the game: collision queries report the tags
/// of overlapping shapes, and frame building picks a placeholder color from
/// the tag when an entity has no usable texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleTag {
    Player,
    Obstacle,
    Hazard,
    Finish,
}

impl RoleTag {
    /// Keyword used for this role in the level text format.
    pub fn keyword(self) -> &'static str {
        match self {
            RoleTag::Player => "player",
            RoleTag::Obstacle => "object",
            RoleTag::Hazard => "spike",
            RoleTag::Finish => "finish",
        }
    }

    /// Parse a level-record keyword back into a role.
    pub fn from_keyword(keyword: &str) -> Option<RoleTag> {
        match keyword {
            "player" => Some(RoleTag::Player),
            "object" => Some(RoleTag::Obstacle),
            "spike" => Some(RoleTag::Hazard),
            "finish" => Some(RoleTag::Finish),
            _ => None,
        }
    }

    /// Solid fill used when an entity has no texture (or its texture failed
    /// to register).
    pub fn placeholder_color(self) -> [f32; 4] {
        match self {
            RoleTag::Player => [0.0, 1.0, 0.0, 1.0],
            RoleTag::Obstacle => [0.392, 0.392, 0.392, 1.0],
            RoleTag::Hazard => [1.0, 0.0, 0.0, 1.0],
            RoleTag::Finish => [0.0, 1.0, 0.0, 1.0],
        }
    }

    /// Encoding stored in a collider's `user_data` so overlap queries can
    /// classify shapes without a scene lookup.
    pub(crate) fn to_user_data(self) -> u128 {
        match self {
            RoleTag::Player => 1,
            RoleTag::Obstacle => 2,
            RoleTag::Hazard => 3,
            RoleTag::Finish => 4,
        }
    }

    pub(crate) fn from_user_data(raw: u128) -> Option<RoleTag> {
        match raw {
            1 => Some(RoleTag::Player),
            2 => Some(RoleTag::Obstacle),
            3 => Some(RoleTag::Hazard),
            4 => Some(RoleTag::Finish),
            _ => None,
        }
    }
}
