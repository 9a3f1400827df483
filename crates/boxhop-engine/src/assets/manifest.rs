use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Texture manifest: named textures and where their image files live.
/// Loaded from a JSON file at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureManifest {
    /// Named texture lookup: name → descriptor.
    #[serde(default)]
    pub textures: HashMap<String, TextureDescriptor>,
}

/// Describes a single texture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Path to the image file, relative to the manifest's directory.
    pub path: String,
}

impl TextureManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{
            "textures": {
                "player": { "path": "player.png" },
                "object": { "path": "tiles/object.png" }
            }
        }"#;
        let manifest = TextureManifest::from_json(json).unwrap();
        assert_eq!(manifest.textures.len(), 2);
        assert_eq!(manifest.textures["player"].path, "player.png");
        assert_eq!(manifest.textures["object"].path, "tiles/object.png");
    }

    #[test]
    fn parse_empty_manifest() {
        let manifest = TextureManifest::from_json("{}").unwrap();
        assert!(manifest.textures.is_empty());
    }
}
