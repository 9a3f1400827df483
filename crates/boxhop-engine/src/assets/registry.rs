use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::assets::manifest::TextureManifest;

/// Slot index of a registered texture; what frame building writes into
/// sprite instances and what the frontend uploads images against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// A registered texture: its name and the image file to upload.
#[derive(Debug, Clone)]
pub struct TextureSlot {
    pub name: String,
    pub path: PathBuf,
}

/// Registry of named textures, built from a `TextureManifest`.
///
/// Registration only verifies the file is readable; decoding and upload
/// are the frontend's business. A texture that fails to register simply
/// resolves to `None`, so entities fall back to their role's placeholder
/// color — asset trouble never stops a run.
pub struct TextureRegistry {
    slots: Vec<TextureSlot>,
    by_name: HashMap<String, TextureId>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Build a registry from a parsed manifest, resolving paths against
    /// `base_dir`. Unreadable files are logged and skipped.
    pub fn from_manifest(manifest: &TextureManifest, base_dir: &Path) -> Self {
        let mut registry = Self::new();
        // Sort for a stable slot order across runs.
        let mut names: Vec<&String> = manifest.textures.keys().collect();
        names.sort();
        for name in names {
            registry.register(name, base_dir.join(&manifest.textures[name].path));
        }
        registry
    }

    /// Register a texture by name. Returns the slot on success, `None`
    /// (logged) when the file is missing or unreadable.
    pub fn register(&mut self, name: &str, path: impl Into<PathBuf>) -> Option<TextureId> {
        let path = path.into();
        let readable = std::fs::metadata(&path)
            .map(|m| m.is_file())
            .unwrap_or(false);
        if !readable {
            log::warn!(
                "texture {:?}: {} is not readable, falling back to placeholder",
                name,
                path.display()
            );
            return None;
        }

        let id = TextureId(self.slots.len() as u32);
        self.slots.push(TextureSlot {
            name: name.to_string(),
            path,
        });
        self.by_name.insert(name.to_string(), id);
        Some(id)
    }

    /// Look up a texture slot by name.
    pub fn get(&self, name: &str) -> Option<TextureId> {
        self.by_name.get(name).copied()
    }

    /// All registered slots, in slot order (for frontend upload).
    pub fn slots(&self) -> &[TextureSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}
