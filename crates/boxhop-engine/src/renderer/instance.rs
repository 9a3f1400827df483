use bytemuck::{Pod, Zeroable};

/// Per-instance sprite data, laid out for direct instance-buffer upload by
/// a GPU frontend. 10 floats = 40 bytes stride.
///
/// `texture` is the registry slot to sample from, or `SOLID_FILL` for an
/// untextured rectangle filled with `r/g/b/a`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SpriteInstance {
    /// X position of the box center in world space.
    pub x: f32,
    /// Y position of the box center in world space.
    pub y: f32,
    /// Rotation in radians.
    pub rotation: f32,
    /// Full width in world units.
    pub width: f32,
    /// Full height in world units.
    pub height: f32,
    /// Texture slot index, or `SOLID_FILL` (-1.0).
    pub texture: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl SpriteInstance {
    pub const FLOATS: usize = 10;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
    /// Sentinel texture slot for solid-color rectangles.
    pub const SOLID_FILL: f32 = -1.0;
}

/// Reusable buffer of sprite instances, rebuilt every frame.
pub struct RenderBuffer {
    instances: Vec<SpriteInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(128),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: SpriteInstance) {
        self.instances.push(instance);
    }

    pub fn instances(&self) -> &[SpriteInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
