use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Sprite is identified by a texture key plus the sub-rectangle of that
/// texture currently shown. `offset` is the top-left corner of the sub-rect
/// in texture pixels; `width`/`height` are the sub-rect size. Animation
/// advances `offset` across a spritesheet; effects read the sub-rect to
/// normalize shader coordinates against the full texture size kept in
/// [`TextureStore`](crate::resources::texturestore::TextureStore).
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vec2,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vec2::ZERO,
        }
    }

    /// Select a different frame of the spritesheet.
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }
}
