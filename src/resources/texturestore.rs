//! Texture metadata resource.
//!
//! Texture contents live with the renderer; effects only need the full pixel
//! dimensions of a texture to normalize sub-rectangle coordinates into
//! shader uniforms. The loader registers dimensions here as textures come in.

use bevy_ecs::prelude::Resource;
use log::debug;
use rustc_hash::FxHashMap;

/// Pixel dimensions of a loaded texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextureInfo {
    pub width: u32,
    pub height: u32,
}

/// Resource storing pixel dimensions of loaded textures by key.
#[derive(Resource, Default)]
pub struct TextureStore {
    textures: FxHashMap<String, TextureInfo>,
}

impl TextureStore {
    /// Creates a new empty texture store.
    pub fn new() -> Self {
        Self {
            textures: FxHashMap::default(),
        }
    }

    /// Record the dimensions of a texture, replacing any previous entry.
    pub fn register(&mut self, key: impl Into<String>, width: u32, height: u32) {
        let key = key.into();
        debug!("texture registered: {} ({}x{})", key, width, height);
        self.textures.insert(key, TextureInfo { width, height });
    }

    /// Dimensions of a texture by key.
    pub fn get(&self, key: &str) -> Option<&TextureInfo> {
        self.textures.get(key)
    }

    /// Checks if a texture with the given key is known.
    pub fn contains(&self, key: &str) -> bool {
        self.textures.contains_key(key)
    }
}
