//! Shader resolution resource.
//!
//! The renderer owns the actual shader programs; this store only maps the
//! subsystem's effect enumeration onto the keys the renderer understands.
//! Effects resolve their key once (usually at state construction) and attach
//! it to entities through
//! [`EntityShader`](crate::components::entityshader::EntityShader).

use bevy_ecs::prelude::Resource;
use log::debug;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Uniform value pushed to a shader before drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Int(i32),
    Vec2([f32; 2]),
}

/// Shader effects the battle subsystem can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShaderEffect {
    /// Pixelation used by the spawn-in reveal.
    TexelPixelBlur,
    /// Solid white flash used as damage feedback.
    White,
}

/// Resource mapping shader effects to renderer shader keys.
///
/// Registration happens during setup, by whatever loads the shaders.
/// Resolution returns `None` for unregistered effects; callers degrade to
/// running without the visual.
#[derive(Resource, Default)]
pub struct ShaderStore {
    effects: FxHashMap<ShaderEffect, Arc<str>>,
}

impl ShaderStore {
    /// Creates a new empty shader store.
    pub fn new() -> Self {
        Self {
            effects: FxHashMap::default(),
        }
    }

    /// Map an effect to a renderer shader key, replacing any previous entry.
    pub fn register(&mut self, effect: ShaderEffect, key: impl Into<Arc<str>>) {
        let key = key.into();
        debug!("shader registered: {:?} -> {}", effect, key);
        self.effects.insert(effect, key);
    }

    /// Resolve the shader key for an effect.
    pub fn resolve(&self, effect: ShaderEffect) -> Option<Arc<str>> {
        self.effects.get(&effect).cloned()
    }

    /// Checks if an effect has a registered shader.
    pub fn contains(&self, effect: ShaderEffect) -> bool {
        self.effects.contains_key(&effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_resolve() {
        let mut store = ShaderStore::new();
        store.register(ShaderEffect::TexelPixelBlur, "texel_pixel_blur");
        assert_eq!(
            store.resolve(ShaderEffect::TexelPixelBlur).as_deref(),
            Some("texel_pixel_blur")
        );
        assert!(!store.contains(ShaderEffect::White));
    }

    #[test]
    fn test_unregistered_effect_resolves_to_none() {
        let store = ShaderStore::new();
        assert!(store.resolve(ShaderEffect::White).is_none());
    }
}
