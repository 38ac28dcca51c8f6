//! Per-entity shader component.
//!
//! Attaching [`EntityShader`] makes the renderer draw the entity through the
//! referenced shader; removing the component detaches the effect. Uniform
//! values set here are pushed to the shader right before the draw call, so
//! effect code can update them every frame without touching the renderer.

use bevy_ecs::prelude::Component;
use rustc_hash::FxHashMap;
use std::sync::Arc;

use crate::resources::shaderstore::UniformValue;

/// Component that attaches a shader to an individual entity.
///
/// Absence of this component means the entity renders with no shader.
/// Systems that need "no lingering shader" semantics remove it outright
/// rather than clearing fields.
#[derive(Component, Clone, Debug)]
pub struct EntityShader {
    /// Key referencing a shader known to the external renderer.
    pub shader_key: Arc<str>,
    /// Named uniform values pushed to the shader before drawing.
    pub uniforms: FxHashMap<Arc<str>, UniformValue>,
}

impl EntityShader {
    /// Create a new EntityShader with the given shader key and no uniforms.
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self {
            shader_key: key.into(),
            uniforms: FxHashMap::default(),
        }
    }

    /// Set a named uniform, replacing any previous value.
    pub fn set_uniform(&mut self, name: impl Into<Arc<str>>, value: UniformValue) {
        self.uniforms.insert(name.into(), value);
    }

    /// Read back a uniform by name.
    pub fn uniform(&self, name: &str) -> Option<&UniformValue> {
        self.uniforms.get(name)
    }
}
