//! Pixelated spawn-in reveal state.
//!
//! Battle entities enter the field behind a pixelation shader that resolves
//! into the full sprite over roughly 0.7 seconds. The state drives the
//! entity's tint alpha from 0 to 255 in lockstep with the shader's pixel
//! threshold, and fires a single completion callback the moment the reveal
//! finishes so the surrounding controller can swap in the entity's first
//! real behavior.

use bevy_ecs::prelude::Entity;
use std::sync::Arc;

use crate::components::behavior::{BehaviorContext, BehaviorState};
use crate::components::entityshader::EntityShader;
use crate::components::tint::Tint;
use crate::events::audio::{AudioCmd, SfxType};
use crate::resources::shaderstore::{ShaderEffect, ShaderStore, UniformValue};

/// Callback invoked once when the reveal completes.
pub type FinishNotifier = Box<dyn FnOnce() + Send + Sync>;

/// Arbitration rank of the spawn-in reveal among concurrently requested
/// behavior states.
pub const PIXEL_IN_PRIORITY: i32 = 2;

/// Reveal strength the state counts down from.
const START_FACTOR: f32 = 125.0;
/// Countdown speed in factor units per second.
const DECAY_PER_SECOND: f32 = 180.0;
/// Maps the remaining factor onto the shader's `pixel_threshold` uniform.
const THRESHOLD_DIVISOR: f32 = 400.0;

/// Timed transition state that pixel-reveals an entity.
///
/// The shader is resolved once at construction; if the store has no
/// pixelation shader registered the numeric reveal still runs, only the
/// shader attachment is skipped.
pub struct PixelInState {
    shader_key: Option<Arc<str>>,
    factor: f32,
    on_finish: Option<FinishNotifier>,
}

impl PixelInState {
    /// Resolve the pixelation shader and arm the completion callback.
    pub fn new(shaders: &ShaderStore, on_finish: FinishNotifier) -> Self {
        Self {
            shader_key: shaders.resolve(ShaderEffect::TexelPixelBlur),
            factor: START_FACTOR,
            on_finish: Some(on_finish),
        }
    }

    /// Remaining distance to full reveal, in `[0, 125]`.
    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Completion ratio in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        ((START_FACTOR - self.factor) / START_FACTOR).clamp(0.0, 1.0)
    }

    fn set_tint_alpha(&self, entity: Entity, ctx: &mut BehaviorContext<'_, '_, '_>, alpha: u8) {
        if let Ok(mut tint) = ctx.tints.get_mut(entity) {
            *tint = Tint::white_with_alpha(alpha);
        }
    }
}

impl BehaviorState for PixelInState {
    fn priority(&self) -> i32 {
        PIXEL_IN_PRIORITY
    }

    fn on_enter(&mut self, entity: Entity, ctx: &mut BehaviorContext<'_, '_, '_>) {
        ctx.audio.write(AudioCmd::PlayFx {
            fx: SfxType::Appear,
        });
        self.set_tint_alpha(entity, ctx, 0);
    }

    fn on_update(&mut self, elapsed: f32, entity: Entity, ctx: &mut BehaviorContext<'_, '_, '_>) {
        self.factor -= elapsed * DECAY_PER_SECOND;

        let finished = self.factor <= 0.0;
        if finished {
            self.factor = 0.0;

            if let Some(notify) = self.on_finish.take() {
                notify();
            }

            // Detached here as well as in on_leave: completion must leave no
            // lingering shader even if the controller never pops the state.
            ctx.detach_shader(entity);
        }

        let alpha = (255.0 * self.progress()).round() as u8;
        self.set_tint_alpha(entity, ctx, alpha);

        if cfg!(feature = "pixelate-gfx") && !finished {
            if let Some(key) = &self.shader_key {
                let mut shader = EntityShader::new(key.clone());
                if let Ok(sprite) = ctx.sprites.get(entity) {
                    if let Some(info) = ctx.textures.get(&sprite.tex_key) {
                        let tex_w = info.width as f32;
                        let tex_h = info.height as f32;
                        shader.set_uniform("x", UniformValue::Float(sprite.offset.x / tex_w));
                        shader.set_uniform("y", UniformValue::Float(sprite.offset.y / tex_h));
                        shader.set_uniform("w", UniformValue::Float(sprite.width / tex_w));
                        shader.set_uniform("h", UniformValue::Float(sprite.height / tex_h));
                    }
                }
                shader.set_uniform(
                    "pixel_threshold",
                    UniformValue::Float(self.factor / THRESHOLD_DIVISOR),
                );
                ctx.attach_shader(entity, shader);
            }
        }
    }

    fn on_leave(&mut self, entity: Entity, ctx: &mut BehaviorContext<'_, '_, '_>) {
        // Unconditional: covers forced early pops where completion never ran.
        ctx.detach_shader(entity);
    }
}
