//! Swappable behavior states for entities.
//!
//! A [`BehaviorState`] is a boxed state object with an enter/update/leave
//! lifecycle. States are generic over the entity they drive: they receive the
//! entity per call together with a [`BehaviorContext`] exposing the visual
//! and audio capabilities, and never store entity identity themselves.
//!
//! The [`Behavior`] component owns at most one active state per entity plus
//! the requests queued for it this frame. When several states are requested
//! concurrently, the driver promotes the one with the highest
//! [`BehaviorState::priority`]; a later request wins a tie.
//!
//! # Related
//!
//! - [`crate::systems::behavior`] – driver systems running the lifecycle
//! - [`crate::components::pixelin::PixelInState`] – concrete spawn-in state
//! - [`crate::events::behavior::BehaviorChangeEvent`] – emitted on swaps

use bevy_ecs::prelude::*;
use smallvec::SmallVec;
use std::fmt;

use crate::components::entityshader::EntityShader;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::events::audio::AudioCmd;
use crate::resources::texturestore::TextureStore;

/// Capability surface handed to behavior state callbacks.
///
/// Bundles the queries a state may touch on the entity it is driving: tint,
/// sprite sub-rectangle, texture dimensions, shader attachment (through
/// deferred commands) and the audio command queue. States depend on this
/// surface only, never on a concrete entity kind.
pub struct BehaviorContext<'a, 'w, 's> {
    pub commands: &'a mut Commands<'w, 's>,
    pub tints: &'a mut Query<'w, 's, &'static mut Tint>,
    pub sprites: &'a Query<'w, 's, &'static Sprite>,
    pub textures: &'a Res<'w, TextureStore>,
    pub audio: &'a mut MessageWriter<'w, AudioCmd>,
}

impl BehaviorContext<'_, '_, '_> {
    /// Attach (or replace) the entity's active shader.
    pub fn attach_shader(&mut self, entity: Entity, shader: EntityShader) {
        self.commands.entity(entity).insert(shader);
    }

    /// Detach whatever shader the entity carries. No-op when none is attached.
    pub fn detach_shader(&mut self, entity: Entity) {
        self.commands.entity(entity).remove::<EntityShader>();
    }
}

/// A swappable per-entity behavior with an enter/update/leave lifecycle.
///
/// Implementations must not hold on to the entity between calls; the driver
/// passes it in each time.
pub trait BehaviorState: Send + Sync {
    /// Arbitration rank when several states are requested in the same frame.
    fn priority(&self) -> i32;

    /// Called exactly once when the state becomes active.
    fn on_enter(&mut self, entity: Entity, ctx: &mut BehaviorContext<'_, '_, '_>);

    /// Called once per frame while active. `elapsed` is seconds since the
    /// previous update, never negative.
    fn on_update(&mut self, elapsed: f32, entity: Entity, ctx: &mut BehaviorContext<'_, '_, '_>);

    /// Called exactly once when the state is swapped out or popped,
    /// including externally-forced early exits.
    fn on_leave(&mut self, entity: Entity, ctx: &mut BehaviorContext<'_, '_, '_>);
}

/// Component holding an entity's active behavior state and pending requests.
///
/// Requests accumulate during a frame and are arbitrated by the driver on its
/// next run; losers are dropped without ever entering.
#[derive(Component, Default)]
pub struct Behavior {
    active: Option<Box<dyn BehaviorState>>,
    requested: SmallVec<[Box<dyn BehaviorState>; 2]>,
    pop_requested: bool,
}

impl Behavior {
    /// An entity with no behavior yet.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Queue `initial` so the driver enters it on its first run.
    pub fn with_initial(state: Box<dyn BehaviorState>) -> Self {
        let mut behavior = Self::default();
        behavior.request(state);
        behavior
    }

    /// Request a state change. Takes effect when the driver next runs; if
    /// other requests land in the same frame, the highest priority wins.
    pub fn request(&mut self, state: Box<dyn BehaviorState>) {
        self.requested.push(state);
    }

    /// Request removal of the active state without a replacement. Ignored if
    /// a state request is also pending this frame.
    pub fn pop(&mut self) {
        self.pop_requested = true;
    }

    /// Whether a state is currently active.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Priority of the active state, if any.
    pub fn active_priority(&self) -> Option<i32> {
        self.active.as_ref().map(|s| s.priority())
    }

    pub(crate) fn active_mut(&mut self) -> Option<&mut Box<dyn BehaviorState>> {
        self.active.as_mut()
    }

    pub(crate) fn take_active(&mut self) -> Option<Box<dyn BehaviorState>> {
        self.active.take()
    }

    pub(crate) fn set_active(&mut self, state: Box<dyn BehaviorState>) {
        self.active = Some(state);
    }

    pub(crate) fn take_pop_request(&mut self) -> bool {
        std::mem::take(&mut self.pop_requested)
    }

    /// Drain this frame's requests and return the winner of the priority
    /// arbitration. Later requests win ties.
    pub(crate) fn take_requested_winner(&mut self) -> Option<Box<dyn BehaviorState>> {
        let mut winner: Option<Box<dyn BehaviorState>> = None;
        for state in self.requested.drain(..) {
            match &winner {
                Some(current) if current.priority() > state.priority() => {}
                _ => winner = Some(state),
            }
        }
        winner
    }
}

impl fmt::Debug for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Behavior")
            .field("active_priority", &self.active_priority())
            .field("requested", &self.requested.len())
            .field("pop_requested", &self.pop_requested)
            .finish()
    }
}
