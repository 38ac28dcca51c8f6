//! Behavior state driver systems.
//!
//! This module provides the systems that run the
//! [`BehaviorState`](crate::components::behavior::BehaviorState) lifecycle:
//!
//! - [`behavior_change_detector`] – arbitrates pending state requests by
//!   priority, runs `on_leave`/`on_enter`, and triggers
//!   [`BehaviorChangeEvent`]
//! - [`behavior_update_system`] – runs `on_update` on each active state with
//!   the frame delta
//!
//! # System Ordering
//!
//! These systems should run in order each frame:
//! 1. `behavior_change_detector` – promote requests queued last frame
//! 2. `behavior_update_system` – tick the active states
//!
//! The surrounding controller guarantees at most one mutating state per
//! entity at a time; arbitration enforces it for concurrent requests by
//! promoting only the highest-priority one and dropping the rest unentered.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;

use crate::components::behavior::{Behavior, BehaviorContext};
use crate::components::deleted::Deleted;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::events::audio::AudioCmd;
use crate::events::behavior::BehaviorChangeEvent;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;

/// Bundled system parameters for behavior callback execution.
///
/// Aggregates the queries and resources needed to construct a
/// [`BehaviorContext`] for each callback invocation.
#[derive(SystemParam)]
pub struct BehaviorRunnerContext<'w, 's> {
    pub commands: Commands<'w, 's>,
    pub tints: Query<'w, 's, &'static mut Tint>,
    pub sprites: Query<'w, 's, &'static Sprite>,
    pub textures: Res<'w, TextureStore>,
    pub audio: MessageWriter<'w, AudioCmd>,
}

/// Detect and process behavior state changes.
///
/// For each entity with a [`Behavior`] component:
///
/// 1. If state requests are pending, the highest-priority one wins the
///    arbitration (later request wins ties). The outgoing state runs
///    `on_leave`, a [`BehaviorChangeEvent`] is triggered, and the winner
///    runs `on_enter` exactly once before becoming active. Losing requests
///    are dropped without entering. A pending pop is superseded.
/// 2. Otherwise, a pending pop removes the active state through `on_leave`
///    and triggers the change event.
///
/// # System Ordering
///
/// Should run **before** [`behavior_update_system`] each frame.
pub fn behavior_change_detector(
    mut query: Query<(Entity, &mut Behavior), Without<Deleted>>,
    mut context: BehaviorRunnerContext,
) {
    for (entity, mut behavior) in query.iter_mut() {
        if let Some(mut incoming) = behavior.take_requested_winner() {
            behavior.take_pop_request();

            if let Some(mut outgoing) = behavior.take_active() {
                outgoing.on_leave(
                    entity,
                    &mut BehaviorContext {
                        commands: &mut context.commands,
                        tints: &mut context.tints,
                        sprites: &context.sprites,
                        textures: &context.textures,
                        audio: &mut context.audio,
                    },
                );
            }

            context.commands.trigger(BehaviorChangeEvent { entity });

            incoming.on_enter(
                entity,
                &mut BehaviorContext {
                    commands: &mut context.commands,
                    tints: &mut context.tints,
                    sprites: &context.sprites,
                    textures: &context.textures,
                    audio: &mut context.audio,
                },
            );
            behavior.set_active(incoming);
        } else if behavior.take_pop_request() {
            if let Some(mut outgoing) = behavior.take_active() {
                outgoing.on_leave(
                    entity,
                    &mut BehaviorContext {
                        commands: &mut context.commands,
                        tints: &mut context.tints,
                        sprites: &context.sprites,
                        textures: &context.textures,
                        audio: &mut context.audio,
                    },
                );
                context.commands.trigger(BehaviorChangeEvent { entity });
            }
        }
    }
}

/// Run `on_update` on every active behavior state.
///
/// Passes the scaled frame delta from
/// [`WorldTime`](crate::resources::worldtime::WorldTime) as the elapsed
/// time.
///
/// # System Ordering
///
/// Should run **after** [`behavior_change_detector`] each frame.
pub fn behavior_update_system(
    time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Behavior), Without<Deleted>>,
    mut context: BehaviorRunnerContext,
) {
    for (entity, mut behavior) in query.iter_mut() {
        if let Some(state) = behavior.active_mut() {
            state.on_update(
                time.delta,
                entity,
                &mut BehaviorContext {
                    commands: &mut context.commands,
                    tints: &mut context.tints,
                    sprites: &context.sprites,
                    textures: &context.textures,
                    audio: &mut context.audio,
                },
            );
        }
    }
}
