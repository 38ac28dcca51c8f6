//! Hit-delegating volume component.
//!
//! Some attacks leave a lagging volume behind: the wave has moved on, but
//! the tile it crossed keeps hurting for a moment. A [`SharedHitbox`] is that
//! volume. It has no combat identity of its own; anything that touches it is
//! treated as if it touched the owner that dropped it, and anything that
//! hits it hits the owner. The volume expires on its own timer or the moment
//! the owner stops being live.
//!
//! # Related
//!
//! - [`crate::systems::sharedhitbox`] – per-frame update and delegation
//! - [`crate::systems::field::spawn_shared_hitbox`] – spawn helper

use bevy_ecs::prelude::{Component, Entity};

/// Transient collision volume that forwards combat effects to its owner.
///
/// The owner handle is non-owning: it is re-validated through a live-entity
/// lookup on every use and never extends the owner's lifetime.
#[derive(Component, Debug)]
pub struct SharedHitbox {
    owner: Entity,
    cooldown: f32,
}

impl SharedHitbox {
    /// Create a volume delegating to `owner` that lingers for `duration`
    /// seconds.
    pub fn new(owner: Entity, duration: f32) -> Self {
        Self {
            owner,
            cooldown: duration,
        }
    }

    /// The entity combat effects are forwarded to.
    pub fn owner(&self) -> Entity {
        self.owner
    }

    /// Seconds until self-expiry.
    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }

    /// Advance the expiry timer. Returns true once the volume has timed out.
    pub(crate) fn tick(&mut self, elapsed: f32) -> bool {
        self.cooldown -= elapsed;
        self.cooldown <= 0.0
    }
}
