//! Combat commands, resolved events, and hit payloads.
//!
//! The field writes [`AttackCmd`]/[`HitCmd`] messages when collision volumes
//! overlap. [`resolve_attacks`](crate::systems::sharedhitbox::resolve_attacks)
//! and [`resolve_hits`](crate::systems::sharedhitbox::resolve_hits) translate
//! them into [`AttackEvent`]/[`HitEvent`] triggers at the *resolved* receiver:
//! a command aimed at a shared hitbox lands on its owner instead. The combat
//! hierarchy (characters, spells) observes the events and applies damage.

use bevy_ecs::message::Message;
use bevy_ecs::prelude::*;

/// Modifier flags carried alongside hit damage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HitFlags {
    /// Interrupts the victim's current action.
    pub flinch: bool,
    /// Pushes the victim one tile back.
    pub recoil: bool,
}

/// Payload of a hit, forwarded verbatim through delegation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitProperties {
    pub damage: i32,
    pub flags: HitFlags,
}

impl HitProperties {
    pub fn new(damage: i32) -> Self {
        Self {
            damage,
            flags: HitFlags::default(),
        }
    }

    pub fn with_flags(mut self, flags: HitFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// Request: `attacker`'s volume touched `target`. Written by the field.
#[derive(Message, Debug, Clone, Copy)]
pub struct AttackCmd {
    pub attacker: Entity,
    pub target: Entity,
}

/// Request: `target` was struck with `props`. Written by the field.
#[derive(Message, Debug, Clone, Copy)]
pub struct HitCmd {
    pub target: Entity,
    pub props: HitProperties,
}

/// Resolved attack: `attacker` deals its damage to `target`.
///
/// `attacker` is always a combat identity, never a shared hitbox.
#[derive(Event, Debug, Clone, Copy)]
pub struct AttackEvent {
    pub attacker: Entity,
    pub target: Entity,
}

/// Resolved hit landing on `target`.
#[derive(Event, Debug, Clone, Copy)]
pub struct HitEvent {
    pub target: Entity,
    pub props: HitProperties,
}
