//! Shared hitbox systems: expiry and combat delegation.
//!
//! # System Flow
//!
//! Each frame:
//!
//! 1. [`shared_hitbox_update`] decrements every hitbox's cooldown and checks
//!    its owner's liveness; timed-out or orphaned volumes are flagged
//!    [`Deleted`] on that same evaluation. The purge pass despawns them on
//!    its next run.
//! 2. [`resolve_attacks`] / [`resolve_hits`] drain the field's combat
//!    command queues and trigger the resolved events. Commands involving a
//!    shared hitbox land on its owner instead of the volume.
//!
//! Liveness is always "exists and not flagged": an owner that was flagged
//! earlier in the frame but not yet purged already counts as gone.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::combat::Hittable;
use crate::components::deleted::Deleted;
use crate::components::sharedhitbox::SharedHitbox;
use crate::events::combat::{AttackCmd, AttackEvent, HitCmd, HitEvent};
use crate::resources::worldtime::WorldTime;

/// Tick hitbox cooldowns and flag expired or orphaned volumes.
///
/// A hitbox is flagged for removal on the evaluation where its cooldown
/// first crosses zero, or on the first evaluation after its owner stopped
/// being live, whichever comes first. The flag is a marker insert; actual
/// despawning is the purge pass's job.
pub fn shared_hitbox_update(
    time: Res<WorldTime>,
    mut hitboxes: Query<(Entity, &mut SharedHitbox), Without<Deleted>>,
    live: Query<(), Without<Deleted>>,
    mut commands: Commands,
) {
    for (entity, mut hitbox) in hitboxes.iter_mut() {
        let expired = hitbox.tick(time.delta);
        let orphaned = !live.contains(hitbox.owner());
        if expired || orphaned {
            debug!(
                "shared hitbox {:?} flagged (expired: {}, orphaned: {})",
                entity, expired, orphaned
            );
            commands.entity(entity).insert(Deleted);
        }
    }
}

/// Attack target after delegation, or `None` when the attack must not land.
///
/// An owner never receives an attack from its own delegate, and a volume
/// whose owner is no longer live attacks nobody.
pub fn delegated_attack_target(
    hitbox: &SharedHitbox,
    target: Entity,
    live: &Query<(), Without<Deleted>>,
) -> Option<Entity> {
    if target == hitbox.owner() {
        return None;
    }
    live.contains(hitbox.owner()).then_some(target)
}

/// Receiver of a hit aimed at a shared hitbox, or `None` when the hit has no
/// effect because the owner is gone or cannot be hit.
pub fn delegated_hit_receiver(
    hitbox: &SharedHitbox,
    hittables: &Query<(), (With<Hittable>, Without<Deleted>)>,
) -> Option<Entity> {
    hittables.contains(hitbox.owner()).then_some(hitbox.owner())
}

/// Resolve queued attack commands into [`AttackEvent`] triggers.
///
/// A command whose attacker is a shared hitbox is forwarded so the owner
/// deals the damage; exactly one event is triggered per delegated command.
pub fn resolve_attacks(
    mut reader: MessageReader<AttackCmd>,
    hitboxes: Query<&SharedHitbox>,
    live: Query<(), Without<Deleted>>,
    mut commands: Commands,
) {
    for cmd in reader.read() {
        match hitboxes.get(cmd.attacker) {
            Ok(hitbox) => {
                if let Some(target) = delegated_attack_target(hitbox, cmd.target, &live) {
                    commands.trigger(AttackEvent {
                        attacker: hitbox.owner(),
                        target,
                    });
                }
            }
            Err(_) => {
                commands.trigger(AttackEvent {
                    attacker: cmd.attacker,
                    target: cmd.target,
                });
            }
        }
    }
}

/// Resolve queued hit commands into [`HitEvent`] triggers.
///
/// A hit aimed at a shared hitbox lands on its owner when the owner is live
/// and hittable; otherwise it is dropped. Hits aimed directly at entities
/// land iff the entity itself is hittable.
pub fn resolve_hits(
    mut reader: MessageReader<HitCmd>,
    hitboxes: Query<&SharedHitbox>,
    hittables: Query<(), (With<Hittable>, Without<Deleted>)>,
    mut commands: Commands,
) {
    for cmd in reader.read() {
        match hitboxes.get(cmd.target) {
            Ok(hitbox) => {
                if let Some(receiver) = delegated_hit_receiver(hitbox, &hittables) {
                    commands.trigger(HitEvent {
                        target: receiver,
                        props: cmd.props,
                    });
                }
            }
            Err(_) => {
                if hittables.contains(cmd.target) {
                    commands.trigger(HitEvent {
                        target: cmd.target,
                        props: cmd.props,
                    });
                }
            }
        }
    }
}

/// Advance the combat message queues so same-frame writes become readable.
pub fn update_combat_messages(
    mut attacks: ResMut<Messages<AttackCmd>>,
    mut hits: ResMut<Messages<HitCmd>>,
) {
    attacks.update();
    hits.update();
}
