//! Field registry glue.
//!
//! The field owns entity lifecycles: gameplay systems only ever flag
//! entities with [`Deleted`], and [`purge_deleted`] performs the actual
//! despawn on the registry's next pass. This file also hosts the spawn
//! helper for delegated hit volumes.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::deleted::Deleted;
use crate::components::sharedhitbox::SharedHitbox;
use crate::components::tileoccupant::TileOccupant;
use crate::components::tileposition::TilePosition;

/// Drop a hit-delegating volume on `tile`, lingering for `duration` seconds.
///
/// The volume claims its tile in shared, unhighlighted mode so the owner
/// (and anyone else) can stand on it, and carries no mobility: it stays
/// where it was dropped until it expires or its owner disappears.
pub fn spawn_shared_hitbox(
    commands: &mut Commands,
    owner: Entity,
    tile: TilePosition,
    duration: f32,
) -> Entity {
    let entity = commands
        .spawn((
            SharedHitbox::new(owner, duration),
            tile,
            TileOccupant::shared_silent(),
        ))
        .id();
    debug!(
        "shared hitbox {:?} dropped by {:?} at {:?} for {}s",
        entity, owner, tile, duration
    );
    entity
}

/// Despawn every entity flagged with [`Deleted`].
///
/// Runs once per frame after all gameplay systems, so removal latency is at
/// most one frame after the flagging condition became true.
pub fn purge_deleted(flagged: Query<Entity, With<Deleted>>, mut commands: Commands) {
    for entity in flagged.iter() {
        commands.entity(entity).try_despawn();
    }
}
