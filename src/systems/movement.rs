//! Tile movement system.
//!
//! Movement on the battle grid is request-based: the field (or an input
//! controller) writes [`MoveCmd`](crate::events::movement::MoveCmd) messages
//! and [`movement_system`] applies them. A step succeeds only for entities
//! carrying the [`Mobile`](crate::components::mobile::Mobile) capability and
//! only onto tiles inside the configured field.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::deleted::Deleted;
use crate::components::mobile::Mobile;
use crate::components::tileposition::{Direction, TilePosition};
use crate::events::movement::MoveCmd;
use crate::resources::fieldconfig::FieldConfig;

/// Attempt a single tile step.
///
/// Returns false without touching the position when the entity has no
/// [`Mobile`] capability or the destination lies off the field.
pub fn try_step(
    position: &mut TilePosition,
    mobile: Option<&Mobile>,
    direction: Direction,
    config: &FieldConfig,
) -> bool {
    if mobile.is_none() {
        return false;
    }
    let next = position.stepped(direction);
    if !config.in_bounds(next) {
        return false;
    }
    *position = next;
    true
}

/// Apply queued tile step requests.
pub fn movement_system(
    mut reader: MessageReader<MoveCmd>,
    mut positions: Query<&mut TilePosition, Without<Deleted>>,
    mobiles: Query<&Mobile>,
    config: Res<FieldConfig>,
) {
    for cmd in reader.read() {
        let Ok(mut position) = positions.get_mut(cmd.entity) else {
            continue;
        };
        let moved = try_step(
            &mut position,
            mobiles.get(cmd.entity).ok(),
            cmd.direction,
            &config,
        );
        if !moved {
            debug!("move refused: {:?} {:?}", cmd.entity, cmd.direction);
        }
    }
}

/// Advance the move message queue so same-frame writes become readable.
pub fn update_move_messages(mut moves: ResMut<Messages<MoveCmd>>) {
    moves.update();
}
