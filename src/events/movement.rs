//! Tile step request message.

use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;

use crate::components::tileposition::Direction;

/// Request to step `entity` one tile in `direction`.
///
/// Processed by [`movement_system`](crate::systems::movement::movement_system);
/// refused for entities without the
/// [`Mobile`](crate::components::mobile::Mobile) capability or when the step
/// would leave the field.
#[derive(Message, Debug, Clone, Copy)]
pub struct MoveCmd {
    pub entity: Entity,
    pub direction: Direction,
}
