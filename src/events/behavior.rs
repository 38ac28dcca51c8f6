//! Behavior state transition event.
//!
//! Triggered by
//! [`behavior_change_detector`](crate::systems::behavior::behavior_change_detector)
//! whenever an entity's active behavior state is swapped, entered for the
//! first time, or popped.
//!
//! # Usage
//!
//! ```ignore
//! fn on_behavior_change(trigger: On<BehaviorChangeEvent>, query: Query<&Behavior>) {
//!     let entity = trigger.event().entity;
//!     // react to the swap
//! }
//!
//! world.add_observer(on_behavior_change);
//! ```

use bevy_ecs::prelude::*;

/// Event emitted when an entity's behavior state changes.
#[derive(Event, Debug, Clone)]
pub struct BehaviorChangeEvent {
    /// The entity whose behavior state changed.
    pub entity: Entity,
}
