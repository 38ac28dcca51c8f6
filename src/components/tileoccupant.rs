//! Tile occupancy rules.
//!
//! Most battle entities claim their tile exclusively and light it up while
//! standing on it. Transient volumes (lagging hitboxes, ground effects)
//! instead coexist with whatever walks in and stay visually silent.

use bevy_ecs::prelude::Component;

/// How an entity occupies its battle-grid tile.
#[derive(Component, Clone, Copy, Debug)]
pub struct TileOccupant {
    /// Other occupants (including the entity that spawned this one) may
    /// stand on the same tile.
    pub shareable: bool,
    /// Whether the renderer highlights the occupied tile.
    pub highlight: bool,
}

impl TileOccupant {
    /// Exclusive, highlighted occupancy. The default for characters.
    pub fn exclusive() -> Self {
        Self {
            shareable: false,
            highlight: true,
        }
    }

    /// Shared, unhighlighted occupancy used by delegated hit volumes.
    pub fn shared_silent() -> Self {
        Self {
            shareable: true,
            highlight: false,
        }
    }
}

impl Default for TileOccupant {
    fn default() -> Self {
        Self::exclusive()
    }
}
