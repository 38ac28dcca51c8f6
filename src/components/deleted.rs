//! Deletion flag marker component.
//!
//! Entities are never despawned mid-frame by gameplay systems. They are
//! flagged with [`Deleted`] and the field's purge pass removes them on its
//! next run. Liveness checks therefore test "exists and not flagged", never
//! bare existence, so a back-reference to a flagged-but-not-yet-purged
//! entity already reads as invalid.

use bevy_ecs::prelude::Component;

/// Tag component marking an entity for removal by the purge pass.
#[derive(Component, Clone, Copy, Debug)]
pub struct Deleted;
