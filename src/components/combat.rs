//! Combat capability components.
//!
//! Capabilities are independent markers rather than a type hierarchy: an
//! entity that can receive hits carries [`Hittable`], one that can change
//! tiles carries [`Mobile`](crate::components::mobile::Mobile), and so on.
//! Concrete entity kinds compose whichever subset applies.

use bevy_ecs::prelude::Component;

/// Marker: the entity can receive [`HitEvent`](crate::events::combat::HitEvent)s.
///
/// Liveness-filtered queries over this marker are the validity test used by
/// hit delegation; a flagged-for-removal entity no longer counts as hittable.
#[derive(Component, Clone, Copy, Debug)]
pub struct Hittable;

/// Height of the entity's hurtbox above the tile, in world units.
///
/// Optional. Entities without the component report the subsystem default
/// through [`height_of`].
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Height(pub f32);

/// Height reported for entities that carry no [`Height`] override.
pub const DEFAULT_HEIGHT: f32 = 0.0;

/// Resolve an entity's reported height from its optional override.
pub fn height_of(height: Option<&Height>) -> f32 {
    height.map_or(DEFAULT_HEIGHT, |h| h.0)
}
