//! Mobility capability marker.

use bevy_ecs::prelude::Component;

/// Tag component for entities allowed to change tiles.
///
/// Movement requests on entities without this component always fail, which
/// is how fixed volumes (delegated hitboxes, ground hazards) stay where they
/// were dropped.
#[derive(Component, Clone, Copy, Debug)]
pub struct Mobile;
