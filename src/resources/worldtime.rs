use bevy_ecs::prelude::Resource;

/// Simulation clock updated once per frame by
/// [`update_world_time`](crate::systems::time::update_world_time).
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    /// Scaled seconds since the world started.
    pub elapsed: f32,
    /// Scaled seconds since the previous frame.
    pub delta: f32,
    /// Multiplier applied to incoming frame deltas (slow-motion, pause).
    pub time_scale: f32,
    /// Frames processed so far.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}
