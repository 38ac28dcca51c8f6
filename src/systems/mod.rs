//! Battle subsystem systems.
//!
//! This module groups the ECS systems the external frame loop schedules each
//! tick.
//!
//! Submodules overview
//! - [`audio`] – bridge with the audio thread (forward/poll message queues)
//! - [`behavior`] – drive behavior state transitions and per-frame updates
//! - [`field`] – registry glue: hitbox spawning and deferred deletion
//! - [`movement`] – tile step requests, capability- and bounds-checked
//! - [`sharedhitbox`] – hitbox expiry plus attack/hit delegation
//! - [`time`] – update simulation time and delta

pub mod audio;
pub mod behavior;
pub mod field;
pub mod movement;
pub mod sharedhitbox;
pub mod time;
