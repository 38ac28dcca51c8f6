//! Emberfield battle subsystem.
//!
//! Per-entity behavior states and hit-delegating volumes for a tile-based
//! real-time battle field, built on:
//! - **bevy_ecs** for entity-component-system architecture
//! - **crossbeam-channel** for the bridge to the external audio thread
//! - **configparser** for the INI-backed field configuration
//!
//! The crate is a library: the surrounding engine owns the window, renderer,
//! audio device and frame loop, and schedules the systems exposed here once
//! per frame.
//!
//! # Structure
//!
//! - [`components`] – capability components, behavior states, shared hitbox
//! - [`events`] – messages written by the field and events observed by the
//!   combat hierarchy
//! - [`resources`] – world time, shader/texture stores, field config, audio
//!   bridge
//! - [`systems`] – per-frame systems in their scheduling order
//!
//! # Frame
//!
//! 1. [`systems::time::update_world_time`]
//! 2. [`systems::behavior::behavior_change_detector`] then
//!    [`systems::behavior::behavior_update_system`]
//! 3. [`systems::sharedhitbox::shared_hitbox_update`], then the combat
//!    resolution systems
//! 4. audio forwarding and message-queue updates
//! 5. [`systems::field::purge_deleted`]

pub mod components;
pub mod events;
pub mod resources;
pub mod systems;
