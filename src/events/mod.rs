//! Event and message types exchanged across systems.
//!
//! Messages (frame-queued, drained by readers) carry raw requests from the
//! external field loop; events (triggered, observed) announce resolved
//! outcomes. Delegation sits between the two: a command aimed at a shared
//! hitbox resolves into an event at its owner.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the external audio thread
//! - [`behavior`] – behavior state transition notifications
//! - [`combat`] – attack/hit commands, resolved events, hit properties
//! - [`movement`] – tile step requests

pub mod audio;
pub mod behavior;
pub mod combat;
pub mod movement;
