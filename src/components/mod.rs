//! ECS components for battle entities.
//!
//! This module groups all component types that can be attached to entities on
//! the battle field. Capabilities are composable: a concrete entity kind
//! carries whichever subset of markers and data components applies to it.
//!
//! Submodules overview:
//! - [`behavior`] – swappable behavior states with enter/update/leave lifecycle
//! - [`combat`] – hittable marker and height capability
//! - [`deleted`] – flagged-for-removal marker honored by the purge pass
//! - [`entityshader`] – per-entity shader attachment with named uniforms
//! - [`mobile`] – marker for entities allowed to change tiles
//! - [`pixelin`] – pixelated spawn-in reveal behavior state
//! - [`sharedhitbox`] – transient volume delegating hits to its owner
//! - [`sprite`] – texture key and current sub-rectangle
//! - [`tileoccupant`] – tile sharing and highlight rules
//! - [`tileposition`] – battle-grid tile plus step directions
//! - [`tint`] – RGBA modulation color for rendering

pub mod behavior;
pub mod combat;
pub mod deleted;
pub mod entityshader;
pub mod mobile;
pub mod pixelin;
pub mod sharedhitbox;
pub mod sprite;
pub mod tileoccupant;
pub mod tileposition;
pub mod tint;
