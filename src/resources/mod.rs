//! Shared ECS resources.
//!
//! Submodules:
//! - [`audio`] – channel bridge to the external audio thread
//! - [`fieldconfig`] – INI-backed battle field configuration
//! - [`shaderstore`] – effect-type to shader-key resolution plus uniform values
//! - [`texturestore`] – pixel dimensions of loaded textures
//! - [`worldtime`] – per-frame elapsed/delta bookkeeping

pub mod audio;
pub mod fieldconfig;
pub mod shaderstore;
pub mod texturestore;
pub mod worldtime;
