//! Color tint component for entity visuals.
//!
//! The [`Tint`] component carries the RGBA modulation color the renderer
//! applies when drawing an entity's sprite. Behavior states drive reveal and
//! flash effects by writing the alpha channel while leaving the color
//! channels untouched.

use bevy_ecs::prelude::Component;

/// RGBA tint applied to an entity's sprite at draw time.
///
/// Channels are 8-bit; `(255, 255, 255, 255)` is the identity tint.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Tint {
    /// Create a new Tint with the specified RGBA values.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// White tint with the given alpha. Color channels stay at full.
    pub fn white_with_alpha(a: u8) -> Self {
        Self::new(255, 255, 255, a)
    }

    /// Replace only the alpha channel.
    pub fn set_alpha(&mut self, a: u8) {
        self.a = a;
    }

    /// Multiply this tint with another tint (component-wise).
    pub fn multiply(&self, other: Tint) -> Tint {
        Tint::new(
            ((self.r as u16 * other.r as u16) / 255) as u8,
            ((self.g as u16 * other.g as u16) / 255) as u8,
            ((self.b as u16 * other.b as u16) / 255) as u8,
            ((self.a as u16 * other.a as u16) / 255) as u8,
        )
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self::new(255, 255, 255, 255)
    }
}
