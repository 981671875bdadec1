//! Small geometry and color types shared between the engine and renderers.
//!
//! `Vec2` is unit-agnostic: the viewer uses it both for the complex-plane
//! coordinate fed to the fractal recurrence and for the world-space pan offset.

mod color;
mod vec2;

pub use color::ColorRgba;
pub use vec2::Vec2;
