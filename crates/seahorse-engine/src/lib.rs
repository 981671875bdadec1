//! Seahorse engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the viewer:
//! window/event loop, wgpu device and surface, keyboard input, frame timing.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
