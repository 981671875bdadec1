//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers) and draw through a
//! [`RenderCtx`] + [`RenderTarget`] pair handed out per frame by the engine.

mod ctx;

pub use ctx::{RenderCtx, RenderTarget};
