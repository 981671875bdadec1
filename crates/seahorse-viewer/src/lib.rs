//! Mandelbrot viewer built on `seahorse-engine`.
//!
//! The fractal math lives in [`fractal`] as pure functions mirroring the WGSL
//! shader, the camera in [`view`], and the GPU pass in [`renderer`]; [`app`]
//! ties them to the engine's frame loop.

pub mod app;
pub mod fractal;
pub mod renderer;
pub mod view;
