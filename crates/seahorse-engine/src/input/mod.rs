//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Runtime code is responsible for translating platform events into `InputEvent`s.
//!
//! The viewer is keyboard-driven, so this module carries keyboard state only.
//! Pointer support can be added later without changing the existing types.

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState};
