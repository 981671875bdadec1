use std::fmt;

/// Keyboard key identifier.
///
/// The runtime maps platform keycodes into these variants where possible.
/// For unsupported keys, `Key::Unknown(u32)` carries a stable platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// Stable platform code when available (e.g. scancode).
        code: u32,
        /// True when event is a key-repeat.
        repeat: bool,
    },

    /// Window focus change.
    Focused(bool),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
