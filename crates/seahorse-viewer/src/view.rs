//! View/camera state.
//!
//! The visible window of the complex plane is an orthographic region defined
//! by a zoom ratio and a pan offset. Both are integrated per frame from held
//! keys (or decayed automatically in auto-zoom mode) and turned into the
//! projection matrix uploaded to the shader.

use seahorse_engine::coords::Vec2;
use seahorse_engine::input::{InputState, Key};

/// Lower zoom clamp. Keeps the ortho window non-degenerate; `f32` precision
/// runs out well before this matters visually.
pub const MIN_RATIO: f32 = 1e-4;

/// Upper zoom clamp: the initial, fully zoomed-out view.
pub const MAX_RATIO: f32 = 1.0;

/// Per-frame multiplicative decay applied in auto-zoom mode.
pub const AUTO_ZOOM_DECAY: f32 = 0.9995;

/// Ratio floor where the auto-zoom animation parks.
pub const AUTO_ZOOM_FLOOR: f32 = 0.05;

/// How the camera evolves each frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CameraMode {
    /// Q/E zoom out/in, W/S vertical pan, A/D horizontal pan.
    Interactive,
    /// No input; the ratio decays every frame down to [`AUTO_ZOOM_FLOOR`].
    AutoZoom,
}

/// Continuous camera state: zoom ratio and pan offset.
#[derive(Debug, Copy, Clone)]
pub struct ViewState {
    pub mode: CameraMode,
    /// Half-extent of the visible ortho window; 1.0 shows the full quad.
    pub ratio: f32,
    /// Pan offset in world units.
    pub offset: Vec2,
}

impl ViewState {
    pub fn new(mode: CameraMode) -> Self {
        Self {
            mode,
            ratio: 1.0,
            offset: Vec2::zero(),
        }
    }

    /// Advances the camera by one frame.
    ///
    /// Zoom steps are multiplicative (`dt * ratio`) and pan steps scale with
    /// the current ratio, so both feel constant in screen space at any depth.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        match self.mode {
            CameraMode::Interactive => {
                if input.key_down(Key::Q) {
                    self.ratio = (self.ratio - dt * self.ratio).max(MIN_RATIO);
                } else if input.key_down(Key::E) {
                    self.ratio = (self.ratio + dt * self.ratio).min(MAX_RATIO);
                }

                if input.key_down(Key::W) {
                    self.offset.y -= dt * self.ratio;
                } else if input.key_down(Key::S) {
                    self.offset.y += dt * self.ratio;
                }
                if input.key_down(Key::A) {
                    self.offset.x += dt * self.ratio;
                } else if input.key_down(Key::D) {
                    self.offset.x -= dt * self.ratio;
                }
            }

            CameraMode::AutoZoom => {
                self.ratio = (self.ratio * AUTO_ZOOM_DECAY).max(AUTO_ZOOM_FLOOR);
            }
        }
    }

    /// Column-major orthographic projection for the current window:
    /// `ortho(-r - ox, r - ox, -r - oy, r - oy, 1, -1)`.
    pub fn projection(&self) -> [[f32; 4]; 4] {
        ortho(
            -self.ratio - self.offset.x,
            self.ratio - self.offset.x,
            -self.ratio - self.offset.y,
            self.ratio - self.offset.y,
            1.0,
            -1.0,
        )
    }
}

/// Column-major orthographic projection matrix.
///
/// With `near = 1, far = -1` the z row is the identity, which keeps the quad's
/// `z = 0` inside wgpu's `[0, 1]` clip range.
pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> [[f32; 4]; 4] {
    let rl = right - left;
    let tb = top - bottom;
    let fne = far - near;

    [
        [2.0 / rl, 0.0, 0.0, 0.0],
        [0.0, 2.0 / tb, 0.0, 0.0],
        [0.0, 0.0, -2.0 / fne, 0.0],
        [
            -(right + left) / rl,
            -(top + bottom) / tb,
            -(far + near) / fne,
            1.0,
        ],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use seahorse_engine::input::{InputEvent, InputFrame, KeyState};

    const DT: f32 = 1.0 / 60.0;

    fn held(keys: &[Key]) -> InputState {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        for &key in keys {
            state.apply_event(
                &mut frame,
                InputEvent::Key {
                    key,
                    state: KeyState::Pressed,
                    code: 0,
                    repeat: false,
                },
            );
        }
        state
    }

    // ── zoom ──────────────────────────────────────────────────────────────

    #[test]
    fn zoom_out_clamps_at_minimum_ratio() {
        let mut view = ViewState::new(CameraMode::Interactive);
        let input = held(&[Key::Q]);

        for _ in 0..100_000 {
            view.update(&input, DT);
        }

        assert!(view.ratio >= MIN_RATIO);
        assert!(view.ratio <= MIN_RATIO * 1.05);
    }

    #[test]
    fn zoom_in_caps_at_initial_ratio() {
        let mut view = ViewState::new(CameraMode::Interactive);
        let input = held(&[Key::E]);

        for _ in 0..1000 {
            view.update(&input, DT);
        }

        assert_eq!(view.ratio, MAX_RATIO);
    }

    #[test]
    fn zoom_step_is_multiplicative() {
        let mut view = ViewState::new(CameraMode::Interactive);
        view.ratio = 0.5;
        view.update(&held(&[Key::Q]), DT);
        assert!((view.ratio - 0.5 * (1.0 - DT)).abs() < 1e-6);
    }

    // ── pan ───────────────────────────────────────────────────────────────

    #[test]
    fn pan_rate_scales_with_ratio() {
        let mut deep = ViewState::new(CameraMode::Interactive);
        deep.ratio = 0.01;
        let mut shallow = ViewState::new(CameraMode::Interactive);
        shallow.ratio = 1.0;

        let input = held(&[Key::D]);
        deep.update(&input, DT);
        shallow.update(&input, DT);

        assert!((deep.offset.x + DT * 0.01).abs() < 1e-7);
        assert!((shallow.offset.x + DT).abs() < 1e-7);
    }

    #[test]
    fn opposing_pan_keys_prefer_first() {
        // W wins over S, A over D, matching held-key else-if polling.
        let mut view = ViewState::new(CameraMode::Interactive);
        view.update(&held(&[Key::W, Key::S]), DT);
        assert!(view.offset.y < 0.0);
    }

    #[test]
    fn idle_input_leaves_state_untouched() {
        let mut view = ViewState::new(CameraMode::Interactive);
        view.update(&InputState::default(), DT);
        assert_eq!(view.ratio, 1.0);
        assert_eq!(view.offset, Vec2::zero());
    }

    // ── auto zoom ─────────────────────────────────────────────────────────

    #[test]
    fn auto_zoom_converges_to_floor_and_stays() {
        let mut view = ViewState::new(CameraMode::AutoZoom);
        let input = InputState::default();

        for _ in 0..20_000 {
            view.update(&input, DT);
        }
        assert_eq!(view.ratio, AUTO_ZOOM_FLOOR);

        view.update(&input, DT);
        assert_eq!(view.ratio, AUTO_ZOOM_FLOOR);
    }

    #[test]
    fn auto_zoom_ignores_keys() {
        let mut view = ViewState::new(CameraMode::AutoZoom);
        view.update(&held(&[Key::W, Key::D]), DT);
        assert_eq!(view.offset, Vec2::zero());
    }

    // ── projection ────────────────────────────────────────────────────────

    #[test]
    fn initial_projection_is_identity_window() {
        let view = ViewState::new(CameraMode::Interactive);
        let m = view.projection();
        assert_eq!(m[0][0], 1.0);
        assert_eq!(m[1][1], 1.0);
        assert_eq!(m[2][2], 1.0);
        assert_eq!(m[3], [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn projection_tracks_zoom_and_offset() {
        let mut view = ViewState::new(CameraMode::Interactive);
        view.ratio = 0.5;
        view.offset = Vec2::new(0.25, -0.125);
        let m = view.projection();

        // Scale: 2 / (2 * ratio).
        assert!((m[0][0] - 2.0).abs() < 1e-6);
        assert!((m[1][1] - 2.0).abs() < 1e-6);

        // Translation: -(right + left) / (right - left) = offset / ratio.
        assert!((m[3][0] - 0.5).abs() < 1e-6);
        assert!((m[3][1] + 0.25).abs() < 1e-6);
    }
}
