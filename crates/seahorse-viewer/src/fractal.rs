//! Escape-time Mandelbrot evaluation.
//!
//! The GPU shader (`shaders/mandelbrot.wgsl`) is the production evaluator; the
//! functions here are its exact CPU mirror so the per-pixel mapping
//! `(c.x, c.y) -> intensity` stays testable as a pure function.

use seahorse_engine::coords::Vec2;

/// Maximum recurrence depth before a point is considered inside the set.
pub const MAX_ITERATIONS: u32 = 100;

/// How an escaped iteration count is mapped to a color channel value.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ColorMode {
    /// Fractional iteration count mapped through HSV, escape radius 64.
    ///
    /// The large radius keeps `log |z|` meaningful for the smooth term.
    Smooth,
    /// Plain `iterations / MAX_ITERATIONS` across R, G, B, escape radius 2.
    Grayscale,
}

impl ColorMode {
    /// Escape-radius threshold paired with this mode's normalization.
    pub fn escape_radius(self) -> f32 {
        match self {
            ColorMode::Smooth => 64.0,
            ColorMode::Grayscale => 2.0,
        }
    }

    /// Uniform flag value understood by the shader.
    pub fn shader_flag(self) -> u32 {
        match self {
            ColorMode::Smooth => 0,
            ColorMode::Grayscale => 1,
        }
    }
}

/// Outcome of iterating `z <- z^2 + c` from `z = 0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Escape {
    /// `|z|` exceeded the radius after `iterations` recurrence steps (>= 1).
    Escaped { iterations: u32, magnitude: f32 },
    /// `|z|` stayed within the radius for the full iteration budget.
    Bounded,
}

/// Maps a quad-space position in `[-1, 1]^2` to the complex parameter `c`.
///
/// `c = 2 * position - (1, 0)`, covering `[-3, 1] x [-2, 2]` — the region
/// containing the whole set. Pan/zoom never alter this mapping; they act
/// through the projection matrix alone.
#[inline]
pub fn complex_at(position: Vec2) -> Vec2 {
    position * 2.0 - Vec2::new(1.0, 0.0)
}

/// One recurrence step without the `+ c` term: `(x^2 - y^2, 2xy)`.
#[inline]
pub fn square_complex(z: Vec2) -> Vec2 {
    Vec2::new(z.x * z.x - z.y * z.y, 2.0 * z.x * z.y)
}

/// Iterates the recurrence until `|z|` strictly exceeds `radius` or the
/// iteration budget runs out.
///
/// The comparison is strict: a magnitude exactly equal to `radius` has not
/// escaped.
pub fn escape_time(c: Vec2, radius: f32, max_iterations: u32) -> Escape {
    let mut z = Vec2::zero();

    for i in 0..max_iterations {
        z = square_complex(z) + c;
        let magnitude = z.length();
        if magnitude > radius {
            return Escape::Escaped {
                iterations: i + 1,
                magnitude,
            };
        }
    }

    Escape::Bounded
}

/// Normalized escape measure for `c` under `mode`; 0.0 means "inside the set".
pub fn intensity(c: Vec2, mode: ColorMode) -> f32 {
    match escape_time(c, mode.escape_radius(), MAX_ITERATIONS) {
        Escape::Bounded => 0.0,
        Escape::Escaped {
            iterations,
            magnitude,
        } => match mode {
            ColorMode::Grayscale => iterations as f32 / MAX_ITERATIONS as f32,
            // 0-based counter at the moment of escape, minus the fractional
            // overshoot term. Can go slightly negative for instant escapes;
            // `shade` gates those to black.
            ColorMode::Smooth => {
                ((iterations - 1) as f32 - magnitude.ln() / 16.0f32.ln())
                    / MAX_ITERATIONS as f32
            }
        },
    }
}

/// Final RGB for `c` under `mode`.
pub fn shade(c: Vec2, mode: ColorMode) -> [f32; 3] {
    let value = intensity(c, mode);
    match mode {
        ColorMode::Grayscale => [value, value, value],
        ColorMode::Smooth => {
            if value <= 0.0 {
                [0.0, 0.0, 0.0]
            } else {
                hsv_to_rgb(value, 1.0, 1.0)
            }
        }
    }
}

/// Standard 6-sector HSV to RGB conversion; all components in `[0, 1]`.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let h6 = (h.fract() + 1.0).fract() * 6.0;
    let sector = h6 as u32 % 6;
    let f = h6 - sector as f32;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    // ── escape_time ───────────────────────────────────────────────────────

    #[test]
    fn origin_never_escapes() {
        // z stays at (0,0) forever; the full budget is consumed.
        assert_eq!(
            escape_time(Vec2::zero(), 2.0, MAX_ITERATIONS),
            Escape::Bounded
        );
    }

    #[test]
    fn far_point_escapes_on_first_step() {
        // z1 = c = (2,2), |z1| = sqrt(8) > 2.
        match escape_time(Vec2::new(2.0, 2.0), 2.0, MAX_ITERATIONS) {
            Escape::Escaped { iterations, magnitude } => {
                assert_eq!(iterations, 1);
                assert!((magnitude - 8.0f32.sqrt()).abs() < EPS);
            }
            Escape::Bounded => panic!("(2,2) must escape"),
        }
    }

    #[test]
    fn threshold_comparison_is_strict() {
        // c = (2,0): |z1| == 2 exactly, which must NOT count as escaped.
        // z2 = (4,0) + (2,0) = (6,0) escapes on the second step.
        match escape_time(Vec2::new(2.0, 0.0), 2.0, MAX_ITERATIONS) {
            Escape::Escaped { iterations, .. } => assert_eq!(iterations, 2),
            Escape::Bounded => panic!("(2,0) must escape eventually"),
        }
    }

    #[test]
    fn period_two_bulb_point_is_bounded() {
        // c = -1 cycles 0 -> -1 -> 0 -> -1 ...
        assert_eq!(
            escape_time(Vec2::new(-1.0, 0.0), 2.0, MAX_ITERATIONS),
            Escape::Bounded
        );
    }

    // ── intensity ─────────────────────────────────────────────────────────

    #[test]
    fn inside_point_yields_zero_in_both_modes() {
        assert_eq!(intensity(Vec2::zero(), ColorMode::Grayscale), 0.0);
        assert_eq!(intensity(Vec2::zero(), ColorMode::Smooth), 0.0);
    }

    #[test]
    fn grayscale_first_step_escape_is_one_hundredth() {
        let v = intensity(Vec2::new(2.0, 2.0), ColorMode::Grayscale);
        assert!((v - 0.01).abs() < EPS);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let c = Vec2::new(-0.7436, 0.1318);
        assert_eq!(
            intensity(c, ColorMode::Smooth),
            intensity(c, ColorMode::Smooth)
        );
        assert_eq!(
            intensity(c, ColorMode::Grayscale),
            intensity(c, ColorMode::Grayscale)
        );
    }

    #[test]
    fn smooth_intensity_stays_below_one() {
        // Slow escapes near the boundary still normalize into [0, 1).
        let v = intensity(Vec2::new(0.27, 0.005), ColorMode::Smooth);
        assert!(v < 1.0);
    }

    // ── coordinate mapping ────────────────────────────────────────────────

    #[test]
    fn quad_corners_map_to_expected_window() {
        assert_eq!(complex_at(Vec2::new(-1.0, -1.0)), Vec2::new(-3.0, -2.0));
        assert_eq!(complex_at(Vec2::new(1.0, 1.0)), Vec2::new(1.0, 2.0));
        assert_eq!(complex_at(Vec2::zero()), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn square_complex_cross_term() {
        let z = square_complex(Vec2::new(3.0, 2.0));
        assert_eq!(z, Vec2::new(5.0, 12.0));
    }

    // ── shading ───────────────────────────────────────────────────────────

    #[test]
    fn hsv_primary_hues() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), [1.0, 0.0, 0.0]);
        let g = hsv_to_rgb(1.0 / 3.0, 1.0, 1.0);
        assert!((g[0] - 0.0).abs() < 1e-5 && (g[1] - 1.0).abs() < EPS);
        let b = hsv_to_rgb(2.0 / 3.0, 1.0, 1.0);
        assert!((b[2] - 1.0).abs() < EPS);
    }

    #[test]
    fn hsv_zero_saturation_is_gray() {
        assert_eq!(hsv_to_rgb(0.42, 0.0, 0.5), [0.5, 0.5, 0.5]);
    }

    #[test]
    fn inside_point_shades_black_in_smooth_mode() {
        assert_eq!(shade(Vec2::zero(), ColorMode::Smooth), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn grayscale_shade_replicates_intensity() {
        let [r, g, b] = shade(Vec2::new(2.0, 2.0), ColorMode::Grayscale);
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert!((r - 0.01).abs() < EPS);
    }
}
