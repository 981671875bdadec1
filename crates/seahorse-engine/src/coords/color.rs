/// RGBA color with `f32` channels in `[0, 1]`.
///
/// Used for clear colors and other CPU-side color plumbing; shaders produce
/// their own per-pixel colors.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    pub const BLACK: ColorRgba = ColorRgba::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: ColorRgba = ColorRgba::new(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}
