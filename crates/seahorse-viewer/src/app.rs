//! The viewer application: one camera, one renderer, one frame callback.

use seahorse_engine::core::{App, AppControl, FrameCtx};
use seahorse_engine::coords::ColorRgba;
use seahorse_engine::input::Key;

use crate::fractal::ColorMode;
use crate::renderer::FractalRenderer;
use crate::view::{CameraMode, ViewState};

/// Clear color behind the quad. Only visible if the quad ever fails to cover
/// the surface, which makes a loud magenta-ish red a useful canary.
const CLEAR_COLOR: ColorRgba = ColorRgba::new(1.0, 0.0, 0.1, 1.0);

pub struct ViewerApp {
    view: ViewState,
    renderer: FractalRenderer,
    color_mode: ColorMode,
}

impl ViewerApp {
    pub fn new(color_mode: ColorMode, camera_mode: CameraMode) -> Self {
        Self {
            view: ViewState::new(camera_mode),
            renderer: FractalRenderer::new(),
            color_mode,
        }
    }
}

impl App for ViewerApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.keys_pressed.contains(&Key::Escape) {
            return AppControl::Exit;
        }

        self.view.update(ctx.input, ctx.time.dt);

        let projection = self.view.projection();
        let mode = self.color_mode;
        let renderer = &mut self.renderer;

        ctx.render(CLEAR_COLOR, |rctx, target| {
            renderer.render(rctx, target, projection, mode);
        })
    }
}
