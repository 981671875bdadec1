use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::{InputEvent, InputFrame, InputState, Key, KeyState};
use crate::time::{FrameClock, FrameTime};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "seahorse".to_string(),
            initial_size: LogicalSize::new(512.0, 512.0),
            resizable: true,
        }
    }
}

/// Entry point for the runtime.
///
/// Drives a single window: the viewer has exactly one surface and one render
/// loop, synchronous per frame (input poll, state update, draw, present).
pub struct Runtime;

impl Runtime {
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        // Window/GPU creation failures happen inside the loop; surface them as
        // the process-level error.
        if let Some(err) = state.init_error.take() {
            return Err(err);
        }

        Ok(())
    }
}

// Surface borrows the window, so the two live in one self-referencing entry.
#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    init_error: Option<anyhow::Error>,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            init_error: None,
            exit_requested: false,
        }
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        let entry = WindowEntryTryBuilder {
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init))
                    .context("GPU initialization failed for window")
            },
        }
        .try_build()?;

        self.entry = Some(entry);
        Ok(())
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            log::error!("initialization failed: {e:#}");
            self.init_error = Some(e);
            self.exit_requested = true;
            event_loop.exit();
            return;
        }

        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: the fractal animates from held keys every frame.
        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let (app, entry) = (&mut self.app, &mut self.entry);

        let Some(entry) = entry else {
            return;
        };

        // Track exit request from callbacks without mutating `self` in the closure.
        let mut exit_from_app_event = false;

        entry.with_mut(|fields| {
            if let Some(ev) = translate_input_event(&event) {
                fields.input_state.apply_event(fields.input_frame, ev);
            }

            if app.on_window_event(window_id, &event) == AppControl::Exit {
                exit_from_app_event = true;
            }
        });

        if exit_from_app_event {
            self.exit_requested = true;
            event_loop.exit();
            return;
        }

        match &event {
            WindowEvent::CloseRequested => {
                self.entry = None;
                self.exit_requested = true;
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.entry.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::RedrawRequested => {
                let mut app_control = AppControl::Continue;

                if let Some(entry) = self.entry.as_mut() {
                    entry.with_mut(|fields| {
                        let ft: FrameTime = fields.clock.tick();

                        // Scope to ensure `ctx` is dropped before mutating frame state.
                        {
                            let mut ctx = FrameCtx {
                                window: WindowCtx {
                                    id: window_id,
                                    window: fields.window,
                                },
                                gpu: fields.gpu,
                                input: fields.input_state,
                                input_frame: fields.input_frame,
                                time: ft,
                            };

                            app_control = self.app.on_frame(&mut ctx);
                        }

                        // Clear per-frame deltas after the frame is consumed.
                        fields.input_frame.clear();
                    });
                }

                if app_control == AppControl::Exit {
                    self.exit_requested = true;
                    event_loop.exit();
                }
            }

            _ => {}
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }
}

fn translate_input_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::KeyboardInput { event, .. } => {
            let state = match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            };

            let (key, code) = map_key(event.physical_key);

            Some(InputEvent::Key {
                key,
                state,
                code,
                repeat: event.repeat,
            })
        }

        _ => None,
    }
}

fn map_key(pk: PhysicalKey) -> (Key, u32) {
    match pk {
        PhysicalKey::Code(code) => {
            let key = match code {
                KeyCode::Escape => Key::Escape,
                KeyCode::Enter => Key::Enter,
                KeyCode::Space => Key::Space,

                KeyCode::ArrowUp => Key::ArrowUp,
                KeyCode::ArrowDown => Key::ArrowDown,
                KeyCode::ArrowLeft => Key::ArrowLeft,
                KeyCode::ArrowRight => Key::ArrowRight,

                KeyCode::KeyA => Key::A,
                KeyCode::KeyB => Key::B,
                KeyCode::KeyC => Key::C,
                KeyCode::KeyD => Key::D,
                KeyCode::KeyE => Key::E,
                KeyCode::KeyF => Key::F,
                KeyCode::KeyG => Key::G,
                KeyCode::KeyH => Key::H,
                KeyCode::KeyI => Key::I,
                KeyCode::KeyJ => Key::J,
                KeyCode::KeyK => Key::K,
                KeyCode::KeyL => Key::L,
                KeyCode::KeyM => Key::M,
                KeyCode::KeyN => Key::N,
                KeyCode::KeyO => Key::O,
                KeyCode::KeyP => Key::P,
                KeyCode::KeyQ => Key::Q,
                KeyCode::KeyR => Key::R,
                KeyCode::KeyS => Key::S,
                KeyCode::KeyT => Key::T,
                KeyCode::KeyU => Key::U,
                KeyCode::KeyV => Key::V,
                KeyCode::KeyW => Key::W,
                KeyCode::KeyX => Key::X,
                KeyCode::KeyY => Key::Y,
                KeyCode::KeyZ => Key::Z,

                other => Key::Unknown(other as u32),
            };

            (key, code as u32)
        }

        // NativeKeyCode is not a u32 in winit 0.30; preserve "unknown" without a stable numeric.
        PhysicalKey::Unidentified(_) => (Key::Unknown(0), 0),
    }
}
