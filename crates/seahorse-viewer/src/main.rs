use std::process::ExitCode;

use anyhow::Result;
use winit::dpi::LogicalSize;

use seahorse_engine::device::GpuInit;
use seahorse_engine::logging::{init_logging, LoggingConfig};
use seahorse_engine::window::{Runtime, RuntimeConfig};

use seahorse_viewer::app::ViewerApp;
use seahorse_viewer::fractal::ColorMode;
use seahorse_viewer::view::CameraMode;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    if let Err(e) = run() {
        log::error!("{e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run() -> Result<()> {
    let mut color_mode = ColorMode::Smooth;
    let mut camera_mode = CameraMode::Interactive;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--grayscale" => color_mode = ColorMode::Grayscale,
            "--auto-zoom" => camera_mode = CameraMode::AutoZoom,
            other => anyhow::bail!(
                "unknown argument `{other}` (supported: --grayscale, --auto-zoom)"
            ),
        }
    }

    log::info!("starting viewer: {color_mode:?} colors, {camera_mode:?} camera");

    let config = RuntimeConfig {
        title: "Mandelbrot Set".to_string(),
        initial_size: LogicalSize::new(512.0, 512.0),
        resizable: false,
    };

    Runtime::run(config, GpuInit::default(), ViewerApp::new(color_mode, camera_mode))
}
