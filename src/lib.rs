// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! NetCanvas: a network topology sketcher built with Xilem
//!
//! The editing core (`model`, `surface`, `editing`) is independent of the
//! GUI and drives any `CanvasSurface`; the binary wires it to a masonry
//! widget over a retained `DisplayList`.

use std::path::PathBuf;

use anyhow::Context;
use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use xilem::{EventLoopBuilder, WindowView, Xilem, window};

mod components;
mod data;
pub mod editing;
pub mod error;
pub mod model;
mod settings;
pub mod surface;
mod theme;
mod views;

use data::AppState;
use model::FileIconLoader;
use views::network_page;

/// Entry point for the NetCanvas application
pub fn run(event_loop: EventLoopBuilder) -> Result<(), EventLoopError> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    // Filter out noisy wgpu/naga shader compilation logs
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(
                    "netcanvas=info,wgpu=warn,naga=warn,wgpu_core=warn,wgpu_hal=warn",
                )
            }),
        )
        .init();

    let icon_dir = match icon_dir_from_args() {
        Ok(dir) => dir,
        Err(err) => {
            tracing::error!("{:#}", err);
            tracing::error!("Usage: netcanvas [path/to/icon/dir]");
            PathBuf::from(settings::icon::DEFAULT_DIR)
        }
    };
    let loader = FileIconLoader::new(icon_dir);
    tracing::info!("Loading default icons from {}", loader.icon_dir().display());

    let initial_state = AppState::new(loader);
    let app = Xilem::new(initial_state, app_logic);
    app.run_in(event_loop)?;
    Ok(())
}

/// Icon directory from the first command-line argument, if given
fn icon_dir_from_args() -> anyhow::Result<PathBuf> {
    let Some(arg) = std::env::args().nth(1) else {
        return Ok(PathBuf::from(settings::icon::DEFAULT_DIR));
    };
    let dir = PathBuf::from(arg);
    let metadata = std::fs::metadata(&dir)
        .with_context(|| format!("Icon directory not found: {}", dir.display()))?;
    anyhow::ensure!(metadata.is_dir(), "Not a directory: {}", dir.display());
    Ok(dir)
}

/// Build the single-window UI.
fn app_logic(state: &mut AppState) -> impl Iterator<Item = WindowView<AppState>> + use<> {
    let window_size = LogicalSize::new(
        settings::canvas::WIDTH,
        settings::canvas::HEIGHT + theme::size::MENU_BAR_HEIGHT + theme::size::STATUS_LINE_HEIGHT,
    );
    let window_view = window(state.main_window_id, "NetCanvas", network_page(state));
    let window_with_options = window_view.with_options(|options| {
        options
            .with_initial_inner_size(window_size)
            .on_close(|state: &mut AppState| state.running = false)
    });

    std::iter::once(window_with_options)
}
