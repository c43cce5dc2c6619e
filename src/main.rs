#![windows_subsystem = "windows"]
//! MoRUS Zine Library - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod catalog;
mod constants;
mod loader;
mod settings;
mod theme;
mod types;
mod ui;

use app::App;
use constants::{APP_NAME, APP_VERSION};
use eframe::egui;
use tracing::{debug, info};
use types::{OverlayKey, View};

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "zine-library.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,zine_library=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = settings::data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Guard must live for the entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "{APP_NAME} starting");

    let settings = settings::Settings::load(&data_dir);
    if settings.endpoint.is_empty() {
        info!("No record endpoint configured; the library will stay empty");
    }

    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(1280.0, 860.0)))
        .with_min_inner_size([900.0, 640.0])
        .with_title(APP_NAME);

    let needs_center = win_pos.is_none();
    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

/// Overlay key for this frame's input, if any
fn overlay_key(input: &egui::InputState) -> Option<OverlayKey> {
    if input.key_pressed(egui::Key::Escape) {
        Some(OverlayKey::Escape)
    } else if input.key_pressed(egui::Key::ArrowRight) {
        Some(OverlayKey::ArrowRight)
    } else if input.key_pressed(egui::Key::ArrowLeft) {
        Some(OverlayKey::ArrowLeft)
    } else {
        None
    }
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        self.poll_load();

        // Keyboard: overlay navigation and reload. Keys typed into a focused
        // widget stay with that widget.
        if !ctx.wants_keyboard_input() {
            if self.catalog.is_overlay_open() {
                if let Some(key) = ctx.input(overlay_key) {
                    if self.catalog.handle_key(key) {
                        debug!(?key, "Overlay key handled");
                    }
                }
            }
            if ctx.input(|i| i.key_pressed(egui::Key::F5)) && !self.is_loading() {
                self.start_load(ctx);
            }
        }

        self.render_nav(ctx);
        match self.view {
            View::Home => self.render_home(ctx),
            View::About => self.render_about(ctx),
            View::Library => {
                self.render_library(ctx);
                self.render_overlay(ctx);
            }
            View::Donate => self.render_donate(ctx),
        }
        self.render_toast(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.shutdown();
        self.save_settings();
    }
}
