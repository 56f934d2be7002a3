#![warn(clippy::all)]

//! Blind Map - a world map without labels for practising geography.
//!
//! Countries and rivers are drawn as bare outlines. Hovering a country shows
//! its name; the arrow keys pan the map, Shift+Up/Down zoom, Space recenters
//! and Escape quits.

mod config;
mod geo;
mod state;
mod ui;

use config::MapConfig;
use eframe::egui;
use geo::World;
use state::{AppState, TickClock};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = MapConfig::load();

    let world = match World::load(
        &config.countries_path,
        &config.rivers_path,
        config.reference(),
    ) {
        Ok(world) => world,
        Err(e) => {
            log::error!("Failed to load map data: {}", e);
            std::process::exit(1);
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.window_size)
            .with_resizable(false),
        ..Default::default()
    };

    let app_name = config.window_title.clone();
    eframe::run_native(
        &app_name,
        native_options,
        Box::new(move |cc| Ok(Box::new(BlindMapApp::new(cc, config, world)))),
    )
}

/// Main application state and logic.
pub struct BlindMapApp {
    /// View and hover state
    state: AppState,

    /// Country and river geometry
    world: World,

    /// Paces held-key commands to the configured frame rate
    clock: TickClock,
}

impl BlindMapApp {
    /// Creates a new BlindMapApp instance.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: MapConfig, world: World) -> Self {
        Self::with_world(&config, world)
    }

    fn with_world(config: &MapConfig, world: World) -> Self {
        Self {
            state: AppState::new(config),
            world,
            clock: TickClock::new(config.frame_interval()),
        }
    }

    /// Runs one frame: input, view update, hover, drawing.
    ///
    /// Held keys are applied once per elapsed tick, so pan and zoom speed do
    /// not depend on how often egui repaints. Returns `false` once the user
    /// asked to quit.
    fn run_frame(&mut self, ctx: &egui::Context) -> bool {
        if ui::quit_requested(ctx) {
            log::info!("Quit requested");
            return false;
        }

        let ticks = self.clock.advance(ctx.input(|i| i.time));
        if ticks > 0 {
            let keys = ui::read_held_keys(ctx);
            for _ in 0..ticks {
                self.state.view_state.apply(keys);
            }
        }

        ui::render_canvas(ctx, &mut self.state, &self.world);
        true
    }
}

impl eframe::App for BlindMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.run_frame(ctx) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // Keep ticking while keys are held even without new input events
        ctx.request_repaint_after(self.clock.interval());
    }
}
