//! Application state management.
//!
//! All state lives in [`AppState`], owned by the app and handed by reference
//! to the input, hit-test and rendering code each frame.

mod clock;
mod hover;
mod viz;

pub use clock::TickClock;
pub use hover::{HoverChange, HoverSelection};
pub use viz::{HeldKeys, MapViewState, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_PAN_STEP};

use crate::config::MapConfig;

/// Root application state containing all sub-states.
#[derive(Debug, Default)]
pub struct AppState {
    /// Zoom/pan of the map
    pub view_state: MapViewState,

    /// Country currently under the mouse
    pub hover: HoverSelection,
}

impl AppState {
    pub fn new(config: &MapConfig) -> Self {
        Self {
            view_state: MapViewState::new(config.min_zoom, config.max_zoom, config.pan_step),
            hover: HoverSelection::default(),
        }
    }
}
