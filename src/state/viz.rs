//! Visualization state (zoom/pan) and the keyboard commands that drive it.

use eframe::egui::Vec2;

pub const DEFAULT_MIN_ZOOM: f32 = 5.0;
pub const DEFAULT_MAX_ZOOM: f32 = 70.0;
pub const DEFAULT_PAN_STEP: f32 = 2.0;

/// Keys held down during the current frame.
///
/// Commands are level-triggered: holding a key repeats its effect every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    /// Zoom modifier (Shift)
    pub modifier: bool,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Pan reset (Space)
    pub reset: bool,
}

/// Pan offset and zoom factor of the map view.
#[derive(Debug, Clone, PartialEq)]
pub struct MapViewState {
    /// Pan offset in screen pixels, unbounded
    pub pan_offset: Vec2,
    /// Pixels per degree, always within `[min_zoom, max_zoom]`
    pub zoom: f32,
    min_zoom: f32,
    max_zoom: f32,
    pan_step: f32,
}

impl Default for MapViewState {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM, DEFAULT_PAN_STEP)
    }
}

impl MapViewState {
    /// Creates a centered view zoomed to the middle of the allowed range.
    pub fn new(min_zoom: f32, max_zoom: f32, pan_step: f32) -> Self {
        Self {
            pan_offset: Vec2::ZERO,
            zoom: (min_zoom + max_zoom) / 2.0,
            min_zoom,
            max_zoom,
            pan_step,
        }
    }

    #[allow(dead_code)]
    pub fn min_zoom(&self) -> f32 {
        self.min_zoom
    }

    #[allow(dead_code)]
    pub fn max_zoom(&self) -> f32 {
        self.max_zoom
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1.0).min(self.max_zoom);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - 1.0).max(self.min_zoom);
    }

    pub fn pan(&mut self, delta: Vec2) {
        self.pan_offset += delta;
    }

    pub fn reset_pan(&mut self) {
        self.pan_offset = Vec2::ZERO;
    }

    /// Applies one frame worth of held-key commands.
    ///
    /// With the modifier held only zoom commands run; pan and reset keys are
    /// ignored for that frame.
    pub fn apply(&mut self, keys: HeldKeys) {
        if keys.modifier {
            if keys.up {
                self.zoom_in();
            }
            if keys.down {
                self.zoom_out();
            }
            return;
        }

        let step = self.pan_step;
        if keys.left {
            self.pan(Vec2::new(step, 0.0));
        }
        if keys.right {
            self.pan(Vec2::new(-step, 0.0));
        }
        if keys.up {
            self.pan(Vec2::new(0.0, step));
        }
        if keys.down {
            self.pan(Vec2::new(0.0, -step));
        }
        if keys.reset {
            log::debug!("View pan reset");
            self.reset_pan();
        }
    }
}
