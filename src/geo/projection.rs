//! Map projection and coordinate transformation.
//!
//! Converts between map space (degrees relative to the reference coordinate)
//! and screen pixels under the current pan offset and zoom factor.
//!
//! ```text
//! screen.x = center.x + (geo.x * zoom - pan.x)
//! screen.y = center.y - (geo.y * zoom - pan.y)
//! ```
//!
//! The pan offset is applied in screen pixels and is not scaled by zoom, so
//! panning moves the map at the same speed at every zoom level. Y is flipped
//! because north is up while screen Y grows downward.

use super::GeoBounds;
use crate::state::MapViewState;
use eframe::egui::{Pos2, Rect, Vec2};
use geo_types::Coord;

/// Map projection for converting map-space to screen coordinates.
#[derive(Debug, Clone)]
pub struct MapProjection {
    /// Pixels per degree
    pub zoom: f32,
    /// Pan offset in screen pixels
    pub pan_offset: Vec2,
    /// Screen rectangle for the canvas
    pub screen_rect: Rect,
}

impl MapProjection {
    pub fn new(zoom: f32, pan_offset: Vec2, screen_rect: Rect) -> Self {
        Self {
            zoom,
            pan_offset,
            screen_rect,
        }
    }

    /// Creates a projection for the current view over `screen_rect`.
    pub fn from_view(view: &MapViewState, screen_rect: Rect) -> Self {
        Self::new(view.zoom, view.pan_offset, screen_rect)
    }

    /// Converts a map-space coordinate to a screen position.
    pub fn geo_to_screen(&self, coord: Coord<f64>) -> Pos2 {
        let center = self.screen_rect.center();
        let zoom = self.zoom as f64;

        let x = center.x as f64 + (coord.x * zoom - self.pan_offset.x as f64);
        let y = center.y as f64 - (coord.y * zoom - self.pan_offset.y as f64);

        Pos2::new(x as f32, y as f32)
    }

    /// Converts a screen position back to a map-space coordinate.
    ///
    /// Exact inverse of [`MapProjection::geo_to_screen`]; the two must change
    /// together.
    pub fn screen_to_geo(&self, pos: Pos2) -> Coord<f64> {
        let center = self.screen_rect.center();
        let zoom = self.zoom as f64;

        Coord {
            x: (pos.x as f64 - center.x as f64 + self.pan_offset.x as f64) / zoom,
            y: (pos.y as f64 - center.y as f64 - self.pan_offset.y as f64) / -zoom,
        }
    }

    /// Returns the map-space area covered by the screen rectangle.
    pub fn visible_bounds(&self) -> GeoBounds {
        let top_left = self.screen_to_geo(self.screen_rect.left_top());
        let bottom_right = self.screen_to_geo(self.screen_rect.right_bottom());

        GeoBounds {
            min: Coord {
                x: top_left.x.min(bottom_right.x),
                y: top_left.y.min(bottom_right.y),
            },
            max: Coord {
                x: top_left.x.max(bottom_right.x),
                y: top_left.y.max(bottom_right.y),
            },
        }
    }

    /// Checks if a map-space bounding box overlaps the screen.
    pub fn bounds_visible(&self, bounds: &GeoBounds) -> bool {
        self.visible_bounds().intersects(bounds)
    }
}
