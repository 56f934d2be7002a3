//! Map geometry rendering.
//!
//! Renders countries and rivers to the egui canvas.

use super::{Country, GeoBounds, MapProjection, River, World};
use eframe::egui::{Color32, Painter, Pos2, Shape, Stroke};
use geo_types::Coord;

const COUNTRY_COLOR: Color32 = Color32::BLACK;
const RIVER_COLOR: Color32 = Color32::from_rgb(135, 206, 250);
const HIGHLIGHT_COLOR: Color32 = Color32::from_rgb(220, 60, 40);

/// Anything that can be drawn on the map.
#[derive(Debug, Clone, Copy)]
pub enum MapFeature<'a> {
    /// Closed outline
    Country(&'a Country),
    /// Open polyline
    River(&'a River),
}

impl MapFeature<'_> {
    pub fn coords(&self) -> &[Coord<f64>] {
        match self {
            MapFeature::Country(country) => &country.coords,
            MapFeature::River(river) => &river.coords,
        }
    }

    pub fn bounds(&self) -> Option<GeoBounds> {
        match self {
            MapFeature::Country(country) => country.bounds(),
            MapFeature::River(river) => river.bounds(),
        }
    }

    pub fn stroke(&self) -> Stroke {
        match self {
            MapFeature::Country(_) => Stroke::new(1.0, COUNTRY_COLOR),
            MapFeature::River(_) => Stroke::new(1.0, RIVER_COLOR),
        }
    }

    /// Renders the feature with its default stroke.
    pub fn render(&self, painter: &Painter, projection: &MapProjection) {
        self.render_with(painter, projection, self.stroke());
    }

    /// Renders the feature with `stroke`. Returns whether anything was drawn.
    pub fn render_with(
        &self,
        painter: &Painter,
        projection: &MapProjection,
        stroke: Stroke,
    ) -> bool {
        let coords = self.coords();
        if coords.len() < 2 {
            return false;
        }

        // Skip features entirely off screen
        match self.bounds() {
            Some(bounds) if projection.bounds_visible(&bounds) => {}
            _ => return false,
        }

        let points: Vec<Pos2> = coords
            .iter()
            .map(|c| projection.geo_to_screen(*c))
            .collect();

        let shape = match self {
            MapFeature::Country(_) => Shape::closed_line(points, stroke),
            MapFeature::River(_) => Shape::line(points, stroke),
        };
        painter.add(shape);
        true
    }
}

/// Renders every country, then every river, then the hovered outline on top.
pub fn render_world(
    painter: &Painter,
    world: &World,
    projection: &MapProjection,
    hovered: Option<usize>,
) {
    for country in world.countries() {
        MapFeature::Country(country).render(painter, projection);
    }

    for river in world.rivers() {
        MapFeature::River(river).render(painter, projection);
    }

    if let Some(country) = hovered.and_then(|i| world.country_at(i)) {
        MapFeature::Country(country).render_with(
            painter,
            projection,
            Stroke::new(2.5, HIGHLIGHT_COLOR),
        );
    }
}
