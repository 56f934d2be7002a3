//! Application configuration.
//!
//! Settings are read once at startup from an optional JSON file. A missing or
//! unreadable file never stops the app; the built-in defaults are used instead.

use crate::state::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_PAN_STEP};
use geo_types::Coord;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Startup configuration for the map window and datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Countries dataset (polygons with metadata)
    pub countries_path: PathBuf,
    /// Rivers dataset (polylines)
    pub rivers_path: PathBuf,
    /// Map origin as `[longitude, latitude]`
    pub reference: [f64; 2],
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Pan distance in pixels per frame while an arrow key is held
    pub pan_step: f32,
    /// Logical window size `[width, height]`
    pub window_size: [f32; 2],
    pub window_title: String,
    /// Target frames per second
    pub frame_rate: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            countries_path: PathBuf::from("data/countries.json"),
            rivers_path: PathBuf::from("data/rivers.json"),
            // Prague sits in the middle of the map
            reference: [14.421389, 50.0875],
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            pan_step: DEFAULT_PAN_STEP,
            window_size: [1280.0, 720.0],
            window_title: "Slepá mapa".to_string(),
            frame_rate: 60.0,
        }
    }
}

impl MapConfig {
    /// Environment variable that overrides the config file location.
    const PATH_ENV_VAR: &'static str = "BLIND_MAP_CONFIG";

    /// Config file looked up in the working directory.
    const DEFAULT_FILE: &'static str = "blind_map.json";

    /// Loads the configuration from `$BLIND_MAP_CONFIG` or `blind_map.json`.
    pub fn load() -> Self {
        let path = std::env::var_os(Self::PATH_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_FILE));
        Self::load_from(&path)
    }

    /// Loads the configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Failed to read config {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str::<MapConfig>(&json) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config.validated()
            }
            Err(e) => {
                log::warn!("Failed to parse config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replaces out-of-range values with their defaults.
    fn validated(mut self) -> Self {
        let defaults = Self::default();

        if !(self.min_zoom > 0.0 && self.min_zoom <= self.max_zoom) {
            log::warn!(
                "Invalid zoom bounds [{}, {}], using [{}, {}]",
                self.min_zoom,
                self.max_zoom,
                defaults.min_zoom,
                defaults.max_zoom
            );
            self.min_zoom = defaults.min_zoom;
            self.max_zoom = defaults.max_zoom;
        }

        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            log::warn!(
                "Invalid frame rate {}, using {}",
                self.frame_rate,
                defaults.frame_rate
            );
            self.frame_rate = defaults.frame_rate;
        }

        if self.window_size.iter().any(|v| !(*v > 0.0)) {
            log::warn!("Invalid window size {:?}, using defaults", self.window_size);
            self.window_size = defaults.window_size;
        }

        self
    }

    /// The map origin as a geographic coordinate.
    pub fn reference(&self) -> Coord<f64> {
        Coord {
            x: self.reference[0],
            y: self.reference[1],
        }
    }

    /// Time budget of a single frame.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate)
    }
}
