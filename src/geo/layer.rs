//! Country and river geometry loaded from the JSON datasets.

use super::hit_test::BOUNDARY_EPSILON;
use geo_types::Coord;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a geometry dataset.
#[derive(Debug, Error)]
pub enum GeoDataError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid entry {key:?} in {}: {source}", .path.display())]
    Entry {
        path: PathBuf,
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Axis-aligned bounding box in map space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min: Coord<f64>,
    pub max: Coord<f64>,
}

impl GeoBounds {
    /// Returns the bounds of `coords`, or `None` when empty.
    pub fn from_coords(coords: &[Coord<f64>]) -> Option<Self> {
        if coords.is_empty() {
            return None;
        }

        let (min_x, max_x, min_y, max_y) = coords.iter().fold(
            (f64::MAX, f64::MIN, f64::MAX, f64::MIN),
            |(min_x, max_x, min_y, max_y), c| {
                (
                    min_x.min(c.x),
                    max_x.max(c.x),
                    min_y.min(c.y),
                    max_y.max(c.y),
                )
            },
        );

        Some(Self {
            min: Coord { x: min_x, y: min_y },
            max: Coord { x: max_x, y: max_y },
        })
    }

    /// Whether `point` lies inside or on the edge of the box.
    pub fn contains(&self, point: Coord<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Returns the box grown by `margin` on every side.
    pub fn expand(&self, margin: f64) -> Self {
        Self {
            min: Coord {
                x: self.min.x - margin,
                y: self.min.y - margin,
            },
            max: Coord {
                x: self.max.x + margin,
                y: self.max.y + margin,
            },
        }
    }

    /// Whether the two boxes share at least one point.
    pub fn intersects(&self, other: &GeoBounds) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y)
    }
}

/// A country outline with its metadata.
///
/// `coords` is an implicitly closed ring in map space (degrees relative to
/// the reference coordinate).
#[derive(Debug, Clone)]
pub struct Country {
    /// Dataset key
    pub key: String,
    /// Display name shown in the hover label
    pub name: String,
    /// Country code, e.g. "CZ"
    pub code: String,
    pub continent: String,
    pub coords: Vec<Coord<f64>>,
    bounds: Option<GeoBounds>,
}

impl Country {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        code: impl Into<String>,
        continent: impl Into<String>,
        coords: Vec<Coord<f64>>,
    ) -> Self {
        let bounds = GeoBounds::from_coords(&coords);
        Self {
            key: key.into(),
            name: name.into(),
            code: code.into(),
            continent: continent.into(),
            coords,
            bounds,
        }
    }

    pub fn bounds(&self) -> Option<GeoBounds> {
        self.bounds
    }

    /// Whether `point` lies inside the outline. Boundary points count as inside.
    pub fn contains(&self, point: Coord<f64>) -> bool {
        let near_bounds = self
            .bounds
            .is_some_and(|b| b.expand(BOUNDARY_EPSILON).contains(point));
        near_bounds && super::ring_contains(&self.coords, point)
    }
}

/// A river drawn as an open polyline.
#[derive(Debug, Clone)]
pub struct River {
    pub name: String,
    pub coords: Vec<Coord<f64>>,
    bounds: Option<GeoBounds>,
}

impl River {
    pub fn new(name: impl Into<String>, coords: Vec<Coord<f64>>) -> Self {
        let bounds = GeoBounds::from_coords(&coords);
        Self {
            name: name.into(),
            coords,
            bounds,
        }
    }

    pub fn bounds(&self) -> Option<GeoBounds> {
        self.bounds
    }
}

/// Country entry as stored in the countries dataset.
#[derive(Deserialize)]
struct RawCountry {
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    country_code: String,
    #[serde(default)]
    continent: String,
    coordinates: Vec<[f64; 2]>,
}

/// All map geometry, kept in dataset order.
#[derive(Debug, Clone, Default)]
pub struct World {
    countries: Vec<Country>,
    rivers: Vec<River>,
}

impl World {
    pub fn new(countries: Vec<Country>, rivers: Vec<River>) -> Self {
        Self { countries, rivers }
    }

    /// Loads both datasets, recentering every coordinate on `reference`.
    ///
    /// A dataset file that does not exist loads as an empty layer.
    pub fn load(
        countries_path: &Path,
        rivers_path: &Path,
        reference: Coord<f64>,
    ) -> Result<Self, GeoDataError> {
        let countries = match read_optional(countries_path)? {
            Some(json) => parse_countries(&json, countries_path, reference)?,
            None => Vec::new(),
        };
        let rivers = match read_optional(rivers_path)? {
            Some(json) => parse_rivers(&json, rivers_path, reference)?,
            None => Vec::new(),
        };

        log::info!(
            "Loaded map data: {} countries, {} rivers",
            countries.len(),
            rivers.len()
        );

        Ok(Self::new(countries, rivers))
    }

    /// Countries in dataset order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Rivers in dataset order.
    pub fn rivers(&self) -> &[River] {
        &self.rivers
    }

    /// Looks up a country by its dataset key.
    #[allow(dead_code)]
    pub fn country(&self, key: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.key == key)
    }

    /// Looks up a river by name.
    #[allow(dead_code)]
    pub fn river(&self, name: &str) -> Option<&River> {
        self.rivers.iter().find(|r| r.name == name)
    }

    pub fn country_at(&self, index: usize) -> Option<&Country> {
        self.countries.get(index)
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, GeoDataError> {
    match std::fs::read_to_string(path) {
        Ok(s) => Ok(Some(s)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!("Dataset {} not found, layer will be empty", path.display());
            Ok(None)
        }
        Err(source) => Err(GeoDataError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Parses the top-level `key -> entry` object, preserving key order.
fn parse_entries(json: &str, path: &Path) -> Result<Map<String, Value>, GeoDataError> {
    serde_json::from_str(json).map_err(|source| GeoDataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_entry<T: DeserializeOwned>(
    key: &str,
    value: Value,
    path: &Path,
) -> Result<T, GeoDataError> {
    serde_json::from_value(value).map_err(|source| GeoDataError::Entry {
        path: path.to_path_buf(),
        key: key.to_string(),
        source,
    })
}

fn recenter(raw: &[[f64; 2]], reference: Coord<f64>) -> Vec<Coord<f64>> {
    raw.iter()
        .map(|[lon, lat]| Coord {
            x: lon - reference.x,
            y: lat - reference.y,
        })
        .collect()
}

fn parse_countries(
    json: &str,
    path: &Path,
    reference: Coord<f64>,
) -> Result<Vec<Country>, GeoDataError> {
    parse_entries(json, path)?
        .into_iter()
        .map(|(key, value)| {
            let raw: RawCountry = parse_entry(&key, value, path)?;
            let name = raw.country.unwrap_or_else(|| key.clone());
            let coords = recenter(&raw.coordinates, reference);
            Ok(Country::new(
                key,
                name,
                raw.country_code,
                raw.continent,
                coords,
            ))
        })
        .collect()
}

fn parse_rivers(
    json: &str,
    path: &Path,
    reference: Coord<f64>,
) -> Result<Vec<River>, GeoDataError> {
    parse_entries(json, path)?
        .into_iter()
        .map(|(name, value)| {
            let raw: Vec<[f64; 2]> = parse_entry(&name, value, path)?;
            let coords = recenter(&raw, reference);
            Ok(River::new(name, coords))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const ORIGIN: Coord<f64> = Coord { x: 0.0, y: 0.0 };

    const PRAGUE: Coord<f64> = Coord {
        x: 14.421389,
        y: 50.0875,
    };

    const COUNTRIES_JSON: &str = r#"{
        "Czechia": {
            "country": "Czech Republic",
            "country_code": "CZ",
            "continent": "Europe",
            "coordinates": [[12.0, 48.5], [18.9, 48.5], [18.9, 51.1], [12.0, 51.1]]
        },
        "Austria": {
            "country": "Austria",
            "country_code": "AT",
            "continent": "Europe",
            "coordinates": [[9.5, 46.4], [17.2, 46.4], [17.2, 49.0], [9.5, 49.0]]
        }
    }"#;

    const RIVERS_JSON: &str = r#"{
        "Vltava": [[14.4, 48.6], [14.42, 50.08], [14.4, 50.3]]
    }"#;

    #[test]
    fn test_coordinates_are_recentered() {
        let countries = parse_countries(COUNTRIES_JSON, Path::new("c.json"), PRAGUE).unwrap();
        let czechia = &countries[0];

        assert_eq!(czechia.name, "Czech Republic");
        assert_eq!(czechia.code, "CZ");
        assert_eq!(czechia.continent, "Europe");
        assert_eq!(czechia.coords.len(), 4);
        assert!((czechia.coords[0].x - (12.0 - 14.421389)).abs() < 1e-12);
        assert!((czechia.coords[0].y - (48.5 - 50.0875)).abs() < 1e-12);
    }

    #[test]
    fn test_dataset_order_is_preserved() {
        let json = r#"{
            "Zeta": { "coordinates": [[0, 0], [1, 0], [1, 1]] },
            "Alpha": { "coordinates": [[0, 0], [1, 0], [1, 1]] },
            "Mu": { "coordinates": [[0, 0], [1, 0], [1, 1]] }
        }"#;
        let countries = parse_countries(json, Path::new("c.json"), ORIGIN).unwrap();
        let keys: Vec<&str> = countries.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["Zeta", "Alpha", "Mu"]);
    }

    #[test]
    fn test_missing_metadata_falls_back_to_key() {
        let json = r#"{ "A": { "coordinates": [[0, 0], [2, 0], [2, 2], [0, 2]] } }"#;
        let countries = parse_countries(json, Path::new("c.json"), ORIGIN).unwrap();

        assert_eq!(countries[0].name, "A");
        assert_eq!(countries[0].code, "");
        assert_eq!(countries[0].continent, "");
    }

    #[test]
    fn test_load_both_datasets() {
        let dir = tempfile::tempdir().unwrap();
        let countries_path = dir.path().join("countries.json");
        let rivers_path = dir.path().join("rivers.json");
        fs::write(&countries_path, COUNTRIES_JSON).unwrap();
        fs::write(&rivers_path, RIVERS_JSON).unwrap();

        let world = World::load(&countries_path, &rivers_path, PRAGUE).unwrap();

        assert_eq!(world.countries().len(), 2);
        assert_eq!(world.rivers().len(), 1);
        assert_eq!(world.country("Austria").map(|c| c.code.as_str()), Some("AT"));
        assert_eq!(world.river("Vltava").map(|r| r.coords.len()), Some(3));
        assert!(world.country("Narnia").is_none());
    }

    #[test]
    fn test_missing_rivers_file_loads_empty_layer() {
        let dir = tempfile::tempdir().unwrap();
        let countries_path = dir.path().join("countries.json");
        fs::write(&countries_path, COUNTRIES_JSON).unwrap();

        let world = World::load(&countries_path, &dir.path().join("rivers.json"), PRAGUE).unwrap();

        assert_eq!(world.countries().len(), 2);
        assert!(world.rivers().is_empty());
    }

    #[test]
    fn test_missing_both_files_loads_empty_world() {
        let dir = tempfile::tempdir().unwrap();
        let world = World::load(
            &dir.path().join("countries.json"),
            &dir.path().join("rivers.json"),
            PRAGUE,
        )
        .unwrap();

        assert!(world.countries().is_empty());
        assert!(world.rivers().is_empty());
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let countries_path = dir.path().join("countries.json");
        fs::write(&countries_path, "{ \"A\": [").unwrap();

        let err = World::load(&countries_path, &dir.path().join("rivers.json"), PRAGUE)
            .unwrap_err();
        assert!(matches!(err, GeoDataError::Parse { .. }));
    }

    #[test]
    fn test_malformed_entry_names_the_key() {
        let json = r#"{ "Broken": { "coordinates": "not a list" } }"#;
        let err = parse_countries(json, Path::new("c.json"), PRAGUE).unwrap_err();

        match err {
            GeoDataError::Entry { key, .. } => assert_eq!(key, "Broken"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_directory_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = World::load(dir.path(), &dir.path().join("rivers.json"), PRAGUE).unwrap_err();
        assert!(matches!(err, GeoDataError::Io { .. }));
    }

    #[test]
    fn test_bundled_datasets() {
        let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let world = World::load(
            &data.join("countries.json"),
            &data.join("rivers.json"),
            PRAGUE,
        )
        .unwrap();

        assert_eq!(world.countries().len(), 3);
        assert_eq!(world.rivers().len(), 3);

        // Prague is the map origin
        let hit = crate::geo::hit_test::find_country(world.countries(), ORIGIN);
        assert_eq!(hit.map(|i| world.countries()[i].code.as_str()), Some("CZ"));

        let vienna = Coord {
            x: 16.37 - PRAGUE.x,
            y: 48.21 - PRAGUE.y,
        };
        let hit = crate::geo::hit_test::find_country(world.countries(), vienna);
        assert_eq!(hit.map(|i| world.countries()[i].code.as_str()), Some("AT"));
    }

    #[test]
    fn test_bounds() {
        let coords = vec![
            Coord { x: -1.0, y: 2.0 },
            Coord { x: 3.0, y: -4.0 },
            Coord { x: 0.5, y: 0.5 },
        ];
        let bounds = GeoBounds::from_coords(&coords).unwrap();

        assert_eq!(bounds.min, Coord { x: -1.0, y: -4.0 });
        assert_eq!(bounds.max, Coord { x: 3.0, y: 2.0 });
        assert!(bounds.contains(Coord { x: 3.0, y: 2.0 }));
        assert!(!bounds.contains(Coord { x: 3.1, y: 0.0 }));
        assert!(GeoBounds::from_coords(&[]).is_none());
    }

    #[test]
    fn test_bounds_intersection() {
        let a = GeoBounds {
            min: Coord { x: 0.0, y: 0.0 },
            max: Coord { x: 2.0, y: 2.0 },
        };
        let touching = GeoBounds {
            min: Coord { x: 2.0, y: 1.0 },
            max: Coord { x: 3.0, y: 3.0 },
        };
        let apart = GeoBounds {
            min: Coord { x: 5.0, y: 5.0 },
            max: Coord { x: 6.0, y: 6.0 },
        };

        assert!(a.intersects(&touching));
        assert!(!a.intersects(&apart));
    }
}
