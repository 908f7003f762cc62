//! Static geographic reference data: district polygons and the optional
//! water / green-space overlays.
//!
//! The data is loaded once and never mutated afterwards. On disk it is laid
//! out as:
//!
//! ```text
//! <root>/districts/1.geojson ... <root>/districts/23.geojson
//! <root>/water/*.geojson            (optional)
//! <root>/green/*.geojson            (optional)
//! ```

use crate::reference::error::ReferenceDataError;
use crate::types::district::District;
use crate::utils::get_data_dir;
use log::{debug, info};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const DISTRICTS_DIR: &str = "districts";
const WATER_DIR: &str = "water";
const GREEN_DIR: &str = "green";
const GEOJSON_EXTENSION: &str = "geojson";

/// Polygon of one district as a GeoJSON geometry object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictShape {
    pub district: District,
    pub geometry: Value,
}

/// Immutable lookup of district shapes and overlay layers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceData {
    shapes: BTreeMap<District, DistrictShape>,
    water: Vec<Value>,
    green_space: Vec<Value>,
}

impl ReferenceData {
    /// Builds reference data from in-memory GeoJSON documents.
    ///
    /// Each document may be a geometry, a `Feature` or a `FeatureCollection`;
    /// the first geometry found is used. Documents without one are skipped.
    pub fn from_shapes(shapes: impl IntoIterator<Item = (District, Value)>) -> Self {
        let shapes = shapes
            .into_iter()
            .filter_map(|(district, document)| {
                extract_geometry(&document).map(|geometry| {
                    (
                        district,
                        DistrictShape {
                            district,
                            geometry: geometry.clone(),
                        },
                    )
                })
            })
            .collect();
        Self {
            shapes,
            water: Vec::new(),
            green_space: Vec::new(),
        }
    }

    pub fn with_water(mut self, layers: Vec<Value>) -> Self {
        self.water = layers;
        self
    }

    pub fn with_green_space(mut self, layers: Vec<Value>) -> Self {
        self.green_space = layers;
        self
    }

    /// Loads the reference data below `root`. All 23 district files must exist,
    /// the overlay directories are optional.
    pub async fn from_dir(root: impl Into<PathBuf>) -> Result<Self, ReferenceDataError> {
        let root = root.into();
        tokio::task::spawn_blocking(move || Self::load_dir(&root)).await?
    }

    /// Loads the reference data from the platform data directory
    /// (e.g. `~/.local/share/wien_wetter` on Linux).
    pub async fn from_default_dir() -> Result<Self, ReferenceDataError> {
        let root = get_data_dir().ok_or(ReferenceDataError::DataDirResolution)?;
        Self::from_dir(root).await
    }

    fn load_dir(root: &Path) -> Result<Self, ReferenceDataError> {
        let districts_dir = root.join(DISTRICTS_DIR);
        let mut shapes = BTreeMap::new();
        for district in District::all() {
            let path = districts_dir.join(format!("{}.{}", district.index(), GEOJSON_EXTENSION));
            if !path.exists() {
                return Err(ReferenceDataError::MissingDistrict(district));
            }
            let document = read_geojson(&path)?;
            let geometry = extract_geometry(&document)
                .ok_or_else(|| ReferenceDataError::MissingGeometry(path.clone()))?
                .clone();
            shapes.insert(district, DistrictShape { district, geometry });
        }

        let water = read_overlay_dir(&root.join(WATER_DIR))?;
        let green_space = read_overlay_dir(&root.join(GREEN_DIR))?;
        info!(
            "Loaded {} district shapes, {} water and {} green-space layers from {}",
            shapes.len(),
            water.len(),
            green_space.len(),
            root.display()
        );

        Ok(Self {
            shapes,
            water,
            green_space,
        })
    }

    pub fn shape(&self, district: District) -> Result<&DistrictShape, ReferenceDataError> {
        self.shapes
            .get(&district)
            .ok_or(ReferenceDataError::MissingDistrict(district))
    }

    pub fn shapes(&self) -> impl Iterator<Item = &DistrictShape> {
        self.shapes.values()
    }

    pub fn water(&self) -> &[Value] {
        &self.water
    }

    pub fn green_space(&self) -> &[Value] {
        &self.green_space
    }
}

fn read_geojson(path: &Path) -> Result<Value, ReferenceDataError> {
    let bytes = std::fs::read(path).map_err(|e| ReferenceDataError::Read(path.to_path_buf(), e))?;
    serde_json::from_slice(&bytes).map_err(|e| ReferenceDataError::Parse(path.to_path_buf(), e))
}

fn read_overlay_dir(dir: &Path) -> Result<Vec<Value>, ReferenceDataError> {
    if !dir.is_dir() {
        debug!("Overlay directory {} not present, skipping", dir.display());
        return Ok(Vec::new());
    }
    let entries =
        std::fs::read_dir(dir).map_err(|e| ReferenceDataError::ReadDir(dir.to_path_buf(), e))?;
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ReferenceDataError::ReadDir(dir.to_path_buf(), e))?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == GEOJSON_EXTENSION) {
            paths.push(path);
        }
    }
    // read_dir order is platform dependent
    paths.sort();
    paths.iter().map(|path| read_geojson(path)).collect()
}

/// First geometry object inside a GeoJSON document.
fn extract_geometry(document: &Value) -> Option<&Value> {
    match document.get("type").and_then(Value::as_str)? {
        "FeatureCollection" => document
            .get("features")?
            .as_array()?
            .iter()
            .find_map(extract_geometry),
        "Feature" => document.get("geometry").filter(|g| !g.is_null()),
        _ => Some(document),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn square(offset: f64) -> Value {
        json!({
            "type": "Polygon",
            "coordinates": [[
                [16.30 + offset, 48.20],
                [16.31 + offset, 48.20],
                [16.31 + offset, 48.21],
                [16.30 + offset, 48.20]
            ]]
        })
    }

    pub(crate) fn all_squares() -> ReferenceData {
        ReferenceData::from_shapes(
            District::all().map(|d| (d, square(d.index() as f64 / 100.0))),
        )
    }

    fn write_json(path: &Path, value: &Value) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, serde_json::to_vec(value).unwrap()).unwrap();
    }

    #[test]
    fn test_extract_geometry_variants() {
        let polygon = square(0.0);
        let feature = json!({"type": "Feature", "properties": {}, "geometry": polygon});
        let collection = json!({"type": "FeatureCollection", "features": [feature]});
        assert_eq!(extract_geometry(&polygon), Some(&polygon));
        assert_eq!(extract_geometry(&feature), Some(&polygon));
        assert_eq!(extract_geometry(&collection), Some(&polygon));
        assert_eq!(extract_geometry(&json!({"type": "Feature", "geometry": null})), None);
        assert_eq!(extract_geometry(&json!({"no": "type"})), None);
    }

    #[test]
    fn test_from_shapes_lookup() {
        let data = all_squares();
        assert_eq!(data.shapes().count(), 23);
        let liesing = District::new(23).unwrap();
        assert_eq!(data.shape(liesing).unwrap().district, liesing);
    }

    #[test]
    fn test_missing_district_lookup() {
        let wieden = District::new(4).unwrap();
        let data = ReferenceData::from_shapes([(wieden, square(0.0))]);
        assert!(data.shape(wieden).is_ok());
        assert!(matches!(
            data.shape(District::new(5).unwrap()),
            Err(ReferenceDataError::MissingDistrict(_))
        ));
    }

    #[tokio::test]
    async fn test_load_from_dir() -> Result<(), ReferenceDataError> {
        let dir = tempfile::tempdir().unwrap();
        for district in District::all() {
            let feature = json!({
                "type": "FeatureCollection",
                "features": [{"type": "Feature", "properties": {"BEZNR": district.index()}, "geometry": square(0.0)}]
            });
            write_json(
                &dir.path().join("districts").join(format!("{}.geojson", district.index())),
                &feature,
            );
        }
        write_json(&dir.path().join("water/b.geojson"), &json!({"type": "FeatureCollection", "features": []}));
        write_json(&dir.path().join("water/a.geojson"), &square(1.0));
        std::fs::write(dir.path().join("water/readme.txt"), "ignored").unwrap();

        let data = ReferenceData::from_dir(dir.path()).await?;
        assert_eq!(data.shapes().count(), 23);
        assert_eq!(data.water().len(), 2);
        assert_eq!(data.water()[0], square(1.0));
        assert!(data.green_space().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_load_from_dir_missing_district() {
        let dir = tempfile::tempdir().unwrap();
        write_json(&dir.path().join("districts/1.geojson"), &square(0.0));

        let result = ReferenceData::from_dir(dir.path()).await;
        assert!(matches!(
            result,
            Err(ReferenceDataError::MissingDistrict(d)) if d.index() == 2
        ));
    }

    #[tokio::test]
    async fn test_load_from_dir_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        for district in District::all() {
            write_json(
                &dir.path().join("districts").join(format!("{}.geojson", district.index())),
                &square(0.0),
            );
        }
        std::fs::write(dir.path().join("districts/7.geojson"), "{ not json").unwrap();

        let result = ReferenceData::from_dir(dir.path()).await;
        assert!(matches!(result, Err(ReferenceDataError::Parse(_, _))));
    }
}
