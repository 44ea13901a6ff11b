// District boundary loader
use crate::domain::geometry::DistrictGeometry;
use anyhow::{Context, Result, anyhow};
use geo::MultiPolygon;
use geojson::GeoJson;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub fn load_geometry(path: &Path, feature_id_key: &str) -> Result<DistrictGeometry> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open GeoJSON file: {:?}", path))?;
    read_geometry(BufReader::new(file), feature_id_key)
        .with_context(|| format!("Failed to parse GeoJSON file: {:?}", path))
}

/// Read a `FeatureCollection`, keying each polygon feature by the string
/// property `feature_id_key`
pub fn read_geometry<R: Read>(reader: R, feature_id_key: &str) -> Result<DistrictGeometry> {
    let geojson = GeoJson::from_reader(reader).context("Invalid GeoJSON")?;

    let collection = match geojson {
        GeoJson::FeatureCollection(fc) => fc,
        _ => return Err(anyhow!("GeoJSON must be a FeatureCollection")),
    };

    let mut shapes = BTreeMap::new();

    for feature in collection.features {
        let name = match feature.property(feature_id_key) {
            Some(serde_json::Value::String(s)) => s.trim().to_string(),
            _ => {
                tracing::warn!("Skipping feature without a '{}' property", feature_id_key);
                continue;
            }
        };

        let Some(geometry) = feature.geometry else {
            tracing::warn!("Skipping feature {} without geometry", name);
            continue;
        };

        let shape: geo::Geometry<f64> = geometry
            .try_into()
            .map_err(|e| anyhow!("Failed to convert geometry of {}: {:?}", name, e))?;

        let shape = match shape {
            geo::Geometry::MultiPolygon(mp) => mp,
            geo::Geometry::Polygon(p) => MultiPolygon::new(vec![p]),
            _ => {
                tracing::warn!("Skipping feature {} with non-polygon geometry", name);
                continue;
            }
        };

        if shapes.insert(name.clone(), shape).is_some() {
            tracing::warn!("Duplicate boundary for {}, keeping the last one", name);
        }
    }

    Ok(DistrictGeometry::new(shapes))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLLECTION: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "ADM2_EN": "Dhaka" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[90.0, 23.5], [90.5, 23.5], [90.5, 24.0], [90.0, 24.0], [90.0, 23.5]]]
                }
            },
            {
                "type": "Feature",
                "properties": { "ADM2_EN": "Bhola" },
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[90.6, 22.2], [90.8, 22.2], [90.8, 22.5], [90.6, 22.5], [90.6, 22.2]]],
                        [[[91.0, 22.0], [91.1, 22.0], [91.1, 22.1], [91.0, 22.0]]]
                    ]
                }
            },
            {
                "type": "Feature",
                "properties": { "ADM2_EN": "Lighthouse" },
                "geometry": { "type": "Point", "coordinates": [91.8, 21.4] }
            },
            {
                "type": "Feature",
                "properties": { "NAME": "Unnamed" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
                }
            }
        ]
    }"#;

    #[test]
    fn test_reads_polygon_and_multipolygon_features() {
        let geometry = read_geometry(COLLECTION.as_bytes(), "ADM2_EN").unwrap();

        assert_eq!(geometry.len(), 2);
        assert_eq!(geometry.get("Dhaka").unwrap().0.len(), 1);
        assert_eq!(geometry.get("Bhola").unwrap().0.len(), 2);
        assert!(geometry.get("Lighthouse").is_none());
        assert!(geometry.get("Unnamed").is_none());
    }

    #[test]
    fn test_custom_key_property() {
        let geometry = read_geometry(COLLECTION.as_bytes(), "NAME").unwrap();
        assert_eq!(geometry.len(), 1);
        assert!(geometry.get("Unnamed").is_some());
    }

    #[test]
    fn test_rejects_non_collection() {
        let single = r#"{ "type": "Point", "coordinates": [90.0, 23.0] }"#;
        assert!(read_geometry(single.as_bytes(), "ADM2_EN").is_err());
    }
}
