//! Conversion of in-memory `GeoJSON` features into geometry records

use geojson::{Feature, FeatureCollection, GeoJson, JsonObject};
use log::trace;
use serde_json::Value;

use super::record::GeometryRecord;
use crate::Error;

/// Property names carrying the road's functional class, in lookup order
const FUNCTIONAL_CLASS_KEYS: [&str; 2] = ["fclass", "functional_class"];

/// Turns a feature into a record.
///
/// Geometry that cannot be represented as a `geo` geometry is dropped, which
/// makes the builder skip the record. Numeric and boolean attribute values are
/// kept in their textual form, so `"oneway": -1` reads as `"-1"`.
pub fn record_from_feature(feature: Feature) -> GeometryRecord {
    let geometry = feature.geometry.and_then(|geometry| {
        geo::Geometry::<f64>::try_from(geometry)
            .inspect_err(|e| trace!("Dropping unconvertible feature geometry: {e}"))
            .ok()
    });
    let properties = feature.properties.as_ref();

    GeometryRecord {
        geometry,
        access: properties.and_then(|p| string_property(p, "access")),
        functional_class: properties.and_then(|p| {
            FUNCTIONAL_CLASS_KEYS
                .iter()
                .find_map(|key| string_property(p, key))
        }),
        oneway: properties.and_then(|p| string_property(p, "oneway")),
    }
}

pub fn records_from_features(collection: FeatureCollection) -> Vec<GeometryRecord> {
    collection
        .features
        .into_iter()
        .map(record_from_feature)
        .collect()
}

/// Parses a `GeoJSON` document (feature collection, single feature or bare
/// geometry) into records.
///
/// # Errors
///
/// Returns [`Error::GeoJsonError`] if the text is not valid `GeoJSON`.
pub fn records_from_geojson_str(text: &str) -> Result<Vec<GeometryRecord>, Error> {
    let document = text
        .parse::<GeoJson>()
        .map_err(|e| Error::GeoJsonError(e.to_string()))?;

    Ok(match document {
        GeoJson::FeatureCollection(collection) => records_from_features(collection),
        GeoJson::Feature(feature) => vec![record_from_feature(feature)],
        GeoJson::Geometry(geometry) => vec![record_from_feature(Feature::from(geometry))],
    })
}

fn string_property(properties: &JsonObject, key: &str) -> Option<String> {
    match properties.get(key)? {
        Value::String(value) => Some(value.clone()),
        Value::Number(value) => Some(value.to_string()),
        Value::Bool(value) => Some(value.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use geo::Geometry;

    use super::*;

    const ROADS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {"type": "LineString", "coordinates": [[106.91, 47.91], [106.92, 47.92]]},
                "properties": {"fclass": "primary", "oneway": "F", "access": null}
            },
            {
                "type": "Feature",
                "geometry": {"type": "MultiLineString", "coordinates": [[[0.0, 0.0], [1.0, 0.0]], [[1.0, 0.0], [1.0, 1.0]]]},
                "properties": {"functional_class": "footway", "oneway": -1}
            },
            {
                "type": "Feature",
                "geometry": null,
                "properties": {"access": "private"}
            }
        ]
    }"#;

    #[test]
    fn test_records_from_collection() {
        let records = records_from_geojson_str(ROADS).expect("valid GeoJSON");
        assert_eq!(records.len(), 3);

        assert!(matches!(records[0].geometry, Some(Geometry::LineString(_))));
        assert_eq!(records[0].functional_class.as_deref(), Some("primary"));
        assert_eq!(records[0].oneway.as_deref(), Some("F"));
        assert_eq!(records[0].access, None);

        assert!(matches!(
            records[1].geometry,
            Some(Geometry::MultiLineString(_))
        ));
        assert_eq!(records[1].functional_class.as_deref(), Some("footway"));
        assert_eq!(records[1].oneway.as_deref(), Some("-1"));

        assert!(records[2].geometry.is_none());
        assert_eq!(records[2].access.as_deref(), Some("private"));
    }

    #[test]
    fn test_bare_geometry() {
        let records =
            records_from_geojson_str(r#"{"type": "LineString", "coordinates": [[0, 0], [1, 1]]}"#)
                .expect("valid GeoJSON");
        assert_eq!(records.len(), 1);
        assert!(records[0].oneway.is_none());
    }

    #[test]
    fn test_invalid_document() {
        assert!(matches!(
            records_from_geojson_str("{\"type\": \"Nope\"}"),
            Err(Error::GeoJsonError(_))
        ));
    }
}
