//! `GeoJSON` export of search results for map rendering

use geo::{LineString, Point};
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use crate::{Error, NodeId, RoadGraph};

/// Converts a path to a `GeoJSON` feature.
///
/// The geometry is a `LineString` through the node coordinates, or a `Point`
/// for a single-node path. Properties carry the `label`, the node ids, the hop
/// count and the path weight. An empty path has no feature.
///
/// # Errors
///
/// Returns [`Error::InvalidNodeIndex`] if the path contains an unknown node.
pub fn path_to_feature(
    graph: &RoadGraph,
    path: &[NodeId],
    label: &str,
) -> Result<Option<Feature>, Error> {
    let coords = graph.path_coordinates(path)?;

    let geometry = match coords.as_slice() {
        [] => return Ok(None),
        [single] => Geometry::new(GeoJsonValue::from(&Point::from(*single))),
        _ => Geometry::new(GeoJsonValue::from(&LineString::new(coords))),
    };

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "label": label,
            "nodes": path,
            "hops": path.len() - 1,
            "weight": graph.path_weight(path),
        }
    });

    Feature::from_json_value(value)
        .map(Some)
        .map_err(|e| Error::GeoJsonError(e.to_string()))
}

/// Converts several paths (e.g. an enumeration result) into one collection,
/// tagging each feature with its `path_index`
///
/// # Errors
///
/// Returns [`Error::InvalidNodeIndex`] if any path contains an unknown node.
pub fn paths_to_feature_collection(
    graph: &RoadGraph,
    paths: &[Vec<NodeId>],
    label: &str,
) -> Result<FeatureCollection, Error> {
    let mut features = Vec::with_capacity(paths.len());

    for (index, path) in paths.iter().enumerate() {
        if let Some(mut feature) = path_to_feature(graph, path, label)? {
            feature.set_property("path_index", index);
            features.push(feature);
        }
    }

    Ok(FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    })
}
