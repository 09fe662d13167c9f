// Re-export key components
pub use crate::loading::geojson::{record_from_feature, records_from_features, records_from_geojson_str};
pub use crate::loading::{
    BuildStats, GeometryRecord, GraphBuilder, GraphBuilderConfig, Oneway, SegmentWeight,
    build_graph,
};
pub use crate::model::{Edge, NearestNodeIndex, RoadGraph};
pub use crate::routing::to_geojson::{path_to_feature, paths_to_feature_collection};
pub use crate::routing::{
    DfsLimits, DfsStop, PathEnumeration, ShortestPath, bfs_shortest_hops, dfs_all_paths,
    dijkstra_shortest,
};

// Core types
pub use crate::Error;
pub use crate::NodeId;
pub use crate::Weight;
