//! Road network graph engine.
//!
//! Turns polyline road geometry into a deduplicated directed graph and runs
//! nearest-node snapping plus three path searches over it: shortest-hop BFS,
//! weighted Dijkstra and bounded simple-path enumeration.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::{
    BuildStats, GeometryRecord, GraphBuilder, GraphBuilderConfig, Oneway, SegmentWeight,
    build_graph,
};
pub use model::{Edge, NearestNodeIndex, RoadGraph};
pub use routing::{
    DfsLimits, DfsStop, PathEnumeration, ShortestPath, bfs_shortest_hops, dfs_all_paths,
    dijkstra_shortest,
};

/// Dense node identifier, `0..node_count`
pub type NodeId = usize;
/// Edge weight in the graph's native length unit
pub type Weight = f64;
