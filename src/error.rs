use thiserror::Error;

use crate::routing::Algorithm;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("No road node near ({lon}, {lat})")]
    NoNearbyNode { lon: f64, lat: f64 },
    #[error("No {algorithm} path between nodes {start} and {goal}")]
    NoPath {
        algorithm: Algorithm,
        start: usize,
        goal: usize,
    },
    #[error("Unknown algorithm {0:?}, expected bfs, dfs or dijkstra")]
    UnknownAlgorithm(String),
    #[error(transparent)]
    Core(#[from] roadgraph_core::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
