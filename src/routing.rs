use std::fmt;
use std::str::FromStr;

use geo::Point;
use roadgraph_core::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::RouteError;

/// Path search to run for a query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Fewest hops
    Bfs,
    /// First path of the bounded simple-path enumeration
    Dfs,
    /// Lowest total weight
    #[default]
    Dijkstra,
}

impl Algorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "dijkstra" => Ok(Self::Dijkstra),
            _ => Err(RouteError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// A point-to-point routing request in the graph's coordinate space
#[derive(Debug, Clone, PartialEq)]
pub struct RouteQuery {
    pub algorithm: Algorithm,
    pub from: Point<f64>,
    pub to: Point<f64>,
    /// DFS limits for this query, router defaults if `None`
    pub dfs_limits: Option<DfsLimits>,
}

impl RouteQuery {
    pub fn new(algorithm: Algorithm, from: Point<f64>, to: Point<f64>) -> Self {
        Self {
            algorithm,
            from,
            to,
            dfs_limits: None,
        }
    }

    #[must_use]
    pub fn with_dfs_limits(mut self, limits: DfsLimits) -> Self {
        self.dfs_limits = Some(limits);
        self
    }
}

/// A found route with everything needed to draw it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    pub algorithm: Algorithm,
    pub nodes: Vec<NodeId>,
    /// `(x, y)` pairs, i.e. `(lon, lat)` for geographic graphs
    pub coords: Vec<(f64, f64)>,
    /// Only reported by Dijkstra
    pub total_weight: Option<Weight>,
}

impl RouteResult {
    pub(crate) fn new(
        graph: &RoadGraph,
        algorithm: Algorithm,
        nodes: Vec<NodeId>,
        total_weight: Option<Weight>,
    ) -> Result<Self, RouteError> {
        let coords = graph
            .path_coordinates(&nodes)?
            .into_iter()
            .map(|coord| coord.x_y())
            .collect();

        Ok(Self {
            algorithm,
            nodes,
            coords,
            total_weight,
        })
    }

    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Serializes the route as a JSON object
    ///
    /// # Errors
    ///
    /// Fails only if a coordinate or weight cannot be represented in JSON.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
