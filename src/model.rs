use std::time::Instant;

use roadgraph_core::prelude::*;
use tracing::{debug, info, info_span};

use crate::config::RouterConfig;
use crate::error::RouteError;
use crate::routing::{Algorithm, RouteQuery, RouteResult};

/// Router
///
/// Owns a built road graph and its spatial index. The graph never changes after
/// construction, so a `Router` can be shared between threads (for example
/// behind an `Arc`) and queried concurrently without locking.
#[derive(Debug, Clone)]
pub struct Router {
    graph: RoadGraph,
    index: NearestNodeIndex,
    config: RouterConfig,
}

impl Router {
    pub fn new(graph: RoadGraph, config: RouterConfig) -> Self {
        let index = NearestNodeIndex::new(&graph);
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Road graph ready for routing"
        );
        Self {
            graph,
            index,
            config,
        }
    }

    /// Builds the graph from geometry records using `config.builder`
    pub fn from_records<I>(records: I, config: RouterConfig) -> (Self, BuildStats)
    where
        I: IntoIterator,
        I::Item: std::borrow::Borrow<GeometryRecord>,
    {
        let (graph, stats) = build_graph(records, config.builder.clone());
        if stats.skipped() > 0 {
            info!(
                skipped = stats.skipped(),
                records = stats.records,
                "Some road records were skipped"
            );
        }
        (Self::new(graph, config), stats)
    }

    pub fn graph(&self) -> &RoadGraph {
        &self.graph
    }

    pub fn index(&self) -> &NearestNodeIndex {
        &self.index
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Nearest graph node to a coordinate
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::NoNearbyNode`] if the graph is empty or the
    /// coordinate is not finite.
    pub fn snap(&self, lon: f64, lat: f64) -> Result<NodeId, RouteError> {
        self.index
            .nearest_node(lon, lat)
            .ok_or(RouteError::NoNearbyNode { lon, lat })
    }

    /// Snaps both endpoints of the query and runs its algorithm
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::NoNearbyNode`] if an endpoint cannot be snapped and
    /// [`RouteError::NoPath`] if the search finds nothing.
    pub fn route(&self, query: &RouteQuery) -> Result<RouteResult, RouteError> {
        let span = info_span!("route", algorithm = %query.algorithm);
        let _guard = span.enter();
        let started = Instant::now();

        let start = self.snap(query.from.x(), query.from.y())?;
        let goal = self.snap(query.to.x(), query.to.y())?;
        debug!(start, goal, "Snapped endpoints");

        let result = self.route_nodes(query, start, goal);

        match &result {
            Ok(route) => info!(
                nodes = route.nodes.len(),
                weight = route.total_weight,
                elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
                "Route found"
            ),
            Err(e) => info!(
                elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
                "No route: {e}"
            ),
        }
        result
    }

    /// Runs the query's algorithm between two known nodes
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Core`] for unknown node ids and
    /// [`RouteError::NoPath`] if the search finds nothing.
    pub fn route_nodes(
        &self,
        query: &RouteQuery,
        start: NodeId,
        goal: NodeId,
    ) -> Result<RouteResult, RouteError> {
        let algorithm = query.algorithm;
        let (nodes, total_weight) = match algorithm {
            Algorithm::Bfs => (bfs_shortest_hops(&self.graph, start, goal)?, None),
            Algorithm::Dfs => {
                let limits = query.dfs_limits.unwrap_or(self.config.dfs);
                let enumeration = dfs_all_paths(&self.graph, start, goal, &limits)?;
                if enumeration.is_truncated() {
                    debug!(
                        expanded = enumeration.expanded,
                        "DFS stopped at the expansion limit"
                    );
                }
                let first = enumeration.into_paths().into_iter().next();
                (first.unwrap_or_default(), None)
            }
            Algorithm::Dijkstra => {
                let path = dijkstra_shortest(&self.graph, start, goal)?;
                let weight = path.is_reachable().then_some(path.weight);
                (path.nodes, weight)
            }
        };

        if nodes.is_empty() {
            return Err(RouteError::NoPath {
                algorithm,
                start,
                goal,
            });
        }

        RouteResult::new(&self.graph, algorithm, nodes, total_weight)
    }

    /// Every path the bounded enumeration finds between two coordinates
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::NoNearbyNode`] if an endpoint cannot be snapped.
    pub fn all_paths(
        &self,
        from: geo::Point<f64>,
        to: geo::Point<f64>,
        limits: Option<DfsLimits>,
    ) -> Result<PathEnumeration, RouteError> {
        let start = self.snap(from.x(), from.y())?;
        let goal = self.snap(to.x(), to.y())?;
        let limits = limits.unwrap_or(self.config.dfs);
        Ok(dfs_all_paths(&self.graph, start, goal, &limits)?)
    }
}
