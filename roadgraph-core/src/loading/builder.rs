use std::borrow::Borrow;

use geo::{Coord, Geometry, LineString, Point};
use hashbrown::HashMap;
use log::{info, trace};

use super::config::{GraphBuilderConfig, SegmentWeight};
use super::record::{GeometryRecord, Oneway};
use crate::{NodeId, RoadGraph, Weight};

/// Every finite `f64` is exact at this many decimal places
const MAX_COORDINATE_PRECISION: u32 = 1074;

/// Counters collected while building a graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Records offered to the builder
    pub records: usize,
    /// Records that passed every filter
    pub used: usize,
    pub skipped_access: usize,
    pub skipped_functional_class: usize,
    pub skipped_missing_geometry: usize,
    pub skipped_unsupported_geometry: usize,
    /// Individual polylines with fewer than two (finite) vertices
    pub skipped_lines: usize,
    /// Vertex pairs turned into edges
    pub segments: usize,
}

impl BuildStats {
    /// Total number of records dropped for any reason
    pub fn skipped(&self) -> usize {
        self.skipped_access
            + self.skipped_functional_class
            + self.skipped_missing_geometry
            + self.skipped_unsupported_geometry
    }
}

/// Incremental road graph builder.
///
/// Records are consumed in order; node ids are assigned in order of first
/// appearance of each rounded coordinate. Bad records are counted and skipped,
/// never reported as errors.
#[derive(Debug)]
pub struct GraphBuilder {
    config: GraphBuilderConfig,
    precision: usize,
    graph: RoadGraph,
    coord_to_node: HashMap<(u64, u64), NodeId>,
    stats: BuildStats,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new(GraphBuilderConfig::default())
    }
}

impl GraphBuilder {
    pub fn new(config: GraphBuilderConfig) -> Self {
        let precision = config.coordinate_precision.min(MAX_COORDINATE_PRECISION);
        Self {
            precision: precision as usize,
            config,
            graph: RoadGraph::new(),
            coord_to_node: HashMap::new(),
            stats: BuildStats::default(),
        }
    }

    pub fn config(&self) -> &GraphBuilderConfig {
        &self.config
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    pub fn add_record(&mut self, record: &GeometryRecord) {
        self.stats.records += 1;

        if self.config.is_access_excluded(record.access.as_deref()) {
            trace!("Skipping record with access={:?}", record.access);
            self.stats.skipped_access += 1;
            return;
        }
        if self
            .config
            .is_class_excluded(record.functional_class.as_deref())
        {
            trace!(
                "Skipping record with functional class {:?}",
                record.functional_class
            );
            self.stats.skipped_functional_class += 1;
            return;
        }

        let direction = record.direction();
        match &record.geometry {
            None => {
                trace!("Skipping record without geometry");
                self.stats.skipped_missing_geometry += 1;
            }
            Some(Geometry::LineString(line)) => {
                self.stats.used += 1;
                self.add_line(line, direction);
            }
            Some(Geometry::MultiLineString(lines)) => {
                self.stats.used += 1;
                for line in &lines.0 {
                    self.add_line(line, direction);
                }
            }
            Some(other) => {
                trace!("Skipping record with unsupported geometry {other:?}");
                self.stats.skipped_unsupported_geometry += 1;
            }
        }
    }

    pub fn add_records<I>(&mut self, records: I)
    where
        I: IntoIterator,
        I::Item: Borrow<GeometryRecord>,
    {
        for record in records {
            self.add_record(record.borrow());
        }
    }

    pub fn finish(self) -> (RoadGraph, BuildStats) {
        let stats = self.stats;
        info!(
            "Built road graph with {} nodes and {} edges from {} of {} records ({} skipped)",
            self.graph.node_count(),
            self.graph.edge_count(),
            stats.used,
            stats.records,
            stats.skipped()
        );
        (self.graph, stats)
    }

    fn add_line(&mut self, line: &LineString<f64>, direction: Oneway) {
        let coords = &line.0;
        if coords.len() < 2 || coords.iter().any(|c| !c.x.is_finite() || !c.y.is_finite()) {
            trace!("Skipping degenerate line with {} vertices", coords.len());
            self.stats.skipped_lines += 1;
            return;
        }

        let uniform_weight = match self.config.segment_weight {
            SegmentWeight::Uniform => {
                let total: Weight = line
                    .lines()
                    .map(|segment| segment_length(segment.start, segment.end))
                    .sum();
                Some(total / (coords.len() - 1) as Weight)
            }
            SegmentWeight::Exact => None,
        };

        for pair in coords.windows(2) {
            let (start, end) = (pair[0], pair[1]);
            let from = self.node_for(start);
            let to = self.node_for(end);
            let weight = uniform_weight.unwrap_or_else(|| segment_length(start, end));

            match direction {
                Oneway::Forward => self.graph.add_edge(from, to, weight),
                Oneway::Reverse => self.graph.add_edge(to, from, weight),
                Oneway::Both => {
                    self.graph.add_edge(from, to, weight);
                    self.graph.add_edge(to, from, weight);
                }
            }
            self.stats.segments += 1;
        }
    }

    fn node_for(&mut self, coord: Coord<f64>) -> NodeId {
        let key = coord_key(coord, self.precision);
        if let Some(&node) = self.coord_to_node.get(&key) {
            node
        } else {
            let node = self.graph.add_node(Point::from(coord));
            self.coord_to_node.insert(key, node);
            node
        }
    }
}

/// Builds a road graph from an ordered sequence of records
pub fn build_graph<I>(records: I, config: GraphBuilderConfig) -> (RoadGraph, BuildStats)
where
    I: IntoIterator,
    I::Item: Borrow<GeometryRecord>,
{
    let mut builder = GraphBuilder::new(config);
    builder.add_records(records);
    builder.finish()
}

/// Rounded identity key of a vertex: the bit patterns of both coordinates
/// rounded to `precision` decimal places
fn coord_key(coord: Coord<f64>, precision: usize) -> (u64, u64) {
    (
        round_decimal(coord.x, precision).to_bits(),
        round_decimal(coord.y, precision).to_bits(),
    )
}

/// Rounds the exact binary value of `value` to `precision` decimal places,
/// ties to even. `-0.0` folds into `0.0`.
fn round_decimal(value: f64, precision: usize) -> f64 {
    let rounded: f64 = format!("{value:.precision$}").parse().unwrap_or(value);
    rounded + 0.0
}

fn segment_length(start: Coord<f64>, end: Coord<f64>) -> Weight {
    (end.x - start.x).hypot(end.y - start.y)
}
