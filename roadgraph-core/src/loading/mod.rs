//! This module is responsible for turning road geometry records
//! into a routable graph.

mod builder;
mod config;
pub mod geojson;
mod record;

pub use builder::{BuildStats, GraphBuilder, build_graph};
pub use config::{GraphBuilderConfig, SegmentWeight};
pub use record::{GeometryRecord, Oneway};
