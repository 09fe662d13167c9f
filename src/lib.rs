//! Query facade over the road graph engine.
//!
//! Owns one immutable [`RoadGraph`](roadgraph_core::RoadGraph) together with
//! its nearest-node index, snaps request coordinates onto it and runs the
//! requested search. Transport concerns (HTTP, parameter parsing, JSON
//! responses) stay with the caller.

pub mod config;
pub mod error;
pub mod model;
pub mod routing;

pub use config::RouterConfig;
pub use error::{ConfigError, RouteError};
pub use model::Router;
pub use routing::{Algorithm, RouteQuery, RouteResult};

pub use roadgraph_core::prelude;
