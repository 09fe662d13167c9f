mod shortest;
mod state;

pub use shortest::{ShortestPath, dijkstra_shortest};
