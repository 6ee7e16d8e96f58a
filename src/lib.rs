//! matrix-network: adjacency-matrix graphs and weighted networks.
//!
//! Vertices are arbitrary labels held in dense slots of a square adjacency
//! matrix that grows on demand. Graphs answer connectivity and produce lazy
//! breadth-first / depth-first traversals; networks add edge weights and
//! Dijkstra shortest paths. The route planner layers path planning and
//! nearest-target selection on top.

pub mod cli;
pub mod engine;
pub mod graph;
pub mod linear;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{Route, RouteMetric, RoutePlanner};
pub use graph::{Bfs, Dfs, Graph, Network, NetworkBuilder};
pub use linear::{Queue, Stack};
pub use types::{
    check_weight, GraphConfig, NetError, NetResult, Vertex, DEFAULT_CAPACITY, DEFAULT_EDGE_WEIGHT,
    DEFAULT_EXPANSION_FACTOR,
};
