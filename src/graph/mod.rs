//! Adjacency-matrix graphs and weighted networks.

pub mod builder;
#[allow(clippy::module_inception)]
pub mod graph;
mod matrix;
pub mod network;
pub(crate) mod shortest_path;
pub mod traversal;

pub use builder::NetworkBuilder;
pub use graph::Graph;
pub use network::Network;
pub use traversal::{Bfs, Dfs};
