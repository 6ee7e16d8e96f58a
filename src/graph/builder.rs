//! Fluent API for building Network instances.

use std::collections::HashSet;

use crate::types::{GraphConfig, NetResult, Vertex};

use super::Network;

/// Fluent builder for constructing a [`Network`].
///
/// Vertices are inserted in first-mention order, whether they were named by
/// [`vertex`](Self::vertex) or as an edge endpoint. Validation happens in
/// [`build`](Self::build).
pub struct NetworkBuilder<T> {
    config: GraphConfig,
    vertices: Vec<T>,
    seen: HashSet<T>,
    edges: Vec<(T, T, f64)>,
}

impl<T: Vertex> NetworkBuilder<T> {
    /// Create a new builder with the default sizing policy.
    pub fn new() -> Self {
        Self {
            config: GraphConfig::default(),
            vertices: Vec::new(),
            seen: HashSet::new(),
            edges: Vec::new(),
        }
    }

    /// Use a specific sizing policy.
    pub fn config(mut self, config: GraphConfig) -> Self {
        self.config = config;
        self
    }

    /// Declare a vertex. Declaring one twice is harmless.
    pub fn vertex(mut self, label: T) -> Self {
        self.note(&label);
        self
    }

    /// Declare a weighted edge, declaring its endpoints as needed.
    pub fn edge(mut self, a: T, b: T, weight: f64) -> Self {
        self.note(&a);
        self.note(&b);
        self.edges.push((a, b, weight));
        self
    }

    fn note(&mut self, label: &T) {
        if self.seen.insert(label.clone()) {
            self.vertices.push(label.clone());
        }
    }

    /// Build the final Network.
    pub fn build(self) -> NetResult<Network<T>> {
        let mut network = Network::with_config(self.config)?;
        for label in self.vertices {
            network.add_vertex(label)?;
        }
        for (a, b, weight) in &self.edges {
            network.add_edge(a, b, *weight)?;
        }
        log::debug!(
            "Built network with {} vertices and {} edges",
            network.vertex_count(),
            network.edge_count()
        );
        Ok(network)
    }
}

impl<T: Vertex> Default for NetworkBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
