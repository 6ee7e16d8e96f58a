//! Weighted graph with shortest-path queries.

use std::fmt;

use crate::types::{check_weight, GraphConfig, NetResult, Vertex};

use super::graph::write_vertex_table;
use super::matrix::AdjacencyMatrix;
use super::shortest_path::dijkstra;
use super::traversal::{Bfs, Dfs};
use super::Graph;

/// An undirected graph whose edges carry a finite, non-negative weight.
///
/// The underlying [`Graph`] owns the labels and the boolean adjacency matrix,
/// which stays authoritative for edge presence; a second matrix with the same
/// slot layout stores the weights. The two grow and compact together. Because
/// weights may be zero, a zero weight cell alone does not mean "no edge".
#[derive(Debug, Clone)]
pub struct Network<T> {
    graph: Graph<T>,
    weights: AdjacencyMatrix<f64>,
}

impl<T: Vertex> Network<T> {
    /// Create an empty network with the default capacity.
    pub fn new() -> Self {
        Self::from_graph(Graph::new())
    }

    /// Create an empty network with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> NetResult<Self> {
        Graph::with_capacity(capacity).map(Self::from_graph)
    }

    /// Create an empty network with an explicit sizing policy.
    pub fn with_config(config: GraphConfig) -> NetResult<Self> {
        Graph::with_config(config).map(Self::from_graph)
    }

    fn from_graph(graph: Graph<T>) -> Self {
        let weights = AdjacencyMatrix::with_capacity(graph.capacity());
        Self { graph, weights }
    }

    /// Read-only view of the unweighted structure.
    pub fn as_graph(&self) -> &Graph<T> {
        &self.graph
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// True when the network has no vertices.
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Number of vertex slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.graph.capacity()
    }

    /// Number of (undirected) edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All labels in slot order.
    pub fn vertices(&self) -> &[T] {
        self.graph.vertices()
    }

    /// True if `label` is a vertex.
    pub fn contains(&self, label: &T) -> bool {
        self.graph.contains(label)
    }

    /// Current slot of `label`. Invalidated by any vertex removal.
    pub fn index_of(&self, label: &T) -> Option<usize> {
        self.graph.index_of(label)
    }

    /// Add a vertex, growing both matrices if they are full.
    pub fn add_vertex(&mut self, label: T) -> NetResult<usize> {
        let slot = self.graph.add_vertex(label)?;
        self.weights.grow_to(self.graph.capacity());
        let weight_slot = self.weights.push_slot();
        debug_assert_eq!(slot, weight_slot);
        Ok(slot)
    }

    /// Remove a vertex with all its edges; later vertices shift down one slot.
    pub fn remove_vertex(&mut self, label: &T) -> NetResult<T> {
        let slot = self.graph.slot_of(label)?;
        let removed = self.graph.remove_slot(slot);
        self.weights.remove_slot(slot);
        Ok(removed)
    }

    /// Add an edge of the given weight, or overwrite the weight of an existing one.
    pub fn add_edge(&mut self, a: &T, b: &T, weight: f64) -> NetResult<()> {
        let weight = check_weight(weight)?;
        let (i, j) = self.graph.edge_slots(a, b)?;
        self.graph.link_slots(i, j);
        self.weights.set_symmetric(i, j, weight);
        Ok(())
    }

    /// Remove the edge between `a` and `b`; `false` if there was none.
    pub fn remove_edge(&mut self, a: &T, b: &T) -> NetResult<bool> {
        let (i, j) = self.graph.slots_of(a, b)?;
        self.weights.set_symmetric(i, j, 0.0);
        Ok(self.graph.unlink_slots(i, j))
    }

    /// True if `a` and `b` are joined by an edge.
    pub fn has_edge(&self, a: &T, b: &T) -> NetResult<bool> {
        self.graph.has_edge(a, b)
    }

    /// Weight of the edge between `a` and `b`, or `None` if there is no edge.
    pub fn edge_weight(&self, a: &T, b: &T) -> NetResult<Option<f64>> {
        let (i, j) = self.graph.slots_of(a, b)?;
        Ok(self.graph.is_adjacent(i, j).then(|| self.weights.get(i, j)))
    }

    /// Vertices joined to `label`, in slot order.
    pub fn neighbors(&self, label: &T) -> NetResult<Vec<T>> {
        self.graph.neighbors(label)
    }

    /// True if every vertex is reachable from every other.
    pub fn is_connected(&self) -> bool {
        self.graph.is_connected()
    }

    /// Breadth-first traversal from `start`.
    pub fn iter_bfs(&self, start: &T) -> NetResult<Bfs<'_, T>> {
        self.graph.iter_bfs(start)
    }

    /// Depth-first traversal from `start`.
    pub fn iter_dfs(&self, start: &T) -> NetResult<Dfs<'_, T>> {
        self.graph.iter_dfs(start)
    }

    /// A path from `from` to `to` with the fewest edges, ignoring weights.
    pub fn shortest_hop_path(&self, from: &T, to: &T) -> NetResult<Vec<T>> {
        self.graph.shortest_hop_path(from, to)
    }

    /// Total weight along `path`, following consecutive edges.
    ///
    /// `None` if two consecutive labels are not adjacent. An empty or
    /// single-vertex path weighs 0.
    pub fn path_weight(&self, path: &[T]) -> NetResult<Option<f64>> {
        let slots = path
            .iter()
            .map(|label| self.graph.slot_of(label))
            .collect::<NetResult<Vec<_>>>()?;

        let mut total = 0.0;
        for pair in slots.windows(2) {
            if !self.graph.is_adjacent(pair[0], pair[1]) {
                return Ok(None);
            }
            total += self.weights.get(pair[0], pair[1]);
        }
        Ok(Some(total))
    }

    /// Weight of the lightest path between `from` and `to`, or `None` if `to`
    /// is unreachable.
    ///
    /// A reachable target whose weight sum exceeds `f64::MAX` reports
    /// `Some(f64::INFINITY)`.
    pub fn shortest_path_weight(&self, from: &T, to: &T) -> NetResult<Option<f64>> {
        let (source, target) = self.graph.slots_of(from, to)?;
        Ok(dijkstra(self, source, Some(target)).distance_to(target))
    }

    /// The lightest path from `from` to `to`, both included.
    ///
    /// `[from]` when both are the same vertex, empty when `to` is unreachable.
    pub fn shortest_path(&self, from: &T, to: &T) -> NetResult<Vec<T>> {
        let (source, target) = self.graph.slots_of(from, to)?;
        let slots = dijkstra(self, source, Some(target))
            .path_to(target)
            .unwrap_or_default();
        Ok(self.graph.labels(&slots))
    }

    /// Lightest path and its weight in one search, or `None` if unreachable.
    pub fn shortest_path_with_weight(&self, from: &T, to: &T) -> NetResult<Option<(Vec<T>, f64)>> {
        let (source, target) = self.graph.slots_of(from, to)?;
        let paths = dijkstra(self, source, Some(target));
        Ok(paths
            .path_to(target)
            .zip(paths.distance_to(target))
            .map(|(slots, weight)| (self.graph.labels(&slots), weight)))
    }

    /// Distance from `from` to every vertex, in slot order; `None` where unreachable.
    pub fn distances_from(&self, from: &T) -> NetResult<Vec<(T, Option<f64>)>> {
        let source = self.graph.slot_of(from)?;
        let paths = dijkstra(self, source, None);
        Ok(self
            .graph
            .vertices()
            .iter()
            .enumerate()
            .map(|(slot, label)| (label.clone(), paths.distance_to(slot)))
            .collect())
    }

    /// Weight stored between two adjacent slots.
    pub(crate) fn weight_at(&self, i: usize, j: usize) -> f64 {
        self.weights.get(i, j)
    }

    /// Structural self-check over both matrices; see [`Graph::check_invariants`].
    ///
    /// Also requires every weight to be finite and non-negative, and weights to
    /// be zero wherever there is no edge.
    pub fn check_invariants(&self) -> bool {
        let n = self.graph.vertex_count();
        self.graph.check_invariants()
            && self.weights.len() == n
            && self.weights.capacity() >= n
            && self.weights.is_well_formed()
            && (0..n).all(|i| {
                (0..n).all(|j| {
                    let w = self.weights.get(i, j);
                    w.is_finite() && w >= 0.0 && (self.graph.is_adjacent(i, j) || w == 0.0)
                })
            })
    }
}

impl<T: Vertex> Default for Network<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Vertex> fmt::Display for Network<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Network is empty");
        }
        let n = self.vertex_count();

        writeln!(f, "Weight Matrix")?;
        writeln!(f, "-------------")?;
        write!(f, "index")?;
        for col in 0..n {
            write!(f, "\t{}", col)?;
        }
        writeln!(f)?;
        for row in 0..n {
            write!(f, "{}", row)?;
            for col in 0..n {
                if self.graph.is_adjacent(row, col) {
                    write!(f, "\t{}", self.weights.get(row, col))?;
                } else {
                    write!(f, "\t-")?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        write_vertex_table(f, self.graph.vertices())
    }
}
