//! Undirected graph over an adjacency matrix.

use std::collections::HashMap;
use std::fmt;

use crate::types::{GraphConfig, NetError, NetResult, Vertex};

use super::matrix::AdjacencyMatrix;
use super::traversal::{hop_path, Bfs, Dfs};

/// An undirected graph whose vertices are distinct labels of type `T`.
///
/// Each vertex occupies a *slot*: its position in [`Graph::vertices`] and its
/// row/column in the adjacency matrix. Slots are dense, so removing a vertex
/// shifts every later vertex down by one. Slot indices obtained from
/// [`Graph::index_of`] are therefore only valid until the next removal; address
/// vertices by label when that matters.
///
/// Traversal iterators borrow the graph, so it cannot be mutated while one is
/// alive.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | \(O(n^2)\) copy when the matrix grows |
/// | `remove_vertex` | \(O(n^2)\) | Compacts the matrix |
/// | `add_edge` / `remove_edge` | \(O(1)\) | Label lookup is hashed |
/// | `neighbors` | \(O(n)\) | Scans one matrix row |
/// | `iter_bfs` / `iter_dfs` (full) | \(O(n^2)\) | |
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// Labels in slot order.
    vertices: Vec<T>,
    /// Label -> slot.
    index: HashMap<T, usize>,
    /// Edge presence between slots.
    adjacency: AdjacencyMatrix<bool>,
    /// Sizing policy.
    config: GraphConfig,
}

impl<T: Vertex> Graph<T> {
    /// Create an empty graph with the default capacity.
    pub fn new() -> Self {
        Self::from_config(GraphConfig::default())
    }

    /// Create an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> NetResult<Self> {
        Self::with_config(GraphConfig::with_capacity(capacity))
    }

    /// Create an empty graph with an explicit sizing policy.
    pub fn with_config(config: GraphConfig) -> NetResult<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: GraphConfig) -> Self {
        Self {
            vertices: Vec::with_capacity(config.initial_capacity),
            index: HashMap::with_capacity(config.initial_capacity),
            adjacency: AdjacencyMatrix::with_capacity(config.initial_capacity),
            config,
        }
    }

    /// The sizing policy this graph was created with.
    pub fn config(&self) -> GraphConfig {
        self.config
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// True when the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of vertex slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.adjacency.capacity()
    }

    /// Number of (undirected) edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.count_pairs()
    }

    /// All labels in slot order.
    pub fn vertices(&self) -> &[T] {
        &self.vertices
    }

    /// True if `label` is a vertex.
    pub fn contains(&self, label: &T) -> bool {
        self.index.contains_key(label)
    }

    /// Current slot of `label`. Invalidated by any vertex removal.
    pub fn index_of(&self, label: &T) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Add a vertex at the next free slot, growing the matrix if it is full.
    ///
    /// Returns the slot assigned to the new vertex. Fails with `InvalidArgument`
    /// when the matrix is full and cannot grow any further.
    pub fn add_vertex(&mut self, label: T) -> NetResult<usize> {
        if self.index.contains_key(&label) {
            return Err(NetError::DuplicateVertex(format!("{:?}", label)));
        }

        if self.vertices.len() == self.adjacency.capacity() {
            let grown = self.config.grown(self.adjacency.capacity())?;
            log::debug!(
                "Expanding adjacency matrix from {} to {} slots",
                self.adjacency.capacity(),
                grown
            );
            self.adjacency.grow_to(grown);
        }

        let slot = self.adjacency.push_slot();
        self.index.insert(label.clone(), slot);
        self.vertices.push(label);
        Ok(slot)
    }

    /// Remove a vertex and every edge touching it.
    ///
    /// Every vertex after it moves down one slot.
    pub fn remove_vertex(&mut self, label: &T) -> NetResult<T> {
        let slot = self.slot_of(label)?;
        Ok(self.remove_slot(slot))
    }

    /// Add an undirected edge. Adding an existing edge is a no-op.
    pub fn add_edge(&mut self, a: &T, b: &T) -> NetResult<()> {
        let (i, j) = self.edge_slots(a, b)?;
        self.link_slots(i, j);
        Ok(())
    }

    /// Remove the edge between `a` and `b`.
    ///
    /// Returns `false` (not an error) if there was no such edge.
    pub fn remove_edge(&mut self, a: &T, b: &T) -> NetResult<bool> {
        let (i, j) = self.slots_of(a, b)?;
        Ok(self.unlink_slots(i, j))
    }

    /// True if `a` and `b` are joined by an edge.
    pub fn has_edge(&self, a: &T, b: &T) -> NetResult<bool> {
        let (i, j) = self.slots_of(a, b)?;
        Ok(self.is_adjacent(i, j))
    }

    /// Vertices joined to `label`, in slot order.
    pub fn neighbors(&self, label: &T) -> NetResult<Vec<T>> {
        let slot = self.slot_of(label)?;
        Ok(self
            .neighbor_slots(slot)
            .map(|n| self.vertices[n].clone())
            .collect())
    }

    /// True if every vertex is reachable from every other.
    ///
    /// Graphs with zero or one vertex are connected.
    pub fn is_connected(&self) -> bool {
        if self.vertices.len() <= 1 {
            return true;
        }
        Bfs::from_slot(self, 0).count() == self.vertices.len()
    }

    /// Breadth-first traversal from `start`.
    pub fn iter_bfs(&self, start: &T) -> NetResult<Bfs<'_, T>> {
        let slot = self.start_slot(start)?;
        Ok(Bfs::from_slot(self, slot))
    }

    /// Depth-first traversal from `start`.
    pub fn iter_dfs(&self, start: &T) -> NetResult<Dfs<'_, T>> {
        let slot = self.start_slot(start)?;
        Ok(Dfs::from_slot(self, slot))
    }

    /// A path from `from` to `to` with the fewest edges.
    ///
    /// `[from]` when both are the same vertex, empty when `to` is unreachable.
    pub fn shortest_hop_path(&self, from: &T, to: &T) -> NetResult<Vec<T>> {
        let (source, target) = self.slots_of(from, to)?;
        Ok(self.labels(&hop_path(self, source, target)))
    }

    // ---- crate-internal slot access ----

    pub(crate) fn slot_of(&self, label: &T) -> NetResult<usize> {
        self.index_of(label).ok_or_else(|| NetError::not_found(label))
    }

    pub(crate) fn slots_of(&self, a: &T, b: &T) -> NetResult<(usize, usize)> {
        Ok((self.slot_of(a)?, self.slot_of(b)?))
    }

    /// Slots of a prospective edge; rejects self-loops.
    pub(crate) fn edge_slots(&self, a: &T, b: &T) -> NetResult<(usize, usize)> {
        let (i, j) = self.slots_of(a, b)?;
        if i == j {
            return Err(NetError::SelfLoop(format!("{:?}", a)));
        }
        Ok((i, j))
    }

    fn start_slot(&self, start: &T) -> NetResult<usize> {
        if self.is_empty() {
            return Err(NetError::EmptyStructure);
        }
        self.slot_of(start)
    }

    pub(crate) fn label(&self, slot: usize) -> &T {
        &self.vertices[slot]
    }

    pub(crate) fn labels(&self, slots: &[usize]) -> Vec<T> {
        slots.iter().map(|&s| self.vertices[s].clone()).collect()
    }

    #[inline]
    pub(crate) fn is_adjacent(&self, i: usize, j: usize) -> bool {
        self.adjacency.get(i, j)
    }

    pub(crate) fn neighbor_slots(&self, slot: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency
            .row(slot)
            .iter()
            .enumerate()
            .filter_map(|(n, &linked)| linked.then_some(n))
    }

    pub(crate) fn link_slots(&mut self, i: usize, j: usize) {
        self.adjacency.set_symmetric(i, j, true);
    }

    pub(crate) fn unlink_slots(&mut self, i: usize, j: usize) -> bool {
        let existed = self.adjacency.get(i, j);
        self.adjacency.set_symmetric(i, j, false);
        existed
    }

    pub(crate) fn remove_slot(&mut self, slot: usize) -> T {
        let removed = self.vertices.remove(slot);
        self.index.remove(&removed);
        for (shifted, label) in self.vertices.iter().enumerate().skip(slot) {
            if let Some(entry) = self.index.get_mut(label) {
                *entry = shifted;
            }
        }
        self.adjacency.remove_slot(slot);
        log::debug!(
            "Removed vertex {:?} from slot {}; {} later vertices re-indexed",
            removed,
            slot,
            self.vertices.len() - slot
        );
        removed
    }

    /// Structural self-check: counts agree, labels are indexed at their
    /// slots, and the matrix is symmetric with an empty diagonal.
    pub fn check_invariants(&self) -> bool {
        self.vertices.len() == self.adjacency.len()
            && self.index.len() == self.vertices.len()
            && self.adjacency.len() <= self.adjacency.capacity()
            && self
                .vertices
                .iter()
                .enumerate()
                .all(|(slot, label)| self.index.get(label) == Some(&slot))
            && self.adjacency.is_well_formed()
    }
}

impl<T: Vertex> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Write the `index / value` table shared by graph and network dumps.
pub(crate) fn write_vertex_table<T: fmt::Debug>(
    f: &mut fmt::Formatter<'_>,
    vertices: &[T],
) -> fmt::Result {
    writeln!(f, "Vertex Values")?;
    writeln!(f, "-------------")?;
    writeln!(f, "index\tvalue")?;
    for (slot, label) in vertices.iter().enumerate() {
        writeln!(f, "{}\t{:?}", slot, label)?;
    }
    Ok(())
}

impl<T: Vertex> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Graph is empty");
        }
        let n = self.vertex_count();

        writeln!(f, "Adjacency Matrix")?;
        writeln!(f, "----------------")?;
        write!(f, "index")?;
        for col in 0..n {
            write!(f, "\t{}", col)?;
        }
        writeln!(f)?;
        for row in 0..n {
            write!(f, "{}", row)?;
            for &linked in self.adjacency.row(row) {
                write!(f, "\t{}", u8::from(linked))?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        write_vertex_table(f, &self.vertices)
    }
}
