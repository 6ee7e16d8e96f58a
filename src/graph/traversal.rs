//! Lazy breadth-first and depth-first traversals.
//!
//! Both iterators borrow the graph and own their visited flags and frontier,
//! doing one frontier step per `next()`. Neighbors are always expanded in
//! ascending slot order.

use std::iter::FusedIterator;

use crate::linear::{Queue, Stack};
use crate::types::Vertex;

use super::Graph;

/// Breadth-first traversal, yielding each reachable vertex once.
///
/// A vertex is marked visited when it is enqueued, so the queue never holds
/// duplicates.
pub struct Bfs<'g, T> {
    graph: &'g Graph<T>,
    visited: Vec<bool>,
    queue: Queue<usize>,
}

impl<'g, T: Vertex> Bfs<'g, T> {
    pub(crate) fn from_slot(graph: &'g Graph<T>, start: usize) -> Self {
        let mut visited = vec![false; graph.vertex_count()];
        let mut queue = Queue::with_capacity(graph.vertex_count());
        visited[start] = true;
        queue.enqueue(start);
        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<'g, T: Vertex> Iterator for Bfs<'g, T> {
    type Item = &'g T;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.queue.dequeue()?;
        for neighbor in self.graph.neighbor_slots(slot) {
            if !self.visited[neighbor] {
                self.visited[neighbor] = true;
                self.queue.enqueue(neighbor);
            }
        }
        Some(self.graph.label(slot))
    }
}

impl<T: Vertex> FusedIterator for Bfs<'_, T> {}

/// A stack entry: a vertex and the next column of its row still to scan.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    slot: usize,
    next: usize,
}

/// Depth-first traversal, yielding vertices in preorder.
///
/// From the vertex on top of the stack it always descends into the
/// lowest-slot neighbor not yet visited, and backtracks when none is left.
/// Each stack entry remembers where its row scan stopped, so a full traversal
/// reads every matrix cell at most once.
pub struct Dfs<'g, T> {
    graph: &'g Graph<T>,
    visited: Vec<bool>,
    stack: Stack<Cursor>,
    start: Option<usize>,
}

impl<'g, T: Vertex> Dfs<'g, T> {
    pub(crate) fn from_slot(graph: &'g Graph<T>, start: usize) -> Self {
        let mut visited = vec![false; graph.vertex_count()];
        let mut stack = Stack::with_capacity(graph.vertex_count());
        visited[start] = true;
        stack.push(Cursor {
            slot: start,
            next: 0,
        });
        Self {
            graph,
            visited,
            stack,
            start: Some(start),
        }
    }
}

impl<'g, T: Vertex> Iterator for Dfs<'g, T> {
    type Item = &'g T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            return Some(self.graph.label(start));
        }

        let count = self.visited.len();
        loop {
            let top = self.stack.peek_mut()?;
            let mut found = None;
            while top.next < count {
                let candidate = top.next;
                top.next += 1;
                if !self.visited[candidate] && self.graph.is_adjacent(top.slot, candidate) {
                    found = Some(candidate);
                    break;
                }
            }

            match found {
                Some(slot) => {
                    self.visited[slot] = true;
                    self.stack.push(Cursor { slot, next: 0 });
                    return Some(self.graph.label(slot));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl<T: Vertex> FusedIterator for Dfs<'_, T> {}

/// Fewest-edges path between two slots, as a slot sequence.
///
/// BFS with predecessor links that stops as soon as `target` is discovered.
/// Returns `[source]` when the endpoints coincide and an empty path when
/// `target` is unreachable.
pub(crate) fn hop_path<T: Vertex>(graph: &Graph<T>, source: usize, target: usize) -> Vec<usize> {
    if source == target {
        return vec![source];
    }

    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];
    let mut queue = Queue::with_capacity(n);

    visited[source] = true;
    queue.enqueue(source);

    'search: while let Some(current) = queue.dequeue() {
        for neighbor in graph.neighbor_slots(current) {
            if visited[neighbor] {
                continue;
            }
            visited[neighbor] = true;
            predecessor[neighbor] = Some(current);
            if neighbor == target {
                break 'search;
            }
            queue.enqueue(neighbor);
        }
    }

    if !visited[target] {
        return Vec::new();
    }
    unwind(&predecessor, target)
}

/// Follow predecessor links back from `target` and return the path in
/// source-to-target order.
pub(crate) fn unwind(predecessor: &[Option<usize>], target: usize) -> Vec<usize> {
    let mut path = Stack::new();
    let mut current = Some(target);
    while let Some(slot) = current {
        path.push(slot);
        current = predecessor[slot];
    }
    let mut ordered = Vec::with_capacity(path.len());
    while let Some(slot) = path.pop() {
        ordered.push(slot);
    }
    ordered
}
