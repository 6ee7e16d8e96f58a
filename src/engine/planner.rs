//! Lightest routes, fewest-hop routes and nearest-target selection.

use serde::Serialize;

use crate::graph::shortest_path::dijkstra;
use crate::graph::traversal::hop_path;
use crate::graph::Network;
use crate::types::{NetResult, Vertex};

/// A path through the network together with its total weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route<T> {
    /// Vertices from origin to destination, both included.
    pub path: Vec<T>,
    /// Sum of the edge weights along `path`.
    pub weight: f64,
}

impl<T> Route<T> {
    /// Number of edges walked.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// First vertex of the route.
    pub fn origin(&self) -> Option<&T> {
        self.path.first()
    }

    /// Last vertex of the route.
    pub fn destination(&self) -> Option<&T> {
        self.path.last()
    }

    /// The vertex to move into next; `None` when already at the destination.
    pub fn next_step(&self) -> Option<&T> {
        self.path.get(1)
    }
}

/// How candidate routes are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMetric {
    /// Smallest total weight.
    Weight,
    /// Fewest edges, regardless of weight.
    Hops,
}

/// Answers routing questions against a borrowed network.
///
/// The borrow keeps the network frozen for as long as the planner lives.
pub struct RoutePlanner<'n, T> {
    network: &'n Network<T>,
}

impl<'n, T: Vertex> RoutePlanner<'n, T> {
    /// Create a planner over `network`.
    pub fn new(network: &'n Network<T>) -> Self {
        Self { network }
    }

    /// The lightest route from `from` to `to`, or `None` if unreachable.
    pub fn route(&self, from: &T, to: &T) -> NetResult<Option<Route<T>>> {
        Ok(self
            .network
            .shortest_path_with_weight(from, to)?
            .map(|(path, weight)| Route { path, weight }))
    }

    /// The route with the fewest edges, weighed afterwards; `None` if unreachable.
    pub fn hop_route(&self, from: &T, to: &T) -> NetResult<Option<Route<T>>> {
        let path = self.network.shortest_hop_path(from, to)?;
        if path.is_empty() {
            return Ok(None);
        }
        Ok(self
            .network
            .path_weight(&path)?
            .map(|weight| Route { path, weight }))
    }

    /// The closest reachable candidate from `from` under `metric`.
    ///
    /// Ties go to the candidate listed first. Unknown candidates are an error;
    /// unreachable ones are skipped. `None` if no candidate is reachable.
    ///
    /// `from` itself is a valid candidate: a zero-hop route of weight 0. It
    /// always wins by hops, and by weight it only loses a tie to an earlier
    /// candidate reachable over zero-weight edges. Leave it out of
    /// `candidates` to look past the current position.
    pub fn nearest(
        &self,
        from: &T,
        candidates: &[T],
        metric: RouteMetric,
    ) -> NetResult<Option<Route<T>>> {
        let graph = self.network.as_graph();
        let source = graph.slot_of(from)?;
        let targets = candidates
            .iter()
            .map(|c| graph.slot_of(c))
            .collect::<NetResult<Vec<_>>>()?;

        let best = match metric {
            RouteMetric::Weight => {
                let paths = dijkstra(self.network, source, None);
                pick_closest(&targets, |t| paths.distance_to(t))
                    .and_then(|t| paths.path_to(t).zip(paths.distance_to(t)))
            }
            RouteMetric::Hops => targets
                .iter()
                .map(|&t| hop_path(graph, source, t))
                .filter(|slots| !slots.is_empty())
                .fold(None, |best: Option<Vec<usize>>, slots| match best {
                    Some(b) if b.len() <= slots.len() => Some(b),
                    _ => Some(slots),
                })
                .map(|slots| {
                    let weight: f64 = slots
                        .windows(2)
                        .map(|pair| self.network.weight_at(pair[0], pair[1]))
                        .sum();
                    (slots, weight)
                }),
        };

        let route = best.map(|(slots, weight)| Route {
            path: graph.labels(&slots),
            weight,
        });
        match &route {
            Some(r) => log::debug!(
                "Nearest of {} candidates from {:?}: {:?} ({} hops, weight {})",
                candidates.len(),
                from,
                r.destination(),
                r.hops(),
                r.weight
            ),
            None => log::debug!(
                "None of {} candidates is reachable from {:?}",
                candidates.len(),
                from
            ),
        }
        Ok(route)
    }
}

/// First slot with the strictly smallest score; slots scoring `None` are skipped.
fn pick_closest(slots: &[usize], score: impl Fn(usize) -> Option<f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for &key in slots {
        if let Some(s) = score(key) {
            if best.map_or(true, |(_, b)| s < b) {
                best = Some((key, s));
            }
        }
    }
    best.map(|(key, _)| key)
}
