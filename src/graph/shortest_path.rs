//! Dijkstra's algorithm over the dense weight matrix.

use super::traversal::unwind;
use super::Network;
use crate::types::Vertex;

/// Distances and predecessor links produced by one Dijkstra run.
pub(crate) struct ShortestPaths {
    /// Best known distance per slot; `None` until reached.
    ///
    /// A reached distance may be `INFINITY` when the weight sum overflows.
    pub(crate) distance: Vec<Option<f64>>,
    /// Slot each vertex was reached from on its best path.
    pub(crate) predecessor: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Distance to `target`, or `None` if unreachable.
    pub(crate) fn distance_to(&self, target: usize) -> Option<f64> {
        self.distance[target]
    }

    /// Slot path from the source to `target`, or `None` if unreachable.
    pub(crate) fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distance[target]
            .map(|_| unwind(&self.predecessor, target))
    }
}

/// Run Dijkstra from `source`.
///
/// Each round settles the unsettled reached slot with the smallest distance,
/// lowest slot first on ties, then relaxes its neighbors. The search stops once
/// `target` is settled (when given) or nothing reachable is left. Weights are
/// non-negative, so a settled distance is final. Sums beyond `f64::MAX`
/// saturate to `INFINITY` but still count as reached.
pub(crate) fn dijkstra<T: Vertex>(
    network: &Network<T>,
    source: usize,
    target: Option<usize>,
) -> ShortestPaths {
    let graph = network.as_graph();
    let n = graph.vertex_count();
    let mut distance: Vec<Option<f64>> = vec![None; n];
    let mut predecessor = vec![None; n];
    let mut settled = vec![false; n];

    distance[source] = Some(0.0);

    while let Some((current, reached)) = closest_unsettled(&distance, &settled) {
        settled[current] = true;
        log::trace!(
            "Settled {:?} at distance {}",
            graph.label(current),
            reached
        );
        if Some(current) == target {
            break;
        }

        for neighbor in graph.neighbor_slots(current) {
            if settled[neighbor] {
                continue;
            }
            let candidate = reached + network.weight_at(current, neighbor);
            if distance[neighbor].map_or(true, |known| candidate < known) {
                distance[neighbor] = Some(candidate);
                predecessor[neighbor] = Some(current);
            }
        }
    }

    ShortestPaths {
        distance,
        predecessor,
    }
}

/// Unsettled reached slot with the smallest distance; ties go to the lowest slot.
fn closest_unsettled(distance: &[Option<f64>], settled: &[bool]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (slot, d) in distance.iter().enumerate() {
        let Some(d) = *d else { continue };
        if settled[slot] {
            continue;
        }
        match best {
            Some((_, b)) if b <= d => {}
            _ => best = Some((slot, d)),
        }
    }
    best
}
