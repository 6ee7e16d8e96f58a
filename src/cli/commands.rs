//! CLI command implementations.
//!
//! Every command receives a network already built from the command line and
//! prints either plain text or a single JSON document.

use crate::engine::{Route, RouteMetric, RoutePlanner};
use crate::graph::{Network, NetworkBuilder};
use crate::types::{GraphConfig, NetError, NetResult, DEFAULT_EDGE_WEIGHT};

/// Order in which `traverse` visits vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Breadth-first.
    Bfs,
    /// Depth-first.
    Dfs,
}

impl TraversalOrder {
    /// Parse `bfs` / `dfs` (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth" => Some(Self::Bfs),
            "dfs" | "depth" => Some(Self::Dfs),
            _ => None,
        }
    }

    /// Short lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
        }
    }
}

/// Parse an edge argument `A:B` or `A:B:WEIGHT`.
pub fn parse_edge(arg: &str) -> NetResult<(String, String, f64)> {
    let parts: Vec<&str> = arg.split(':').map(str::trim).collect();
    let invalid = || {
        NetError::InvalidArgument(format!(
            "malformed edge {:?}, expected A:B or A:B:WEIGHT",
            arg
        ))
    };

    let (a, b, weight) = match parts.as_slice() {
        [a, b] => (*a, *b, DEFAULT_EDGE_WEIGHT),
        [a, b, w] => (*a, *b, w.parse::<f64>().map_err(|_| invalid())?),
        _ => return Err(invalid()),
    };
    if a.is_empty() || b.is_empty() {
        return Err(invalid());
    }
    Ok((a.to_string(), b.to_string(), weight))
}

/// Build a network of string labels from `--vertex` and `--edge` arguments.
pub fn build_network(
    vertices: &[String],
    edges: &[String],
    capacity: usize,
) -> NetResult<Network<String>> {
    let mut builder = NetworkBuilder::new().config(GraphConfig::with_capacity(capacity));
    for v in vertices {
        builder = builder.vertex(v.clone());
    }
    for arg in edges {
        let (a, b, weight) = parse_edge(arg)?;
        builder = builder.edge(a, b, weight);
    }
    builder.build()
}

fn print_json(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn route_json(from: &str, to: &str, route: Option<&Route<String>>) -> serde_json::Value {
    match route {
        Some(r) => serde_json::json!({
            "from": from,
            "to": to,
            "path": r.path,
            "hops": r.hops(),
            "weight": r.weight,
        }),
        None => serde_json::json!({
            "from": from,
            "to": to,
            "path": [],
            "hops": null,
            "weight": null,
        }),
    }
}

fn print_route(from: &str, to: &str, route: Option<&Route<String>>) {
    match route {
        Some(r) => println!(
            "{} (hops: {}, weight: {})",
            r.path.join(" -> "),
            r.hops(),
            r.weight
        ),
        None => println!("No path from {} to {}", from, to),
    }
}

/// Lightest path between two vertices.
pub fn cmd_path(network: &Network<String>, from: &str, to: &str, json: bool) -> NetResult<()> {
    let route = RoutePlanner::new(network).route(&from.to_string(), &to.to_string())?;
    if json {
        print_json(&route_json(from, to, route.as_ref()));
    } else {
        print_route(from, to, route.as_ref());
    }
    Ok(())
}

/// Path with the fewest edges between two vertices.
pub fn cmd_hops(network: &Network<String>, from: &str, to: &str, json: bool) -> NetResult<()> {
    let route = RoutePlanner::new(network).hop_route(&from.to_string(), &to.to_string())?;
    if json {
        print_json(&route_json(from, to, route.as_ref()));
    } else {
        print_route(from, to, route.as_ref());
    }
    Ok(())
}

/// Closest of several candidate vertices.
pub fn cmd_nearest(
    network: &Network<String>,
    from: &str,
    candidates: &[String],
    metric: RouteMetric,
    json: bool,
) -> NetResult<()> {
    let route = RoutePlanner::new(network).nearest(&from.to_string(), candidates, metric)?;
    let target = route
        .as_ref()
        .and_then(|r| r.destination().cloned())
        .unwrap_or_default();

    if json {
        let mut value = route_json(from, &target, route.as_ref());
        value["candidates"] = serde_json::json!(candidates);
        if route.is_none() {
            value["to"] = serde_json::Value::Null;
        }
        print_json(&value);
    } else {
        match &route {
            Some(r) => {
                println!("Nearest: {}", target);
                print_route(from, &target, Some(r));
            }
            None => println!(
                "None of {} is reachable from {}",
                candidates.join(", "),
                from
            ),
        }
    }
    Ok(())
}

/// Every vertex reachable from `start`, in traversal order.
pub fn cmd_traverse(
    network: &Network<String>,
    start: &str,
    order: TraversalOrder,
    json: bool,
) -> NetResult<()> {
    let start = start.to_string();
    let visited: Vec<String> = match order {
        TraversalOrder::Bfs => network.iter_bfs(&start)?.cloned().collect(),
        TraversalOrder::Dfs => network.iter_dfs(&start)?.cloned().collect(),
    };

    if json {
        print_json(&serde_json::json!({
            "start": start,
            "order": order.name(),
            "visited": visited,
        }));
    } else {
        println!("{}", visited.join(" "));
    }
    Ok(())
}

/// Whether the network is connected.
pub fn cmd_connected(network: &Network<String>, json: bool) -> NetResult<()> {
    let connected = network.is_connected();
    if json {
        print_json(&serde_json::json!({
            "vertices": network.vertex_count(),
            "edges": network.edge_count(),
            "connected": connected,
        }));
    } else if connected {
        println!("Connected ({} vertices)", network.vertex_count());
    } else {
        println!("Not connected ({} vertices)", network.vertex_count());
    }
    Ok(())
}

/// Vertices adjacent to `vertex`, with edge weights.
pub fn cmd_neighbors(network: &Network<String>, vertex: &str, json: bool) -> NetResult<()> {
    let vertex = vertex.to_string();
    let mut rows = Vec::new();
    for n in network.neighbors(&vertex)? {
        let weight = network.edge_weight(&vertex, &n)?;
        rows.push((n, weight));
    }

    if json {
        let list: Vec<serde_json::Value> = rows
            .iter()
            .map(|(n, w)| serde_json::json!({"vertex": n, "weight": w}))
            .collect();
        print_json(&serde_json::json!({
            "vertex": vertex,
            "neighbors": list,
        }));
    } else if rows.is_empty() {
        println!("{} has no neighbors", vertex);
    } else {
        for (n, w) in &rows {
            println!("{}\t{}", n, w.unwrap_or_default());
        }
    }
    Ok(())
}

/// The whole network: weight matrix and vertex table, or vertices + edges as JSON.
pub fn cmd_dump(network: &Network<String>, json: bool) -> NetResult<()> {
    if json {
        let vertices = network.vertices();
        let mut edges = Vec::new();
        for (i, a) in vertices.iter().enumerate() {
            for b in &vertices[i + 1..] {
                if let Some(w) = network.edge_weight(a, b)? {
                    edges.push(serde_json::json!({"a": a, "b": b, "weight": w}));
                }
            }
        }
        print_json(&serde_json::json!({
            "vertices": vertices,
            "edges": edges,
            "capacity": network.capacity(),
            "connected": network.is_connected(),
        }));
    } else {
        print!("{}", network);
    }
    Ok(())
}
