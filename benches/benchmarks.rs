//! Criterion benchmarks for matrix-network.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use matrix_network::engine::{RouteMetric, RoutePlanner};
use matrix_network::graph::Network;

/// Build a random network with roughly `edges_per_vertex` edges per vertex.
fn make_network(vertex_count: u32, edges_per_vertex: u32) -> Network<u32> {
    let mut rng = rand::thread_rng();
    let mut net = Network::new();
    for v in 0..vertex_count {
        let _ = net.add_vertex(v);
    }
    // A spanning chain keeps everything reachable.
    for v in 1..vertex_count {
        let _ = net.add_edge(&(v - 1), &v, rng.gen_range(1.0..10.0));
    }
    for v in 0..vertex_count {
        for _ in 0..edges_per_vertex {
            let other = rng.gen_range(0..vertex_count);
            if other != v {
                let _ = net.add_edge(&v, &other, rng.gen_range(1.0..10.0));
            }
        }
    }
    net
}

fn bench_add_vertices(c: &mut Criterion) {
    c.bench_function("add_vertex_1k_with_growth", |b| {
        b.iter(|| {
            let mut net = Network::new();
            for v in 0..1_000u32 {
                let _ = net.add_vertex(v);
            }
            net
        })
    });
}

fn bench_remove_vertex(c: &mut Criterion) {
    let net = make_network(1_000, 3);

    c.bench_function("remove_first_vertex_1k", |b| {
        b.iter_batched(
            || net.clone(),
            |mut net| {
                let _ = net.remove_vertex(&0);
                net
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

fn bench_bfs(c: &mut Criterion) {
    let net = make_network(1_000, 3);

    c.bench_function("bfs_full_1k", |b| {
        b.iter(|| net.iter_bfs(&0).map(|it| it.count()))
    });
}

fn bench_dfs(c: &mut Criterion) {
    let net = make_network(1_000, 3);

    c.bench_function("dfs_full_1k", |b| {
        b.iter(|| net.iter_dfs(&0).map(|it| it.count()))
    });
}

fn bench_is_connected(c: &mut Criterion) {
    let net = make_network(1_000, 3);

    c.bench_function("is_connected_1k", |b| b.iter(|| net.is_connected()));
}

fn bench_shortest_path(c: &mut Criterion) {
    let net = make_network(1_000, 3);

    c.bench_function("dijkstra_path_1k", |b| {
        b.iter(|| net.shortest_path(&0, &999))
    });
}

fn bench_nearest(c: &mut Criterion) {
    let net = make_network(500, 3);
    let candidates: Vec<u32> = (400..500).step_by(10).collect();

    c.bench_function("nearest_of_10_weight_500", |b| {
        let planner = RoutePlanner::new(&net);
        b.iter(|| planner.nearest(&0, &candidates, RouteMetric::Weight))
    });

    c.bench_function("nearest_of_10_hops_500", |b| {
        let planner = RoutePlanner::new(&net);
        b.iter(|| planner.nearest(&0, &candidates, RouteMetric::Hops))
    });
}

criterion_group!(
    benches,
    bench_add_vertices,
    bench_remove_vertex,
    bench_bfs,
    bench_dfs,
    bench_is_connected,
    bench_shortest_path,
    bench_nearest,
);
criterion_main!(benches);
