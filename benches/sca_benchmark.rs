use std::collections::{HashMap, VecDeque};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wordnet_sca::{Digraph, RootedDag, ShortestCommonAncestor};

// HashMap-backed distance tables, for comparison with the dense tables.
struct StdSca {
    adj: Vec<Vec<usize>>,
}

impl StdSca {
    fn bfs(&self, sources: &[usize]) -> HashMap<usize, usize> {
        let mut dist = HashMap::new();
        let mut q = VecDeque::new();
        for &s in sources {
            if dist.insert(s, 0).is_none() {
                q.push_back(s);
            }
        }
        while let Some(u) = q.pop_front() {
            let d = dist[&u];
            for &v in &self.adj[u] {
                dist.entry(v).or_insert_with(|| {
                    q.push_back(v);
                    d + 1
                });
            }
        }
        dist
    }

    fn length(&self, a: &[usize], b: &[usize]) -> Option<usize> {
        let from_a = self.bfs(a);
        let from_b = self.bfs(b);
        from_b
            .iter()
            .filter_map(|(v, db)| from_a.get(v).map(|da| da + db))
            .min()
    }
}

/// Layered DAG: each vertex points at two vertices in the next layer up,
/// chosen by a fixed LCG so runs are reproducible. Layer 0 is the root.
fn layered(layers: usize, width: usize) -> Vec<Vec<usize>> {
    let n = 1 + (layers - 1) * width;
    let mut adj = vec![Vec::new(); n];
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = |bound: usize| {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        (state >> 33) as usize % bound
    };

    for layer in 1..layers {
        let start = 1 + (layer - 1) * width;
        for v in start..start + width {
            if layer == 1 {
                adj[v].push(0);
            } else {
                let above = 1 + (layer - 2) * width;
                adj[v].push(above + next(width));
                adj[v].push(above + next(width));
            }
        }
    }
    adj
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    for &(layers, width) in &[(10, 100), (20, 1_000)] {
        let graph = Digraph::from_adjacency(&layered(layers, width)).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(graph.vertex_count()),
            &graph,
            |b, graph| b.iter(|| black_box(RootedDag::validate(graph).unwrap())),
        );
    }
    group.finish();
}

fn bench_pair_queries(c: &mut Criterion) {
    let adj = layered(20, 1_000);
    let graph = Digraph::from_adjacency(&adj).unwrap();
    let sca = ShortestCommonAncestor::new(&graph).unwrap();
    let std = StdSca { adj };
    let n = sca.vertex_count();
    let pairs: Vec<(usize, usize)> = (0..64).map(|i| (n - 1 - i * 7, n - 1 - i * 13)).collect();

    c.bench_function("sca_pair_dense", |b| {
        b.iter(|| {
            for &(v, w) in &pairs {
                black_box(sca.length(v, w).unwrap());
            }
        });
    });

    c.bench_function("sca_pair_hashmap", |b| {
        b.iter(|| {
            for &(v, w) in &pairs {
                black_box(std.length(&[v], &[w]));
            }
        });
    });
}

fn bench_set_queries(c: &mut Criterion) {
    let graph = Digraph::from_adjacency(&layered(20, 1_000)).unwrap();
    let sca = ShortestCommonAncestor::new(&graph).unwrap();
    let n = sca.vertex_count();
    let a: Vec<usize> = (0..16).map(|i| n - 1 - i * 31).collect();
    let b: Vec<usize> = (0..16).map(|i| n - 500 - i * 17).collect();

    c.bench_function("sca_sets_16x16", |bench| {
        bench.iter(|| black_box(sca.length_sets(a.iter().copied(), b.iter().copied()).unwrap()));
    });
}

criterion_group!(benches, bench_validate, bench_pair_queries, bench_set_queries);
criterion_main!(benches);
