use super::*;

fn dag(n: usize, edges: &[(usize, usize)]) -> Result<RootedDag, ScaError> {
    RootedDag::validate(&Digraph::from_edges(n, edges.iter().copied()).unwrap())
}

#[test]
fn accepts_single_rooted_dag() {
    // 0 -> 2, 1 -> 2, 2 -> 3
    let dag = dag(4, &[(0, 2), (1, 2), (2, 3)]).unwrap();

    assert_eq!(dag.root(), 3);
    assert_eq!(dag.vertex_count(), 4);
    assert_eq!(dag.edge_count(), 3);
    assert_eq!(dag.out_degree(2), 1);
    assert_eq!(dag.neighbors(0).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn single_vertex_is_its_own_root() {
    let dag = dag(1, &[]).unwrap();
    assert_eq!(dag.root(), 0);
    assert_eq!(dag.topological_order(), &[0]);
}

#[test]
fn topological_order_respects_edges() {
    // Diamond: 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3
    let dag = dag(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
    let topo = dag.topological_order();
    assert_eq!(topo.len(), 4);

    let pos = |v: usize| topo.iter().position(|&x| x == v).unwrap();
    for u in 0..4 {
        for v in dag.neighbors(u) {
            assert!(pos(u) < pos(v), "{u} -> {v} out of order");
        }
    }
    assert_eq!(*topo.last().unwrap(), dag.root());
}

#[test]
fn rejects_two_node_cycle() {
    assert_eq!(dag(2, &[(0, 1), (1, 0)]).unwrap_err(), ScaError::CycleDetected);
}

#[test]
fn rejects_self_loop() {
    assert_eq!(dag(2, &[(0, 1), (1, 1)]).unwrap_err(), ScaError::CycleDetected);
}

#[test]
fn cycle_takes_precedence_over_roots() {
    // 0 <-> 1 cycle plus two sinks 2 and 3.
    let err = dag(4, &[(0, 1), (1, 0)]).unwrap_err();
    assert_eq!(err, ScaError::CycleDetected);
}

#[test]
fn rejects_empty_graph() {
    assert_eq!(dag(0, &[]).unwrap_err(), ScaError::EmptyGraph);
}

#[test]
fn rejects_multiple_roots() {
    // 1 -> 0, 2 -> 3: two sinks.
    assert_eq!(
        dag(4, &[(1, 0), (2, 3)]).unwrap_err(),
        ScaError::MultipleOrNoRoots { roots: 2 }
    );
    // Three isolated vertices.
    assert_eq!(
        dag(3, &[]).unwrap_err(),
        ScaError::MultipleOrNoRoots { roots: 3 }
    );
}

#[test]
fn validated_copy_ignores_later_mutation() {
    let mut g = Digraph::from_edges(3, [(1, 0), (2, 0)]).unwrap();
    let dag = RootedDag::validate(&g).unwrap();

    // Closes the cycle 0 -> 2 -> 0 in the source graph only.
    g.add_edge(0, 2).unwrap();

    assert_eq!(dag.edge_count(), 2);
    assert_eq!(dag.root(), 0);
    assert!(RootedDag::validate(&g).is_err());
}
