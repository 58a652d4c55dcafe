use super::*;

#[test]
fn csr_copy_preserves_rows() {
    // 0 -> 1,2 ; 1 -> 3 ; 2 -> 3 ; 3 -> (none)
    let g = Digraph::from_adjacency(&[vec![1, 2], vec![3], vec![3], vec![]]).unwrap();
    let csr = CsrDigraph::from_digraph(&g);

    assert_eq!(csr.vertex_count(), 4);
    assert_eq!(csr.edge_count(), 4);
    assert_eq!(csr.neighbors(0).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(csr.neighbors(3).count(), 0);
    assert_eq!(csr.degree(0), 2);
    assert_eq!(csr.degree(3), 0);
}

#[test]
fn csr_has_edge() {
    let g = Digraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
    let csr = CsrDigraph::from_digraph(&g);

    assert!(csr.has_edge(0, 1));
    assert!(!csr.has_edge(1, 0));
    assert!(!csr.has_edge(7, 0));
}

#[test]
fn csr_is_independent_of_source() {
    let mut g = Digraph::from_edges(3, [(0, 1)]).unwrap();
    let csr = CsrDigraph::from_digraph(&g);
    g.add_edge(1, 2).unwrap();

    assert_eq!(csr.edge_count(), 1);
    assert!(!csr.has_edge(1, 2));
}

#[test]
fn empty_csr() {
    let csr = CsrDigraph::from_digraph(&Digraph::new(0));
    assert_eq!(csr.vertex_count(), 0);
    assert_eq!(csr.edge_count(), 0);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn neighbors_panics_out_of_bounds() {
    let csr = CsrDigraph::from_digraph(&Digraph::new(2));
    let _ = csr.neighbors(2).count();
}
