use super::*;
use crate::types::NodeID;
use pretty_assertions::assert_eq;

#[test]
fn relabel_in_first_seen_order() {
    let mut relabeling = Relabeling::<NodeID>::new();
    assert!(relabeling.is_empty());

    assert_eq!((0, 1), relabeling.relabel_edge(100, -5));
    assert_eq!((1, 2), relabeling.relabel_edge(-5, 7));
    assert_eq!((2, 0), relabeling.relabel_edge(7, 100));
    assert_eq!(3, relabeling.len());

    assert_eq!(Some(0), relabeling.get(&100));
    assert_eq!(Some(1), relabeling.get(&-5));
    assert_eq!(Some(2), relabeling.get(&7));
    assert_eq!(None, relabeling.get(&8));
}

#[test]
fn self_loop_gets_single_label() {
    let mut relabeling = Relabeling::<NodeID>::new();
    assert_eq!((0, 0), relabeling.relabel_edge(3, 3));
    assert_eq!(1, relabeling.len());
}

#[test]
fn duplicate_edges_collapse() {
    let mut gs = AdjacencyList::<usize>::new();
    assert!(gs.add_edge(0, 1));
    assert!(gs.add_edge(1, 2));
    assert!(!gs.add_edge(0, 1));

    assert_eq!(2, gs.edge_count());
    assert_eq!(3, gs.node_count());
    assert_eq!(vec![(0, 1), (1, 2)], gs.edges().collect::<Vec<_>>());
    assert!(gs.contains_edge(0, 1));
    assert!(!gs.contains_edge(1, 0));
}

#[test]
fn multigraph_keeps_duplicates() {
    let mut gs = AdjacencyList::<NodeID>::multigraph();
    assert!(gs.add_edge(2, 1));
    assert!(gs.add_edge(2, 1));
    assert!(gs.add_edge(2, 3));

    assert_eq!(3, gs.edge_count());
    assert_eq!(3, gs.degree(2));
    assert_eq!(vec![1, 1, 3], gs.targets(2).to_vec());
    assert!(gs.contains_edge(2, 3));
    assert!(!gs.contains_edge(3, 2));
}

#[test]
fn enumerate_in_insertion_order() {
    let mut gs = AdjacencyList::<NodeID>::new();
    gs.add_edge(9, 4);
    gs.add_edge(3, 8);
    gs.add_edge(9, 1);
    gs.add_edge(-1, 9);
    gs.add_edge(3, 2);

    assert_eq!(vec![9, 3, -1], gs.sources().collect::<Vec<_>>());
    assert_eq!(vec![4, 1], gs.targets(9).to_vec());
    assert_eq!(
        vec![(9, 4), (9, 1), (3, 8), (3, 2), (-1, 9)],
        gs.edges().collect::<Vec<_>>()
    );
    assert_eq!(7, gs.node_count());
}

#[test]
fn unknown_node_has_no_targets() {
    let gs = AdjacencyList::<NodeID>::default();
    assert!(gs.is_empty());
    assert_eq!(0, gs.degree(1));
    assert!(gs.targets(1).is_empty());
    assert_eq!(0, gs.node_count());
    assert_eq!(0, gs.sources().count());
}
