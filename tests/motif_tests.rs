mod common;

use cograph_core::motifs::{candidate_triples, maximal_cliques};
use cograph_core::{find_max_clique, find_triads, TriadStrategy};
use common::{complete, graph_from, graph_from_owned};

#[test]
fn four_clique_has_four_triads() {
    let graph = graph_from_owned(&complete(&["a", "b", "c", "d"], 1.0));
    for min_weight in [0.0, 3.0] {
        let scan = find_triads(&graph, min_weight, TriadStrategy::Exhaustive);

        assert_eq!(scan.len(), 4, "min_weight {min_weight}");
        assert!(scan.triads.iter().all(|t| t.weight == 3.0));
        assert_eq!(scan.examined, 4);
    }
    assert!(find_triads(&graph, 3.5, TriadStrategy::Exhaustive).is_empty());
}

#[test]
fn exhaustive_scan_examines_every_triple() {
    // Path graph: no triangles at all, but every triple is still checked.
    let graph = graph_from(&[("a", "b", 1.0), ("b", "c", 1.0), ("c", "d", 1.0), ("d", "e", 1.0), ("e", "f", 1.0)]);
    let scan = find_triads(&graph, 0.0, TriadStrategy::Exhaustive);

    assert!(scan.is_empty());
    assert_eq!(scan.examined, candidate_triples(6));
    assert_eq!(scan.examined, 20);
}

#[test]
fn triad_threshold_is_inclusive() {
    let graph = graph_from(&[("a", "b", 1.0), ("b", "c", 2.0), ("c", "a", 3.0)]);

    assert!(find_triads(&graph, 7.0, TriadStrategy::Exhaustive).is_empty());

    let scan = find_triads(&graph, 6.0, TriadStrategy::Exhaustive);
    assert_eq!(scan.len(), 1);
    let triad = &scan.triads[0];
    assert_eq!(triad.members, ["a".to_string(), "b".to_string(), "c".to_string()]);
    assert_eq!(triad.weight, 6.0);
    assert!(triad.contains("b"));
    assert!(!triad.contains("z"));
}

#[test]
fn strategies_agree() {
    let graph = graph_from(&[
        ("a", "b", 1.0),
        ("b", "c", 4.0),
        ("c", "a", 2.0),
        ("c", "d", 3.0),
        ("d", "b", 1.0),
        ("d", "e", 5.0),
        ("e", "c", 1.0),
        ("f", "a", 2.0),
    ]);

    for min_weight in [0.0, 5.0, 7.0, 9.0] {
        let mut exhaustive = find_triads(&graph, min_weight, TriadStrategy::Exhaustive);
        let mut neighbor = find_triads(&graph, min_weight, TriadStrategy::NeighborIntersection);
        exhaustive.sort_by_weight();
        neighbor.sort_by_weight();

        assert_eq!(exhaustive.triads, neighbor.triads, "min_weight {min_weight}");
        assert!(neighbor.examined <= exhaustive.examined);
    }
}

#[test]
fn top_n_orders_heaviest_first() {
    let graph = graph_from(&[
        ("a", "b", 1.0),
        ("b", "c", 1.0),
        ("c", "a", 1.0),
        ("c", "d", 5.0),
        ("d", "a", 5.0),
    ]);
    let scan = find_triads(&graph, 0.0, TriadStrategy::Exhaustive);
    let top = scan.top_n(1);

    assert_eq!(top.len(), 1);
    assert_eq!(top[0].weight, 11.0);
    assert!(top[0].contains("d"));
}

#[test]
fn triads_on_degenerate_graphs_are_empty() {
    let empty = graph_from(&[]);
    let scan = find_triads(&empty, 0.0, TriadStrategy::Exhaustive);
    assert!(scan.is_empty());
    assert_eq!(scan.examined, 0);

    let mut edgeless = graph_from(&[]);
    for name in ["a", "b", "c", "d"] {
        edgeless.add_author(name);
    }
    let scan = find_triads(&edgeless, 0.0, TriadStrategy::NeighborIntersection);
    assert!(scan.is_empty());
}

#[test]
fn max_clique_of_four_clique_with_tail() {
    let mut edges = complete(&["a", "b", "c", "d"], 1.0);
    edges.push(("d".to_string(), "e".to_string(), 1.0));
    edges.push(("e".to_string(), "f".to_string(), 1.0));
    let graph = graph_from_owned(&edges);

    let clique = find_max_clique(&graph);
    assert_eq!(clique.members, vec!["a", "b", "c", "d"]);
    assert!(clique.contains("c"));
    assert!(!clique.contains("e"));
}

#[test]
fn max_clique_tie_takes_smallest_member_list() {
    let graph = graph_from(&[
        ("x", "y", 1.0),
        ("y", "z", 1.0),
        ("z", "x", 1.0),
        ("b", "c", 1.0),
        ("c", "d", 1.0),
        ("d", "b", 1.0),
    ]);

    let clique = find_max_clique(&graph);
    assert_eq!(clique.members, vec!["b", "c", "d"]);
}

#[test]
fn max_clique_is_pairwise_connected() {
    let graph = graph_from(&[
        ("a", "b", 1.0),
        ("a", "c", 1.0),
        ("b", "c", 1.0),
        ("b", "d", 1.0),
        ("c", "d", 1.0),
        ("d", "e", 1.0),
    ]);
    let clique = find_max_clique(&graph);

    assert_eq!(clique.len(), 3);
    for (i, u) in clique.members.iter().enumerate() {
        for v in &clique.members[i + 1..] {
            assert!(graph.edge(u, v).is_some(), "{u} - {v} missing");
        }
    }
}

#[test]
fn max_clique_on_degenerate_graphs_is_empty() {
    assert!(find_max_clique(&graph_from(&[])).is_empty());

    let mut edgeless = graph_from(&[]);
    edgeless.add_author("solo");
    assert!(find_max_clique(&edgeless).is_empty());
}

#[test]
fn maximal_cliques_cover_bowtie() {
    // Two triangles sharing "c".
    let graph = graph_from(&[
        ("a", "b", 1.0),
        ("b", "c", 1.0),
        ("c", "a", 1.0),
        ("c", "d", 1.0),
        ("d", "e", 1.0),
        ("e", "c", 1.0),
    ]);
    let mut cliques: Vec<Vec<String>> = maximal_cliques(&graph).into_iter().map(|c| c.members).collect();
    cliques.sort();

    assert_eq!(cliques, vec![vec!["a", "b", "c"], vec!["c", "d", "e"]]);
}
