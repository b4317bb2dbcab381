use algolab_graphs::{dijkstra, dijkstra_to, shortest_path, WeightedGraph};
use indexmap::IndexMap;

fn graph(edges: &[(&'static str, &[(&'static str, u64)])]) -> WeightedGraph<String> {
    edges
        .iter()
        .map(|(n, adj)| {
            (
                n.to_string(),
                adj.iter().map(|(m, w)| (m.to_string(), *w)).collect(),
            )
        })
        .collect()
}

#[test]
fn single_vertex_matrix() {
    let g = graph(&[("a", &[])]);
    let dist = dijkstra(&g, &"a".to_string());
    assert_eq!(dist.len(), 1);
    assert_eq!(dist[&"a".to_string()], 0);
}

#[test]
fn unknown_start_matrix() {
    let g = graph(&[("a", &[])]);
    assert!(dijkstra(&g, &"nope".to_string()).is_empty());
    assert_eq!(dijkstra_to(&g, &"nope".to_string(), &"a".to_string()), None);
    assert_eq!(shortest_path(&g, &"nope".to_string(), &"a".to_string()), None);
}

#[test]
fn triangle_shortcut_matrix() {
    // The two-hop route a-b-c is cheaper than the direct edge.
    let g = graph(&[
        ("a", &[("b", 1), ("c", 4)]),
        ("b", &[("c", 2)]),
        ("c", &[]),
    ]);

    let dist = dijkstra(&g, &"a".to_string());
    assert_eq!(dist[&"a".to_string()], 0);
    assert_eq!(dist[&"b".to_string()], 1);
    assert_eq!(dist[&"c".to_string()], 3);
}

#[test]
fn unreachable_vertices_are_absent_matrix() {
    let g = graph(&[
        ("a", &[("b", 1)]),
        ("b", &[]),
        ("island", &[("a", 1)]),
    ]);

    let dist = dijkstra(&g, &"a".to_string());
    assert_eq!(dist.len(), 2);
    assert!(!dist.contains_key(&"island".to_string()));
    assert_eq!(dijkstra_to(&g, &"a".to_string(), &"island".to_string()), None);
}

#[test]
fn classic_grid_matrix() {
    let g = graph(&[
        ("a", &[("b", 4), ("c", 2)]),
        ("b", &[("a", 4), ("c", 1), ("d", 5)]),
        ("c", &[("a", 2), ("b", 1), ("d", 8), ("e", 10)]),
        ("d", &[("b", 5), ("c", 8), ("e", 2)]),
        ("e", &[("c", 10), ("d", 2)]),
    ]);

    let dist = dijkstra(&g, &"a".to_string());
    assert_eq!(dist[&"a".to_string()], 0);
    assert_eq!(dist[&"b".to_string()], 3);
    assert_eq!(dist[&"c".to_string()], 2);
    assert_eq!(dist[&"d".to_string()], 8);
    assert_eq!(dist[&"e".to_string()], 10);
}

#[test]
fn zero_weight_edges_matrix() {
    let g = graph(&[
        ("a", &[("b", 0)]),
        ("b", &[("c", 0)]),
        ("c", &[]),
    ]);
    let dist = dijkstra(&g, &"a".to_string());
    assert_eq!(dist[&"c".to_string()], 0);
}

#[test]
fn path_reconstruction_matrix() {
    let g = graph(&[
        ("a", &[("b", 1), ("c", 4)]),
        ("b", &[("c", 2)]),
        ("c", &[]),
    ]);

    assert_eq!(
        shortest_path(&g, &"a".to_string(), &"c".to_string()),
        Some((3, vec!["a".to_string(), "b".to_string(), "c".to_string()]))
    );
    assert_eq!(
        shortest_path(&g, &"a".to_string(), &"a".to_string()),
        Some((0, vec!["a".to_string()]))
    );
}

#[test]
fn path_to_unreachable_matrix() {
    let g = graph(&[("a", &[]), ("b", &[])]);
    assert_eq!(shortest_path(&g, &"a".to_string(), &"b".to_string()), None);
}

#[test]
fn integer_vertices_matrix() {
    let mut g: WeightedGraph<u32> = WeightedGraph::new();
    g.insert(1, IndexMap::from([(2, 10), (3, 1)]));
    g.insert(2, IndexMap::new());
    g.insert(3, IndexMap::from([(2, 2)]));

    assert_eq!(dijkstra_to(&g, &1, &2), Some(3));
    assert_eq!(shortest_path(&g, &1, &2), Some((3, vec![1, 3, 2])));
}
