use std::collections::HashSet;
use std::hash::Hash;

use crate::Graph;

/// Connected components of an undirected graph whose adjacency lists are
/// given symmetrically.
///
/// Every vertex mentioned anywhere counts, including neighbor-only ones.
/// Each component comes out sorted and the components themselves are sorted
/// by their contents, so the result is canonical regardless of input order.
///
/// ```
/// use algolab_graphs::{connected_components, Graph};
///
/// let mut graph: Graph<&str> = Graph::new();
/// graph.insert("a", vec!["b"]);
/// graph.insert("b", vec!["a"]);
/// graph.insert("c", vec![]);
///
/// assert_eq!(connected_components(&graph), vec![vec!["a", "b"], vec!["c"]]);
/// ```
pub fn connected_components<N>(graph: &Graph<N>) -> Vec<Vec<N>>
where
    N: Clone + Eq + Hash + Ord,
{
    if graph.is_empty() {
        return Vec::new();
    }

    let mut all: Vec<&N> = Vec::new();
    let mut known: HashSet<&N> = HashSet::new();
    for (node, neighbors) in graph {
        if known.insert(node) {
            all.push(node);
        }
        for n in neighbors {
            if known.insert(n) {
                all.push(n);
            }
        }
    }

    let mut visited: HashSet<&N> = HashSet::new();
    let mut components = Vec::new();

    for &node in &all {
        if !visited.contains(node) {
            let mut component = Vec::new();
            dfs(graph, node, &mut visited, &mut component);
            component.sort();
            components.push(component);
        }
    }

    components.sort();
    components
}

fn dfs<'a, N>(
    graph: &'a Graph<N>,
    node: &'a N,
    visited: &mut HashSet<&'a N>,
    component: &mut Vec<N>,
) where
    N: Clone + Eq + Hash + Ord,
{
    visited.insert(node);
    component.push(node.clone());

    if let Some(neighbors) = graph.get(node) {
        for n in neighbors {
            if !visited.contains(n) {
                dfs(graph, n, visited, component);
            }
        }
    }
}
