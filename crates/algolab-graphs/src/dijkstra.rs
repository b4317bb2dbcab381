use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::hash::Hash;

use indexmap::IndexMap;

use crate::WeightedGraph;

/// Shortest distances from `start` to every reachable vertex, by Dijkstra's
/// algorithm over non-negative edge weights.
///
/// Unreachable vertices are absent from the result; an unknown `start`
/// yields an empty map. Result order follows the first time each vertex was
/// reached.
///
/// ```
/// use algolab_graphs::{dijkstra, WeightedGraph};
/// use indexmap::IndexMap;
///
/// let mut graph: WeightedGraph<&str> = WeightedGraph::new();
/// graph.insert("a", IndexMap::from([("b", 1), ("c", 4)]));
/// graph.insert("b", IndexMap::from([("c", 2)]));
/// graph.insert("c", IndexMap::new());
///
/// let dist = dijkstra(&graph, &"a");
/// assert_eq!(dist[&"c"], 3);
/// ```
pub fn dijkstra<N>(graph: &WeightedGraph<N>, start: &N) -> IndexMap<N, u64>
where
    N: Clone + Eq + Hash + Ord,
{
    let mut best: IndexMap<&N, u64> = IndexMap::new();
    let Some((start, _)) = graph.get_key_value(start) else {
        return IndexMap::new();
    };

    let mut visited: HashSet<&N> = HashSet::new();
    let mut frontier: BinaryHeap<Reverse<(u64, &N)>> = BinaryHeap::new();

    best.insert(start, 0);
    frontier.push(Reverse((0, start)));

    while let Some(Reverse((d, u))) = frontier.pop() {
        if !visited.insert(u) {
            continue;
        }
        relax_neighbors(graph, u, d, &visited, &mut best, &mut frontier);
    }

    best.into_iter().map(|(n, d)| (n.clone(), d)).collect()
}

/// Shortest distance from `start` to `end` only; `None` when `end` is
/// unreachable or either vertex is unknown.
///
/// ```
/// use algolab_graphs::{dijkstra_to, WeightedGraph};
/// use indexmap::IndexMap;
///
/// let mut graph: WeightedGraph<&str> = WeightedGraph::new();
/// graph.insert("a", IndexMap::from([("b", 7)]));
/// graph.insert("b", IndexMap::new());
/// graph.insert("c", IndexMap::new());
///
/// assert_eq!(dijkstra_to(&graph, &"a", &"b"), Some(7));
/// assert_eq!(dijkstra_to(&graph, &"a", &"c"), None);
/// ```
pub fn dijkstra_to<N>(graph: &WeightedGraph<N>, start: &N, end: &N) -> Option<u64>
where
    N: Clone + Eq + Hash + Ord,
{
    dijkstra(graph, start).get(end).copied()
}

/// Shortest distance and one shortest path from `start` to `end`,
/// reconstructed from predecessor links. `None` when unreachable.
///
/// ```
/// use algolab_graphs::{shortest_path, WeightedGraph};
/// use indexmap::IndexMap;
///
/// let mut graph: WeightedGraph<&str> = WeightedGraph::new();
/// graph.insert("a", IndexMap::from([("b", 1), ("c", 4)]));
/// graph.insert("b", IndexMap::from([("c", 2)]));
/// graph.insert("c", IndexMap::new());
///
/// assert_eq!(shortest_path(&graph, &"a", &"c"), Some((3, vec!["a", "b", "c"])));
/// ```
pub fn shortest_path<N>(graph: &WeightedGraph<N>, start: &N, end: &N) -> Option<(u64, Vec<N>)>
where
    N: Clone + Eq + Hash + Ord,
{
    let (start, _) = graph.get_key_value(start)?;
    let end = graph.get_key_value(end).map(|(k, _)| k)?;

    let mut best: IndexMap<&N, u64> = IndexMap::new();
    let mut prev: IndexMap<&N, &N> = IndexMap::new();
    let mut visited: HashSet<&N> = HashSet::new();
    let mut frontier: BinaryHeap<Reverse<(u64, &N)>> = BinaryHeap::new();

    best.insert(start, 0);
    frontier.push(Reverse((0, start)));

    while let Some(Reverse((d, u))) = frontier.pop() {
        if !visited.insert(u) {
            continue;
        }
        if u == end {
            break;
        }

        if let Some(neighbors) = graph.get(u) {
            for (v, &w) in neighbors {
                if visited.contains(v) {
                    continue;
                }
                let candidate = d + w;
                if candidate < best.get(v).copied().unwrap_or(u64::MAX) {
                    best.insert(v, candidate);
                    prev.insert(v, u);
                    frontier.push(Reverse((candidate, v)));
                }
            }
        }
    }

    let distance = best.get(end).copied()?;

    let mut path: Vec<N> = Vec::new();
    let mut curr = end;
    path.push(curr.clone());
    while curr != start {
        curr = *prev.get(curr)?;
        path.push(curr.clone());
    }
    path.reverse();

    Some((distance, path))
}

fn relax_neighbors<'a, N>(
    graph: &'a WeightedGraph<N>,
    u: &'a N,
    d: u64,
    visited: &HashSet<&'a N>,
    best: &mut IndexMap<&'a N, u64>,
    frontier: &mut BinaryHeap<Reverse<(u64, &'a N)>>,
) where
    N: Eq + Hash + Ord,
{
    let Some(neighbors) = graph.get(u) else {
        return;
    };
    for (v, &w) in neighbors {
        if visited.contains(v) {
            continue;
        }
        let candidate = d + w;
        if candidate < best.get(v).copied().unwrap_or(u64::MAX) {
            best.insert(v, candidate);
            frontier.push(Reverse((candidate, v)));
        }
    }
}
