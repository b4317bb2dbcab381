use std::collections::HashMap;
use std::hash::Hash;

use crate::Graph;

#[derive(Clone, Copy, PartialEq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Verdict of [`analyze_dag`]: either one witness cycle, or a topological
/// order of every vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct DagAnalysis<N> {
    pub has_cycle: bool,
    /// A cycle closed on its repeated vertex, e.g. `[v, ..., u, v]`.
    pub cycle: Option<Vec<N>>,
    pub topological_sort: Option<Vec<N>>,
}

/// Three-color DFS over a directed graph.
///
/// White vertices are unseen, gray ones are on the current recursion path,
/// black ones are finished. An edge into a gray vertex is a back edge and
/// closes a cycle, reconstructed through the DFS parent links. Without back
/// edges the reverse finishing order is a topological sort.
///
/// ```
/// use algolab_graphs::{analyze_dag, Graph};
///
/// let mut graph: Graph<&str> = Graph::new();
/// graph.insert("a", vec!["b"]);
/// graph.insert("b", vec!["c"]);
/// graph.insert("c", vec![]);
///
/// let result = analyze_dag(&graph);
/// assert!(!result.has_cycle);
/// assert_eq!(result.topological_sort, Some(vec!["a", "b", "c"]));
/// ```
pub fn analyze_dag<N>(graph: &Graph<N>) -> DagAnalysis<N>
where
    N: Clone + Eq + Hash,
{
    if graph.is_empty() {
        return DagAnalysis {
            has_cycle: false,
            cycle: None,
            topological_sort: Some(Vec::new()),
        };
    }

    let mut colors: HashMap<&N, Color> = HashMap::new();
    let mut parent: HashMap<&N, &N> = HashMap::new();
    let mut finished: Vec<&N> = Vec::new();
    let mut back_edge: Option<(&N, &N)> = None;

    for vertex in graph.keys() {
        if color_of(&colors, vertex) == Color::White {
            if dfs(graph, vertex, &mut colors, &mut parent, &mut finished, &mut back_edge) {
                break;
            }
        }
    }

    let Some((start, end)) = back_edge else {
        finished.reverse();
        return DagAnalysis {
            has_cycle: false,
            cycle: None,
            topological_sort: Some(finished.into_iter().cloned().collect()),
        };
    };

    // Walk the parent chain from the back edge's tail up to its head, then
    // close the loop on the head.
    let mut path: Vec<&N> = Vec::new();
    let mut curr = end;
    while curr != start {
        path.push(curr);
        match parent.get(curr) {
            Some(p) => curr = p,
            None => break,
        }
    }
    path.reverse();

    let mut cycle: Vec<N> = Vec::with_capacity(path.len() + 2);
    cycle.push(start.clone());
    cycle.extend(path.into_iter().cloned());
    cycle.push(start.clone());

    DagAnalysis {
        has_cycle: true,
        cycle: Some(cycle),
        topological_sort: None,
    }
}

/// Just the witness cycle, or `None` for an acyclic graph.
pub fn find_cycle<N>(graph: &Graph<N>) -> Option<Vec<N>>
where
    N: Clone + Eq + Hash,
{
    analyze_dag(graph).cycle
}

/// Just the topological order, or `None` when the graph has a cycle.
pub fn topological_sort<N>(graph: &Graph<N>) -> Option<Vec<N>>
where
    N: Clone + Eq + Hash,
{
    analyze_dag(graph).topological_sort
}

fn color_of<'a, N: Eq + Hash>(colors: &HashMap<&'a N, Color>, v: &'a N) -> Color {
    colors.get(v).copied().unwrap_or(Color::White)
}

fn dfs<'a, N>(
    graph: &'a Graph<N>,
    u: &'a N,
    colors: &mut HashMap<&'a N, Color>,
    parent: &mut HashMap<&'a N, &'a N>,
    finished: &mut Vec<&'a N>,
    back_edge: &mut Option<(&'a N, &'a N)>,
) -> bool
where
    N: Clone + Eq + Hash,
{
    colors.insert(u, Color::Gray);

    if let Some(neighbors) = graph.get(u) {
        for v in neighbors {
            match color_of(colors, v) {
                Color::Gray => {
                    *back_edge = Some((v, u));
                    return true;
                }
                Color::White => {
                    parent.insert(v, u);
                    if dfs(graph, v, colors, parent, finished, back_edge) {
                        return true;
                    }
                }
                Color::Black => {}
            }
        }
    }

    colors.insert(u, Color::Black);
    finished.push(u);
    false
}
