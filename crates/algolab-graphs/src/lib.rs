//! Graph exercises over adjacency maps.
//!
//! Graphs are `IndexMap`-based so iteration follows insertion order and
//! every run of an algorithm visits vertices deterministically. Vertices
//! that appear only on the neighbor side of an edge still count as part of
//! the graph.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`components`] | [`connected_components`] over undirected adjacency |
//! | [`dag`] | [`analyze_dag`]: cycle witness or topological order |
//! | [`dijkstra`] | shortest distances and path reconstruction |

pub mod components;
pub mod dag;
pub mod dijkstra;

use indexmap::IndexMap;

/// Unweighted adjacency: vertex to its out-neighbors.
pub type Graph<N> = IndexMap<N, Vec<N>>;

/// Weighted adjacency: vertex to neighbor-to-weight edges.
pub type WeightedGraph<N> = IndexMap<N, IndexMap<N, u64>>;

pub use components::connected_components;
pub use dag::{analyze_dag, find_cycle, topological_sort, DagAnalysis};
pub use dijkstra::{dijkstra, dijkstra_to, shortest_path};
