use crate::collections::FxIndexMap;
use crate::geometry::Point;

use std::hash::Hash;


/// Node positions on a 2D plane, only consulted by the A* heuristic
pub type Coordinates<N> = FxIndexMap<N, Point>;


/// Weighted adjacency map
/// N: Node - opaque, comparable identifier
/// Each node maps to its neighbors and the weight of the edge to each one.
/// Undirected graphs are built by mirroring every edge; symmetry is not enforced.
/// Every neighbor is also a node key, so nodes can be addressed by their
/// insertion index, which is also the iteration order used by the engines.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph<N: Eq + Hash> {
    adjacency: FxIndexMap<N, FxIndexMap<N, f64>>,
}

impl<N: Eq + Hash> Default for Graph<N> {
    fn default() -> Self {
        Self { adjacency: FxIndexMap::default() }
    }
}

impl<N> Graph<N>
where
    N: Eq + Hash + Clone,
{

    pub fn new() -> Self {
        Self::default()
    }

    /// Build an undirected graph from (a, b, weight) triples
    pub fn from_undirected_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        let mut graph = Self::new();
        for (a, b, weight) in edges {
            graph.add_undirected_edge(a, b, weight);
        }
        graph
    }

    /// Add a node with no edges, no-op if it exists
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Add a directed edge, both endpoints become nodes
    /// Replaces the weight if the edge already exists
    pub fn add_edge(&mut self, from: N, to: N, weight: f64) {
        self.adjacency.entry(from).or_default().insert(to.clone(), weight);
        self.add_node(to);
    }

    /// Add the edge in both directions
    pub fn add_undirected_edge(&mut self, a: N, b: N, weight: f64) {
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight);
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges (a mirrored edge counts twice)
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|neighbors| neighbors.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Neighbors of a node and the weight to reach each one
    pub fn neighbors(&self, node: &N) -> impl Iterator<Item = (&N, f64)> {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(n, &w)| (n, w)))
    }

    /// Weight of the directed edge from -> to, if present
    pub fn weight(&self, from: &N, to: &N) -> Option<f64> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Sum of edge weights along consecutive path elements
    /// Returns None when two consecutive nodes are not adjacent
    /// An empty or single-node path weighs 0
    pub fn path_weight(&self, path: &[N]) -> Option<f64> {
        path.windows(2)
            .map(|pair| self.weight(&pair[0], &pair[1]))
            .sum()
    }

    /// Same topology, every weight replaced by `f(weight)`
    pub(crate) fn map_weights<F>(&self, mut f: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        let adjacency: FxIndexMap<N, FxIndexMap<N, f64>> = self.adjacency
            .iter()
            .map(|(node, neighbors)| {
                let neighbors: FxIndexMap<N, f64> = neighbors
                    .iter()
                    .map(|(neighbor, &weight)| (neighbor.clone(), f(weight)))
                    .collect();
                (node.clone(), neighbors)
            })
            .collect();
        Self { adjacency }
    }

    pub(crate) fn index_of(&self, node: &N) -> Option<usize> {
        self.adjacency.get_index_of(node)
    }

    pub(crate) fn node_at(&self, index: usize) -> Option<&N> {
        self.adjacency.get_index(index).map(|(node, _)| node)
    }

    /// Outgoing edges of the node at `index` as (neighbor_index, weight)
    pub(crate) fn edges_from(&self, index: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.adjacency
            .get_index(index)
            .into_iter()
            .flat_map(move |(_, neighbors)| {
                neighbors.iter().filter_map(move |(neighbor, &weight)| {
                    self.index_of(neighbor).map(|i| (i, weight))
                })
            })
    }

    /// Every directed edge as (from_index, to_index, weight)
    pub(crate) fn edge_list(&self) -> Vec<(usize, usize, f64)> {
        (0..self.node_count())
            .flat_map(|u| self.edges_from(u).map(move |(v, w)| (u, v, w)))
            .collect()
    }
}
