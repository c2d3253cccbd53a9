use crate::errors::RouteError;
use crate::graph::Graph;
use super::{Route, endpoints, shortest_path::{NO_PARENT, follow_next_hops}};

use std::{hash::Hash, fmt::Debug};


/// All-pairs distance and next-hop tables, indexed by graph node index
#[derive(Clone, Debug)]
pub(crate) struct AllPairs {
    pub(crate) distances: Vec<Vec<f64>>,
    pub(crate) next_hops: Vec<Vec<usize>>,
}

impl AllPairs {

    /// Floyd-Warshall over the whole graph: O(V^3)
    /// https://en.wikipedia.org/wiki/Floyd%E2%80%93Warshall_algorithm
    pub(crate) fn build<N>(graph: &Graph<N>) -> Self
    where
        N: Eq + Hash + Clone,
    {
        let n = graph.node_count();
        let mut distances = vec![vec![f64::INFINITY; n]; n];
        let mut next_hops = vec![vec![NO_PARENT; n]; n];

        for i in 0..n {
            distances[i][i] = 0.0;
            next_hops[i][i] = i;
        }
        for (u, v, weight) in graph.edge_list() {
            // a negative self-loop is the only direct edge that beats the diagonal
            if u != v || weight < 0.0 {
                distances[u][v] = weight;
                next_hops[u][v] = v;
            }
        }

        for k in 0..n {
            for i in 0..n {
                if distances[i][k].is_infinite() {
                    continue;
                }
                for j in 0..n {
                    let through_k = distances[i][k] + distances[k][j];
                    if through_k < distances[i][j] {
                        distances[i][j] = through_k;
                        next_hops[i][j] = next_hops[i][k];
                    }
                }
            }
        }

        Self { distances, next_hops }
    }
}


/// Identify the shortest path by precomputing every pair with Floyd-Warshall,
/// then walking the next-hop table from `start` to `end`.
/// The full table is rebuilt on every call even though one pair is requested.
pub fn floyd_warshall<N>(graph: &Graph<N>, start: &N, end: &N) -> Result<Route<N>, RouteError>
where
    N: Eq + Hash + Clone + Debug,
{
    let (start_index, end_index) = endpoints(graph, start, end)?;
    let table = AllPairs::build(graph);

    if table.next_hops[start_index][end_index] == NO_PARENT {
        log::debug!("floyd-warshall: {start:?} -> {end:?} unreachable");
        return Ok(Route::unreachable());
    }

    let path = follow_next_hops(graph, &table.next_hops, start_index, end_index)?;
    let distance = table.distances[start_index][end_index];
    log::debug!("floyd-warshall: {start:?} -> {end:?} distance {distance} over {} hops", path.len().saturating_sub(1));
    Ok(Route::new(path, distance))
}


#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_graph() -> Graph<char> {
        Graph::from_undirected_edges([
            ('A', 'B', 4.0),
            ('A', 'C', 2.0),
            ('B', 'C', 1.0),
            ('B', 'D', 5.0),
            ('C', 'D', 8.0),
            ('D', 'E', 2.0),
        ])
    }

    #[test]
    fn test_all_pairs_table() {
        let graph = create_test_graph();
        let table = AllPairs::build(&graph);

        // A B C D E in insertion order
        assert_eq!(table.distances[0], vec![0.0, 3.0, 2.0, 8.0, 10.0]);
        assert_eq!(table.distances[4][0], 10.0);
        assert_eq!(table.next_hops[0][3], 2); // A -> C -> B -> D
        assert_eq!(table.next_hops[2][2], 2);
    }

    #[test]
    fn test_floyd_warshall_path() {
        let graph = create_test_graph();
        let route = floyd_warshall(&graph, &'A', &'E').unwrap();

        assert_eq!(route.path, vec!['A', 'C', 'B', 'D', 'E']);
        assert_eq!(route.distance, 10.0);
        assert_eq!(graph.path_weight(&route.path), Some(route.distance));
    }

    #[test]
    fn test_floyd_warshall_start_is_goal() {
        let graph = create_test_graph();
        let route = floyd_warshall(&graph, &'D', &'D').unwrap();
        assert_eq!(route.path, vec!['D']);
        assert_eq!(route.distance, 0.0);
    }

    #[test]
    fn test_floyd_warshall_unreachable() {
        let mut graph = create_test_graph();
        graph.add_undirected_edge('X', 'Y', 1.0);

        let route = floyd_warshall(&graph, &'A', &'Y').unwrap();
        assert_eq!(route, Route::unreachable());
    }

    #[test]
    fn test_floyd_warshall_directed() {
        let mut graph = Graph::new();
        graph.add_edge('A', 'B', 1.0);
        graph.add_edge('B', 'C', 1.0);

        assert_eq!(floyd_warshall(&graph, &'A', &'C').unwrap().distance, 2.0);
        assert_eq!(floyd_warshall(&graph, &'C', &'A').unwrap(), Route::unreachable());
    }

    #[test]
    fn test_floyd_warshall_unknown_node() {
        let graph = create_test_graph();
        assert_eq!(
            floyd_warshall(&graph, &'Q', &'A'),
            Err(RouteError::InvalidNode("'Q'".to_string()))
        );
    }
}
