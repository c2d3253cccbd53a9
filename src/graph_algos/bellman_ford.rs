use crate::errors::RouteError;
use crate::graph::Graph;
use super::{Route, endpoints, shortest_path::{NO_PARENT, shortest_path}};

use std::{hash::Hash, fmt::Debug};


/// Identify the shortest path using the Bellman-Ford Algorithm
/// https://en.wikipedia.org/wiki/Bellman%E2%80%93Ford_algorithm
/// Tolerates negative edge weights. Runs exactly |V| - 1 passes over every edge,
/// then one more pass to detect a negative cycle reachable from `start`.
pub fn bellman_ford<N>(graph: &Graph<N>, start: &N, end: &N) -> Result<Route<N>, RouteError>
where
    N: Eq + Hash + Clone + Debug,
{
    let (start_index, end_index) = endpoints(graph, start, end)?;
    let edges = graph.edge_list();

    let node_count = graph.node_count();
    let mut costs = vec![f64::INFINITY; node_count];
    let mut parents = vec![NO_PARENT; node_count];
    costs[start_index] = 0.0;

    // no early exit on convergence
    for _ in 1..node_count {
        for &(u, v, weight) in &edges {
            let new_cost = costs[u] + weight;
            if new_cost < costs[v] {
                costs[v] = new_cost;
                parents[v] = u;
            }
        }
    }

    // Any edge still relaxing means a reachable negative cycle
    if edges.iter().any(|&(u, v, weight)| costs[u] + weight < costs[v]) {
        log::debug!("bellman-ford: negative cycle reachable from {start:?}");
        return Err(RouteError::NegativeCycle);
    }

    if costs[end_index].is_infinite() {
        log::debug!("bellman-ford: {start:?} -> {end:?} unreachable");
        return Ok(Route::unreachable());
    }

    let path = shortest_path(graph, &parents, end_index)?;
    log::debug!("bellman-ford: {start:?} -> {end:?} distance {} over {} hops", costs[end_index], path.len().saturating_sub(1));
    Ok(Route::new(path, costs[end_index]))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_algos::dijkstra::dijkstra;

    #[test]
    fn test_bellman_ford_matches_dijkstra() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 4.0);
        graph.add_edge("A", "C", 2.0);
        graph.add_edge("B", "C", 1.0);
        graph.add_edge("B", "D", 5.0);
        graph.add_edge("C", "D", 8.0);
        graph.add_edge("C", "E", 10.0);
        graph.add_edge("D", "E", 2.0);
        graph.add_edge("D", "F", 6.0);
        graph.add_edge("E", "F", 3.0);

        let bf = bellman_ford(&graph, &"A", &"F").unwrap();
        let dj = dijkstra(&graph, &"A", &"F").unwrap();

        assert_eq!(bf.distance, 14.0);
        assert_eq!(bf.distance, dj.distance);
        assert_eq!(bf.path, vec!["A", "B", "D", "E", "F"]);
    }

    #[test]
    fn test_bellman_ford_negative_edge() {
        // Dijkstra-style greedy settling would commit to A -> C (2)
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 5.0);
        graph.add_edge("A", "C", 2.0);
        graph.add_edge("B", "C", -4.0);

        let route = bellman_ford(&graph, &"A", &"C").unwrap();
        assert_eq!(route.path, vec!["A", "B", "C"]);
        assert_eq!(route.distance, 1.0);
    }

    #[test]
    fn test_bellman_ford_negative_cycle() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("B", "C", -2.0);
        graph.add_edge("C", "B", 1.0);
        graph.add_edge("C", "D", 1.0);

        assert_eq!(bellman_ford(&graph, &"A", &"D"), Err(RouteError::NegativeCycle));
    }

    #[test]
    fn test_bellman_ford_ignores_unreachable_negative_cycle() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("X", "Y", -3.0);
        graph.add_edge("Y", "X", 1.0);

        let route = bellman_ford(&graph, &"A", &"B").unwrap();
        assert_eq!(route.distance, 1.0);
    }

    #[test]
    fn test_bellman_ford_unreachable() {
        let mut graph = Graph::new();
        graph.add_undirected_edge("A", "B", 1.0);
        graph.add_undirected_edge("C", "D", 1.0);

        let route = bellman_ford(&graph, &"A", &"D").unwrap();
        assert_eq!(route, Route::unreachable());
    }
}
