use crate::errors::RouteError;
use crate::graph::Graph;
use super::{Route, endpoints, shortest_path::{NO_PARENT, shortest_path}};

use std::{hash::Hash, fmt::Debug};




/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Edge weights must be non-negative; negative weights are not detected.
/// Returns an empty route with infinite distance when `end` is unreachable.
pub fn dijkstra<N>(graph: &Graph<N>, start: &N, end: &N) -> Result<Route<N>, RouteError>
where
    N: Eq + Hash + Clone + Debug,
    {

    let (start_index, end_index) = endpoints(graph, start, end)?;

    // Settle every reachable node
    let (costs, parents) = build_dijkstra_graph(graph, start_index);

    if costs[end_index].is_infinite() {
        log::debug!("dijkstra: {start:?} -> {end:?} unreachable");
        return Ok(Route::unreachable());
    }

    let path = shortest_path(graph, &parents, end_index)?;
    log::debug!("dijkstra: {start:?} -> {end:?} distance {} over {} hops", costs[end_index], path.len().saturating_sub(1));
    Ok(Route::new(path, costs[end_index]))
}


/// Traverses the graph using Dijkstra's algorithm
/// Returns the best cost and parent index of every node, indexed like the graph
/// The frontier is a linear scan over unsettled nodes: O(V^2), fine for small graphs
pub(crate) fn build_dijkstra_graph<N>(graph: &Graph<N>, start_index: usize) -> (Vec<f64>, Vec<usize>)
where
    N: Eq + Hash + Clone,
    {

    let node_count = graph.node_count();
    let mut costs = vec![f64::INFINITY; node_count];
    let mut parents = vec![NO_PARENT; node_count];
    let mut settled = vec![false; node_count];
    costs[start_index] = 0.0;

    for _ in 0..node_count {

        // cheapest unsettled node, lowest index wins ties
        let mut current: Option<usize> = None;
        for index in (0..node_count).filter(|&i| !settled[i]) {
            if current.is_none_or(|c| costs[index] < costs[c]) {
                current = Some(index);
            }
        }

        // Everything left is unreachable
        let Some(current) = current.filter(|&c| costs[c].is_finite()) else {
            break;
        };
        settled[current] = true;

        for (neighbor, edge_cost) in graph.edges_from(current) {
            let new_cost = costs[current] + edge_cost;

            // only a strictly cheaper path replaces the first one found
            if new_cost < costs[neighbor] {
                log::trace!("dijkstra: relax {current} -> {neighbor} to {new_cost}");
                costs[neighbor] = new_cost;
                parents[neighbor] = current;
            }
        }
    }

    (costs, parents)
}
