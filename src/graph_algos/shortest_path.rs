use crate::errors::RouteError;
use crate::graph::Graph;

use std::hash::Hash;


/// Parent index of a node with no predecessor (the start node, or unreached)
pub(crate) const NO_PARENT: usize = usize::MAX;


/// Construct the shortest path from the goal node back to the start node
/// Returns the ordered path as a vector of nodes from start to goal
/// parents: parent index per node index, NO_PARENT where there is none
/// goal_index: usize - index of the goal node in the graph
pub(crate) fn shortest_path<N>(graph: &Graph<N>, parents: &[usize], goal_index: usize) -> Result<Vec<N>, RouteError>
where
    N: Eq + Hash + Clone,
{

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != NO_PARENT {
        // a chain longer than the node count has looped
        if path.len() > parents.len() {
            return Err(RouteError::BrokenPath);
        }
        match graph.node_at(current_index) {
            Some(node) => path.push(node.clone()),
            None => return Err(RouteError::BrokenPath),
        }
        current_index = parents[current_index];
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(path)
}


/// Walk a next-hop table from start to goal
/// next_hops[i][j]: index of the first node to visit from i en route to j
pub(crate) fn follow_next_hops<N>(graph: &Graph<N>, next_hops: &[Vec<usize>], start_index: usize, goal_index: usize) -> Result<Vec<N>, RouteError>
where
    N: Eq + Hash + Clone,
{
    let node = |index: usize| graph.node_at(index).cloned().ok_or(RouteError::BrokenPath);

    let mut path = vec![node(start_index)?];
    let mut current_index = start_index;

    while current_index != goal_index {
        current_index = next_hops[current_index][goal_index];
        if current_index == NO_PARENT || path.len() > next_hops.len() {
            return Err(RouteError::BrokenPath);
        }
        path.push(node(current_index)?);
    }

    Ok(path)
}
