use crate::errors::RouteError;
use crate::graph::{Coordinates, Graph};
use crate::collections::FxIndexSet;
use crate::geometry::Point;
use super::{Route, endpoints, shortest_path::{NO_PARENT, shortest_path}};

use std::{hash::Hash, fmt::Debug};
use rand::Rng;



/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// The heuristic is the straight-line distance to the goal plus a bias drawn
/// uniformly from [0, bias) on every evaluation. The bias lets the heuristic
/// overestimate, so the returned route is plausible rather than guaranteed
/// optimal; this is what makes repeated comparison runs look different.
/// With `bias == 0` and coordinates that never overestimate edge weights the
/// search is exact.
///
/// There is no closed list: a processed node is re-opened whenever a cheaper
/// cost to it turns up later. The reported distance is the weight of the
/// returned path.
#[derive(Clone, Debug, PartialEq)]
pub struct AStar {
    bias: f64,
}

impl AStar {

    /// bias: upper bound of the random term added to each heuristic estimate
    /// Must be finite and non-negative
    pub fn new(bias: f64) -> Result<Self, RouteError> {
        check_bias(bias)?;
        Ok(Self { bias })
    }

    /// A* without random bias
    pub fn unbiased() -> Self {
        Self { bias: 0.0 }
    }

    /// From start node, search the graph until `end` is expanded
    /// Every graph node needs a finite coordinate, checked before searching
    pub fn plan<N, R>(&self, graph: &Graph<N>, start: &N, end: &N, coords: &Coordinates<N>, rng: &mut R) -> Result<Route<N>, RouteError>
    where
        N: Eq + Hash + Clone + Debug,
        R: Rng + ?Sized,
    {
        let (start_index, end_index) = endpoints(graph, start, end)?;
        let points = node_points(graph, coords)?;
        let goal = points[end_index];

        let node_count = graph.node_count();
        let mut g_costs = vec![f64::INFINITY; node_count];
        let mut f_costs = vec![f64::INFINITY; node_count];
        let mut parents = vec![NO_PARENT; node_count];

        g_costs[start_index] = 0.0;
        f_costs[start_index] = self.heuristic(&points[start_index], &goal, rng);

        // Open list - nodes that may still improve, scanned for the lowest f cost
        let mut open_list: FxIndexSet<usize> = FxIndexSet::default();
        open_list.insert(start_index);

        while let Some(current) = lowest_f_cost(&open_list, &f_costs) {

            // Check if we've reached the goal
            if current == end_index {
                // the parent chain can be cheaper than g[end] when an ancestor
                // improved after the goal was last relaxed
                let path = shortest_path(graph, &parents, end_index)?;
                let distance = graph.path_weight(&path).ok_or(RouteError::BrokenPath)?;
                log::debug!("a*: {start:?} -> {end:?} distance {distance} over {} hops", path.len().saturating_sub(1));
                return Ok(Route::new(path, distance));
            }

            open_list.shift_remove(&current);

            for (neighbor, edge_cost) in graph.edges_from(current) {
                let tentative = g_costs[current] + edge_cost;

                if tentative < g_costs[neighbor] {
                    parents[neighbor] = current;
                    g_costs[neighbor] = tentative;
                    f_costs[neighbor] = tentative + self.heuristic(&points[neighbor], &goal, rng);
                    open_list.insert(neighbor);
                }
            }
        }

        log::debug!("a*: {start:?} -> {end:?} unreachable");
        Ok(Route::unreachable())
    }

    /// Straight-line distance plus a fresh random bias
    fn heuristic<R: Rng + ?Sized>(&self, from: &Point, goal: &Point, rng: &mut R) -> f64 {
        let bias = if self.bias > 0.0 { rng.random_range(0.0..self.bias) } else { 0.0 };
        from.distance_to(goal) + bias
    }
}


/// Heuristic bias must be a finite, non-negative bound
pub(crate) fn check_bias(bias: f64) -> Result<(), RouteError> {
    if bias.is_finite() && bias >= 0.0 { Ok(()) } else { Err(RouteError::InvalidFactor(bias)) }
}


/// Open list member with the smallest f cost, earliest inserted wins ties
fn lowest_f_cost(open_list: &FxIndexSet<usize>, f_costs: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for &index in open_list {
        if best.is_none_or(|b| f_costs[index] < f_costs[b]) {
            best = Some(index);
        }
    }
    best
}


/// Look up the coordinate of every graph node, in node index order
fn node_points<N>(graph: &Graph<N>, coords: &Coordinates<N>) -> Result<Vec<Point>, RouteError>
where
    N: Eq + Hash + Clone + Debug,
{
    graph.nodes()
        .map(|node| match coords.get(node) {
            Some(point) if point.is_finite() => Ok(*point),
            Some(_) => Err(RouteError::InvalidCoordinate(format!("{node:?}"))),
            None => {
                log::warn!("a*: no coordinates for {node:?}");
                Err(RouteError::MissingCoordinate(format!("{node:?}")))
            }
        })
        .collect()
}
