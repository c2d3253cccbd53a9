use crate::errors::RouteError;
use crate::graph::Graph;
use crate::perturb::{Perturbation, perturb};
use super::{Route, dijkstra::dijkstra};

use std::{hash::Hash, fmt::Debug};
use rand::Rng;


/// Dijkstra on a randomly reweighted copy of the graph
///
/// Stands in for Johnson's algorithm, but performs no Bellman-Ford potential
/// pass: each edge weight is scaled by a uniform draw from [1, factor] and
/// Dijkstra runs on the copy. Weights only grow, so the reported distance is
/// never below the true shortest distance of the input graph.
pub fn reweighted_dijkstra<N, R>(graph: &Graph<N>, start: &N, end: &N, factor: f64, rng: &mut R) -> Result<Route<N>, RouteError>
where
    N: Eq + Hash + Clone + Debug,
    R: Rng + ?Sized,
{
    reweighted_dijkstra_with_graph(graph, start, end, factor, rng).map(|(route, _)| route)
}


/// Same as `reweighted_dijkstra`, also returning the reweighted copy the
/// route was computed on
pub(crate) fn reweighted_dijkstra_with_graph<N, R>(graph: &Graph<N>, start: &N, end: &N, factor: f64, rng: &mut R) -> Result<(Route<N>, Graph<N>), RouteError>
where
    N: Eq + Hash + Clone + Debug,
    R: Rng + ?Sized,
{
    let reweighted = perturb(graph, factor, Perturbation::Multiplicative, rng)?;
    let route = dijkstra(&reweighted, start, end)?;
    Ok((route, reweighted))
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn create_test_graph() -> Graph<char> {
        Graph::from_undirected_edges([
            ('A', 'B', 2.0),
            ('B', 'D', 2.0),
            ('A', 'C', 3.0),
            ('C', 'D', 1.5),
            ('D', 'E', 1.0),
        ])
    }

    #[test]
    fn test_reweighted_never_beats_true_distance() {
        let graph = create_test_graph();
        let exact = dijkstra(&graph, &'A', &'E').unwrap().distance;

        for seed in 0..25 {
            let mut rng = StdRng::seed_from_u64(seed);
            let route = reweighted_dijkstra(&graph, &'A', &'E', 1.5, &mut rng).unwrap();
            assert!(route.distance >= exact);
            assert!(route.distance <= exact * 1.5 + 1e-9);
        }
    }

    #[test]
    fn test_route_is_consistent_with_reweighted_graph() {
        let graph = create_test_graph();
        let mut rng = StdRng::seed_from_u64(9);
        let (route, reweighted) = reweighted_dijkstra_with_graph(&graph, &'A', &'E', 1.5, &mut rng).unwrap();

        let weight = reweighted.path_weight(&route.path).unwrap();
        assert!((weight - route.distance).abs() < 1e-9);
        assert_eq!(route.path.first(), Some(&'A'));
        assert_eq!(route.path.last(), Some(&'E'));
    }

    #[test]
    fn test_factor_one_is_plain_dijkstra() {
        let graph = create_test_graph();
        let mut rng = StdRng::seed_from_u64(4);
        let route = reweighted_dijkstra(&graph, &'A', &'E', 1.0, &mut rng).unwrap();
        assert_eq!(route, dijkstra(&graph, &'A', &'E').unwrap());
    }

    #[test]
    fn test_rejects_shrinking_factor() {
        let graph = create_test_graph();
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(
            reweighted_dijkstra(&graph, &'A', &'E', 0.8, &mut rng),
            Err(RouteError::InvalidFactor(0.8))
        );
    }
}
