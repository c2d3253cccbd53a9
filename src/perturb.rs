use crate::errors::RouteError;
use crate::graph::Graph;

use std::hash::Hash;
use rand::Rng;


/// How each edge weight is randomized
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Perturbation {
    /// weight * r, r uniform in [1, factor]; requires factor >= 1
    Multiplicative,
    /// weight + r, r uniform in [0, factor); requires factor > 0
    Additive,
}

impl Perturbation {

    /// Check that `factor` is usable with this policy
    pub fn check_factor(&self, factor: f64) -> Result<(), RouteError> {
        let valid = factor.is_finite() && match self {
            Perturbation::Multiplicative => factor >= 1.0,
            Perturbation::Additive => factor > 0.0,
        };
        if valid { Ok(()) } else { Err(RouteError::InvalidFactor(factor)) }
    }
}


/// Return a copy of `graph` with every edge weight independently randomized.
/// Topology is unchanged and the input graph is never touched.
/// Positive weights stay strictly positive under both policies.
pub fn perturb<N, R>(graph: &Graph<N>, factor: f64, mode: Perturbation, rng: &mut R) -> Result<Graph<N>, RouteError>
where
    N: Eq + Hash + Clone,
    R: Rng + ?Sized,
{
    mode.check_factor(factor)?;

    let perturbed = match mode {
        Perturbation::Multiplicative => graph.map_weights(|w| w * rng.random_range(1.0..=factor)),
        Perturbation::Additive => graph.map_weights(|w| w + rng.random_range(0.0..factor)),
    };

    log::trace!("perturbed {} edges ({mode:?}, factor {factor})", perturbed.edge_count());
    Ok(perturbed)
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn square() -> Graph<char> {
        Graph::from_undirected_edges([
            ('A', 'B', 1.0),
            ('B', 'C', 2.0),
            ('C', 'D', 3.0),
            ('D', 'A', 4.0),
        ])
    }

    #[test]
    fn test_multiplicative_bounds() {
        let graph = square();
        let mut rng = StdRng::seed_from_u64(7);
        let perturbed = perturb(&graph, 1.5, Perturbation::Multiplicative, &mut rng).unwrap();

        assert_eq!(perturbed.node_count(), graph.node_count());
        assert_eq!(perturbed.edge_count(), graph.edge_count());
        for from in graph.nodes() {
            for (to, w) in graph.neighbors(from) {
                let p = perturbed.weight(from, to).unwrap();
                assert!(p >= w && p <= w * 1.5, "{from}->{to}: {p} outside [{w}, {}]", w * 1.5);
            }
        }
    }

    #[test]
    fn test_additive_bounds() {
        let graph = square();
        let mut rng = StdRng::seed_from_u64(11);
        let perturbed = perturb(&graph, 0.5, Perturbation::Additive, &mut rng).unwrap();

        for from in graph.nodes() {
            for (to, w) in graph.neighbors(from) {
                let p = perturbed.weight(from, to).unwrap();
                assert!(p >= w && p <= w + 0.5);
            }
        }
    }

    #[test]
    fn test_base_graph_untouched() {
        let graph = square();
        let before = graph.clone();
        let mut rng = StdRng::seed_from_u64(3);
        let _ = perturb(&graph, 3.0, Perturbation::Multiplicative, &mut rng).unwrap();
        assert_eq!(graph, before);
    }

    #[test]
    fn test_mirrored_edges_are_randomized_independently() {
        let graph = square();
        let mut rng = StdRng::seed_from_u64(42);
        let perturbed = perturb(&graph, 2.0, Perturbation::Multiplicative, &mut rng).unwrap();

        // with continuous draws every mirrored pair diverging is near certain
        let diverged = graph.nodes()
            .flat_map(|a| graph.neighbors(a).map(move |(b, _)| (*a, *b)))
            .any(|(a, b)| perturbed.weight(&a, &b) != perturbed.weight(&b, &a));
        assert!(diverged);
    }

    #[test]
    fn test_same_seed_same_graph() {
        let graph = square();
        let a = perturb(&graph, 1.5, Perturbation::Multiplicative, &mut StdRng::seed_from_u64(5)).unwrap();
        let b = perturb(&graph, 1.5, Perturbation::Multiplicative, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_factor_validation() {
        let graph = square();
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            perturb(&graph, 0.5, Perturbation::Multiplicative, &mut rng),
            Err(RouteError::InvalidFactor(0.5))
        );
        assert_eq!(
            perturb(&graph, 0.0, Perturbation::Additive, &mut rng),
            Err(RouteError::InvalidFactor(0.0))
        );
        assert!(perturb(&graph, f64::NAN, Perturbation::Additive, &mut rng).is_err());

        // factor 1 is the identity for the multiplicative policy
        let same = perturb(&graph, 1.0, Perturbation::Multiplicative, &mut rng).unwrap();
        assert_eq!(same, graph);
    }
}
