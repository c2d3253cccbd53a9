use crate::errors::RouteError;
use crate::graph_algos::a_star::check_bias;
use crate::perturb::Perturbation;


/// Tunables for randomized routing
#[derive(Clone, Debug, PartialEq)]
pub struct RouterConfig {
    /// Factor used to build each engine's private graph in comparison mode
    pub comparison_factor: f64,
    /// Policy used to build each engine's private graph in comparison mode
    pub comparison_mode: Perturbation,
    /// Multiplicative factor of the reweighted Dijkstra engine
    pub reweight_factor: f64,
    /// Upper bound of the random bias added to every A* heuristic estimate, 0 disables it
    pub heuristic_bias: f64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            comparison_factor: 1.5,
            comparison_mode: Perturbation::Multiplicative,
            reweight_factor: 1.5,
            heuristic_bias: 2.0,
        }
    }
}

impl RouterConfig {

    /// A configuration with no randomness in A*; perturbation still applies
    /// to comparison mode and the reweighted engine
    pub fn unbiased() -> Self {
        Self { heuristic_bias: 0.0, ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), RouteError> {
        self.comparison_mode.check_factor(self.comparison_factor)?;
        Perturbation::Multiplicative.check_factor(self.reweight_factor)?;
        check_bias(self.heuristic_bias)
    }
}
