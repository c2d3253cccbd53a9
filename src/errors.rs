use thiserror::Error;


/// Failures surfaced to the caller of a routing operation.
/// An unreachable destination is not an error, it is an empty route.
#[derive(Debug, Error, PartialEq)]
pub enum RouteError {
    #[error("node {0} is not in the graph")]
    InvalidNode(String), // start or end is not a key of the graph

    #[error("the A* engine requires a coordinate map")]
    CoordinatesRequired,

    #[error("no coordinates for node {0}")]
    MissingCoordinate(String),

    #[error("coordinates for node {0} are not finite")]
    InvalidCoordinate(String),

    #[error("perturbation factor {0} is out of range")]
    InvalidFactor(f64),

    #[error("negative-weight cycle reachable from the start node")]
    NegativeCycle,

    #[error("unknown engine {0:?}")]
    UnknownEngine(String),

    #[error("predecessor chain does not lead back to the start node")]
    BrokenPath,
}

impl RouteError {

    /// Build an `InvalidNode` error from any debuggable node identifier
    pub(crate) fn invalid_node<N: std::fmt::Debug>(node: &N) -> Self {
        RouteError::InvalidNode(format!("{node:?}"))
    }
}
