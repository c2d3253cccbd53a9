//! Shortest routes between labeled nodes of a small weighted graph.
//!
//! Five interchangeable engines (Dijkstra, Bellman-Ford, Floyd-Warshall, A*
//! and a reweighted Dijkstra) share one result type, [`Route`]. The
//! [`Router`] runs a single engine, or all of them side by side on
//! independently perturbed copies of the same graph.
//!
//! ```
//! use flightpath::{Engine, Router, reference};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let graph = reference::city_network();
//! let mut rng = StdRng::seed_from_u64(7);
//! let route = Router::default()
//!     .route(&graph, &'A', &'Q', Engine::Dijkstra, None, &mut rng)
//!     .unwrap();
//! assert_eq!(route.path, vec!['A', 'C', 'H', 'M', 'Q']);
//! assert_eq!(route.distance, 17.0);
//! ```

pub mod collections;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod perturb;
pub mod reference;

pub use config::RouterConfig;
pub use errors::RouteError;
pub use geometry::Point;
pub use graph::{Coordinates, Graph};
pub use graph_algos::{Comparison, Engine, Route, Router};
pub use perturb::{Perturbation, perturb};
