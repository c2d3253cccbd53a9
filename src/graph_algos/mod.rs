
pub mod dijkstra;
pub mod bellman_ford;
pub mod floyd_warshall;
pub mod a_star;
pub mod reweighted;
mod shortest_path;

use crate::config::RouterConfig;
use crate::errors::RouteError;
use crate::graph::{Coordinates, Graph};
use crate::perturb::perturb;
use a_star::AStar;

use std::{fmt, hash::Hash, fmt::Debug, str::FromStr};
use rand::Rng;


/// Result of a single routing request
/// path: start to end inclusive, empty when `end` is unreachable
/// distance: sum of edge weights along `path`, infinite when unreachable
#[derive(Clone, Debug, PartialEq)]
pub struct Route<N> {
    pub path: Vec<N>,
    pub distance: f64,
}

impl<N> Route<N> {

    pub fn new(path: Vec<N>, distance: f64) -> Self {
        Self { path, distance }
    }

    /// Empty path, infinite distance
    pub fn unreachable() -> Self {
        Self { path: Vec::new(), distance: f64::INFINITY }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges travelled
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}


/// Resolve start and end to graph node indices
pub(crate) fn endpoints<N>(graph: &Graph<N>, start: &N, end: &N) -> Result<(usize, usize), RouteError>
where
    N: Eq + Hash + Clone + Debug,
{
    let start_index = graph.index_of(start).ok_or_else(|| RouteError::invalid_node(start))?;
    let end_index = graph.index_of(end).ok_or_else(|| RouteError::invalid_node(end))?;
    Ok((start_index, end_index))
}


/// Routing strategy selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Engine {
    Dijkstra,
    BellmanFord,
    FloydWarshall,
    AStar,
    /// Dijkstra on a randomly reweighted copy, see `reweighted_dijkstra`
    Reweighted,
}

impl Engine {

    /// Every engine, in comparison order
    pub const ALL: [Engine; 5] = [
        Engine::Dijkstra,
        Engine::BellmanFord,
        Engine::FloydWarshall,
        Engine::AStar,
        Engine::Reweighted,
    ];

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            Engine::Dijkstra => "Dijkstra",
            Engine::BellmanFord => "Bellman-Ford",
            Engine::FloydWarshall => "Floyd-Warshall",
            Engine::AStar => "A*",
            Engine::Reweighted => "Reweighted Dijkstra",
        }
    }

    /// Display color used when routes are drawn side by side
    pub fn color_tag(&self) -> &'static str {
        match self {
            Engine::Dijkstra => "#60A5FA",
            Engine::BellmanFord => "#34D399",
            Engine::FloydWarshall => "#F87171",
            Engine::AStar => "#FACC15",
            Engine::Reweighted => "#C084FC",
        }
    }

    /// Selector key accepted by `FromStr`
    pub fn key(&self) -> &'static str {
        match self {
            Engine::Dijkstra => "dijkstra",
            Engine::BellmanFord => "bellmanFord",
            Engine::FloydWarshall => "floydWarshall",
            Engine::AStar => "aStar",
            Engine::Reweighted => "reweighted",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Engine {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            // "johnson" is the legacy key of the reweighted engine
            "johnson" => Ok(Engine::Reweighted),
            _ => Engine::ALL
                .into_iter()
                .find(|engine| engine.key() == s)
                .ok_or_else(|| RouteError::UnknownEngine(s.to_string())),
        }
    }
}


/// One engine's entry in a comparison run
#[derive(Clone, Debug)]
pub struct Comparison<N: Eq + Hash> {
    pub engine: Engine,
    pub name: &'static str,
    pub color: &'static str,
    pub route: Route<N>,
    /// Graph the route was computed on; `route.distance` is its path weight here
    pub graph: Graph<N>,
}


/// Entry point for routing requests
/// Holds the validated configuration; every randomized step draws from the
/// generator passed to each call, so seeded generators give reproducible runs.
#[derive(Clone, Debug, Default)]
pub struct Router {
    config: RouterConfig,
}

impl Router {

    pub fn new(config: RouterConfig) -> Result<Self, RouteError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Route from `start` to `end` with one engine on the caller's graph.
    /// `coords` is only needed, and then required, by `Engine::AStar`.
    /// The graph and coordinates are never modified.
    pub fn route<N, R>(&self, graph: &Graph<N>, start: &N, end: &N, engine: Engine, coords: Option<&Coordinates<N>>, rng: &mut R) -> Result<Route<N>, RouteError>
    where
        N: Eq + Hash + Clone + Debug,
        R: Rng + ?Sized,
    {
        self.run(graph, start, end, engine, coords, rng).map(|(route, _)| route)
    }

    /// Run every engine, each on its own independently perturbed copy of `graph`
    pub fn compare_all<N, R>(&self, graph: &Graph<N>, start: &N, end: &N, coords: &Coordinates<N>, rng: &mut R) -> Result<Vec<Comparison<N>>, RouteError>
    where
        N: Eq + Hash + Clone + Debug,
        R: Rng + ?Sized,
    {
        endpoints(graph, start, end)?;

        let mut comparisons = Vec::with_capacity(Engine::ALL.len());
        for engine in Engine::ALL {
            let private = perturb(graph, self.config.comparison_factor, self.config.comparison_mode, rng)?;
            let (route, reweighted) = self.run(&private, start, end, engine, Some(coords), rng)?;
            log::debug!("compare: {engine} {start:?} -> {end:?} distance {}", route.distance);

            comparisons.push(Comparison {
                engine,
                name: engine.name(),
                color: engine.color_tag(),
                route,
                graph: reweighted.unwrap_or(private),
            });
        }
        Ok(comparisons)
    }

    /// Dispatch to an engine; also returns the reweighted graph when the
    /// engine routed on one instead of `graph`
    fn run<N, R>(&self, graph: &Graph<N>, start: &N, end: &N, engine: Engine, coords: Option<&Coordinates<N>>, rng: &mut R) -> Result<(Route<N>, Option<Graph<N>>), RouteError>
    where
        N: Eq + Hash + Clone + Debug,
        R: Rng + ?Sized,
    {
        match engine {
            Engine::Dijkstra => Ok((dijkstra::dijkstra(graph, start, end)?, None)),
            Engine::BellmanFord => Ok((bellman_ford::bellman_ford(graph, start, end)?, None)),
            Engine::FloydWarshall => Ok((floyd_warshall::floyd_warshall(graph, start, end)?, None)),
            Engine::AStar => {
                let coords = coords.ok_or(RouteError::CoordinatesRequired)?;
                let route = AStar::new(self.config.heuristic_bias)?.plan(graph, start, end, coords, rng)?;
                Ok((route, None))
            }
            Engine::Reweighted => {
                let (route, reweighted) = reweighted::reweighted_dijkstra_with_graph(graph, start, end, self.config.reweight_factor, rng)?;
                Ok((route, Some(reweighted)))
            }
        }
    }
}
