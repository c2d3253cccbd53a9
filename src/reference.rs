//! A 17-city sample network, cities `'A'` to `'Q'`, laid out on a 0..100 plane.

use crate::geometry::Point;
use crate::graph::{Coordinates, Graph};


const CITY_ROUTES: [(char, char, f64); 27] = [
    ('A', 'B', 4.0), ('A', 'C', 2.0), ('A', 'D', 7.0),
    ('B', 'E', 3.0), ('B', 'F', 5.0),
    ('C', 'D', 3.0), ('C', 'G', 8.0), ('C', 'H', 4.0),
    ('D', 'H', 2.0), ('D', 'I', 6.0),
    ('E', 'F', 4.0), ('E', 'J', 7.0),
    ('F', 'K', 6.0),
    ('G', 'H', 3.0), ('G', 'L', 5.0),
    ('H', 'M', 7.0),
    ('I', 'M', 2.0), ('I', 'N', 4.0),
    ('J', 'K', 3.0), ('J', 'O', 6.0),
    ('K', 'P', 5.0),
    ('L', 'M', 3.0), ('L', 'Q', 8.0),
    ('M', 'Q', 4.0),
    ('N', 'Q', 2.0),
    ('O', 'P', 4.0),
    ('P', 'Q', 3.0),
];

const CITY_POSITIONS: [(char, f64, f64); 17] = [
    ('A', 5.0, 80.0),
    ('B', 15.0, 70.0),
    ('C', 10.0, 50.0),
    ('D', 20.0, 40.0),
    ('E', 25.0, 75.0),
    ('F', 30.0, 65.0),
    ('G', 25.0, 40.0),
    ('H', 35.0, 50.0),
    ('I', 45.0, 40.0),
    ('J', 40.0, 75.0),
    ('K', 50.0, 65.0),
    ('L', 40.0, 30.0),
    ('M', 50.0, 45.0),
    ('N', 60.0, 35.0),
    ('O', 55.0, 75.0),
    ('P', 65.0, 60.0),
    ('Q', 70.0, 45.0),
];


/// Undirected city network; nodes are inserted in alphabetical order
pub fn city_network() -> Graph<char> {
    Graph::from_undirected_edges(CITY_ROUTES)
}

/// Position of every city in `city_network`
pub fn city_coordinates() -> Coordinates<char> {
    CITY_POSITIONS
        .into_iter()
        .map(|(city, x, y)| (city, Point::new(x, y)))
        .collect()
}
