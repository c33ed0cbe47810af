use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::constants::{CityId, Weight};

/// A uniquely identified point of the network.
///
/// `name`, `x` and `y` are display metadata carried for the calling layer
/// (map rendering, prompts). The search never reads them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(id: CityId, name: impl Into<String>, x: f64, y: f64) -> Self {
        City {
            id,
            name: name.into(),
            x,
            y,
        }
    }
}

/// An undirected road between two cities, traversable in both directions
/// at the same weight.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Road {
    pub from: CityId,
    pub to: CityId,
    pub distance: Weight,
}

impl Road {
    pub fn new(from: CityId, to: CityId, distance: Weight) -> Self {
        Road { from, to, distance }
    }

    /// Whether this road connects `a` and `b`, in either direction.
    pub fn connects(&self, a: CityId, b: CityId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// Adjacency of a network: city id to `(neighbor id, road weight)` pairs,
/// both directions of every road in insertion order.
///
/// Built fresh for each search and dropped with it. Duplicate roads between
/// the same pair of cities stay as independent entries.
pub type Adjacency = FxHashMap<CityId, Vec<(CityId, Weight)>>;

/// A city network as the calling layer owns it: cities and roads in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Network {
    cities: Vec<City>,
    roads: Vec<Road>,
}

impl Network {
    pub fn new() -> Self {
        Self {
            cities: Vec::new(),
            roads: Vec::new(),
        }
    }

    pub fn with_capacity(num_cities: usize, num_roads: usize) -> Self {
        Self {
            cities: Vec::with_capacity(num_cities),
            roads: Vec::with_capacity(num_roads),
        }
    }

    /// Add a new city and return its id.
    ///
    /// Ids must be unique across the network; the caller picks them
    /// (`next_city_id` gives the conventional choice).
    pub fn add_city(&mut self, city: City) -> CityId {
        let id = city.id;
        self.cities.push(city);
        id
    }

    pub fn add_road(&mut self, road: Road) {
        self.roads.push(road);
    }

    /// The id an interactively added city gets: one past the largest id in
    /// use, starting at 1.
    pub fn next_city_id(&self) -> CityId {
        self.cities
            .iter()
            .map(|city| city.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    pub fn city(&self, id: CityId) -> Option<&City> {
        self.cities.iter().find(|city| city.id == id)
    }

    /// Display name of a city, with a generic fallback for unknown ids.
    pub fn city_name(&self, id: CityId) -> String {
        match self.city(id) {
            Some(city) => city.name.clone(),
            None => format!("City {}", id),
        }
    }

    /// Returns an iterator over all cities, in insertion order
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    /// Returns an iterator over all roads, in insertion order
    pub fn roads(&self) -> impl Iterator<Item = &Road> {
        self.roads.iter()
    }

    pub fn num_cities(&self) -> usize {
        self.cities.len()
    }

    pub fn num_roads(&self) -> usize {
        self.roads.len()
    }

    /// Build the adjacency mapping: every city gets an entry, every road is
    /// recorded in both directions.
    ///
    /// Roads naming ids outside the city set are loaded too; the search
    /// never reaches them, so they stay inert.
    pub fn adjacency(&self) -> Adjacency {
        let mut adjacency: Adjacency = FxHashMap::default();

        for city in &self.cities {
            adjacency.entry(city.id).or_default();
        }

        for road in &self.roads {
            adjacency
                .entry(road.from)
                .or_default()
                .push((road.to, road.distance));
            adjacency
                .entry(road.to)
                .or_default()
                .push((road.from, road.distance));
        }

        adjacency
    }
}

/// Macro to create a road between two cities with a distance
///
/// road!(1, 2, 215.0)
#[macro_export]
macro_rules! road {
    ($from:expr, $to:expr, $distance:expr) => {
        $crate::network::Road::new($from, $to, $distance)
    };
}

/// Macro to create a city with a given id, name and position
///
/// city!(1, "New York", 80.0, 40.0)
#[macro_export]
macro_rules! city {
    ($id:expr, $name:expr, $x:expr, $y:expr) => {
        $crate::network::City::new($id, $name, $x, $y)
    };
}
