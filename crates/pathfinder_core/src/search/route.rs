use serde::Serialize;

use crate::constants::{CityId, Weight};
use crate::search::trace::Step;

/// A reconstructed shortest route: the city sequence from source to target
/// inclusive, and the summed road weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub cities: Vec<CityId>,
    pub distance: Weight,
}

impl Route {
    pub fn new(cities: Vec<CityId>, distance: Weight) -> Self {
        Route { cities, distance }
    }
}

/// Everything one search invocation produced: the route, if any, and the
/// full step trace. The trace is present either way, so a failed search
/// can be replayed just like a successful one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub route: Option<Route>,
    pub steps: Vec<Step>,
}

impl SearchOutcome {
    /// City ids of the route, empty when no route exists.
    ///
    /// An empty path is the authoritative "no route" signal for consumers
    /// of this flat form; `distance` is 0 in that case and carries no
    /// meaning on its own.
    pub fn path(&self) -> &[CityId] {
        self.route
            .as_ref()
            .map(|route| route.cities.as_slice())
            .unwrap_or(&[])
    }

    /// Total distance of the route, 0 when no route exists.
    pub fn distance(&self) -> Weight {
        self.route.as_ref().map(|route| route.distance).unwrap_or(0.0)
    }
}
