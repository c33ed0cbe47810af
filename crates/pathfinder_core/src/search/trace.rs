use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::constants::{CityId, Weight};

/// One snapshot of the search state, recorded when a city is settled and
/// before its roads are relaxed. The final entry of a trace carries
/// `current: None` and the state as it stood when the search exited.
///
/// A step owns everything it holds, so mutating the live search state
/// never changes a step that was already recorded. Unreached cities carry
/// `Weight::INFINITY` in `distances`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub current: Option<CityId>,
    pub visited: Vec<CityId>,
    pub distances: FxHashMap<CityId, Weight>,
    pub previous: FxHashMap<CityId, Option<CityId>>,
}

impl Step {
    /// Render a distance the way a step viewer shows it.
    pub fn format_distance(distance: Weight) -> String {
        if distance.is_infinite() {
            "∞".to_string()
        } else {
            format!("{}", distance)
        }
    }
}
