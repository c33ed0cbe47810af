use rustc_hash::FxHashMap;

use crate::constants::CityId;

pub mod dijkstra;
pub mod route;
pub mod trace;

pub use dijkstra::Dijkstra;
pub use route::{Route, SearchOutcome};
pub use trace::Step;

/// Walk the predecessor map back from `target` and return the city
/// sequence from source to target.
///
/// `None` when the target was never reached, or is not part of the map at
/// all. A target equal to the source yields the one-city path.
pub(crate) fn reconstruct_path(
    source: CityId,
    target: CityId,
    previous: &FxHashMap<CityId, Option<CityId>>,
) -> Option<Vec<CityId>> {
    match previous.get(&target) {
        None => return None,
        Some(None) if source != target => return None,
        _ => {}
    }

    let mut path = vec![target];
    let mut prev = previous.get(&target).copied().flatten();
    while let Some(city) = prev {
        path.push(city);
        prev = previous.get(&city).copied().flatten();
    }
    path.reverse();

    Some(path)
}

#[cfg(test)]
pub(crate) fn assert_route(
    expected_cities: Vec<CityId>,
    expected_distance: crate::constants::Weight,
    outcome: &SearchOutcome,
) {
    assert_eq!(
        Some(&Route::new(expected_cities, expected_distance)),
        outcome.route.as_ref()
    );
}

#[cfg(test)]
pub(crate) fn assert_no_route(outcome: &SearchOutcome) {
    assert!(outcome.route.is_none());
    assert!(outcome.path().is_empty());
    assert_eq!(0.0, outcome.distance());
}
