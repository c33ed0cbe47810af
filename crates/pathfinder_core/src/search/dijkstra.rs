//! Single-source shortest-path search with a replayable step trace.
use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::constants::{CityId, Weight};
use crate::network::Network;
use crate::search::route::{Route, SearchOutcome};
use crate::search::trace::Step;
use crate::statistics::SearchStats;

pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    network: &'a Network,
}

impl<'a> Dijkstra<'a> {
    pub fn new(network: &'a Network) -> Self {
        Dijkstra {
            network,
            stats: SearchStats::default(),
        }
    }

    /// Compute the shortest route from `source` to `target` and record a
    /// snapshot of the search state for every settled city.
    ///
    /// Runs the dense O(V²) variant: the next city is picked by scanning
    /// the unvisited list in network insertion order, so ties on equal
    /// distance always resolve to the earliest inserted city. That ordering
    /// is part of the contract: identical inputs must produce an identical
    /// trace.
    ///
    /// A source or target id that is not part of the network behaves like
    /// an unreachable target: `route` is `None`, and the trace still holds
    /// whatever the search explored.
    pub fn search(&mut self, source: CityId, target: CityId) -> SearchOutcome {
        self.stats.init();

        let adjacency = self.network.adjacency();

        let mut distances: FxHashMap<CityId, Weight> = FxHashMap::default();
        let mut previous: FxHashMap<CityId, Option<CityId>> = FxHashMap::default();
        for city in self.network.cities() {
            distances.insert(city.id, Weight::INFINITY);
            previous.insert(city.id, None);
        }
        if let Some(distance) = distances.get_mut(&source) {
            *distance = 0.0;
        }

        let mut unvisited: Vec<CityId> = self.network.cities().map(|city| city.id).collect();
        let mut visited: Vec<CityId> = Vec::new();
        let mut steps: Vec<Step> = Vec::new();

        loop {
            // First unvisited city with the strictly smallest finite
            // distance wins; cities still at INFINITY are not candidates.
            let mut current = None;
            let mut smallest = Weight::INFINITY;
            for &city in &unvisited {
                let distance = distances[&city];
                if distance < smallest {
                    smallest = distance;
                    current = Some(city);
                }
            }

            // Unvisited is empty, or everything left is unreachable.
            let Some(current) = current else {
                break;
            };

            unvisited.retain(|&city| city != current);
            visited.push(current);
            self.stats.nodes_settled += 1;

            // Snapshot before relaxing, so the step shows the state the
            // selection was based on.
            steps.push(Step {
                current: Some(current),
                visited: visited.clone(),
                distances: distances.clone(),
                previous: previous.clone(),
            });

            // The target is settled and its distance final; stop even if
            // unvisited cities remain.
            if current == target {
                break;
            }

            for &(neighbor, weight) in &adjacency[&current] {
                if visited.contains(&neighbor) {
                    continue;
                }
                // Roads naming ids outside the network are inert.
                let Some(&neighbor_distance) = distances.get(&neighbor) else {
                    continue;
                };

                self.stats.relaxations += 1;
                let candidate = smallest + weight;
                // Strictly smaller only: on an equal candidate the
                // predecessor recorded first stays.
                if candidate < neighbor_distance {
                    distances.insert(neighbor, candidate);
                    previous.insert(neighbor, Some(current));
                }
            }
        }

        // Terminal snapshot, distinguishable from the last active step.
        steps.push(Step {
            current: None,
            visited: visited.clone(),
            distances: distances.clone(),
            previous: previous.clone(),
        });

        self.stats.finish();

        let route = super::reconstruct_path(source, target, &previous)
            .map(|cities| Route::new(cities, distances[&target]));

        if let Some(route) = &route {
            debug!("Route found: {:?}", route.cities);
            info!(
                "Route found: {:?}/{} nodes settled",
                self.stats.duration.unwrap(),
                self.stats.nodes_settled
            );
        } else {
            info!(
                "No route found: {:?}/{} nodes settled",
                self.stats.duration.unwrap(),
                self.stats.nodes_settled
            );
        }

        SearchOutcome { route, steps }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::search::{assert_no_route, assert_route};
    use crate::util::test_networks::{sample_network, triangle_network};
    use crate::{city, road};

    use super::*;

    fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn diamond_network() -> Network {
        // 1 - 2
        // |   |
        // 3 - 4
        let mut network = Network::new();
        network.add_city(city!(1, "A", 0.0, 0.0));
        network.add_city(city!(2, "B", 1.0, 0.0));
        network.add_city(city!(3, "C", 0.0, 1.0));
        network.add_city(city!(4, "D", 1.0, 1.0));
        network.add_road(road!(1, 2, 1.0));
        network.add_road(road!(1, 3, 1.0));
        network.add_road(road!(2, 4, 1.0));
        network.add_road(road!(3, 4, 1.0));
        network
    }

    #[test]
    fn detour_beats_direct_road() {
        // 1 --5-- 2 --5-- 3
        //  \______20_____/
        init_log();
        let network = triangle_network();
        let mut d = Dijkstra::new(&network);

        assert_route(vec![1, 2, 3], 10.0, &d.search(1, 3));
    }

    #[test]
    fn no_roads_means_no_route() {
        let mut network = Network::new();
        network.add_city(city!(1, "A", 0.0, 0.0));
        network.add_city(city!(2, "B", 1.0, 0.0));

        let mut d = Dijkstra::new(&network);

        assert_no_route(&d.search(1, 2));
    }

    #[test]
    fn source_equals_target() {
        let network = triangle_network();
        let mut d = Dijkstra::new(&network);

        let outcome = d.search(2, 2);

        assert_route(vec![2], 0.0, &outcome);
        // The source is settled once, then the search stops.
        assert_eq!(outcome.steps.len(), 2);
        assert_eq!(outcome.steps[0].current, Some(2));
        assert_eq!(outcome.steps[1].current, None);
    }

    #[test]
    fn halts_once_target_is_settled() {
        // 1 --5-- 2 --5-- 3
        let mut network = Network::new();
        network.add_city(city!(1, "A", 0.0, 0.0));
        network.add_city(city!(2, "B", 1.0, 0.0));
        network.add_city(city!(3, "C", 2.0, 0.0));
        network.add_road(road!(1, 2, 5.0));
        network.add_road(road!(2, 3, 5.0));

        let mut d = Dijkstra::new(&network);
        let outcome = d.search(1, 2);

        assert_route(vec![1, 2], 5.0, &outcome);

        // City 3 was still unvisited when the target settled.
        assert!(outcome.steps.iter().all(|step| step.current != Some(3)));

        let last_active = &outcome.steps[outcome.steps.len() - 2];
        assert_eq!(last_active.current, Some(2));

        let terminal = outcome.steps.last().unwrap();
        assert_eq!(terminal.current, None);
        assert_eq!(terminal.visited, vec![1, 2]);
    }

    #[test]
    fn first_relaxation_wins_on_equal_distance() {
        let network = diamond_network();
        let mut d = Dijkstra::new(&network);

        let outcome = d.search(1, 4);

        // 4 is reachable over 2 and over 3 at distance 2; the predecessor
        // set first is kept.
        assert_route(vec![1, 2, 4], 2.0, &outcome);
        let terminal = outcome.steps.last().unwrap();
        assert_eq!(terminal.previous[&4], Some(2));
    }

    #[test]
    fn duplicate_roads_relax_independently() {
        let mut network = Network::new();
        network.add_city(city!(1, "A", 0.0, 0.0));
        network.add_city(city!(2, "B", 1.0, 0.0));
        network.add_road(road!(1, 2, 2.0));
        network.add_road(road!(1, 2, 1.0));

        let mut d = Dijkstra::new(&network);

        // The second, cheaper road wins the relaxation.
        assert_route(vec![1, 2], 1.0, &d.search(1, 2));
    }

    #[test]
    fn missing_ids_behave_like_unreachable() {
        let network = triangle_network();
        let mut d = Dijkstra::new(&network);

        assert_no_route(&d.search(1, 99));
        assert_no_route(&d.search(99, 1));
        assert_no_route(&d.search(99, 99));

        // A missing source means nothing is selectable; the trace is just
        // the terminal snapshot.
        let outcome = d.search(99, 1);
        assert_eq!(outcome.steps.len(), 1);
        assert_eq!(outcome.steps[0].current, None);
        assert!(outcome.steps[0].visited.is_empty());
    }

    #[test]
    fn roads_to_unknown_cities_are_inert() {
        let mut network = Network::new();
        network.add_city(city!(1, "A", 0.0, 0.0));
        network.add_city(city!(2, "B", 1.0, 0.0));
        network.add_road(road!(1, 2, 1.0));
        network.add_road(road!(1, 7, 1.0));

        let mut d = Dijkstra::new(&network);
        let outcome = d.search(1, 2);

        assert_route(vec![1, 2], 1.0, &outcome);
        for step in &outcome.steps {
            assert!(step.current != Some(7));
            assert!(!step.distances.contains_key(&7));
            assert!(!step.previous.contains_key(&7));
        }
    }

    #[test]
    fn steps_capture_state_before_relaxation() {
        let network = triangle_network();
        let mut d = Dijkstra::new(&network);

        let outcome = d.search(1, 3);
        assert_route(vec![1, 2, 3], 10.0, &outcome);
        assert_eq!(outcome.steps.len(), 4);

        // Settling the source: nothing relaxed yet.
        let first = &outcome.steps[0];
        assert_eq!(first.current, Some(1));
        assert_eq!(first.visited, vec![1]);
        assert_eq!(first.distances[&1], 0.0);
        assert_eq!(first.distances[&2], Weight::INFINITY);
        assert_eq!(first.distances[&3], Weight::INFINITY);
        assert_eq!(first.previous[&2], None);

        // Settling 2: the direct road to 3 is still the best known.
        let second = &outcome.steps[1];
        assert_eq!(second.current, Some(2));
        assert_eq!(second.visited, vec![1, 2]);
        assert_eq!(second.distances[&2], 5.0);
        assert_eq!(second.distances[&3], 20.0);
        assert_eq!(second.previous[&3], Some(1));

        // Settling 3: the detour over 2 has replaced the direct road.
        let third = &outcome.steps[2];
        assert_eq!(third.current, Some(3));
        assert_eq!(third.distances[&3], 10.0);
        assert_eq!(third.previous[&3], Some(2));
    }

    #[test]
    fn terminal_step_reflects_exit_state() {
        let network = triangle_network();
        let mut d = Dijkstra::new(&network);

        let outcome = d.search(1, 3);

        let terminal = outcome.steps.last().unwrap();
        assert_eq!(terminal.current, None);
        assert_eq!(terminal.visited, vec![1, 2, 3]);
        assert_eq!(terminal.distances[&3], 10.0);
        assert_eq!(terminal.previous[&3], Some(2));
    }

    #[test]
    fn distances_never_loosen_across_steps() {
        let network = sample_network();
        let mut d = Dijkstra::new(&network);

        let outcome = d.search(1, 7);

        for pair in outcome.steps.windows(2) {
            for (city, after) in &pair[1].distances {
                assert!(*after <= pair[0].distances[city]);
            }
        }
    }

    #[test]
    fn repeated_searches_are_identical() {
        let network = sample_network();

        let first = Dijkstra::new(&network).search(1, 7);
        let second = Dijkstra::new(&network).search(1, 7);

        assert_eq!(first, second);
    }

    #[test]
    fn trace_access_is_idempotent() {
        let network = sample_network();
        let mut d = Dijkstra::new(&network);

        let outcome = d.search(1, 7);

        let later = outcome.steps[5].clone();
        let earlier = outcome.steps[2].clone();
        assert_eq!(outcome.steps[5], later);
        assert_eq!(outcome.steps[2], earlier);
    }

    #[test]
    fn route_across_the_sample_network() {
        init_log();
        let network = sample_network();
        let mut d = Dijkstra::new(&network);

        // New York to Los Angeles over Chicago and Denver.
        let outcome = d.search(1, 7);

        assert_route(vec![1, 4, 10, 7], 2810.0, &outcome);
        assert_eq!(d.stats.nodes_settled, 8);
        assert_eq!(outcome.steps.len(), 9);
    }

    fn check_search_invariants(network: &Network, source: CityId, target: CityId) {
        let mut d = Dijkstra::new(network);
        let outcome = d.search(source, target);

        match &outcome.route {
            Some(route) => {
                assert_eq!(source, *route.cities.first().unwrap());
                assert_eq!(target, *route.cities.last().unwrap());

                let mut sum = 0.0;
                for pair in route.cities.windows(2) {
                    let road = network
                        .roads()
                        .find(|road| road.connects(pair[0], pair[1]))
                        .expect("route uses a road that is not part of the network");
                    sum += road.distance;
                }
                assert_abs_diff_eq!(route.distance, sum, epsilon = 1e-9);
            }
            None => {
                assert!(outcome.path().is_empty());
                assert_eq!(0.0, outcome.distance());
            }
        }

        for pair in outcome.steps.windows(2) {
            for (city, after) in &pair[1].distances {
                assert!(*after <= pair[0].distances[city]);
            }
        }
    }

    #[test]
    fn search_on_sample_network() {
        init_log();
        let network = sample_network();

        let mut runner = proptest::test_runner::TestRunner::default();

        // Ids 0 and 11 are not part of the network and must degrade to
        // "no route".
        runner
            .run(&(0usize..12, 0usize..12), |(source, target)| {
                check_search_invariants(&network, source, target);
                Ok(())
            })
            .unwrap();
    }
}
