//! Shortest-path engine for interactive city networks.
//!
//! The calling layer owns a [`Network`] of cities and roads; the engine
//! computes shortest routes between two cities and records every
//! intermediate state of the search, so a viewer can scrub through the
//! algorithm step by step.
//!
//! # Basic usage
//! ```
//! use pathfinder_core::prelude::*;
//!
//! let network = sample_network();
//!
//! // New York to Los Angeles
//! let mut dijkstra = Dijkstra::new(&network);
//! let outcome = dijkstra.search(1, 7);
//!
//! let route = outcome.route.as_ref().expect("no route found");
//! assert_eq!(route.cities, vec![1, 4, 10, 7]);
//!
//! // Every settled city left a snapshot behind for replay.
//! for step in &outcome.steps {
//!     println!("settled: {:?}", step.current);
//! }
//! ```
//!
//! [`Network`]: crate::network::Network
pub mod constants;
pub mod network;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
