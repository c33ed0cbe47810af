//! Re-exports of the most commonly used items in `pathfinder_core`.
pub use crate::constants::{CityId, Weight};
pub use crate::network::{City, Network, Road};

pub use crate::search;
pub use crate::search::{Dijkstra, Route, SearchOutcome, Step};

pub use crate::util::test_networks::sample_network;
