use crate::network::Network;
use crate::{city, road};

/// The default network of the interactive map: ten US cities and the
/// thirteen roads between them, distances in miles.
pub fn sample_network() -> Network {
    let mut network = Network::with_capacity(10, 13);

    network.add_city(city!(1, "New York", 80.0, 40.0));
    network.add_city(city!(2, "Boston", 90.0, 30.0));
    network.add_city(city!(3, "Washington DC", 75.0, 50.0));
    network.add_city(city!(4, "Chicago", 60.0, 35.0));
    network.add_city(city!(5, "Miami", 80.0, 80.0));
    network.add_city(city!(6, "Dallas", 45.0, 65.0));
    network.add_city(city!(7, "Los Angeles", 15.0, 60.0));
    network.add_city(city!(8, "San Francisco", 10.0, 45.0));
    network.add_city(city!(9, "Seattle", 15.0, 20.0));
    network.add_city(city!(10, "Denver", 40.0, 45.0));

    network.add_road(road!(1, 2, 215.0));
    network.add_road(road!(1, 3, 225.0));
    network.add_road(road!(1, 4, 790.0));
    network.add_road(road!(2, 3, 440.0));
    network.add_road(road!(3, 5, 1020.0));
    network.add_road(road!(4, 10, 1000.0));
    network.add_road(road!(4, 6, 920.0));
    network.add_road(road!(5, 6, 1340.0));
    network.add_road(road!(6, 7, 1430.0));
    network.add_road(road!(7, 8, 380.0));
    network.add_road(road!(8, 9, 810.0));
    network.add_road(road!(9, 10, 1330.0));
    network.add_road(road!(10, 7, 1020.0));

    network
}

/// Three cities where the direct road loses to the detour.
///
/// 1 --5-- 2 --5-- 3
///  \______20_____/
pub fn triangle_network() -> Network {
    let mut network = Network::new();

    network.add_city(city!(1, "A", 0.0, 0.0));
    network.add_city(city!(2, "B", 1.0, 0.0));
    network.add_city(city!(3, "C", 2.0, 0.0));

    network.add_road(road!(1, 2, 5.0));
    network.add_road(road!(2, 3, 5.0));
    network.add_road(road!(1, 3, 20.0));

    network
}
