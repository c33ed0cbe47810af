/// Road weight type
pub type Weight = f64;
/// Stable identifier of a city, unique for the lifetime of a network
pub type CityId = usize;
