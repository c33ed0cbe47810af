pub mod test_networks;
