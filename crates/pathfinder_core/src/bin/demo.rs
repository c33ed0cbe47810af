//! Run a traced shortest-path search over the built-in sample network.
use anyhow::Context;
use clap::Parser;
use pathfinder_core::prelude::*;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// ID of the start city
    source: CityId,

    /// ID of the destination city
    target: CityId,

    /// Print every recorded step of the search
    #[arg(long)]
    steps: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let network = sample_network();

    // The engine degrades silently on unknown ids; validating user input is
    // the caller's job.
    network
        .city(cli.source)
        .with_context(|| format!("start city {} is not part of the network", cli.source))?;
    network
        .city(cli.target)
        .with_context(|| format!("destination city {} is not part of the network", cli.target))?;

    let mut dijkstra = Dijkstra::new(&network);
    let outcome = dijkstra.search(cli.source, cli.target);

    match &outcome.route {
        Some(route) => {
            let stops: Vec<String> = route
                .cities
                .iter()
                .map(|&city| network.city_name(city))
                .collect();
            println!("{}", stops.join(" -> "));
            println!("Total distance: {} miles", route.distance);
        }
        None => println!(
            "No route from {} to {}",
            network.city_name(cli.source),
            network.city_name(cli.target)
        ),
    }
    println!("{}", dijkstra.stats);

    if cli.steps {
        for (i, step) in outcome.steps.iter().enumerate() {
            println!();
            match step.current {
                Some(current) => println!(
                    "Step {}: settled {}",
                    i + 1,
                    network.city_name(current)
                ),
                None => println!("Step {}: finished", i + 1),
            }

            let visited: Vec<String> = step
                .visited
                .iter()
                .map(|&city| network.city_name(city))
                .collect();
            println!("  visited: {}", visited.join(", "));

            for city in network.cities() {
                println!(
                    "  {}: {}",
                    city.name,
                    Step::format_distance(step.distances[&city.id])
                );
            }
        }
    }

    Ok(())
}
