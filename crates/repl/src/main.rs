//! Interactive shell around the shortest-path engine: build a city
//! network, compute routes, and replay the recorded search steps.
use pathfinder_core::prelude::*;
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};

/// Print network info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "Network has {} cities and {} roads",
        context.network.num_cities(),
        context.network.num_roads()
    )))
}

fn list_cities(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let mut out = String::new();
    for city in context.network.cities() {
        out.push_str(&format!(
            "{:>4}  {} ({}, {})\n",
            city.id, city.name, city.x, city.y
        ));
    }
    Ok(Some(out))
}

fn add_city(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let name = args.get_one::<String>("name").unwrap().clone();
    let x = *args.get_one::<f64>("x").unwrap();
    let y = *args.get_one::<f64>("y").unwrap();

    let id = context.network.next_city_id();
    context.network.add_city(City::new(id, name.clone(), x, y));

    Ok(Some(format!("Added {} with id {}", name, id)))
}

fn add_road(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let from = *args.get_one::<CityId>("from").unwrap();
    let to = *args.get_one::<CityId>("to").unwrap();
    let distance = *args.get_one::<Weight>("distance").unwrap();

    if context.network.city(from).is_none() || context.network.city(to).is_none() {
        return Ok(Some("Both cities must exist, see `cities`".to_string()));
    }

    context.network.add_road(Road::new(from, to, distance));

    Ok(Some(format!(
        "Added road {} <-> {} ({})",
        context.network.city_name(from),
        context.network.city_name(to),
        distance
    )))
}

fn run_route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = *args.get_one::<CityId>("src").unwrap();
    let dst = *args.get_one::<CityId>("dst").unwrap();

    let mut dijkstra = Dijkstra::new(&context.network);
    let outcome = dijkstra.search(src, dst);

    if let Some(route) = &outcome.route {
        let mut out = String::new();
        for &city in &route.cities {
            out.push_str(&format!("{}\n", context.network.city_name(city)));
        }
        out.push_str(&format!("Total distance: {}\n", route.distance));
        out.push_str(&format!("Took: {:?}", dijkstra.stats.duration));
        Ok(Some(out))
    } else {
        Ok(Some("No route found".to_string()))
    }
}

fn run_trace(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = *args.get_one::<CityId>("src").unwrap();
    let dst = *args.get_one::<CityId>("dst").unwrap();

    let mut dijkstra = Dijkstra::new(&context.network);
    let outcome = dijkstra.search(src, dst);

    let mut out = String::new();
    for (i, step) in outcome.steps.iter().enumerate() {
        match step.current {
            Some(current) => out.push_str(&format!(
                "Step {} of {}: settled {}\n",
                i + 1,
                outcome.steps.len(),
                context.network.city_name(current)
            )),
            None => out.push_str(&format!(
                "Step {} of {}: finished\n",
                i + 1,
                outcome.steps.len()
            )),
        }
        for city in context.network.cities() {
            let prev = match step.previous[&city.id] {
                Some(prev) => context.network.city_name(prev),
                None => "-".to_string(),
            };
            out.push_str(&format!(
                "  {:<15} {:>8}  via {}\n",
                city.name,
                Step::format_distance(step.distances[&city.id]),
                prev
            ));
        }
    }

    match &outcome.route {
        Some(route) => out.push_str(&format!("Route distance: {}", route.distance)),
        None => out.push_str("No route found"),
    }

    Ok(Some(out))
}

fn measure(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::Rng;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);

    let ids: Vec<CityId> = context.network.cities().map(|city| city.id).collect();
    if ids.is_empty() {
        return Ok(Some("Network has no cities".to_string()));
    }

    let mut rng = rand::thread_rng();
    let mut out = String::new();
    for _ in 0..n {
        let src = ids[rng.gen_range(0..ids.len())];
        let dst = ids[rng.gen_range(0..ids.len())];

        let mut dijkstra = Dijkstra::new(&context.network);
        let outcome = dijkstra.search(src, dst);
        if outcome.route.is_none() {
            continue;
        }
        out.push_str(&format!(
            "{} -> {}: {:?}\n",
            src, dst, dijkstra.stats.duration
        ));
    }

    Ok(Some(out))
}

#[derive(Default)]
struct Context {
    network: Network,
}

impl Context {
    fn new(network: Network) -> Self {
        Self { network }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let context = Context::new(sample_network());

    let mut repl = Repl::new(context)
        .with_name("Pathfinder")
        .with_version("v0.1.0")
        .with_description("Simple REPL to build city networks and trace shortest-path searches")
        .with_banner("Welcome to Pathfinder")
        .with_command(Command::new("info").about("Print network info"), info)
        .with_command(
            Command::new("cities").about("List all cities"),
            list_cities,
        )
        .with_command(
            Command::new("addcity")
                .arg(Arg::new("name").required(true).help("Name of the city"))
                .arg(
                    Arg::new("x")
                        .value_parser(value_parser!(f64))
                        .required(true)
                        .help("X position on the map"),
                )
                .arg(
                    Arg::new("y")
                        .value_parser(value_parser!(f64))
                        .required(true)
                        .help("Y position on the map"),
                )
                .about("Add a city to the network"),
            add_city,
        )
        .with_command(
            Command::new("addroad")
                .arg(
                    Arg::new("from")
                        .value_parser(value_parser!(usize))
                        .required(true)
                        .help("ID of the first city"),
                )
                .arg(
                    Arg::new("to")
                        .value_parser(value_parser!(usize))
                        .required(true)
                        .help("ID of the second city"),
                )
                .arg(
                    Arg::new("distance")
                        .value_parser(value_parser!(f64))
                        .required(true)
                        .help("Road distance"),
                )
                .about("Add a bidirectional road between two cities"),
            add_road,
        )
        .with_command(
            Command::new("route")
                .arg(
                    Arg::new("src")
                        .value_parser(value_parser!(usize))
                        .required(true)
                        .help("ID of source city"),
                )
                .arg(
                    Arg::new("dst")
                        .value_parser(value_parser!(usize))
                        .required(true)
                        .help("ID of destination city"),
                )
                .about("Calculate the shortest route between two cities"),
            run_route,
        )
        .with_command(
            Command::new("trace")
                .arg(
                    Arg::new("src")
                        .value_parser(value_parser!(usize))
                        .required(true)
                        .help("ID of source city"),
                )
                .arg(
                    Arg::new("dst")
                        .value_parser(value_parser!(usize))
                        .required(true)
                        .help("ID of destination city"),
                )
                .about("Calculate a route and print every search step"),
            run_trace,
        )
        .with_command(
            Command::new("measure")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random routes to calculate"),
                )
                .about("Measure `n` random route calculations"),
            measure,
        );

    repl.run()
}
