//! Terminal demo: runs one or all strategies on a random terrain grid and
//! prints the explored area and route.
//!
//! Run: cargo run --bin gridpath-demo -- [STRATEGY] [--seed N] [--diagonal] [--resistance]

use clap::Parser;
use gridpath_demos::{Scenario, render};
use gridpath_search::{Connectivity, CostModel, Pathfinder, SearchConfig, Strategy};

/// Search a random terrain grid and draw what each strategy explored.
#[derive(Debug, Parser)]
#[command(name = "gridpath-demo", version, about, long_about = None)]
struct Cli {
    /// Strategy to run: bfs, dfs, dijkstra or astar. Runs all four when omitted.
    #[arg(value_name = "STRATEGY")]
    strategy: Option<Strategy>,

    /// Seed for terrain and endpoint generation.
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Connect diagonal neighbours as well as cardinal ones.
    #[arg(short, long)]
    diagonal: bool,

    /// Charge step length divided by passability instead of the multiplier model.
    #[arg(short, long)]
    resistance: bool,

    /// Enable debug-level logging, including per-search timing.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();

    let connectivity = if cli.diagonal {
        Connectivity::Eight
    } else {
        Connectivity::Four
    };
    let cost_model = if cli.resistance {
        CostModel::Resistance
    } else {
        CostModel::Multiplier
    };
    let strategies = match cli.strategy {
        Some(s) => vec![s],
        None => Strategy::ALL.to_vec(),
    };

    let scenario = match Scenario::random(connectivity, cli.seed) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    println!(
        "{}x{} grid, {:?}-connected, seed {}",
        scenario.grid.width(),
        scenario.grid.height(),
        scenario.grid.connectivity(),
        cli.seed
    );
    println!();

    for strategy in strategies {
        let pf = Pathfinder::new(SearchConfig::new(strategy).with_cost_model(cost_model));
        let outcome = match pf.run(&scenario.grid, scenario.start, scenario.end) {
            Ok(o) => o,
            Err(e) => {
                eprintln!("{strategy}: {e}");
                continue;
            }
        };
        println!("== {strategy}");
        print!("{}", render(&scenario, &outcome));
        match outcome.path() {
            Some(path) if strategy.is_weighted() => println!(
                "{} edges, cost {:.2}, {} expanded, {} discovered",
                path.edge_count(),
                path.cost(&scenario.grid, cost_model),
                outcome.expansions(),
                outcome.discovered()
            ),
            Some(path) => println!(
                "{} edges, {} expanded, {} discovered",
                path.edge_count(),
                outcome.expansions(),
                outcome.discovered()
            ),
            None => println!("no route ({} discovered)", outcome.discovered()),
        }
        println!();
    }
}
