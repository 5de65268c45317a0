//! Equity Binary
//!
//! Boundary-layer glue around the simulation core: parses a hero hole
//! pair and a flop from the command line, runs one Monte Carlo estimate,
//! and prints the rates as a table or as JSON.

use clap::Parser;
use holdem_equity::DEFAULT_ITERATIONS;
use holdem_equity::Flop;
use holdem_equity::Hole;
use holdem_equity::Simulation;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The hero's two hole cards, e.g. "AsKs"
    #[arg(required = true)]
    hero: String,
    /// The three flop cards, e.g. "QsJs2d"
    #[arg(required = true)]
    flop: String,
    /// How many runouts to sample
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,
    /// Master seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,
    /// Emit the result as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let hero = Hole::try_from(args.hero.as_str())?;
    let flop = Flop::try_from(args.flop.as_str())?;
    let simulation = Simulation::new(hero, flop)?.iterations(args.iterations);
    let simulation = match args.seed {
        Some(seed) => simulation.seed(seed),
        None => simulation,
    };
    let equity = simulation.run()?;
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&equity)?),
        false => print!("{}", equity),
    }
    Ok(())
}

/// Initialize terminal logging on stderr, keeping stdout clean for results.
fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
