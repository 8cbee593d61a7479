use std::process::exit;

use clap::{ArgAction, Parser};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use permutation_uniformity::experiment::{Experiment, run_all};

/// Compare permuting by sorting with and without unique keys against a uniform shuffle.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// Seed for the random number generator, for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// Log more details to stderr, repeat for even more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let opts: Opts = Opts::parse();
    init_logging(opts.verbose);

    let mut rng = match opts.seed {
        Some(seed) => {
            info!(seed, "seeding generator");
            StdRng::seed_from_u64(seed)
        },
        None => StdRng::from_os_rng(),
    };

    let experiment = Experiment::standard();
    match run_all(&experiment, &mut rng) {
        Ok(reports) => {
            for (_, report) in &reports {
                print!("{}", report);
            }
        },
        Err(err) => {
            error!(error = %err, "experiment aborted");
            exit(1);
        },
    }
}
