use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{Level, debug, warn};
use tracing_subscriber::FmtSubscriber;

use candyrun::input::generate::{GenerateConfig, write_generated};
use candyrun::input::load_neighborhood;
use candyrun::search::config::{Algorithm, SearchConfig};
use candyrun::search::parallel::ParallelConfig;
use candyrun::search::{ParallelSearch, SearchAlgorithm, SearchResult, SerialSearch};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "candyrun")]
#[command(about = "candyrun - best run of houses without overfilling the candy bag")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Solve options used when no subcommand is given
    #[command(flatten)]
    solve: SolveArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Args)]
struct SolveArgs {
    /// Input file: home count, capacity, then one candy amount per line
    #[arg(default_value = "input.txt")]
    file: PathBuf,
    /// Search algorithm to use
    #[arg(long, value_enum, default_value = "parallel")]
    algorithm: CliAlgorithm,
    /// Number of worker threads for the parallel search
    #[arg(long, short = 'j')]
    cores: Option<usize>,
    /// Run both algorithms and fail if they disagree
    #[arg(long)]
    compare: bool,
    /// Print search statistics after the answer
    #[arg(long)]
    stats: bool,
}

/// CLI algorithm selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliAlgorithm {
    /// Single-threaded scan
    Serial,
    /// Thread team with a shared work cursor
    Parallel,
}

impl From<CliAlgorithm> for Algorithm {
    fn from(cli: CliAlgorithm) -> Self {
        match cli {
            CliAlgorithm::Serial => Algorithm::Serial,
            CliAlgorithm::Parallel => Algorithm::Parallel,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Find the best run of houses in an input file
    Solve(SolveArgs),
    /// Write a random input file
    Generate {
        /// Where to write the generated file
        output: PathBuf,
        /// Number of houses
        #[arg(long, default_value = "10000")]
        homes: usize,
        /// Candy capacity of the bag
        #[arg(long, default_value = "1000")]
        max: u32,
        /// Largest candy amount at a single house
        #[arg(long, default_value = "1000")]
        max_piece: u32,
        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Options for the solve command
struct SolveOptions {
    algorithm: Algorithm,
    cores: Option<usize>,
    compare: bool,
    stats: bool,
    verbose: bool,
}

// --- Solve ---

fn run_search(
    neighborhood: &candyrun::Neighborhood,
    algorithm: Algorithm,
    options: &SolveOptions,
) -> SearchResult {
    let config = SearchConfig::default()
        .with_algorithm(algorithm)
        .with_verbose(options.verbose);

    let mut search: Box<dyn SearchAlgorithm> = match algorithm {
        Algorithm::Serial => Box::new(SerialSearch::new()),
        Algorithm::Parallel => Box::new(ParallelSearch::new(
            ParallelConfig::default().with_workers_option(options.cores),
        )),
    };

    search.search(neighborhood, &config)
}

fn solve(path: &Path, options: &SolveOptions) -> Result<bool, Box<dyn std::error::Error>> {
    let neighborhood = load_neighborhood(path)?;
    debug!(
        homes = neighborhood.homes(),
        capacity = neighborhood.capacity,
        algorithm = %options.algorithm,
        "Searching"
    );

    let result = run_search(&neighborhood, options.algorithm, options);
    println!("{}", result);

    if options.stats {
        print!("\n{}", result.statistics.format_summary());
    }

    if !options.compare {
        return Ok(true);
    }

    let other = match options.algorithm {
        Algorithm::Serial => Algorithm::Parallel,
        Algorithm::Parallel => Algorithm::Serial,
    };
    let reference = run_search(&neighborhood, other, options);

    if reference.best == result.best {
        println!("{} and {} searches agree.", options.algorithm, other);
        Ok(true)
    } else {
        warn!(
            ours = %result.best,
            theirs = %reference.best,
            "Search results disagree"
        );
        eprintln!(
            "Mismatch: {} search found {} but {} search found {}",
            options.algorithm, result.best, other, reference.best
        );
        Ok(false)
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Warning: logging was already initialised");
    }
}

// --- Main Function ---
fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    // Bare `candyrun [FILE]` behaves like `candyrun solve [FILE]`
    let command = args.command.unwrap_or(Commands::Solve(args.solve));

    match command {
        Commands::Solve(solve_args) => {
            let options = SolveOptions {
                algorithm: solve_args.algorithm.into(),
                cores: solve_args.cores,
                compare: solve_args.compare,
                stats: solve_args.stats,
                verbose: args.verbose,
            };

            match solve(&solve_args.file, &options) {
                Ok(true) => {}
                Ok(false) => std::process::exit(1),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Generate {
            output,
            homes,
            max,
            max_piece,
            seed,
        } => {
            let config = GenerateConfig::default()
                .with_homes(homes)
                .with_capacity(max)
                .with_max_piece(max_piece)
                .with_seed_option(seed);

            match write_generated(&output, &config) {
                Ok(_) => println!("Wrote {} homes to {}", homes, output.display()),
                Err(e) => {
                    eprintln!("Error generating input: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
