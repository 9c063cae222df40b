use clap::{Parser, Subcommand, ValueEnum};
use quarto_search::player::{HillClimber, MinMax, Player, RandomPlayer};
use quarto_search::search::Limits;
use quarto_search::set_cover;
use quarto_search::tournament::Series;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

/// Quarto players and set-cover search experiments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Increases logging verbosity: `-v` logs game results, `-vv` also logs
    /// every decision. `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Same as `-vv`.
    #[arg(short, long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plays a series of games between two players.
    Tournament {
        /// Player choosing the first piece.
        #[arg(long, value_enum, default_value_t = Kind::HillClimber)]
        first: Kind,
        /// Player placing the first piece.
        #[arg(long, value_enum, default_value_t = Kind::Random)]
        second: Kind,
        /// Number of games per seating.
        #[arg(long, default_value_t = 100)]
        games: u32,
        /// Seed of the randomized players.
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Also play the same number of games with the seats swapped.
        #[arg(long)]
        swap: bool,
        /// Deepest ply explored by the minimax player.
        #[arg(long, default_value_t = Limits::default().depth)]
        depth: u8,
        /// Number of siblings explored per ply by the minimax player.
        #[arg(long, default_value_t = Limits::default().breadth)]
        breadth: u8,
    },
    /// Searches for cheap covers of generated problems.
    SetCover {
        /// Universe sizes to generate problems for.
        #[arg(long, value_delimiter = ',', default_values_t = [5, 10, 20, 100, 500, 1000])]
        sizes: Vec<usize>,
        /// Seed of the problem generator.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Prints build information.
    Version,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Random,
    HillClimber,
    Minmax,
}

impl Kind {
    fn build(self, seed: u64, limits: Limits) -> Box<dyn Player> {
        let rng = StdRng::seed_from_u64(seed);
        match self {
            Self::Random => Box::new(RandomPlayer::new(rng)),
            Self::HillClimber => Box::new(HillClimber::new(rng)),
            Self::Minmax => Box::new(MinMax::new(limits)),
        }
    }
}

fn init_logging(args: &Args) {
    let level = match (args.verbose, args.debug) {
        (_, true) | (2.., _) => "debug",
        (1, _) => "info",
        _ => "warn",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args);
    match args.command {
        Command::Tournament {
            first,
            second,
            games,
            seed,
            swap,
            depth,
            breadth,
        } => {
            let limits = Limits { depth, breadth };
            let mut first = first.build(seed, limits);
            let mut second = second.build(seed.wrapping_add(1), limits);
            let series = Series::run(games, [first.as_mut(), second.as_mut()])?;
            println!("{series}");
            if swap {
                let series = Series::run(games, [second.as_mut(), first.as_mut()])?;
                println!("{series}");
            }
        },
        Command::SetCover { sizes, seed } => {
            for n in sizes {
                let sets = set_cover::problem(n, seed);
                match set_cover::search(n, &sets, set_cover::greedy_priority) {
                    Some(solution) => println!(
                        "n = {n}: cost = {}, expanded = {}, subsets = {}",
                        solution.cost,
                        solution.expanded,
                        solution.chosen.len()
                    ),
                    None => println!("n = {n}: no cover exists"),
                }
            }
        },
        Command::Version => quarto_search::print_binary_info(),
    }
    Ok(())
}
