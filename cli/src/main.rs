use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::Verbosity;
use tilemerge_core::{Coord, DEFAULT_SIZE, DEFAULT_WIN_VALUE, GameConfig, Tile};

mod play;

#[derive(Parser, Debug)]
#[command(
    name = "tilemerge",
    version,
    about = "Headless driver for the sliding-tile grid engine"
)]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play games with a fixed move policy and print one JSON summary per game.
    Autoplay {
        #[command(flatten)]
        game: GameArgs,

        /// Number of games to play; game `i` uses seed `seed + i`.
        #[arg(long, default_value_t = 1)]
        games: u32,

        /// Stop a game after this many accepted moves.
        #[arg(long, default_value_t = 100_000)]
        max_moves: u32,

        #[arg(long, value_enum, default_value_t = Policy::Random)]
        policy: Policy,
    },
    /// Apply a comma-separated list of moves and print the board after each turn.
    Replay {
        #[command(flatten)]
        game: GameArgs,

        /// Moves such as `left,up,ArrowRight,down`.
        #[arg(long, value_delimiter = ',')]
        moves: Vec<String>,
    },
}

#[derive(Args, Debug, Clone, Copy)]
struct GameArgs {
    /// Side length of the square board.
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: Coord,

    /// Tile value that counts as a win.
    #[arg(long, default_value_t = DEFAULT_WIN_VALUE)]
    win_value: Tile,

    /// Spawn seed, defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
}

impl GameArgs {
    fn config(&self) -> GameConfig {
        GameConfig::new(self.size, self.win_value)
    }

    fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(play::clock_seed)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Uniformly random legal move.
    Random,
    /// Up, down, left, right in turn, skipping moves that change nothing.
    Cycle,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    match cli.command {
        Command::Autoplay {
            game,
            games,
            max_moves,
            policy,
        } => {
            let seed = game.seed();
            log::info!("Autoplaying {games} game(s) from seed {seed} with {policy:?} policy");
            for index in 0..games {
                let summary = play::autoplay(
                    game.config(),
                    seed.wrapping_add(u64::from(index)),
                    policy,
                    max_moves,
                );
                println!("{}", serde_json::to_string(&summary)?);
            }
        }
        Command::Replay { game, moves } => {
            play::replay(game.config(), game.seed(), &moves)?;
        }
    }

    Ok(())
}
