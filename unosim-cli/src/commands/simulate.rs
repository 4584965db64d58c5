use clap::Args;
use color_eyre::{eyre::WrapErr, Result};
use tracing::info;
use unosim::simulation::{simulate, SimulationConfig, DEFAULT_SEED};

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Number of games to simulate
    #[arg(short = 'g', long, default_value_t = 1000)]
    games: usize,

    /// Random players seated next to the heuristic player
    #[arg(short = 'r', long, default_value_t = 3)]
    random_players: usize,

    /// Cards dealt to each player
    #[arg(long, default_value_t = 7)]
    hand_size: usize,

    /// Base RNG seed (deck and player RNGs are derived from it per game)
    #[arg(short = 's', long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Games exceeding this many turns are abandoned without a winner
    #[arg(long, default_value_t = 5000)]
    max_turns: usize,
}

impl From<SimulateArgs> for SimulationConfig {
    fn from(args: SimulateArgs) -> Self {
        SimulationConfig {
            games: args.games,
            random_players: args.random_players,
            hand_size: args.hand_size,
            seed: args.seed,
            max_turns: args.max_turns,
        }
    }
}

pub fn run(args: SimulateArgs) -> Result<()> {
    let config = SimulationConfig::from(args);
    info!(?config, "starting simulation");

    let tally = simulate(&config).wrap_err("simulation failed")?;

    println!(
        "{} games, {} players, {} cards each (avg {:.1} turns):",
        tally.games,
        config.seats(),
        config.hand_size,
        tally.average_turns()
    );
    for (label, seats) in &tally.seats {
        let wins = tally.wins_for(label);
        println!(
            "  {label:<8} {wins:>6}/{seats:<6} ({:.2}%)",
            tally.win_rate(label) * 100.0
        );
    }
    if tally.aborted > 0 {
        println!(
            "  {} game(s) hit the {}-turn cap without a winner",
            tally.aborted, config.max_turns
        );
    }

    Ok(())
}
