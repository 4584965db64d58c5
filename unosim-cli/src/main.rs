mod commands;
mod terminal;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use commands::{play::PlayArgs, simulate::SimulateArgs};

#[derive(Parser, Debug)]
#[command(name = "unosim", about = "Play Uno against bots or pit a heuristic bot against random ones.")]
struct Cli {
    /// Log every turn (same as RUST_LOG=unosim=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run many bot-only games and report win rates
    Simulate(SimulateArgs),
    /// Play a game on the terminal against bots
    Play(PlayArgs),
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("unosim=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Simulate(args) => commands::simulate::run(args),
        Command::Play(args) => commands::play::run(args),
    }
}
