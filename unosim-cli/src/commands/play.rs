use clap::Args;
use color_eyre::{eyre::WrapErr, Result};
use rand::{rngs::StdRng, SeedableRng};
use unosim::{
    FirstPlayable, GameState, Heuristic, Interactive, Player, TurnActionResult, Uno,
};

use crate::terminal::Terminal;

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Number of bots at the table
    #[arg(short, long, default_value_t = 3)]
    bots: usize,

    /// Cards dealt to each player
    #[arg(long, default_value_t = 7)]
    hand_size: usize,

    /// Seat heuristic bots instead of random ones
    #[arg(long)]
    good: bool,

    /// Fix the shuffle
    #[arg(short, long)]
    seed: Option<u64>,
}

pub fn run(args: PlayArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut players = vec![Player::new(0, "You", Interactive::new(Terminal::new()))];
    for bot in 1..=args.bots {
        let rng = StdRng::seed_from_u64(seed.wrapping_add(bot as u64));
        let name = format!("Bot {bot}");
        players.push(if args.good {
            Player::new(bot as u64, name, Heuristic::new(rng))
        } else {
            Player::new(bot as u64, name, FirstPlayable::new(rng))
        });
    }

    let mut uno = Uno::new_with_seed(players, seed).wrap_err("could not seat players")?;
    uno.deal_initial_hands(args.hand_size)
        .wrap_err("could not deal hands")?;

    while uno.state() == GameState::InProgress {
        let result = uno.advance_turn().wrap_err("turn failed")?;
        let player = &uno.players()[result.player_index];

        match (result.played, result.turn_action_result) {
            (None, _) => println!("{player} drew a card"),
            (Some(card), TurnActionResult::Wild(color) | TurnActionResult::WildDraw(color)) => {
                println!("{player} played {card} and chose {color}")
            }
            (Some(card), _) => println!("{player} played {card}"),
        }
        if player.cards_count() == 1 {
            println!("{player} has one card left");
        }
    }

    if let Some(winner) = uno.winner() {
        println!("{winner} won after {} turns", uno.turns_played());
    }

    Ok(())
}
