//! Batch play between one [`Heuristic`] seat and a table of [`FirstPlayable`] seats.
//!
//! Every game gets its own deck seed and per-seat RNGs, all derived from the base seed, so a
//! run is reproducible and games never share a random stream.

use std::collections::BTreeMap;

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};

use crate::constants::{
    MAX_PLAYERS, MIN_PLAYERS, TABLE_RESERVE_PER_SEAT, TOTAL_CARDS_IN_DECK,
};
use crate::error::{Result, UnoError};
use crate::player::Player;
use crate::strategy::{FirstPlayable, Heuristic};
use crate::turn::GameState;
use crate::uno::Uno;

pub const DEFAULT_SEED: u64 = 0x5EED_0F_0D05;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub games: usize,
    /// Seats filled by first-playable players next to the single heuristic player.
    pub random_players: usize,
    pub hand_size: usize,
    pub seed: u64,
    /// Games still running after this many turns are abandoned without a winner.
    pub max_turns: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 1000,
            random_players: 3,
            hand_size: 7,
            seed: DEFAULT_SEED,
            max_turns: 5000,
        }
    }
}

impl SimulationConfig {
    pub fn seats(&self) -> usize {
        self.random_players + 1
    }

    pub fn validate(&self) -> Result<()> {
        if self.seats() < MIN_PLAYERS {
            return Err(UnoError::NotEnoughPlayers);
        }
        if self.seats() > MAX_PLAYERS {
            return Err(UnoError::TooManyPlayers);
        }

        // Every hand and the starting discard come out of a fresh deck, and the draw pile left
        // over has to keep a reserve per seat or long games run the deck dry.
        let needed = self.seats() * (self.hand_size + TABLE_RESERVE_PER_SEAT) + 1;
        let available = TOTAL_CARDS_IN_DECK as usize;
        if self.hand_size == 0 || needed > available {
            return Err(UnoError::InsufficientCards {
                requested: needed,
                available,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    /// Strategy label of each seat, in seat order.
    pub seats: Vec<&'static str>,
    pub winner: Option<usize>,
    pub turns: usize,
}

impl GameOutcome {
    pub fn winner_label(&self) -> Option<&'static str> {
        self.winner.map(|seat| self.seats[seat])
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub games: usize,
    pub aborted: usize,
    pub total_turns: usize,
    pub wins: BTreeMap<&'static str, usize>,
    pub seats: BTreeMap<&'static str, usize>,
}

impl Tally {
    pub fn record(&mut self, outcome: &GameOutcome) {
        self.games += 1;
        self.total_turns += outcome.turns;
        for label in &outcome.seats {
            *self.seats.entry(*label).or_default() += 1;
        }
        match outcome.winner_label() {
            Some(label) => *self.wins.entry(label).or_default() += 1,
            None => self.aborted += 1,
        }
    }

    pub fn wins_for(&self, label: &str) -> usize {
        self.wins.get(label).copied().unwrap_or_default()
    }

    /// Share of the seats held by `label` that ended up winning.
    pub fn win_rate(&self, label: &str) -> f64 {
        match self.seats.get(label) {
            Some(&seats) if seats > 0 => self.wins_for(label) as f64 / seats as f64,
            _ => 0.0,
        }
    }

    pub fn average_turns(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_turns as f64 / self.games as f64
        }
    }
}

pub(crate) fn mix_seed(base: u64, a: u64, b: u64) -> u64 {
    let mut z =
        base ^ (a.wrapping_mul(0x9E37_79B97F4A7C15)) ^ (b.wrapping_mul(0xBF58_476D1CE4E5B9));
    z ^= z >> 12;
    z ^= z << 25;
    z ^= z >> 27;
    z
}

/// Plays one game with the heuristic player in `good_seat`.
pub fn run_game(config: &SimulationConfig, game_seed: u64, good_seat: usize) -> Result<GameOutcome> {
    let players = (0..config.seats())
        .map(|seat| {
            let rng = StdRng::seed_from_u64(mix_seed(game_seed, seat as u64, 0x5EA7));
            let name = format!("Player {}", seat + 1);
            if seat == good_seat {
                Player::new(seat as u64, name, Heuristic::new(rng))
            } else {
                Player::new(seat as u64, name, FirstPlayable::new(rng))
            }
        })
        .collect::<Vec<_>>();
    let seats = players.iter().map(Player::strategy_label).collect();

    let mut uno = Uno::new_with_seed(players, game_seed)?;
    uno.deal_initial_hands(config.hand_size)?;

    while uno.state() == GameState::InProgress && uno.turns_played() < config.max_turns {
        uno.advance_turn()?;
    }

    let outcome = GameOutcome {
        seats,
        winner: uno.winner_index(),
        turns: uno.turns_played(),
    };
    debug!(winner = ?outcome.winner_label(), turns = outcome.turns, "game finished");
    Ok(outcome)
}

pub fn simulate(config: &SimulationConfig) -> Result<Tally> {
    config.validate()?;

    let mut tally = Tally::default();
    for game in 0..config.games {
        let game_seed = mix_seed(config.seed, game as u64, 0x5EED_15);
        let good_seat = game % config.seats();
        let outcome = run_game(config, game_seed, good_seat)?;
        tally.record(&outcome);

        if (game + 1) % 100 == 0 {
            info!(
                games = game + 1,
                good_wins = tally.wins_for("good"),
                "simulation progress"
            );
        }
    }

    Ok(tally)
}
