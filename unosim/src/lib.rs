//! Uno card model, turn-resolution engine and automated players.

pub mod card;
pub mod constants;
pub mod deck;
pub mod error;
pub mod interactive;
pub mod player;
pub mod rules;
pub mod simulation;
pub mod strategy;
pub mod turn;
pub mod uno;

pub use crate::card::{Card, CardColor, ColoredCard};
pub use crate::deck::Deck;
pub use crate::error::{Result, UnoError};
pub use crate::interactive::{Interaction, Interactive};
pub use crate::player::Player;
pub use crate::rules::can_play;
pub use crate::simulation::{simulate, GameOutcome, SimulationConfig, Tally};
pub use crate::strategy::{FirstPlayable, Heuristic, Strategy};
pub use crate::turn::{Direction, GameState, PlayTurnResult, TurnActionResult};
pub use crate::uno::Uno;
