use std::fmt::Debug;

use thiserror::Error;

use crate::card::Card;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnoError {
    #[error("Not enough players")]
    NotEnoughPlayers,
    #[error("Too many players")]
    TooManyPlayers,
    #[error("Tried to draw from an empty deck")]
    EmptyDeck,
    #[error("Tried to draw {requested} cards but only {available} are left")]
    InsufficientCards { requested: usize, available: usize },
    #[error("`{0}` is not a colour, expected one of R, Y, B or G")]
    InvalidColourChoice(String),
    #[error("{card} cannot be played on {top}")]
    IllegalPlay { card: Card, top: Card },
    #[error("There is no card at hand index {0}")]
    InvalidCardIndex(usize),
    #[error("Hands have not been dealt yet")]
    NotDealt,
    #[error("Hands have already been dealt")]
    AlreadyDealt,
    #[error("The game is already over")]
    GameOver,
    #[error("Input was closed")]
    InputClosed,
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
