use crate::card::{Card, CardColor};

/// Order in which seats take turns. A Reverse flips it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn step(self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Finished { winner: usize },
}

/// What the card played this turn did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnActionResult {
    Neutral,
    Skip,
    Reverse,
    /// Nothing was playable, so the player drew a card.
    SelfDraw,
    /// Plus2: the next player drew two cards and lost their turn.
    Draw,
    Wild(CardColor),
    /// Wild+4: the next player drew four cards and lost their turn.
    WildDraw(CardColor),
}

/// Outcome of a single [`Uno::advance_turn`](crate::uno::Uno::advance_turn).
///
/// When `won` is set the draw penalty of a Plus2 or Wild+4 was not applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayTurnResult {
    pub player_index: usize,
    pub played: Option<Card>,
    pub turn_action_result: TurnActionResult,
    pub won: bool,
}
