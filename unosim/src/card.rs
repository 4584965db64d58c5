use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

/// The four suit colours. Displayed by their initial, parsed from either the initial or the
/// full name in any case.
#[derive(
    Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash,
)]
#[strum(ascii_case_insensitive)]
pub enum CardColor {
    #[strum(to_string = "R", serialize = "Red")]
    Red,
    #[strum(to_string = "Y", serialize = "Yellow")]
    Yellow,
    #[strum(to_string = "B", serialize = "Blue")]
    Blue,
    #[strum(to_string = "G", serialize = "Green")]
    Green,
}

impl CardColor {
    pub const ALL: [CardColor; 4] = [
        CardColor::Red,
        CardColor::Yellow,
        CardColor::Blue,
        CardColor::Green,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColoredCard {
    Number(u8),
    Skip,
    Reverse,
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Card {
    Colored(CardColor, ColoredCard),
    Wild,
    WildDraw,
}

impl Card {
    pub fn number(color: CardColor, number: u8) -> Self {
        Card::Colored(color, ColoredCard::Number(number))
    }

    pub fn skip(color: CardColor) -> Self {
        Card::Colored(color, ColoredCard::Skip)
    }

    pub fn reverse(color: CardColor) -> Self {
        Card::Colored(color, ColoredCard::Reverse)
    }

    pub fn draw(color: CardColor) -> Self {
        Card::Colored(color, ColoredCard::Draw)
    }

    /// Colour printed on the card. Wild cards have none; the colour chosen when one is played
    /// lives on the game, not the card.
    pub fn color(&self) -> Option<CardColor> {
        match self {
            Card::Colored(color, _) => Some(*color),
            Card::Wild | Card::WildDraw => None,
        }
    }

    pub fn is_wild(&self) -> bool {
        matches!(self, Card::Wild | Card::WildDraw)
    }

    /// Number of cards the next player is forced to draw after this one is played.
    pub fn draw_penalty(&self) -> usize {
        match self {
            Card::Colored(_, ColoredCard::Draw) => 2,
            Card::WildDraw => 4,
            _ => 0,
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Colored(color, card) => match card {
                ColoredCard::Number(number) => write!(f, "({color}, {number})"),
                ColoredCard::Skip => write!(f, "({color}, S)"),
                ColoredCard::Reverse => write!(f, "({color}, R)"),
                ColoredCard::Draw => write!(f, "({color}, +2)"),
            },
            Card::Wild => write!(f, "Wild"),
            Card::WildDraw => write!(f, "Wild+4"),
        }
    }
}
