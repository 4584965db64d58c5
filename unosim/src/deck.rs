use rand::{seq::SliceRandom, Rng};
use strum::IntoEnumIterator;
use tracing::trace;

use crate::{
    card::{Card, CardColor, ColoredCard},
    constants::*,
    error::{Result, UnoError},
};

/// The draw pile. Index 0 is the next card to be drawn.
#[derive(Debug, Clone)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    /// Builds the full deck and shuffles it with `rng`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new_unshuffled();
        deck.shuffle(rng);
        deck
    }

    pub(crate) fn new_unshuffled() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        // Colored Cards
        for color in CardColor::iter() {
            // Skip Cards
            for _ in 0..SKIP_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Skip));
            }

            // Reverse Cards
            for _ in 0..REVERSE_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Reverse));
            }

            // Draw Cards
            for _ in 0..DRAW_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Draw));
            }

            // Number Cards
            for number in NUMBER_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Number(*number)));
            }
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            cards.push(Card::Wild);
        }

        for _ in 0..WILD_DRAW_CARDS_IN_DECK {
            cards.push(Card::WildDraw);
        }

        Self(cards)
    }

    /// A deck drawn in exactly the given order, for scripted games.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn take_one(&mut self) -> Result<Card> {
        if self.0.is_empty() {
            return Err(UnoError::EmptyDeck);
        }
        Ok(self.0.remove(0))
    }

    /// Removes `count` cards in draw order. Leaves the deck untouched when it is too small.
    pub fn take_n(&mut self, count: usize) -> Result<Vec<Card>> {
        if count > self.0.len() {
            return Err(UnoError::InsufficientCards {
                requested: count,
                available: self.0.len(),
            });
        }
        Ok(self.0.drain(0..count).collect::<Vec<_>>())
    }

    /// Shuffles `cards` and puts them underneath whatever is left in the deck.
    pub fn restock<R: Rng + ?Sized>(&mut self, mut cards: Vec<Card>, rng: &mut R) {
        trace!(count = cards.len(), "restocking deck");
        cards.shuffle(rng);
        self.0.extend(cards);
    }

    pub(crate) fn draw_colored_card(&mut self) -> Option<Card> {
        self.0
            .iter()
            .position(|x| matches!(x, Card::Colored(_, _)))
            .map(|pos| self.0.remove(pos))
    }

    pub fn display(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}
