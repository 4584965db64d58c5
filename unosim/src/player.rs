use std::fmt;

use crate::card::{Card, CardColor};
use crate::error::{Result, UnoError};
use crate::rules::can_play;
use crate::strategy::Strategy;

pub struct Player {
    pub id: u64,
    name: String,
    pub hand: Vec<Card>,
    strategy: Box<dyn Strategy>,
}

impl Player {
    pub fn new(id: u64, name: impl Into<String>, strategy: impl Strategy + 'static) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vec::new(),
            strategy: Box::new(strategy),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strategy_label(&self) -> &'static str {
        self.strategy.label()
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }

    pub fn receive(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn receive_all(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    /// Lets the strategy pick a card and takes it out of the hand. `Ok(None)` means the
    /// player has nothing to play.
    pub fn play_card(&mut self, top: &Card, chosen_color: Option<CardColor>) -> Result<Option<Card>> {
        let Some(index) = self.strategy.select_card(&self.hand, top, chosen_color)? else {
            return Ok(None);
        };

        let card = *self
            .hand
            .get(index)
            .ok_or(UnoError::InvalidCardIndex(index))?;
        if !can_play(&card, top, chosen_color) {
            return Err(UnoError::IllegalPlay { card, top: *top });
        }

        Ok(Some(self.hand.remove(index)))
    }

    pub fn choose_color(&mut self) -> Result<CardColor> {
        self.strategy.choose_color(&self.hand)
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("hand", &self.hand)
            .field("strategy", &self.strategy.label())
            .finish()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
