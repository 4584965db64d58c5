use std::str::FromStr;

use crate::card::{Card, CardColor};
use crate::error::{Result, UnoError};
use crate::rules::can_play;
use crate::strategy::Strategy;

/// Line-based conversation with whoever is sitting in an interactive seat.
pub trait Interaction {
    fn show(&mut self, line: &str);

    /// Asks a question and returns the answer, or `None` once the input is closed.
    fn ask(&mut self, question: &str) -> Option<String>;
}

/// A seat driven by a person through an [`Interaction`].
///
/// Bad answers are reported back and the question is asked again; only a closed input ends
/// the game with [`UnoError::InputClosed`].
#[derive(Debug)]
pub struct Interactive<I> {
    io: I,
}

impl<I: Interaction> Interactive<I> {
    pub fn new(io: I) -> Self {
        Self { io }
    }

    pub fn into_inner(self) -> I {
        self.io
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        self.io
            .ask(question)
            .map(|answer| answer.trim().to_string())
            .ok_or(UnoError::InputClosed)
    }
}

impl<I: Interaction> Strategy for Interactive<I> {
    fn label(&self) -> &'static str {
        "human"
    }

    fn select_card(
        &mut self,
        hand: &[Card],
        top: &Card,
        chosen_color: Option<CardColor>,
    ) -> Result<Option<usize>> {
        match (top.is_wild(), chosen_color) {
            (true, Some(color)) => self.io.show(&format!("Top card: {top} (colour {color})")),
            _ => self.io.show(&format!("Top card: {top}")),
        }
        for (index, card) in hand.iter().enumerate() {
            self.io.show(&format!("  [{index}] {card}"));
        }

        loop {
            let answer = self.ask("Card to play (empty to draw): ")?;
            if answer.is_empty() {
                return Ok(None);
            }

            let Ok(index) = answer.parse::<usize>() else {
                self.io.show(&format!("`{answer}` is not a card number"));
                continue;
            };

            match hand.get(index) {
                None => self.io.show(&UnoError::InvalidCardIndex(index).to_string()),
                Some(card) if !can_play(card, top, chosen_color) => self.io.show(
                    &UnoError::IllegalPlay {
                        card: *card,
                        top: *top,
                    }
                    .to_string(),
                ),
                Some(_) => return Ok(Some(index)),
            }
        }
    }

    fn choose_color(&mut self, _hand: &[Card]) -> Result<CardColor> {
        loop {
            let answer = self.ask("Colour (R, Y, B, G): ")?;
            match CardColor::from_str(&answer) {
                Ok(color) => return Ok(color),
                Err(_) => self
                    .io
                    .show(&UnoError::InvalidColourChoice(answer).to_string()),
            }
        }
    }
}
