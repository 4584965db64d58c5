//! Automated ways of picking a card and declaring a colour.

use rand::{seq::SliceRandom, Rng};
use strum::EnumCount;

use crate::card::{Card, CardColor};
use crate::error::Result;
use crate::rules::can_play;

/// Decision-making half of a [`Player`](crate::player::Player).
///
/// Implementations only look at the hand; removing the card and applying its effect is the
/// engine's job. `select_card` returns the hand index of a playable card, or `None` to draw.
pub trait Strategy {
    /// Short name used when tallying results per strategy.
    fn label(&self) -> &'static str;

    fn select_card(
        &mut self,
        hand: &[Card],
        top: &Card,
        chosen_color: Option<CardColor>,
    ) -> Result<Option<usize>>;

    /// Called right after this player put down a wild card, with that card already gone from
    /// `hand`.
    fn choose_color(&mut self, hand: &[Card]) -> Result<CardColor>;
}

pub(crate) fn random_color<R: Rng + ?Sized>(rng: &mut R) -> CardColor {
    *CardColor::ALL
        .choose(rng)
        .expect("There are always four colours to pick from.")
}

/// Plays the first playable card in hand order and picks colours at random.
#[derive(Debug, Clone)]
pub struct FirstPlayable<R> {
    rng: R,
}

impl<R: Rng> FirstPlayable<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Strategy for FirstPlayable<R> {
    fn label(&self) -> &'static str {
        "random"
    }

    fn select_card(
        &mut self,
        hand: &[Card],
        top: &Card,
        chosen_color: Option<CardColor>,
    ) -> Result<Option<usize>> {
        Ok(hand
            .iter()
            .position(|card| can_play(card, top, chosen_color)))
    }

    fn choose_color(&mut self, _hand: &[Card]) -> Result<CardColor> {
        Ok(random_color(&mut self.rng))
    }
}

/// Prefers getting rid of whichever colour it holds the most of.
#[derive(Debug, Clone)]
pub struct Heuristic<R> {
    rng: R,
}

impl<R: Rng> Heuristic<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

/// Most common colour among `cards`. Ties go to the colour seen first; wild cards are ignored.
pub fn most_frequent_color<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Option<CardColor> {
    // (colour, count) in order of first appearance
    let mut counts: Vec<(CardColor, usize)> = Vec::with_capacity(CardColor::COUNT);
    for color in cards.into_iter().filter_map(|card| card.color()) {
        match counts.iter_mut().find(|(seen, _)| *seen == color) {
            Some((_, count)) => *count += 1,
            None => counts.push((color, 1)),
        }
    }

    counts
        .into_iter()
        .fold(None, |best: Option<(CardColor, usize)>, (color, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((color, count)),
        })
        .map(|(color, _)| color)
}

impl<R: Rng> Strategy for Heuristic<R> {
    fn label(&self) -> &'static str {
        "good"
    }

    fn select_card(
        &mut self,
        hand: &[Card],
        top: &Card,
        chosen_color: Option<CardColor>,
    ) -> Result<Option<usize>> {
        let playable = hand
            .iter()
            .enumerate()
            .filter(|(_, card)| can_play(card, top, chosen_color))
            .collect::<Vec<_>>();

        let Some(&(first, _)) = playable.first() else {
            return Ok(None);
        };

        let index = match most_frequent_color(playable.iter().map(|(_, card)| *card)) {
            Some(color) => playable
                .iter()
                .find(|(_, card)| card.color() == Some(color))
                .map_or(first, |(index, _)| *index),
            None => first,
        };

        Ok(Some(index))
    }

    fn choose_color(&mut self, hand: &[Card]) -> Result<CardColor> {
        Ok(most_frequent_color(hand).unwrap_or_else(|| random_color(&mut self.rng)))
    }
}
