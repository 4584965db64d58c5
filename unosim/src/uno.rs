use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, trace};

use crate::card::{Card, CardColor, ColoredCard};
use crate::constants::{MAX_PLAYERS, MIN_PLAYERS, RESHUFFLE_THRESHOLD};
use crate::deck::Deck;
use crate::error::{Result, UnoError};
use crate::player::Player;
use crate::turn::{Direction, GameState, PlayTurnResult, TurnActionResult};

/// A single match: the draw pile, the discard pile and the seats around the table.
///
/// Nothing happens until [`Uno::deal_initial_hands`] is called; after that every call to
/// [`Uno::advance_turn`] resolves exactly one turn until somebody empties their hand.
#[derive(Debug)]
pub struct Uno {
    deck: Deck,
    pile: Vec<Card>,
    players: Vec<Player>,
    current_turn_player_index: usize,
    direction: Direction,
    chosen_color: Option<CardColor>,
    winner: Option<usize>,
    turns_played: usize,
    rng: StdRng,
}

impl Uno {
    pub fn new(players: Vec<Player>) -> Result<Self> {
        Self::new_with_rng(players, StdRng::from_entropy())
    }

    pub fn new_with_seed(players: Vec<Player>, seed: u64) -> Result<Self> {
        Self::new_with_rng(players, StdRng::seed_from_u64(seed))
    }

    /// Uses `deck` exactly as given. `seed` only drives later reshuffles.
    pub fn new_with_deck(players: Vec<Player>, deck: Deck, seed: u64) -> Result<Self> {
        Self::build(players, deck, StdRng::seed_from_u64(seed))
    }

    fn new_with_rng(players: Vec<Player>, mut rng: StdRng) -> Result<Self> {
        let deck = Deck::new(&mut rng);
        Self::build(players, deck, rng)
    }

    fn build(players: Vec<Player>, deck: Deck, rng: StdRng) -> Result<Self> {
        if players.len() < MIN_PLAYERS {
            return Err(UnoError::NotEnoughPlayers);
        }
        if players.len() > MAX_PLAYERS {
            return Err(UnoError::TooManyPlayers);
        }

        Ok(Uno {
            deck,
            pile: Vec::new(),
            players,
            current_turn_player_index: 0,
            direction: Direction::default(),
            chosen_color: None,
            winner: None,
            turns_played: 0,
            rng,
        })
    }

    /// Deals `hand_size` cards to every seat in order, then turns up the first non-wild card
    /// of the deck as the starting discard.
    pub fn deal_initial_hands(&mut self, hand_size: usize) -> Result<()> {
        if !self.pile.is_empty() {
            return Err(UnoError::AlreadyDealt);
        }

        for player in &mut self.players {
            let cards = self.deck.take_n(hand_size)?;
            player.receive_all(cards);
        }

        let first = self.deck.draw_colored_card().ok_or(UnoError::EmptyDeck)?;
        debug!(players = self.players.len(), hand_size, top = %first, "dealt initial hands");
        self.pile.push(first);

        Ok(())
    }

    pub fn advance_turn(&mut self) -> Result<PlayTurnResult> {
        if self.winner.is_some() {
            return Err(UnoError::GameOver);
        }
        let top = *self.top_card().ok_or(UnoError::NotDealt)?;

        if self.deck.size() < RESHUFFLE_THRESHOLD {
            self.reshuffle_pile_into_deck();
        }

        self.turns_played += 1;
        let player_index = self.current_turn_player_index;
        let player = &mut self.players[player_index];

        let Some(card) = player.play_card(&top, self.chosen_color)? else {
            let drawn = self.deck.take_one()?;
            trace!(player = %player, card = %drawn, "nothing to play, drew a card");
            player.receive(drawn);
            self.move_turn_n_players_ahead(1);
            return Ok(PlayTurnResult {
                player_index,
                played: None,
                turn_action_result: TurnActionResult::SelfDraw,
                won: false,
            });
        };

        let turn_action_result = match card {
            Card::Colored(_, kind) => {
                self.chosen_color = None;
                match kind {
                    ColoredCard::Number(_) => TurnActionResult::Neutral,
                    ColoredCard::Skip => TurnActionResult::Skip,
                    ColoredCard::Reverse => TurnActionResult::Reverse,
                    ColoredCard::Draw => TurnActionResult::Draw,
                }
            }
            Card::Wild | Card::WildDraw => {
                let color = self.players[player_index].choose_color()?;
                self.chosen_color = Some(color);
                if card == Card::Wild {
                    TurnActionResult::Wild(color)
                } else {
                    TurnActionResult::WildDraw(color)
                }
            }
        };
        self.pile.push(card);
        debug!(player = %self.players[player_index], card = %card, "played");

        match turn_action_result {
            TurnActionResult::Reverse => self.perform_reverse(),
            TurnActionResult::Skip => self.move_turn_n_players_ahead(2),
            _ => self.move_turn_n_players_ahead(1),
        }

        let won = !self.players[player_index].has_cards();
        if won {
            debug!(player = %self.players[player_index], turns = self.turns_played, "won");
            self.winner = Some(player_index);
        } else {
            let penalty = card.draw_penalty();
            if penalty > 0 {
                self.draw_cards_to_player(self.current_turn_player_index, penalty)?;
                self.move_turn_n_players_ahead(1);
            }
        }

        Ok(PlayTurnResult {
            player_index,
            played: Some(card),
            turn_action_result,
            won,
        })
    }

    pub fn state(&self) -> GameState {
        match self.winner {
            Some(winner) => GameState::Finished { winner },
            None => GameState::InProgress,
        }
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|index| &self.players[index])
    }

    pub fn winner_index(&self) -> Option<usize> {
        self.winner
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.pile.last()
    }

    /// Display form of the top card, empty before the hands are dealt.
    pub fn top_card_display(&self) -> String {
        self.top_card().map(ToString::to_string).unwrap_or_default()
    }

    pub fn chosen_color(&self) -> Option<CardColor> {
        self.chosen_color
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn turns_played(&self) -> usize {
        self.turns_played
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn pile(&self) -> &[Card] {
        &self.pile
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get_player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn get_current_turn_player_index(&self) -> usize {
        self.current_turn_player_index
    }

    /// Everything but the top card goes back under the deck in random order.
    fn reshuffle_pile_into_deck(&mut self) {
        let Some(top) = self.pile.pop() else {
            return;
        };
        let discards = std::mem::replace(&mut self.pile, vec![top]);
        let returned = discards.len();
        self.deck.restock(discards, &mut self.rng);
        debug!(returned, deck = self.deck.size(), "reshuffled discard pile into deck");
    }

    fn draw_cards_to_player(&mut self, player_index: usize, count: usize) -> Result<()> {
        let cards = self.deck.take_n(count)?;
        let player = &mut self.players[player_index];
        trace!(player = %player, count, "forced to draw");
        player.receive_all(cards);
        Ok(())
    }

    fn perform_reverse(&mut self) {
        self.direction = self.direction.reversed();
        self.move_turn_n_players_ahead(1);
    }

    fn move_turn_n_players_ahead(&mut self, n: usize) {
        let players = self.players.len() as isize;
        let step = self.direction.step() * n as isize;
        self.current_turn_player_index =
            (self.current_turn_player_index as isize + step).rem_euclid(players) as usize;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::constants::TOTAL_CARDS_IN_DECK;
    use crate::strategy::{FirstPlayable, Strategy};
    use CardColor::*;

    fn create_players(count: usize) -> Vec<Player> {
        (0..count)
            .map(|i| {
                Player::new(
                    i as u64,
                    format!("Player {}", i + 1),
                    FirstPlayable::new(StdRng::seed_from_u64(i as u64)),
                )
            })
            .collect()
    }

    fn total_cards(uno: &Uno) -> usize {
        uno.deck.size()
            + uno.pile.len()
            + uno.players.iter().map(Player::cards_count).sum::<usize>()
    }

    fn counts(cards: &[Card]) -> HashMap<Card, usize> {
        let mut counts = HashMap::new();
        for card in cards {
            *counts.entry(*card).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn return_ok_if_enough_players() {
        let result = Uno::new(create_players(2));
        assert!(matches!(result, Result::Ok(_)));
    }

    #[test]
    fn return_err_if_not_enough_players() {
        let error = Uno::new(create_players(1)).unwrap_err();
        assert!(matches!(error, UnoError::NotEnoughPlayers));
    }

    #[test]
    fn return_err_if_too_many_players() {
        let error = Uno::new(create_players(11)).unwrap_err();
        assert!(matches!(error, UnoError::TooManyPlayers));
    }

    #[test]
    fn all_players_start_with_7_cards() {
        let mut uno = Uno::new_with_seed(create_players(4), 1).unwrap();
        uno.deal_initial_hands(7).unwrap();
        for player in uno.players() {
            assert_eq!(player.cards_count(), 7);
        }
        assert_eq!(uno.pile.len(), 1);
        assert!(!uno.top_card().unwrap().is_wild());
        assert_eq!(uno.deck.size(), TOTAL_CARDS_IN_DECK as usize - 4 * 7 - 1);
    }

    #[test]
    fn dealing_twice_fails() {
        let mut uno = Uno::new_with_seed(create_players(2), 1).unwrap();
        uno.deal_initial_hands(7).unwrap();
        assert_eq!(uno.deal_initial_hands(7).unwrap_err(), UnoError::AlreadyDealt);
    }

    #[test]
    fn turn_before_deal_fails() {
        let mut uno = Uno::new_with_seed(create_players(2), 1).unwrap();
        assert_eq!(uno.advance_turn().unwrap_err(), UnoError::NotDealt);
        assert_eq!(uno.top_card_display(), "");
    }

    #[test]
    fn oversized_deal_fails() {
        let mut uno = Uno::new_with_seed(create_players(10), 1).unwrap();
        assert!(matches!(
            uno.deal_initial_hands(11).unwrap_err(),
            UnoError::InsufficientCards { .. }
        ));
    }

    #[test]
    fn next_player_turn_works_when_first_player() {
        let mut uno = Uno::new_with_seed(create_players(4), 1).unwrap();
        uno.current_turn_player_index = 0;

        uno.move_turn_n_players_ahead(1);

        assert_eq!(uno.get_current_turn_player_index(), 1);
    }

    #[test]
    fn next_player_turn_works_when_last_player() {
        let mut uno = Uno::new_with_seed(create_players(4), 1).unwrap();
        uno.current_turn_player_index = 3;

        uno.move_turn_n_players_ahead(1);

        assert_eq!(uno.get_current_turn_player_index(), 0);
    }

    #[test]
    fn skip_player_turn_wraps() {
        let mut uno = Uno::new_with_seed(create_players(4), 1).unwrap();
        uno.current_turn_player_index = 3;

        uno.move_turn_n_players_ahead(2);

        assert_eq!(uno.current_turn_player_index, 1);
    }

    #[test]
    fn perform_reverse_works() {
        let mut uno = Uno::new_with_seed(create_players(4), 1).unwrap();
        uno.current_turn_player_index = 0;

        uno.perform_reverse();

        assert_eq!(uno.current_turn_player_index, 3);
        assert_eq!(uno.direction(), Direction::CounterClockwise);

        uno.move_turn_n_players_ahead(2);
        assert_eq!(uno.current_turn_player_index, 1);
    }

    #[test]
    fn reshuffle_keeps_top_card_and_returns_every_discard_once() {
        let mut uno = Uno::new_with_seed(create_players(2), 9).unwrap();
        let discards = vec![
            Card::number(Red, 1),
            Card::Wild,
            Card::skip(Blue),
            Card::number(Yellow, 4),
            Card::draw(Green),
        ];
        let top = Card::number(Green, 8);
        uno.pile = discards.clone();
        uno.pile.push(top);
        uno.deck = Deck::from_cards(vec![Card::number(Blue, 5), Card::number(Blue, 6)]);
        for player in &mut uno.players {
            player.hand = vec![Card::number(Yellow, 0)];
        }

        // Nothing in hand matches (G, 8), so player 1 just draws (B, 5).
        let result = uno.advance_turn().unwrap();
        assert_eq!(result.turn_action_result, TurnActionResult::SelfDraw);
        assert_eq!(uno.pile(), &[top]);

        let mut expected = discards;
        expected.push(Card::number(Blue, 6));
        assert_eq!(uno.deck.size(), expected.len());
        assert_eq!(uno.deck.cards()[0], Card::number(Blue, 6));
        assert_eq!(counts(uno.deck.cards()), counts(&expected));
    }

    #[test]
    fn no_reshuffle_while_deck_has_enough_cards() {
        let mut uno = Uno::new_with_seed(create_players(2), 9).unwrap();
        uno.pile = vec![Card::number(Red, 1), Card::number(Green, 8)];
        uno.deck = Deck::from_cards(vec![Card::number(Blue, 5); 4]);
        for player in &mut uno.players {
            player.hand = vec![Card::number(Yellow, 0)];
        }

        uno.advance_turn().unwrap();

        assert_eq!(uno.pile.len(), 2);
        assert_eq!(uno.deck.size(), 3);
    }

    #[test]
    fn small_deals_never_reshuffle_in_the_first_round() {
        for count in MIN_PLAYERS..=MAX_PLAYERS {
            let mut uno = Uno::new_with_seed(create_players(count), count as u64).unwrap();
            uno.deal_initial_hands(2).unwrap();
            for _ in 0..count {
                if uno.winner().is_some() {
                    break;
                }
                let pile_before = uno.pile.len();
                assert!(uno.deck.size() >= RESHUFFLE_THRESHOLD);
                uno.advance_turn().unwrap();
                assert!(uno.pile.len() >= pile_before);
            }
        }
    }

    #[test]
    fn whole_games_keep_turn_state_and_cards_consistent() {
        for seed in 0..25 {
            let count = 2 + (seed as usize % 5);
            let mut uno = Uno::new_with_seed(create_players(count), seed).unwrap();
            uno.deal_initial_hands(7).unwrap();

            let mut turns = 0;
            while uno.state() == GameState::InProgress && turns < 5_000 {
                uno.advance_turn().unwrap();
                turns += 1;
                assert!(uno.current_turn_player_index < count);
                assert!(matches!(uno.direction().step(), 1 | -1));
                assert_eq!(total_cards(&uno), TOTAL_CARDS_IN_DECK as usize);
                if uno.top_card().is_some_and(|top| !top.is_wild()) {
                    assert_eq!(uno.chosen_color(), None);
                }
            }
            assert_eq!(uno.turns_played(), turns);
        }
    }

    /// Plays the first card that fits, then cannot answer the colour question.
    struct Mute;

    impl Strategy for Mute {
        fn label(&self) -> &'static str {
            "mute"
        }

        fn select_card(
            &mut self,
            hand: &[Card],
            top: &Card,
            chosen_color: Option<CardColor>,
        ) -> Result<Option<usize>> {
            Ok(hand
                .iter()
                .position(|card| crate::rules::can_play(card, top, chosen_color)))
        }

        fn choose_color(&mut self, _hand: &[Card]) -> Result<CardColor> {
            Err(UnoError::InputClosed)
        }
    }

    #[test]
    fn failed_color_choice_leaves_pile_and_color_alone() {
        let mut players = create_players(2);
        players[0] = Player::new(0, "Mute", Mute);
        let mut uno = Uno::new_with_seed(players, 4).unwrap();
        uno.pile = vec![Card::number(Red, 1)];
        uno.players[0].hand = vec![Card::Wild, Card::number(Blue, 2)];

        assert_eq!(uno.advance_turn().unwrap_err(), UnoError::InputClosed);

        assert_eq!(uno.pile(), &[Card::number(Red, 1)]);
        assert_eq!(uno.chosen_color(), None);
        assert_eq!(uno.get_current_turn_player_index(), 0);
    }

    #[test]
    fn advancing_a_finished_game_fails() {
        let mut uno = Uno::new_with_seed(create_players(2), 4).unwrap();
        uno.pile = vec![Card::number(Red, 1)];
        uno.players[0].hand = vec![Card::number(Red, 2)];

        let result = uno.advance_turn().unwrap();

        assert!(result.won);
        assert_eq!(uno.state(), GameState::Finished { winner: 0 });
        assert_eq!(uno.winner().unwrap().name(), "Player 1");
        assert_eq!(uno.advance_turn().unwrap_err(), UnoError::GameOver);
    }
}
