use crate::card::{Card, CardColor, ColoredCard};

/// Whether `candidate` may be placed on `top`.
///
/// `chosen_color` is only consulted when `top` is a wild card. Two action cards of the same
/// kind match regardless of colour, so a green Skip goes on a red Skip.
pub fn can_play(candidate: &Card, top: &Card, chosen_color: Option<CardColor>) -> bool {
    match (candidate, top) {
        (Card::Wild | Card::WildDraw, _) => true,
        (Card::Colored(color, _), Card::Wild | Card::WildDraw) => Some(*color) == chosen_color,
        (Card::Colored(color, _), Card::Colored(top_color, _)) if color == top_color => true,
        (Card::Colored(_, kind), Card::Colored(_, top_kind)) => match (kind, top_kind) {
            (ColoredCard::Number(number), ColoredCard::Number(top_number)) => {
                number == top_number
            }
            (ColoredCard::Skip, ColoredCard::Skip)
            | (ColoredCard::Reverse, ColoredCard::Reverse)
            | (ColoredCard::Draw, ColoredCard::Draw) => true,
            _ => false,
        },
    }
}
