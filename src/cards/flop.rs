use super::card::Card;
use super::deck::Deck;
use super::hand::Hand;
use crate::error::InvalidInput;

/// The first three community cards.
///
/// Equity here is always estimated from the flop: the turn and river are
/// the unknowns a simulation deals at random.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Flop(Hand);

impl std::fmt::Display for Flop {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Hand> for Flop {
    fn from(hand: Hand) -> Self {
        assert!(hand.size() == 3);
        Self(hand)
    }
}
impl From<Flop> for Hand {
    fn from(flop: Flop) -> Self {
        flop.0
    }
}

impl From<(Card, Card, Card)> for Flop {
    fn from(cards: (Card, Card, Card)) -> Self {
        let a = Hand::from(cards.0);
        let b = Hand::from(cards.1);
        let c = Hand::from(cards.2);
        Self(Hand::add(Hand::add(a, b), c))
    }
}

/// checked construction for untrusted input
impl TryFrom<&[Card]> for Flop {
    type Error = InvalidInput;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match cards.len() {
            3 => Ok(Self(Hand::try_from(cards)?)),
            n => Err(InvalidInput::CardCount {
                expected: "3",
                got: n,
            }),
        }
    }
}
impl TryFrom<&str> for Flop {
    type Error = InvalidInput;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?.as_slice())
    }
}

impl crate::Arbitrary for Flop {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        let mut deck = Deck::new();
        Self::from((deck.draw(rng), deck.draw(rng), deck.draw(rng)))
    }
}
