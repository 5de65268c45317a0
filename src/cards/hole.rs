use super::card::Card;
use super::deck::Deck;
use super::hand::Hand;
use crate::error::InvalidInput;

/// A player's two private cards.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Hand> for Hole {
    fn from(hand: Hand) -> Self {
        assert!(hand.size() == 2);
        Self(hand)
    }
}
impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from(cards: (Card, Card)) -> Self {
        let a = u64::from(cards.0);
        let b = u64::from(cards.1);
        let hand = Hand::from(a | b);
        assert!(a != b);
        Self(hand)
    }
}

/// checked construction for untrusted input
impl TryFrom<&[Card]> for Hole {
    type Error = InvalidInput;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match cards.len() {
            2 => Ok(Self(Hand::try_from(cards)?)),
            n => Err(InvalidInput::CardCount {
                expected: "2",
                got: n,
            }),
        }
    }
}
impl TryFrom<&str> for Hole {
    type Error = InvalidInput;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?.as_slice())
    }
}

impl crate::Arbitrary for Hole {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        Deck::new().hole(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_cards() {
        let hole = Hole::try_from("AsKs").unwrap();
        assert_eq!(Hand::from(hole), Hand::try_from("As Ks").unwrap());
    }

    #[test]
    fn rejects_wrong_count() {
        assert_eq!(
            Hole::try_from("AsKsQs"),
            Err(InvalidInput::CardCount {
                expected: "2",
                got: 3
            })
        );
    }

    #[test]
    fn rejects_repeated_card() {
        assert_eq!(
            Hole::try_from("AsAs"),
            Err(InvalidInput::DuplicateCard(Card::try_from("As").unwrap()))
        );
    }
}
