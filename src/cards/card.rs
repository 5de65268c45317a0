use super::rank::Rank;
use super::suit::Suit;
use crate::error::InvalidInput;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. This yields a natural ordering where cards are sorted
/// first by rank, then by suit within each rank.
///
/// Cards parse from two-character strings like `"As"` (ace of spades) or
/// `"Tc"` (ten of clubs). Use [`Card::parse`] for a run of multiple cards.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}
impl From<u64> for Card {
    fn from(n: u64) -> Self {
        Self(n.trailing_zeros() as u8)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = InvalidInput;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let chars = s.trim().chars().collect::<Vec<char>>();
        match chars.len() {
            2 => {
                let rank = Rank::try_from(chars[0].to_string().as_str())?;
                let suit = Suit::try_from(chars[1].to_string().as_str())?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(InvalidInput::UnparsableCard(s.to_string())),
        }
    }
}
impl Card {
    /// Parses a string of concatenated card notations into a vector of cards.
    ///
    /// Whitespace is ignored. Each card is two characters: rank then suit.
    /// Returns an error if any card fails to parse.
    pub fn parse(s: &str) -> Result<Vec<Self>, InvalidInput> {
        s.replace(char::is_whitespace, "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::try_from(pair.as_str()))
            .collect::<Result<Vec<Self>, _>>()
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        Self(rand::random_range(0..52u8))
    }
}
