use super::card::Card;
use super::suit::Suit;
use crate::error::InvalidInput;

/// Hand is an unordered set of Cards packed into a single u64. only the 52 LSBs are used, one per distinct card, so union, membership, and complement are single bitwise ops, and a Hand of any size stays one word on the stack with no heap allocation.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn add(lhs: Self, rhs: Self) -> Self {
        assert!(u64::from(lhs) & u64::from(rhs) == 0);
        Self(lhs.0 | rhs.0)
    }

    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn of(&self, suit: &Suit) -> Hand {
        let ranks = u64::from(*self) & u64::from(*suit);
        Self::from(ranks)
    }
    pub fn remove(&mut self, card: Card) {
        let card = u8::from(card);
        let mask = !(1 << card);
        self.0 &= mask;
    }

    pub(crate) const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.size() == 0 {
            None
        } else {
            let card = self.0.trailing_zeros() as u8;
            let card = Card::from(card);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
/// we SUM/OR the cards to get the bitstring
/// [2c, Ts, Jc, Js]
/// xxxxxxxxxxxx 0000000010011000000000000000000000000000000000000001
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

/// a single Card is a Hand of size one
impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        cards
            .into_iter()
            .map(Self::from)
            .fold(Self::empty(), |a, b| Self(a.0 | b.0))
    }
}

/// one-way conversion to u16 Rank masks
/// squashes each 4-bit suit lane onto one bit per rank held, zero allocation
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        let mut x = u64::from(h);
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111111111111;
        (0..13).fold(0u16, |y, i| y | ((x >> (i * 3)) as u16 & (1 << i)))
    }
}

/// checked construction that rejects repeated cards
impl TryFrom<&[Card]> for Hand {
    type Error = InvalidInput;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        cards.iter().try_fold(Self::empty(), |hand, card| {
            if hand.contains(card) {
                Err(InvalidInput::DuplicateCard(*card))
            } else {
                Ok(Self(hand.0 | u64::from(*card)))
            }
        })
    }
}

/// str isomorphism
/// this follows from the checked &[Card] construction
impl TryFrom<&str> for Hand {
    type Error = InvalidInput;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?.as_slice())
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl crate::Arbitrary for Hand {
    fn random() -> Self {
        Self(rand::random::<u64>() & Self::mask())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn bijective_u64() {
        let hand = Hand::random();
        assert_eq!(hand, Hand::from(u64::from(hand)));
    }

    #[test]
    fn card_iteration() {
        let mut iter = Hand::try_from("Jc Ts 2c Js").unwrap().into_iter();
        assert_eq!(iter.next(), Some(Card::try_from("2c").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Ts").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Jc").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Js").unwrap()));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn ranks_in_suit() {
        let hand = Hand::try_from("2c 3d 4h 5s 6c 7d 8h 9s Tc Jd Qh Ks Ac").unwrap();
        assert_eq!(u16::from(hand.of(&Suit::Club)), 0b_1000100010001); // 2c, 6c, Tc, Ac
        assert_eq!(u16::from(hand.of(&Suit::Diamond)), 0b_0001000100010); // 3d, 7d, Jd
        assert_eq!(u16::from(hand.of(&Suit::Heart)), 0b_0010001000100); // 4h, 8h, Qh
        assert_eq!(u16::from(hand.of(&Suit::Spade)), 0b_0100010001000); // 5s, 9s, Ks
    }

    #[test]
    fn rejects_repeated_cards() {
        assert_eq!(
            Hand::try_from("As Kh As"),
            Err(InvalidInput::DuplicateCard(Card::try_from("As").unwrap()))
        );
    }
}
