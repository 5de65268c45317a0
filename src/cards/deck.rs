use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use crate::error::InvalidInput;
use rand::Rng;

/// The cards still available to be dealt.
///
/// Wraps a [`Hand`] of remaining cards. Draws consume entropy from a
/// caller-supplied generator so that simulations stay reproducible under
/// a fixed seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck.
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    /// Creates the deck left over after the given cards are removed.
    ///
    /// Rejects repeated cards so a simulation can never deal a card that
    /// is already face up.
    pub fn remaining(used: &[Card]) -> Result<Self, InvalidInput> {
        Ok(Self(Hand::try_from(used)?.complement()))
    }
    /// Tests whether a card is still in the deck.
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// Draws and removes a uniformly random card from the deck.
    ///
    /// Selects the i-th lowest set bit by popping i bits off the bottom
    /// of the mask, so every remaining card is equally likely.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Card {
        debug_assert!(self.0.size() > 0);
        let n = self.0.size();
        let i = rng.random_range(0..n);
        let mut ones = 0usize;
        let mut deck = u64::from(self.0);
        while ones < i {
            deck = deck & (deck - 1);
            ones = ones + 1;
        }
        let card = Card::from(deck.trailing_zeros() as u8);
        self.0.remove(card);
        card
    }
    /// Draws two cards as a player's hole cards.
    pub fn hole<R: Rng>(&mut self, rng: &mut R) -> Hole {
        let a = self.draw(rng);
        let b = self.draw(rng);
        Hole::from((a, b))
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn fresh_deck_counts_fifty_two() {
        assert_eq!(Deck::new().size(), 52);
    }

    #[test]
    fn remaining_excludes_used_cards() {
        let used = Card::parse("AsKsQsJs2d").unwrap();
        let deck = Deck::remaining(&used).unwrap();
        assert_eq!(deck.size(), 47);
        for card in used {
            assert!(!deck.contains(&card));
        }
    }

    #[test]
    fn remaining_rejects_repeats() {
        let used = Card::parse("AsKsAs").unwrap();
        assert_eq!(
            Deck::remaining(&used),
            Err(InvalidInput::DuplicateCard(Card::try_from("As").unwrap()))
        );
    }

    #[test]
    fn draws_are_distinct_and_exhaustive() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut deck = Deck::new();
        let mut seen = Hand::empty();
        for n in (1..=52usize).rev() {
            assert_eq!(deck.size(), n);
            let card = deck.draw(rng);
            assert!(!seen.contains(&card));
            seen = Hand::add(seen, Hand::from(card));
        }
        assert_eq!(seen.size(), 52);
        assert_eq!(deck.size(), 0);
    }

    /// every index must select a different bit, including the highest.
    /// counts across many single draws should be flat over all 52 cards.
    #[test]
    fn draws_reach_every_card_uniformly() {
        let ref mut rng = SmallRng::seed_from_u64(13);
        let trials = 52_000usize;
        let mut counts = [0usize; 52];
        for _ in 0..trials {
            let card = Deck::new().draw(rng);
            counts[u8::from(card) as usize] += 1;
        }
        let expected = (trials / 52) as f64;
        let chi2 = counts
            .iter()
            .map(|&obs| (obs as f64 - expected).powi(2) / expected)
            .sum::<f64>();
        assert!(counts.iter().all(|&n| n > 0));
        assert!(chi2 < 110.0, "chi-square {} over 51 dof", chi2);
    }
}
