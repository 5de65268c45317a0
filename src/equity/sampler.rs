use super::trial::Deal;
use crate::cards::deck::Deck;
use crate::cards::flop::Flop;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use rand::Rng;

/// Deals the unseen cards for trials of one simulation.
///
/// The remaining deck is fixed up front: all 47 cards outside the hero's
/// hole and the flop. Every deal draws four of them without replacement,
/// two for the opponent and one each for turn and river, so no dealt card
/// can collide with a known one.
#[derive(Debug, Clone, Copy)]
pub struct Sampler(Hand);

impl From<(Hole, Flop)> for Sampler {
    fn from((hole, flop): (Hole, Flop)) -> Self {
        Self(Hand::add(Hand::from(hole), Hand::from(flop)).complement())
    }
}

impl Sampler {
    pub fn deal<R: Rng>(&self, rng: &mut R) -> Deal {
        let mut deck = Deck::from(self.0);
        let opponent = deck.hole(rng);
        let turn = deck.draw(rng);
        let river = deck.draw(rng);
        Deal::from((opponent, turn, river))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn sampler() -> Sampler {
        let hero = Hole::try_from("AsKs").unwrap();
        let flop = Flop::try_from("QsJs2d").unwrap();
        Sampler::from((hero, flop))
    }

    #[test]
    fn deals_never_touch_known_cards() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let used = Hand::try_from("As Ks Qs Js 2d").unwrap();
        let sampler = sampler();
        for _ in 0..1_000 {
            let dealt = Hand::from(sampler.deal(rng));
            assert_eq!(dealt.size(), 4);
            assert_eq!(u64::from(dealt) & u64::from(used), 0);
        }
    }

    #[test]
    fn deals_replay_under_a_fixed_seed() {
        let sampler = sampler();
        let ref mut one = SmallRng::seed_from_u64(21);
        let ref mut two = SmallRng::seed_from_u64(21);
        for _ in 0..100 {
            assert_eq!(sampler.deal(one), sampler.deal(two));
        }
    }

    /// each of the 47 unknown cards should land in one of the four dealt
    /// slots with equal frequency, and the five known cards never.
    #[test]
    fn deals_are_uniform_over_the_remaining_deck() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let trials = 23_500usize;
        let sampler = sampler();
        let mut counts = [0usize; 52];
        for _ in 0..trials {
            for card in Hand::from(sampler.deal(rng)) {
                counts[u8::from(card) as usize] += 1;
            }
        }
        let used = Hand::try_from("As Ks Qs Js 2d").unwrap();
        let expected = (trials * 4) as f64 / 47.0;
        let chi2 = counts
            .iter()
            .enumerate()
            .filter(|(i, _)| !used.contains(&Card::from(*i as u8)))
            .map(|(_, &obs)| (obs as f64 - expected).powi(2) / expected)
            .sum::<f64>();
        for card in used {
            assert_eq!(counts[u8::from(card) as usize], 0);
        }
        assert!(chi2 < 100.0, "chi-square {} over 46 dof", chi2);
    }
}
