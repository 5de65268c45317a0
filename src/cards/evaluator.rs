use super::card::Card;
use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::strength::Strength;
use super::suit::Suit;
use crate::error::InvalidInput;

const WHEEL: u16 = 0b_1000000001111;
const LOWEST_STRAIGHT_RANK: Rank = Rank::Five;

/// Evaluates a showdown hand of five to seven distinct cards.
///
/// The strongest five-card combination decides the result: category first,
/// then the ranks defining the category, then kickers high to low.
pub fn evaluate(cards: &[Card]) -> Result<Strength, InvalidInput> {
    match cards.len() {
        5..=7 => Ok(Strength::from(Hand::try_from(cards)?)),
        n => Err(InvalidInput::CardCount {
            expected: "5 to 7",
            got: n,
        }),
    }
}

/// A lazy evaluator for a hand's strength.
///
/// Using a compact representation of the Hand, we search for
/// the highest Ranking using bitwise operations, strongest category first.
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .or_else(|| self.find_1_oak())
            .expect("at least one card in Hand")
    }
    pub fn find_kickers(&self, value: Ranking) -> Kickers {
        let n = value.n_kickers();
        let mut rank = match value {
            Ranking::Flush(hi) => {
                let suit = self
                    .find_suit_of_flush()
                    .expect("Flush ranking implies a flush suit");
                u16::from(self.0.of(&suit)) & !u16::from(hi)
            }
            _ if n == 0 => return Kickers::from(0),
            _ => u16::from(self.0) & value.mask(),
        };
        while rank.count_ones() as usize > n {
            rank &= rank - 1;
        }
        Kickers::from(rank)
    }

    ///

    fn find_1_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(1).map(Ranking::HighCard)
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2).map(Ranking::OnePair) // unreachable
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4).map(Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2).and_then(|hi| {
            self.find_rank_of_n_oak_skip(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
                .or_else(|| Some(Ranking::OnePair(hi))) // this makes OnePair unreachable
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).and_then(|triple| {
            self.find_rank_of_n_oak_skip(2, Some(triple))
                .map(|paired| Ranking::FullHouse(triple, paired))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight(self.0).map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().map(|suit| {
            let bits = u16::from(self.0.of(&suit));
            let rank = Rank::from(bits);
            Ranking::Flush(rank)
        })
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().and_then(|suit| {
            self.find_rank_of_straight_flush(suit)
                .map(Ranking::StraightFlush)
        })
    }

    /// a rank bit survives four shift-ANDs iff it tops a run of five.
    /// the wheel is the one straight the scan cannot see, since the Ace
    /// bit sits at the top of the mask rather than below the Two.
    fn find_rank_of_straight(&self, hand: Hand) -> Option<Rank> {
        let ranks = u16::from(hand);
        let runs = (0..4).fold(ranks, |bits, _| bits & (bits << 1));
        if runs > 0 {
            Some(Rank::from(runs))
        } else if ranks & WHEEL == WHEEL {
            Some(LOWEST_STRAIGHT_RANK)
        } else {
            None
        }
    }
    fn find_rank_of_straight_flush(&self, suit: Suit) -> Option<Rank> {
        let hand = self.0.of(&suit);
        self.find_rank_of_straight(hand)
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|suit| self.0.of(suit).size() >= 5)
    }
    fn find_rank_of_n_oak(&self, n: usize) -> Option<Rank> {
        self.find_rank_of_n_oak_skip(n, None)
    }
    /// walk the rank lanes from Ace down and take the first
    /// holding at least n cards, ignoring the skipped rank
    fn find_rank_of_n_oak_skip(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        (0..13u8)
            .rev()
            .map(Rank::from)
            .filter(|rank| Some(*rank) != skip)
            .find(|rank| {
                let lane = u64::from(*rank) & u64::from(self.0);
                lane.count_ones() as usize >= n
            })
    }
}
