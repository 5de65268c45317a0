use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::ranking::Ranking;

/// A hand's full showdown strength.
///
/// This will always be constructed from a Hand, which is an unordered set
/// of Cards. Field order gives the derived Ord the right priority: the
/// Ranking decides first, and only equal Rankings fall through to kickers.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
    pub fn kickers(&self) -> Kickers {
        self.kicks
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let value = evaluator.find_ranking();
        let kicks = evaluator.find_kickers(value);
        Self::from((value, kicks))
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{}", self.value, self.kicks)
    }
}
