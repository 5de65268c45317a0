use super::rank::Rank;

/// A poker hand's category together with the ranks that define it.
///
/// Declaration order matches showdown order, so the derived Ord compares
/// category first and defining ranks second. Kicker cards are carried
/// separately and only break ties between equal Rankings.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard(Rank),        // 4 kickers
    OnePair(Rank),         // 3 kickers
    TwoPair(Rank, Rank),   // 1 kickers
    ThreeOAK(Rank),        // 2 kickers
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 4 kickers, drawn from the flush suit
    FullHouse(Rank, Rank), // 0 kickers
    FourOAK(Rank),         // 1 kickers
    StraightFlush(Rank),   // 0 kickers
}

impl Ranking {
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) | Ranking::Flush(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOAK(_) => 2,
            Ranking::FourOAK(_) | Ranking::TwoPair(_, _) => 1,
            _ => 0,
        }
    }

    /// which ranks do NOT participate in the made hand.
    /// Flush kickers come from one suit lane and never go through this mask.
    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::FourOAK(hi)
            | Ranking::ThreeOAK(hi) => !(u16::from(hi)),
            Ranking::FullHouse(..)
            | Ranking::StraightFlush(..)
            | Ranking::Straight(..)
            | Ranking::Flush(..) => unreachable!(),
        }
    }

    /// an Ace-high straight flush. a label, not a tenth category.
    pub fn is_royal(&self) -> bool {
        matches!(self, Ranking::StraightFlush(Rank::Ace))
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::FullHouse(r1, r2) => write!(f, "FullHouse     {}{}", r1, r2),
            Ranking::TwoPair(r1, r2) => write!(f, "TwoPair       {}{}", r1, r2),
            Ranking::HighCard(r) => write!(f, "HighCard      {} ", r),
            Ranking::OnePair(r) => write!(f, "OnePair       {} ", r),
            Ranking::ThreeOAK(r) => write!(f, "ThreeOfAKind  {} ", r),
            Ranking::Straight(r) => write!(f, "Straight      {} ", r),
            Ranking::FourOAK(r) => write!(f, "FourOfAKind   {} ", r),
            Ranking::Flush(r) => write!(f, "Flush         {} ", r),
            Ranking::StraightFlush(r) => write!(f, "StraightFlush {} ", r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_rank_in_showdown_order() {
        let ladder = [
            Ranking::HighCard(Rank::Ace),
            Ranking::OnePair(Rank::Two),
            Ranking::TwoPair(Rank::Three, Rank::Two),
            Ranking::ThreeOAK(Rank::Two),
            Ranking::Straight(Rank::Six),
            Ranking::Flush(Rank::Seven),
            Ranking::FullHouse(Rank::Two, Rank::Three),
            Ranking::FourOAK(Rank::Two),
            Ranking::StraightFlush(Rank::Five),
        ];
        for pair in ladder.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn flush_stays_below_full_house() {
        assert!(Ranking::Flush(Rank::Ace) < Ranking::FullHouse(Rank::Two, Rank::Three));
    }

    #[test]
    fn wheel_is_the_lowest_straight() {
        assert!(Ranking::Straight(Rank::Five) < Ranking::Straight(Rank::Six));
    }

    #[test]
    fn two_pair_compares_high_pair_first() {
        assert!(Ranking::TwoPair(Rank::King, Rank::Two) > Ranking::TwoPair(Rank::Queen, Rank::Jack));
    }

    #[test]
    fn only_the_ace_high_straight_flush_is_royal() {
        assert!(Ranking::StraightFlush(Rank::Ace).is_royal());
        assert!(!Ranking::StraightFlush(Rank::King).is_royal());
        assert!(!Ranking::Flush(Rank::Ace).is_royal());
    }
}
