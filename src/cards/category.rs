use super::ranking::Ranking;

/// The nine hand categories, stripped of their defining ranks.
///
/// Dense and payload-free so per-category counts can live in a flat array.
/// An Ace-high straight flush still counts here as a straight flush; royal
/// is a display label, not a tenth slot.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOAK = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOAK = 7,
    StraightFlush = 8,
}

impl Category {
    pub const N: usize = 9;

    pub const fn all() -> [Self; Self::N] {
        [
            Category::HighCard,
            Category::OnePair,
            Category::TwoPair,
            Category::ThreeOAK,
            Category::Straight,
            Category::Flush,
            Category::FullHouse,
            Category::FourOAK,
            Category::StraightFlush,
        ]
    }

    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl From<Ranking> for Category {
    fn from(ranking: Ranking) -> Self {
        match ranking {
            Ranking::HighCard(_) => Category::HighCard,
            Ranking::OnePair(_) => Category::OnePair,
            Ranking::TwoPair(..) => Category::TwoPair,
            Ranking::ThreeOAK(_) => Category::ThreeOAK,
            Ranking::Straight(_) => Category::Straight,
            Ranking::Flush(_) => Category::Flush,
            Ranking::FullHouse(..) => Category::FullHouse,
            Ranking::FourOAK(_) => Category::FourOAK,
            Ranking::StraightFlush(_) => Category::StraightFlush,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Category::HighCard => "High Card",
                Category::OnePair => "One Pair",
                Category::TwoPair => "Two Pair",
                Category::ThreeOAK => "Three of a Kind",
                Category::Straight => "Straight",
                Category::Flush => "Flush",
                Category::FullHouse => "Full House",
                Category::FourOAK => "Four of a Kind",
                Category::StraightFlush => "Straight Flush",
            }
        )
    }
}

/// serializes as its display label, so it can key a frequency map
impl serde::Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
