use super::rank::Rank;

/// A hand's kicker cards, as a mask over the 13 ranks.
///
/// Between hands of the same category shape the mask compares correctly as
/// a plain integer: the first differing rank from the top decides, which is
/// exactly the card-by-card descending comparison.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

/// u16 isomorphism
/// suit information is already gone by the time kickers are read off
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n)
    }
}

/// Vec<Rank> isomorphism
///
/// [T, J]
/// xxx 0001100000000
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        Rank::all()
            .into_iter()
            .filter(|rank| k.0 & u16::from(*rank) != 0)
            .collect()
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.into_iter().map(u16::from).fold(0, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self) {
            write!(f, "{} ", rank)?;
        }
        Ok(())
    }
}
