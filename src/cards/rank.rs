use crate::error::InvalidInput;

#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Rank {
    #[default]
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    const fn mask() -> u16 {
        0b1111111111111
    }
    pub const fn all() -> [Self; 13] {
        [
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ]
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        Self::all()[n as usize]
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// u16 isomorphism
///
/// With 13 ranks we only need 13 bits. Decoding takes the highest set bit.
impl From<u16> for Rank {
    fn from(n: u16) -> Rank {
        let msb = (16 - 1 - (n & Self::mask()).leading_zeros()) as u8;
        Rank::from(msb)
    }
}
impl From<Rank> for u16 {
    fn from(r: Rank) -> u16 {
        1 << u8::from(r)
    }
}

/// u64 injection
impl From<Rank> for u64 {
    fn from(r: Rank) -> u64 {
        0xF << (u8::from(r) * 4)
    }
}

/// str isomorphism
///
/// inverse of Display, so the accepted notation can never drift from
/// the printed one
impl TryFrom<&str> for Rank {
    type Error = InvalidInput;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|rank| rank.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidInput::UnknownRank(s.to_string()))
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        const LABELS: &[u8; 13] = b"23456789TJQKA";
        write!(f, "{}", LABELS[u8::from(*self) as usize] as char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let rank = Rank::Five;
        assert!(rank == Rank::from(u8::from(rank)));
    }

    #[test]
    fn bijective_u16() {
        let rank = Rank::Five;
        assert!(rank == Rank::from(u16::from(rank)));
    }

    #[test]
    fn injective_u64() {
        assert!(u64::from(Rank::Five) == 0b1111000000000000);
    }

    #[test]
    fn bijective_str() {
        for n in 0..13u8 {
            let rank = Rank::from(n);
            assert_eq!(rank, Rank::try_from(rank.to_string().as_str()).unwrap());
        }
    }

    #[test]
    fn rejects_unknown_rank() {
        assert_eq!(
            Rank::try_from("X"),
            Err(InvalidInput::UnknownRank("X".to_string()))
        );
    }
}
