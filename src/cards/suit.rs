use crate::error::InvalidInput;

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const fn all() -> [Self; 4] {
        [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade]
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        Self::all()[n as usize]
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 injection
///
/// the 13 bits of this suit's lane within a 52-bit card mask
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        0x0001111111111111 << u8::from(s)
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = InvalidInput;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "c" | "♣" => Ok(Suit::Club),
            "d" | "♦" => Ok(Suit::Diamond),
            "h" | "♥" => Ok(Suit::Heart),
            "s" | "♠" => Ok(Suit::Spade),
            _ => Err(InvalidInput::UnknownSuit(s.to_string())),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        const LABELS: &[u8; 4] = b"cdhs";
        write!(f, "{}", LABELS[u8::from(*self) as usize] as char)
    }
}
