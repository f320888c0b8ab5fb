use super::rank::Rank;
use super::suit::Suit;
use crate::DECK_SIZE;
use crate::N_RANKS;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `suit * 13 + rank`. A fresh deck in this order is suit-major and
/// rank-minor: all hearts Two to Ace, then diamonds, clubs, spades.
///
/// # Parsing
///
/// Cards can be parsed from two-character strings like `"As"` (ace of spades)
/// or `"Tc"` (ten of clubs). Use [`Card::parse`] for multiple cards.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component, `card % 13`.
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 % N_RANKS as u8)
    }
    /// Extracts the suit component, `card / 13`.
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 / N_RANKS as u8)
    }
    /// Parses a string of concatenated card notations into a vector of cards.
    ///
    /// Whitespace is ignored. Each card is two characters: rank then suit.
    /// Returns an error if any card fails to parse.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.replace(char::is_whitespace, "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::try_from(pair.as_str()))
            .collect::<Result<Vec<Self>, _>>()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(s) * N_RANKS as u8 + u8::from(r))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a canonical deck 0..52
/// Ts
/// 47
/// 0b00101111
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl TryFrom<u8> for Card {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        if (n as usize) < DECK_SIZE {
            Ok(Self(n))
        } else {
            Err(format!("card index out of range: {}", n))
        }
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000100000000000000000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(u), None) => {
                let rank = Rank::try_from(r.encode_utf8(&mut [0; 4]) as &str)?;
                let suit = Suit::try_from(u.encode_utf8(&mut [0; 4]) as &str)?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(format!("expected 2 characters: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suit_major_encoding() {
        let card = Card::try_from(14u8).unwrap();
        assert_eq!(card.suit(), Suit::Diamond);
        assert_eq!(card.rank(), Rank::Three);
        assert_eq!(u8::from(Card::try_from("As").unwrap()), 51);
        assert_eq!(u8::from(Card::try_from("2h").unwrap()), 0);
    }

    #[test]
    fn bijective_rank_suit() {
        for n in 0..DECK_SIZE as u8 {
            let card = Card::try_from(n).unwrap();
            assert_eq!(card, Card::from((card.rank(), card.suit())));
        }
    }

    #[test]
    fn bijective_str() {
        for n in 0..DECK_SIZE as u8 {
            let card = Card::try_from(n).unwrap();
            assert_eq!(Ok(card), Card::try_from(card.to_string().as_str()));
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Card::try_from(52u8).is_err());
        assert!(Card::try_from("Ax").is_err());
        assert!(Card::try_from("A").is_err());
    }

    #[test]
    fn non_ascii_is_an_error() {
        assert!(Card::try_from("é").is_err());
        assert!(Card::try_from("Aé").is_err());
        assert!(Card::try_from("éh").is_err());
        assert!(Card::parse("é").is_err());
        assert!(Card::parse("As ♠h").is_err());
    }

    #[test]
    fn parse_many() {
        let cards = Card::parse("Ah Kd 2c").unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[1], Card::from((Rank::King, Suit::Diamond)));
    }
}
