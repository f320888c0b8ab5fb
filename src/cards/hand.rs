use super::card::Card;
use crate::DECK_SIZE;

/// Hand represents an unordered set of Cards.
///
/// A single word holds the whole set, independent of size, so hands are
/// `Copy` and never allocate. Only the 52 least significant bits are used;
/// each bit is one card at its canonical deck index. Because it is a set,
/// a Hand can never hold the same card twice.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }
    /// Disjoint union. The two sides must not share a card.
    pub fn add(lhs: Self, rhs: Self) -> Self {
        debug_assert!(lhs.0 & rhs.0 == 0);
        Self(lhs.0 | rhs.0)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.0 & other.0 == 0
    }
    pub fn cards(&self) -> Vec<Card> {
        Vec::<Card>::from(*self)
    }

    const fn mask() -> u64 {
        (1 << DECK_SIZE) - 1
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.size() == 0 {
            None
        } else {
            let card = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Card::try_from(card).ok()
        }
    }
}

/// u64 isomorphism
/// we SUM/OR the cards to get the bitstring
/// [2h, 3h, As]
/// xxxxxxxxxxxx 1000000000000000000000000000000000000000000000000011
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
/// duplicate cards collapse into one member of the set
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(
            cards
                .into_iter()
                .map(u64::from)
                .fold(0u64, |a, b| a | b),
        )
    }
}

/// str isomorphism
/// this follows from Vec<Card> isomorphism
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Card::parse(s).map(Self::from)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self
            .cards()
            .iter()
            .map(|card| card.to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}
