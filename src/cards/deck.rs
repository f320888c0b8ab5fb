use super::card::Card;
use super::hand::Hand;
use crate::DECK_SIZE;
use crate::Error;
use rand::Rng;
use rand::seq::SliceRandom;

/// An ordered deck of cards, dealt from the top.
///
/// Unlike [`Hand`], order matters here: a deck is shuffled once and then
/// consumed front to back, so a fixed RNG seed reproduces every deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck in canonical order (suit-major, rank-minor).
    pub fn new() -> Self {
        Self(
            (0..DECK_SIZE as u8)
                .filter_map(|n| Card::try_from(n).ok())
                .collect(),
        )
    }
    /// Creates a fresh deck and shuffles it with the given source.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }
    /// Uniformly permutes the remaining cards (Fisher–Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }
    /// Removes the top `n` cards and returns them as a hand.
    pub fn deal(&mut self, n: usize) -> Result<Hand, Error> {
        if n > self.0.len() {
            return Err(Error::InsufficientCards {
                wanted: n,
                remaining: self.0.len(),
            });
        }
        Ok(self
            .0
            .drain(..n)
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add))
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        Hand::from(deck.0)
    }
}
