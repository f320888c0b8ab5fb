use crate::cards::Hand;

/// What the presentation layer may show during a round.
///
/// The player's hand is always face up. The opponent's hand stays face
/// down until the round resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    opponent: Hand,
    player: Hand,
    reveal: bool,
}

impl Table {
    pub fn hidden(opponent: Hand, player: Hand) -> Self {
        Self {
            opponent,
            player,
            reveal: false,
        }
    }
    pub fn revealed(opponent: Hand, player: Hand) -> Self {
        Self {
            opponent,
            player,
            reveal: true,
        }
    }
    pub fn player(&self) -> Hand {
        self.player
    }
    /// `None` while the opponent's cards are face down.
    pub fn opponent(&self) -> Option<Hand> {
        self.reveal.then_some(self.opponent)
    }
    pub fn is_revealed(&self) -> bool {
        self.reveal
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.opponent() {
            Some(hand) => writeln!(f, "Opponent  {}", hand)?,
            None => writeln!(f, "Opponent  {}", vec!["??"; self.opponent.size()].join(" "))?,
        }
        write!(f, "Player    {}", self.player)
    }
}
