use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::ranking::Ranking;
use crate::Error;
use std::cmp::Ordering;

/// A hand's strength.
///
/// This will always be constructed from a five-card Hand. Hands are
/// ordered by Ranking first, and the Kickers break ties between hands of
/// the same Ranking.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
    /// Signed kicker difference, meaningful when the rankings match.
    pub fn kicker_diff(&self, other: &Self) -> i8 {
        self.kicks.diff(&other.kicks)
    }
    /// Category first, kickers only on an equal category.
    pub fn versus(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl TryFrom<Hand> for Strength {
    type Error = Error;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        Evaluator::try_from(hand).map(Self::from)
    }
}

impl From<Evaluator> for Strength {
    fn from(eval: Evaluator) -> Self {
        Self {
            value: eval.find_ranking(),
            kicks: eval.find_kickers(),
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<16}{}", self.value, self.kicks)
    }
}
