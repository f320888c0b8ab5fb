/// A five-card hand's category.
///
/// Variants are declared weakest to strongest so the derived `Ord` is the
/// category order. The category says nothing about which ranks made it;
/// ties inside a category are broken by [`Kickers`](super::Kickers).
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOAK,
    Straight,
    Flush,
    FullHouse,
    FourOAK,
    StraightFlush,
    RoyalFlush,
}

impl Ranking {
    pub const MAX: Self = Ranking::RoyalFlush;
    pub const MIN: Self = Ranking::HighCard;

    pub const fn all() -> [Self; 10] {
        [
            Ranking::HighCard,
            Ranking::OnePair,
            Ranking::TwoPair,
            Ranking::ThreeOAK,
            Ranking::Straight,
            Ranking::Flush,
            Ranking::FullHouse,
            Ranking::FourOAK,
            Ranking::StraightFlush,
            Ranking::RoyalFlush,
        ]
    }

    /// Straight, Flush, Full House, Four of a Kind, Straight Flush, Royal Flush.
    pub fn is_straight_or_better(&self) -> bool {
        *self >= Ranking::Straight
    }

    pub fn name(&self) -> &'static str {
        match self {
            Ranking::HighCard => "High Card",
            Ranking::OnePair => "Pair",
            Ranking::TwoPair => "Two Pair",
            Ranking::ThreeOAK => "Three of a Kind",
            Ranking::Straight => "Straight",
            Ranking::Flush => "Flush",
            Ranking::FullHouse => "Full House",
            Ranking::FourOAK => "Four of a Kind",
            Ranking::StraightFlush => "Straight Flush",
            Ranking::RoyalFlush => "Royal Flush",
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
