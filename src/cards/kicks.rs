use super::hand::Hand;
use super::rank::Rank;
use crate::Error;
use crate::HAND_SIZE;

/// A hand's tie-breaking rank sequence.
///
/// All five ranks, repeats included, sorted from highest to lowest. Two
/// sequences compare position by position from the top, so the derived
/// lexicographic `Ord` is exactly the kicker order.
///
/// WARNING: this compares every card, not just the side cards left over
/// after the made combination. A pair of Twos with an Ace kicker beats a
/// pair of Kings with a Queen kicker here.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers([Rank; HAND_SIZE]);

impl Kickers {
    /// Signed difference at the first position (from the top) where the
    /// two sequences disagree. Zero when every rank matches.
    pub fn diff(&self, other: &Self) -> i8 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| u8::from(*a) as i8 - u8::from(*b) as i8)
            .find(|&d| d != 0)
            .unwrap_or(0)
    }
    pub fn ranks(&self) -> &[Rank; HAND_SIZE] {
        &self.0
    }
}

/// Sorts the ranks high to low.
impl From<[Rank; HAND_SIZE]> for Kickers {
    fn from(mut ranks: [Rank; HAND_SIZE]) -> Self {
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        Self(ranks)
    }
}

impl TryFrom<Hand> for Kickers {
    type Error = Error;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        if hand.size() != HAND_SIZE {
            return Err(Error::InvalidHandSize(hand.size()));
        }
        let mut ranks = [Rank::MIN; HAND_SIZE];
        for (slot, card) in ranks.iter_mut().zip(hand) {
            *slot = card.rank();
        }
        Ok(Self::from(ranks))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in self.0.iter() {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    fn kickers(s: &str) -> Kickers {
        Kickers::try_from(Hand::try_from(s).unwrap()).unwrap()
    }

    #[test]
    fn sorted_high_to_low() {
        let k = kickers("4c Kd 2h Ks 9s");
        assert_eq!(
            k.ranks(),
            &[Rank::King, Rank::King, Rank::Nine, Rank::Four, Rank::Two]
        );
        assert_eq!(k.to_string(), "KK942");
    }

    #[test]
    fn reflexive() {
        let k = kickers("4c Kd 2h Ks 9s");
        assert_eq!(k.diff(&k), 0);
        assert_eq!(k.cmp(&k), Ordering::Equal);
    }

    #[test]
    fn top_card_decides() {
        let hi = kickers("3h 3d 5c 7s As");
        let lo = kickers("3c 3s 5d 7h Qs");
        assert_eq!(hi.diff(&lo), 2);
        assert_eq!(lo.diff(&hi), -2);
        assert!(hi > lo);
    }

    #[test]
    fn antisymmetric_and_transitive() {
        let a = kickers("2h 4d 6c 8s Ah");
        let b = kickers("2d 4c 6s 8h Kh");
        let c = kickers("2c 4s 6h 8d Qh");
        assert!(a.diff(&b) > 0 && b.diff(&a) < 0);
        assert!(b.diff(&c) > 0 && c.diff(&b) < 0);
        assert!(a.diff(&c) > 0 && c.diff(&a) < 0);
        assert!(a > b && b > c && a > c);
    }

    #[test]
    fn lower_positions_break_ties() {
        let a = kickers("Ah Kd 9c 5s 3h");
        let b = kickers("Ad Kc 9s 5h 2h");
        assert_eq!(a.diff(&b), 1);
    }

    #[test]
    fn suits_do_not_matter() {
        let a = kickers("4h 6h 8h Th Qh");
        let b = kickers("4s 6s 8s Ts Qs");
        assert_eq!(a.diff(&b), 0);
        assert_eq!(a, b);
    }

    #[test]
    fn whole_hand_not_just_side_cards() {
        let deuces = kickers("2h 2d Ac 5s 4h");
        let kings = kickers("Kh Kd Qc 5h 4s");
        assert!(deuces > kings);
    }

    #[test]
    fn wrong_sizes_are_rejected() {
        let short = Hand::try_from("As Kd 2c").unwrap();
        let long = Hand::try_from("As Kd 2c 7h 9s Td").unwrap();
        assert_eq!(Kickers::try_from(short), Err(Error::InvalidHandSize(3)));
        assert_eq!(Kickers::try_from(long), Err(Error::InvalidHandSize(6)));
    }
}
