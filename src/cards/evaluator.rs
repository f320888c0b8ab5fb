use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use crate::Error;
use crate::HAND_SIZE;
use crate::N_RANKS;
use crate::N_SUITS;

/// Rank indices {0, 1, 2, 3, 12}: the only straight that wraps around.
const WHEEL: u16 = 0b_1000000001111;
/// Rank indices {0, 9, 10, 11, 12}: the royal rank set.
const ROYAL: u16 = 0b_1111000000001;
/// Five adjacent rank bits, shifted down to index 0.
const RUN: u16 = 0b_11111;

/// A five-card hand classifier.
///
/// The rank histogram, suit histogram, and rank bitmask are computed once
/// when the evaluator is built. Every category predicate then reads those
/// tables instead of rescanning the cards.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    ranks: [u8; N_RANKS],
    suits: [u8; N_SUITS],
    mask: u16,
}

impl TryFrom<Hand> for Evaluator {
    type Error = Error;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        if hand.size() != HAND_SIZE {
            return Err(Error::InvalidHandSize(hand.size()));
        }
        let mut ranks = [0u8; N_RANKS];
        let mut suits = [0u8; N_SUITS];
        let mut mask = 0u16;
        for card in hand {
            ranks[u8::from(card.rank()) as usize] += 1;
            suits[u8::from(card.suit()) as usize] += 1;
            mask |= u16::from(card.rank());
        }
        Ok(Self {
            ranks,
            suits,
            mask,
        })
    }
}

impl Evaluator {
    /// Highest-priority category whose predicate holds.
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_royal_flush())
            .or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or(Ranking::HighCard)
    }
    pub fn find_kickers(&self) -> Kickers {
        let mut ranks = [Rank::MIN; HAND_SIZE];
        for (slot, rank) in ranks.iter_mut().zip(Vec::<Rank>::from(self)) {
            *slot = rank;
        }
        Kickers::from(ranks)
    }

    fn find_royal_flush(&self) -> Option<Ranking> {
        (self.is_flush() && self.mask == ROYAL).then_some(Ranking::RoyalFlush)
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        (self.is_flush() && self.is_straight()).then_some(Ranking::StraightFlush)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.has_n_oak(4).then_some(Ranking::FourOAK)
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        (self.has_n_oak(3) && self.has_n_oak(2)).then_some(Ranking::FullHouse)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.is_flush().then_some(Ranking::Flush)
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.is_straight().then_some(Ranking::Straight)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.has_n_oak(3).then_some(Ranking::ThreeOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        (self.count_n_oak(2) >= 2).then_some(Ranking::TwoPair)
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        self.has_n_oak(2).then_some(Ranking::OnePair)
    }

    fn is_flush(&self) -> bool {
        self.suits.iter().any(|&n| n as usize == HAND_SIZE)
    }
    /// five distinct ranks that are adjacent, or exactly the wheel
    fn is_straight(&self) -> bool {
        self.mask.count_ones() as usize == HAND_SIZE
            && (self.mask >> self.mask.trailing_zeros() == RUN || self.mask == WHEEL)
    }
    /// some rank appears exactly n times. stops at the first hit
    fn has_n_oak(&self, n: u8) -> bool {
        self.ranks.iter().any(|&count| count == n)
    }
    fn count_n_oak(&self, n: u8) -> usize {
        self.ranks.iter().filter(|&&count| count == n).count()
    }
}

/// Ranks of the hand in ascending order, with repeats.
impl From<&Evaluator> for Vec<Rank> {
    fn from(eval: &Evaluator) -> Self {
        eval.ranks
            .iter()
            .enumerate()
            .flat_map(|(i, &n)| std::iter::repeat_n(Rank::from(i as u8), n as usize))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;
    use crate::cards::deck::Deck;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn ranking(s: &str) -> Ranking {
        Evaluator::try_from(Hand::try_from(s).unwrap())
            .unwrap()
            .find_ranking()
    }

    /// builds a hand from (rank index, suit index) pairs
    fn hand(cards: &[(u8, u8)]) -> Hand {
        Hand::from(
            cards
                .iter()
                .map(|&(r, s)| Card::try_from(s * 13 + r).unwrap())
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn high_card() {
        assert_eq!(ranking("As Kh Qd Jc 9s"), Ranking::HighCard);
    }

    #[test]
    fn one_pair() {
        assert_eq!(ranking("As Ah Kd Qc Js"), Ranking::OnePair);
    }

    #[test]
    fn two_pair() {
        assert_eq!(ranking("As Ah Kd Kc Qs"), Ranking::TwoPair);
    }

    #[test]
    fn three_oak() {
        assert_eq!(ranking("As Ah Ad Kc Qs"), Ranking::ThreeOAK);
    }

    #[test]
    fn straight() {
        assert_eq!(ranking("9s Th Jd Qc Ks"), Ranking::Straight);
        assert_eq!(ranking("Ts Jh Qd Kc As"), Ranking::Straight);
    }

    #[test]
    fn flush() {
        assert_eq!(ranking("As Ks Qs Js 9s"), Ranking::Flush);
    }

    #[test]
    fn full_house() {
        assert_eq!(ranking("2s 2h 2d 3c 3s"), Ranking::FullHouse);
    }

    #[test]
    fn four_oak() {
        assert_eq!(ranking("As Ah Ad Ac Ks"), Ranking::FourOAK);
    }

    #[test]
    fn straight_flush() {
        assert_eq!(ranking("9s Ts Js Qs Ks"), Ranking::StraightFlush);
        assert_eq!(ranking("Ts Js Qs Ks As"), Ranking::StraightFlush);
    }

    #[test]
    fn royal_flush_rank_set() {
        let royal = hand(&[(0, 3), (9, 3), (10, 3), (11, 3), (12, 3)]);
        let eval = Evaluator::try_from(royal).unwrap();
        assert_eq!(eval.find_ranking(), Ranking::RoyalFlush);
    }

    #[test]
    fn royal_rank_set_offsuit_is_not_royal() {
        let royal = hand(&[(0, 3), (9, 2), (10, 3), (11, 3), (12, 3)]);
        let eval = Evaluator::try_from(royal).unwrap();
        assert_eq!(eval.find_ranking(), Ranking::HighCard);
    }

    #[test]
    fn consecutive_indices_are_a_straight() {
        let run = hand(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 0)]);
        assert_eq!(Evaluator::try_from(run).unwrap().find_ranking(), Ranking::Straight);
    }

    #[test]
    fn wheel_straight() {
        let wheel = hand(&[(0, 0), (1, 1), (2, 2), (3, 3), (12, 0)]);
        assert_eq!(Evaluator::try_from(wheel).unwrap().find_ranking(), Ranking::Straight);
        assert_eq!(ranking("As 2h 3d 4c 5s"), Ranking::Straight);
    }

    #[test]
    fn wheel_straight_flush() {
        assert_eq!(ranking("As 2s 3s 4s 5s"), Ranking::StraightFlush);
    }

    #[test]
    fn no_other_wraparound() {
        let near = hand(&[(0, 0), (1, 1), (2, 2), (3, 3), (11, 0)]);
        assert_eq!(Evaluator::try_from(near).unwrap().find_ranking(), Ranking::HighCard);
        assert_eq!(ranking("Ks As 2h 3d 4c"), Ranking::HighCard);
    }

    #[test]
    fn full_house_over_three_oak() {
        assert_eq!(ranking("Kh Ks Kd 4c 4s"), Ranking::FullHouse);
    }

    #[test]
    fn straight_flush_over_flush() {
        assert_eq!(ranking("4h 5h 6h 7h 8h"), Ranking::StraightFlush);
    }

    #[test]
    fn flush_over_straight_with_pair_absent() {
        assert_eq!(ranking("4h 6h 7h 8h 9h"), Ranking::Flush);
    }

    #[test]
    fn rejects_wrong_sizes() {
        let four = Hand::try_from("As Ah Ad Ac").unwrap();
        let six = Hand::try_from("As Ah Ad Ac Ks Kh").unwrap();
        let dupe = Hand::try_from("As As Ad Ac Ks").unwrap();
        assert_eq!(Evaluator::try_from(four).err(), Some(Error::InvalidHandSize(4)));
        assert_eq!(Evaluator::try_from(six).err(), Some(Error::InvalidHandSize(6)));
        assert_eq!(Evaluator::try_from(dupe).err(), Some(Error::InvalidHandSize(4)));
    }

    #[test]
    fn ranks_with_repeats() {
        let eval = Evaluator::try_from(Hand::try_from("Kh Ks 2d 4c 4s").unwrap()).unwrap();
        let ranks = Vec::<Rank>::from(&eval);
        assert_eq!(ranks, vec![Rank::Two, Rank::Four, Rank::Four, Rank::King, Rank::King]);
    }

    #[test]
    fn kickers_from_histogram() {
        let hand = Hand::try_from("Kh Ks 2d 4c 4s").unwrap();
        let eval = Evaluator::try_from(hand).unwrap();
        assert_eq!(eval.find_kickers(), Kickers::try_from(hand).unwrap());
        assert_eq!(eval.find_kickers().to_string(), "KK442");
    }

    /// priority order must agree with a brute force over every predicate
    #[test]
    fn priority_matches_predicates() {
        let ref mut rng = SmallRng::seed_from_u64(0xC0FFEE);
        for _ in 0..20_000 {
            let hand = Deck::shuffled(rng).deal(HAND_SIZE).unwrap();
            let eval = Evaluator::try_from(hand).unwrap();
            let holds = |r: &Ranking| match r {
                Ranking::RoyalFlush => eval.is_flush() && eval.mask == ROYAL,
                Ranking::StraightFlush => eval.is_flush() && eval.is_straight(),
                Ranking::FourOAK => eval.has_n_oak(4),
                Ranking::FullHouse => eval.has_n_oak(3) && eval.has_n_oak(2),
                Ranking::Flush => eval.is_flush(),
                Ranking::Straight => eval.is_straight(),
                Ranking::ThreeOAK => eval.has_n_oak(3),
                Ranking::TwoPair => eval.count_n_oak(2) >= 2,
                Ranking::OnePair => eval.has_n_oak(2),
                Ranking::HighCard => true,
            };
            let best = Ranking::all()
                .into_iter()
                .rev()
                .find(holds)
                .unwrap();
            assert_eq!(eval.find_ranking(), best);
        }
    }
}
