use super::action::Action;
use crate::Probability;
use crate::cards::Ranking;
use rand::Rng;

/// The simulated opponent.
///
/// An open-loop policy: the only input is the category of the robot's own
/// hand. It never sees the player's cards or the session history, so the
/// fold rate is noise for game feel rather than strategy.
#[derive(Debug, Default, Clone, Copy)]
pub struct Robot;

impl Robot {
    /// Probability of continuing with a hand of this category.
    pub fn continuation(&self, ranking: Ranking) -> Probability {
        match ranking {
            Ranking::RoyalFlush
            | Ranking::StraightFlush
            | Ranking::FourOAK
            | Ranking::FullHouse
            | Ranking::Flush
            | Ranking::Straight => crate::CONTINUE_STRAIGHT_OR_BETTER,
            Ranking::ThreeOAK => crate::CONTINUE_THREE_OAK,
            Ranking::TwoPair => crate::CONTINUE_TWO_PAIR,
            Ranking::OnePair => crate::CONTINUE_ONE_PAIR,
            Ranking::HighCard => crate::CONTINUE_HIGH_CARD,
        }
    }

    /// Samples one continue-or-fold decision.
    pub fn act<R: Rng + ?Sized>(&self, ranking: Ranking, rng: &mut R) -> Action {
        let threshold = self.continuation(ranking);
        let roll = rng.random::<Probability>();
        let action = if roll < threshold {
            Action::Call
        } else {
            Action::Fold
        };
        log::debug!(
            "[robot] {} rolled {:.3} against {:.1}: {}",
            ranking,
            roll,
            threshold,
            action
        );
        action
    }
}
