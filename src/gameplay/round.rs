use super::outcome::Outcome;
use super::table::Table;
use crate::Error;
use crate::HAND_SIZE;
use crate::cards::Deck;
use crate::cards::Evaluator;
use crate::cards::Hand;
use crate::players::Action;
use crate::players::Robot;
use rand::Rng;
use std::marker::PhantomData;

/// Phase: both hands dealt, nobody has acted.
#[derive(Debug)]
pub struct Dealt;
/// Phase: waiting for the player's call or fold.
#[derive(Debug)]
pub struct Awaiting;

/// One round of play: a fresh deck, two five-card hands, one decision.
///
/// Uses typestate so that only a dealt round can be opened and only an
/// opened round can take the player's action. Both transitions consume
/// the round, so a resolved round cannot be resolved twice.
#[derive(Debug)]
pub struct Round<Phase> {
    opponent: Hand,
    player: Hand,
    opponent_first: bool,
    phase: PhantomData<Phase>,
}

/// Result of opening a round.
#[derive(Debug)]
pub enum Opening {
    /// The opponent acted first and folded. The round is over.
    Folded(Outcome),
    /// The player must act next.
    Awaiting(Round<Awaiting>),
}

impl<P> Round<P> {
    pub fn opponent(&self) -> Hand {
        self.opponent
    }
    pub fn player(&self) -> Hand {
        self.player
    }
    /// The in-progress view: opponent face down.
    pub fn table(&self) -> Table {
        Table::hidden(self.opponent, self.player)
    }
}

impl Round<Dealt> {
    /// Shuffles a fresh deck and deals the opponent's hand, then the player's.
    pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, Error> {
        let mut deck = Deck::shuffled(rng);
        let opponent = deck.deal(HAND_SIZE)?;
        let player = deck.deal(HAND_SIZE)?;
        log::debug!("[round] dealt opponent {} / player {}", opponent, player);
        Ok(Self::with(opponent, player))
    }
    /// A round over fixed hands. Both must hold exactly five cards.
    pub fn from_hands(opponent: Hand, player: Hand) -> Result<Self, Error> {
        for hand in [opponent, player] {
            if hand.size() != HAND_SIZE {
                return Err(Error::InvalidHandSize(hand.size()));
            }
        }
        debug_assert!(opponent.is_disjoint(&player));
        Ok(Self::with(opponent, player))
    }
    /// Lets the opponent act if it moves first this round.
    ///
    /// The robot only ever sees its own hand. When the player moves first
    /// the robot is not consulted at all.
    pub fn open<R: Rng + ?Sized>(
        self,
        opponent_first: bool,
        robot: &Robot,
        rng: &mut R,
    ) -> Result<Opening, Error> {
        if opponent_first {
            let ranking = Evaluator::try_from(self.opponent)?.find_ranking();
            match robot.act(ranking, rng) {
                Action::Fold => {
                    log::debug!("[round] opponent folds {}", ranking);
                    return Outcome::forfeit(self.opponent, self.player).map(Opening::Folded);
                }
                Action::Call => log::debug!("[round] opponent plays {}", ranking),
            }
        }
        Ok(Opening::Awaiting(Round {
            opponent: self.opponent,
            player: self.player,
            opponent_first,
            phase: PhantomData,
        }))
    }

    fn with(opponent: Hand, player: Hand) -> Self {
        Self {
            opponent,
            player,
            opponent_first: false,
            phase: PhantomData,
        }
    }
}

impl Round<Awaiting> {
    pub fn opponent_first(&self) -> bool {
        self.opponent_first
    }
    /// Resolves the round with the player's call or fold.
    pub fn act(self, action: Action) -> Result<Outcome, Error> {
        log::debug!("[round] player {}", action);
        Outcome::answer(self.opponent, self.player, action)
    }
}
