use super::table::Table;
use crate::Error;
use crate::cards::Hand;
use crate::cards::Ranking;
use crate::cards::Strength;
use crate::players::Action;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Winner {
    Player,
    Opponent,
    Tie,
}

/// How the round ended.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Resolution {
    /// The opponent acted first and folded; the player never acted.
    OpponentFolded,
    PlayerFolded,
    Showdown,
}

/// The resolved round, handed to statistics and presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    resolution: Resolution,
    winner: Winner,
    opponent: Hand,
    player: Hand,
    opponent_strength: Strength,
    player_strength: Strength,
    correct: Option<bool>,
}

impl Outcome {
    /// The action a perfect-information player would take:
    /// call when holding the better or equal hand, fold otherwise.
    pub fn recommend(player: &Strength, opponent: &Strength) -> Action {
        match player.versus(opponent) {
            Ordering::Less => Action::Fold,
            Ordering::Equal | Ordering::Greater => Action::Call,
        }
    }

    /// The opponent folded before the player acted.
    pub fn forfeit(opponent: Hand, player: Hand) -> Result<Self, Error> {
        let opponent_strength = Strength::try_from(opponent)?;
        let player_strength = Strength::try_from(player)?;
        Ok(Self {
            resolution: Resolution::OpponentFolded,
            winner: Winner::Player,
            opponent,
            player,
            opponent_strength,
            player_strength,
            correct: None,
        })
    }

    /// The player answered with `action`.
    pub fn answer(opponent: Hand, player: Hand, action: Action) -> Result<Self, Error> {
        let opponent_strength = Strength::try_from(opponent)?;
        let player_strength = Strength::try_from(player)?;
        let correct = Some(action == Self::recommend(&player_strength, &opponent_strength));
        let (resolution, winner) = match action {
            Action::Fold => (Resolution::PlayerFolded, Winner::Opponent),
            Action::Call => (
                Resolution::Showdown,
                match player_strength.versus(&opponent_strength) {
                    Ordering::Greater => Winner::Player,
                    Ordering::Less => Winner::Opponent,
                    Ordering::Equal => Winner::Tie,
                },
            ),
        };
        Ok(Self {
            resolution,
            winner,
            opponent,
            player,
            opponent_strength,
            player_strength,
            correct,
        })
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }
    pub fn winner(&self) -> Winner {
        self.winner
    }
    pub fn is_tie(&self) -> bool {
        self.winner == Winner::Tie
    }
    pub fn player_ranking(&self) -> Ranking {
        self.player_strength.ranking()
    }
    pub fn opponent_ranking(&self) -> Ranking {
        self.opponent_strength.ranking()
    }
    /// Signed kicker comparison, player against opponent.
    pub fn kicker(&self) -> i8 {
        self.player_strength.kicker_diff(&self.opponent_strength)
    }
    /// Whether the player's action matched [`Outcome::recommend`].
    /// `None` when the opponent folded first.
    pub fn correct(&self) -> Option<bool> {
        self.correct
    }
    /// Both hands face up.
    pub fn table(&self) -> Table {
        Table::revealed(self.opponent, self.player)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let player = self.player_ranking();
        let opponent = self.opponent_ranking();
        match (self.resolution, self.winner) {
            (Resolution::OpponentFolded, _) => write!(f, "Opponent folds. Player wins"),
            (Resolution::PlayerFolded, _) => write!(f, "Player folds. Opponent wins"),
            (Resolution::Showdown, Winner::Player) => {
                write!(f, "Player wins ({} vs {})", player, opponent)
            }
            (Resolution::Showdown, Winner::Opponent) => {
                write!(f, "Opponent wins ({} vs {})", opponent, player)
            }
            (Resolution::Showdown, Winner::Tie) => {
                write!(f, "Tie ({} vs {})", player, opponent)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        Hand::try_from(s).unwrap()
    }

    #[test]
    fn recommendation_follows_strength() {
        let strong = Strength::try_from(hand("Ah Ad Ac 2s 3h")).unwrap();
        let weak = Strength::try_from(hand("Kh Qd 9c 5s 3c")).unwrap();
        assert_eq!(Outcome::recommend(&strong, &weak), Action::Call);
        assert_eq!(Outcome::recommend(&weak, &strong), Action::Fold);
        assert_eq!(Outcome::recommend(&strong, &strong), Action::Call);
    }

    #[test]
    fn forfeit_goes_to_player() {
        let outcome = Outcome::forfeit(hand("2h 7d 9c Js Kh"), hand("3h 3d 5c 8s Qh")).unwrap();
        assert_eq!(outcome.winner(), Winner::Player);
        assert_eq!(outcome.resolution(), Resolution::OpponentFolded);
        assert_eq!(outcome.correct(), None);
        assert!(outcome.table().is_revealed());
    }

    #[test]
    fn fold_always_loses_but_may_be_correct() {
        let opponent = hand("Ah Ad Ac 2s 3h");
        let player = hand("Kh Qd 9c 5s 3c");
        let outcome = Outcome::answer(opponent, player, Action::Fold).unwrap();
        assert_eq!(outcome.winner(), Winner::Opponent);
        assert_eq!(outcome.correct(), Some(true));
        let outcome = Outcome::answer(player, opponent, Action::Fold).unwrap();
        assert_eq!(outcome.winner(), Winner::Opponent);
        assert_eq!(outcome.correct(), Some(false));
    }

    #[test]
    fn tied_call_is_correct() {
        let outcome =
            Outcome::answer(hand("4h 6h 8h Th Qh"), hand("4d 6d 8d Td Qd"), Action::Call).unwrap();
        assert!(outcome.is_tie());
        assert_eq!(outcome.kicker(), 0);
        assert_eq!(outcome.correct(), Some(true));
        assert_eq!(outcome.to_string(), "Tie (Flush vs Flush)");
    }

    #[test]
    fn invalid_hand_is_rejected() {
        let result = Outcome::answer(hand("4h 6h"), hand("4d 6d 8d Td Qd"), Action::Call);
        assert_eq!(result, Err(Error::InvalidHandSize(2)));
    }
}
