use super::outcome::Outcome;
use super::round::Awaiting;
use super::round::Dealt;
use super::round::Opening;
use super::round::Round;
use super::stats::Stats;
use super::store::Store;
use super::timer::Timer;
use crate::ROUND_DELAY;
use crate::cards::Hand;
use crate::players::Action;
use crate::players::Player;
use crate::players::Robot;
use rand::rngs::SmallRng;
use std::time::Duration;

/// A sequence of rounds against the robot, with persisted statistics.
///
/// Each resolved round is recorded, saved, and followed by a delay
/// before the next deal. Rounds are dealt with [`Session::begin`] and
/// answered with [`Session::resolve`]; [`Session::play`] does both for a
/// [`Player`]. Resolving arms a tokio [`Timer`], so a session must be
/// driven from inside a runtime.
pub struct Session<S: Store> {
    stats: Stats,
    store: S,
    robot: Robot,
    rng: SmallRng,
    delay: Duration,
    timer: Option<Timer>,
    /// (opponent, player) of the dealt round still waiting on the player
    pending: Option<(Hand, Hand)>,
}

impl<S: Store> Session<S> {
    pub fn load(store: S, rng: SmallRng) -> anyhow::Result<Self> {
        let stats = store.load()?;
        log::info!("[session] loaded {}", stats);
        Ok(Self {
            stats,
            store,
            robot: Robot,
            rng,
            delay: ROUND_DELAY,
            timer: None,
            pending: None,
        })
    }
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
    pub fn stats(&self) -> &Stats {
        &self.stats
    }
    pub fn store(&self) -> &S {
        &self.store
    }
    pub fn is_waiting(&self) -> bool {
        self.timer.as_ref().is_some_and(Timer::is_pending)
    }
    /// A dealt round is out and has not been resolved yet.
    pub fn is_awaiting(&self) -> bool {
        self.pending.is_some()
    }

    /// Deals a fresh round and lets the opponent open if it moves first.
    ///
    /// Fails while a dealt round still waits on the player, and while the
    /// delay after the previous round is still running. If the opponent
    /// folds, the round is settled here and the outcome comes back inside
    /// [`Opening::Folded`].
    pub fn begin(&mut self) -> anyhow::Result<Opening> {
        anyhow::ensure!(!self.is_awaiting(), "previous round is still awaiting an action");
        anyhow::ensure!(!self.is_waiting(), "previous round is still cooling down");
        self.timer = None;
        let mut stats = self.stats;
        let opening = Round::<Dealt>::deal(&mut self.rng)?.open(
            stats.opponent_first(),
            &self.robot,
            &mut self.rng,
        )?;
        stats.flip();
        match opening {
            Opening::Folded(outcome) => self.settle(stats, outcome).map(Opening::Folded),
            Opening::Awaiting(round) => {
                self.stats = stats;
                self.pending = Some((round.opponent(), round.player()));
                Ok(Opening::Awaiting(round))
            }
        }
    }

    /// Applies the player's action and settles the round.
    ///
    /// Only the round most recently handed out by [`Session::begin`] is
    /// accepted.
    pub fn resolve(&mut self, round: Round<Awaiting>, action: Action) -> anyhow::Result<Outcome> {
        anyhow::ensure!(
            self.pending == Some((round.opponent(), round.player())),
            "round was not dealt by this session or is already resolved"
        );
        self.pending = None;
        let outcome = round.act(action)?;
        self.settle(self.stats, outcome)
    }

    /// One full round: deal, let `player` decide if it gets to, settle.
    pub fn play<P: Player>(&mut self, player: &mut P) -> anyhow::Result<Outcome> {
        match self.begin()? {
            Opening::Folded(outcome) => Ok(outcome),
            Opening::Awaiting(round) => {
                let action = player.decide(&round.table())?;
                self.resolve(round, action)
            }
        }
    }

    /// Waits out the delay armed by the last resolution.
    /// `false` if it was cancelled; `true` if it fired or none was armed.
    pub async fn advance(&mut self) -> bool {
        match self.timer.take() {
            Some(timer) => timer.wait().await,
            None => true,
        }
    }

    pub fn reset(&mut self) -> anyhow::Result<()> {
        self.stats.reset();
        self.store.save(&self.stats)?;
        log::info!("[session] reset");
        Ok(())
    }

    /// Cancels any pending delay and saves.
    pub fn close(mut self) -> anyhow::Result<Stats> {
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
        self.store.save(&self.stats)?;
        log::info!("[session] closed {}", self.stats);
        Ok(self.stats)
    }

    /// In-memory stats only change once the store has accepted them.
    fn settle(&mut self, mut stats: Stats, outcome: Outcome) -> anyhow::Result<Outcome> {
        stats.record(&outcome);
        log::info!("[session] {}", outcome);
        self.store.save(&stats)?;
        self.stats = stats;
        self.timer = Some(Timer::start(self.delay));
        Ok(outcome)
    }
}
