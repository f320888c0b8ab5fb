//! Five-card poker hand classification and a simulated opponent.
//!
//! The crate is split into three layers:
//!
//! - [`cards`]: cards, hands, the deck, and the pure evaluation functions
//!   ([`cards::Evaluator`], [`cards::Kickers`], [`cards::Strength`])
//! - [`players`]: the call/fold [`players::Action`], the opponent's
//!   [`players::Robot`] policy, and the [`players::Player`] seam for the
//!   other side of the table
//! - [`gameplay`]: round orchestration, session statistics, persistence,
//!   and the delayed auto-advance between rounds
//!
//! Everything in [`cards`] and [`players::Robot`] is synchronous and
//! stateless; only [`gameplay::Session`] owns mutable state.
pub mod cards;
pub mod gameplay;
pub mod players;

mod error;
pub use error::*;

use std::time::Duration;

/// Sampling distributions and continuation rates.
pub type Probability = f32;

// ============================================================================
// DECK GEOMETRY
// ============================================================================
/// Cards dealt to each side of the table.
pub const HAND_SIZE: usize = 5;
/// Cards in a fresh deck.
pub const DECK_SIZE: usize = 52;
/// Distinct ranks per suit.
pub const N_RANKS: usize = 13;
/// Distinct suits per deck.
pub const N_SUITS: usize = 4;

// ============================================================================
// OPPONENT POLICY
// Chance that the opponent keeps playing, by its own hand category.
// Straight or better always continues.
// ============================================================================
pub const CONTINUE_STRAIGHT_OR_BETTER: Probability = 1.0;
pub const CONTINUE_THREE_OAK: Probability = 0.9;
pub const CONTINUE_TWO_PAIR: Probability = 0.8;
pub const CONTINUE_ONE_PAIR: Probability = 0.6;
pub const CONTINUE_HIGH_CARD: Probability = 0.2;

// ============================================================================
// ROUND PACING
// ============================================================================
/// Pause between a resolved round and the next deal.
pub const ROUND_DELAY: Duration = Duration::from_millis(5000);
/// Pause before the opponent's opening decision is shown.
pub const THINK_DELAY: Duration = Duration::from_millis(1500);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
