//! Card representation and five-card hand evaluation.
//!
//! ## Core Types
//!
//! - [`Card`]: a single card encoded as `suit * 13 + rank`
//! - [`Hand`]: an unordered set of cards as a 64-bit bitmask
//! - [`Deck`]: an ordered, shuffled collection for dealing
//!
//! ## Evaluation
//!
//! - [`Evaluator`]: shared rank/suit histograms, category predicates
//! - [`Ranking`]: the ten hand categories, high card through royal flush
//! - [`Kickers`]: the tie-break rank sequence
//! - [`Strength`]: ranking then kickers, the full comparison key
mod card;
mod deck;
mod evaluator;
mod hand;
mod kicks;
mod rank;
mod ranking;
mod strength;
mod suit;

pub use card::*;
pub use deck::*;
pub use evaluator::*;
pub use hand::*;
pub use kicks::*;
pub use rank::*;
pub use ranking::*;
pub use strength::*;
pub use suit::*;
