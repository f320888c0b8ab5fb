mod action;
mod player;
mod robot;
#[cfg(feature = "cli")]
mod human;

pub use action::*;
pub use player::*;
pub use robot::*;
#[cfg(feature = "cli")]
pub use human::*;
