pub mod outcome;
pub use outcome::*;

pub mod round;
pub use round::*;

pub mod session;
pub use session::*;

pub mod stats;
pub use stats::*;

pub mod store;
pub use store::*;

pub mod table;
pub use table::*;

pub mod timer;
pub use timer::*;
