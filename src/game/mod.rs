//! Round state and turn progression

mod attempt;
mod round;
mod session;

pub use attempt::Attempt;
pub use round::{MAX_ATTEMPTS, Outcome, Round, RoundSnapshot};
pub use session::Session;
