//! The guess engine
//!
//! Round lifecycle, progressive hints and keyboard aggregation. All
//! transitions are synchronous and take their randomness as a parameter.

pub mod hint;
pub mod keyboard;
mod round;

pub use hint::{HINT_PLACEHOLDER, Hint, SHORT_NAME_THRESHOLD, advance_hint};
pub use keyboard::{KEYBOARD_ROWS, KeyStatus, key_status, keyboard_statuses};
pub use round::{GameStatus, MAX_ATTEMPTS, Rejection, Round};
