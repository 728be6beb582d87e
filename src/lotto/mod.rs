//! Ticket domain logic
//!
//! The evaluator, keypad buffer, number generator and prize breakdown used by
//! the checker, result and generator screens. Everything here is pure and
//! total: no operation can fail.

pub mod evaluator;
pub mod generator;
pub mod keypad;
pub mod prize;

pub use evaluator::{evaluate, Outcome};
pub use generator::{generate, GeneratorMode, LUCKY_NUMBERS};
pub use keypad::KeypadBuffer;
pub use prize::{PrizeBreakdown, FIRST_PRIZE_BAHT};
