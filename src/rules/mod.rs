//! Rules engine: the player actions.
//!
//! Each action:
//! - Checks the game is running and it is the caller's turn
//! - Checks its own preconditions
//! - Mutates the game only once every check has passed
//! - Re-evaluates the end of the game
//!
//! Turn handoff is explicit through `advance_turn` / `end_turn`.

pub mod engine;

pub use engine::{
    advance_turn, apply, end_turn, exchange, result, sell_cards, take_all_camels, take_good,
    GameResult,
};
