//! Cards: goods, the draw pile and multiset helpers.
//!
//! ## Key Types
//!
//! - `Good`: the seven card types (six sellable goods and camels)
//! - `Deck`: the shared draw pile, consumed from the front
//!
//! Hands and the market are plain `Vec<Good>`; `multiset` provides the
//! containment and bulk-removal operations trading needs.

pub mod deck;
pub mod good;
pub mod multiset;

pub use deck::{draw_card, draw_cards, init_deck, Deck, DECK_SIZE};
pub use good::Good;
