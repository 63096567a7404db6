//! # jaipur-engine
//!
//! Rules engine for a two-player market-trading card game.
//!
//! Players take goods from a shared market, swap cards with it, herd camels
//! and sell sets of goods for tokens whose value drops with every sale. The
//! game ends when the draw pile runs out, when a scarce good (diamonds, gold,
//! silver) has no tokens left, or when every common good (cloth, spice,
//! leather) has none left.
//!
//! ## Design Principles
//!
//! 1. **Pure state transformation**: actions take `&mut Game`, check every
//!    precondition, then mutate. A rejected action changes nothing.
//!
//! 2. **One canonical state**: `Game` always carries every field; camels a
//!    player owns live in the herd, never in the hand.
//!
//! 3. **Deterministic setup**: deck and bonus shuffles come from a seeded
//!    ChaCha RNG, so a seed reproduces a game exactly.
//!
//! ## Modules
//!
//! - `cards`: goods, deck construction and draws, multiset helpers
//! - `core`: players, game state, moves, RNG, configuration
//! - `scoring`: token stacks and end-of-game detection
//! - `rules`: the four player actions and turn handoff
//! - `store`: game persistence (in-memory and JSON file)
//! - `service`: create / look up / play games against a store
//!
//! ## Example
//!
//! ```
//! use jaipur_engine::{rules, Game, GameConfig, Good, PlayerId};
//!
//! let mut game = Game::new(1, "demo", &GameConfig::default().unshuffled());
//! let me = PlayerId::new(0);
//!
//! rules::take_all_camels(&mut game, me).unwrap();
//! assert_eq!(game.players[0].camels_count, 3);
//!
//! let earned = rules::sell_cards(&mut game, me, Good::Diamonds, 4).unwrap();
//! assert_eq!(earned, 7 + 7 + 5 + 5 + 4);
//! rules::advance_turn(&mut game);
//! ```

pub mod cards;
pub mod core;
pub mod error;
pub mod rules;
pub mod scoring;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use crate::cards::{Deck, Good};
pub use crate::core::{Game, GameConfig, GameId, GameRng, Move, Player, PlayerId};
pub use crate::error::{GameError, ServiceError, StoreError};
pub use crate::rules::GameResult;
pub use crate::scoring::{BonusTier, BonusTokens, TokenStack, TokenStacks};
pub use crate::service::GameService;
pub use crate::store::{GameStore, JsonFileStore, MemoryStore};
