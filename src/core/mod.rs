//! Core game types: players, state, moves, RNG, configuration.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Cards, Move};
pub use config::GameConfig;
pub use player::{Player, PlayerId, HAND_LIMIT, PLAYER_COUNT};
pub use rng::GameRng;
pub use state::{Game, GameId, MARKET_CAMELS, TOTAL_CARDS};
