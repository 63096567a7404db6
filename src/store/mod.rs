//! Game persistence.
//!
//! The rules engine never touches storage. Stores sit next to it so the
//! service layer can look games up by id and persist them after each move.
//!
//! ## Implementations
//!
//! - `MemoryStore`: binary snapshots held in memory (tests, embedding)
//! - `JsonFileStore`: one JSON array of games in a flat file

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use crate::core::{Game, GameId};
use crate::error::StoreError;

/// Storage for games, keyed by `Game::id`.
///
/// Stores hand out copies: mutating a returned game does not change what is
/// stored until it is passed back to `save`.
pub trait GameStore {
    /// All stored games, in id order.
    fn list(&self) -> Result<Vec<Game>, StoreError>;

    /// The game with `id`, if stored.
    fn get(&self, id: GameId) -> Result<Option<Game>, StoreError> {
        Ok(self.list()?.into_iter().find(|game| game.id == id))
    }

    /// Insert `game`, replacing any stored game with the same id.
    ///
    /// Returns every stored game after the write.
    fn save(&mut self, game: &Game) -> Result<Vec<Game>, StoreError>;

    /// Remove the game with `id`. Returns whether it existed.
    fn delete(&mut self, id: GameId) -> Result<bool, StoreError>;

    /// Remove every game.
    fn delete_all(&mut self) -> Result<(), StoreError>;
}
