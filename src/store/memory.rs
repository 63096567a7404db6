use std::collections::BTreeMap;

use super::GameStore;
use crate::core::{Game, GameId};
use crate::error::StoreError;

/// In-memory store.
///
/// Games are kept as bincode snapshots, so nothing a caller holds aliases
/// stored state.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    snapshots: BTreeMap<GameId, Vec<u8>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl GameStore for MemoryStore {
    fn list(&self) -> Result<Vec<Game>, StoreError> {
        self.snapshots
            .values()
            .map(|bytes| Game::from_bytes(bytes).map_err(StoreError::from))
            .collect()
    }

    fn get(&self, id: GameId) -> Result<Option<Game>, StoreError> {
        self.snapshots
            .get(&id)
            .map(|bytes| Game::from_bytes(bytes))
            .transpose()
            .map_err(StoreError::from)
    }

    fn save(&mut self, game: &Game) -> Result<Vec<Game>, StoreError> {
        self.snapshots.insert(game.id, game.to_bytes()?);
        self.list()
    }

    fn delete(&mut self, id: GameId) -> Result<bool, StoreError> {
        Ok(self.snapshots.remove(&id).is_some())
    }

    fn delete_all(&mut self) -> Result<(), StoreError> {
        self.snapshots.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    fn game(id: GameId) -> Game {
        Game::new(id, format!("game {id}"), &GameConfig::default().with_seed(id))
    }

    #[test]
    fn test_save_and_get() {
        let mut store = MemoryStore::new();
        let saved = store.save(&game(1)).unwrap();

        assert_eq!(saved.len(), 1);
        assert_eq!(store.get(1).unwrap(), Some(game(1)));
        assert_eq!(store.get(2).unwrap(), None);
    }

    #[test]
    fn test_save_replaces_same_id() {
        let mut store = MemoryStore::new();
        store.save(&game(1)).unwrap();

        let mut updated = game(1);
        updated.players[0].score = 12;
        let saved = store.save(&updated).unwrap();

        assert_eq!(saved.len(), 1);
        assert_eq!(store.get(1).unwrap().unwrap().players[0].score, 12);
    }

    #[test]
    fn test_returned_games_are_copies() {
        let mut store = MemoryStore::new();
        store.save(&game(1)).unwrap();

        let mut copy = store.get(1).unwrap().unwrap();
        copy.market.clear();

        assert_eq!(store.get(1).unwrap().unwrap().market.len(), 5);
    }

    #[test]
    fn test_delete() {
        let mut store = MemoryStore::new();
        store.save(&game(1)).unwrap();
        store.save(&game(2)).unwrap();

        assert!(store.delete(1).unwrap());
        assert!(!store.delete(1).unwrap());
        assert_eq!(store.len(), 1);

        store.delete_all().unwrap();
        assert!(store.is_empty());
        assert!(store.list().unwrap().is_empty());
    }
}
