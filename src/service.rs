//! Game service: the glue a request layer calls into.
//!
//! The service owns a store and the setup config. It creates games with
//! sequential ids, loads a game for each move, runs the move through the
//! rules engine and persists the result. Methods take `&mut self`, so moves
//! on one service are applied one at a time.

use log::{info, warn};

use crate::core::{Game, GameConfig, GameId, Move, PlayerId};
use crate::error::ServiceError;
use crate::rules;
use crate::store::GameStore;

/// Creates, plays and persists games.
#[derive(Debug)]
pub struct GameService<S> {
    store: S,
    config: GameConfig,
}

impl<S: GameStore> GameService<S> {
    pub fn new(store: S, config: GameConfig) -> Self {
        Self { store, config }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Deal a new game named `name` and store it.
    ///
    /// The id is one more than the number of stored games. Ids are only
    /// unique as long as games are never deleted.
    pub fn create_game(&mut self, name: &str) -> Result<Game, ServiceError> {
        if name.trim().is_empty() {
            return Err(ServiceError::MissingName);
        }

        let id = self.store.list()?.len() as GameId + 1;
        let game = Game::new(id, name, &self.config);
        self.store.save(&game)?;
        info!("created game {} ({:?}) with seed {}", game.id, game.name, game.seed);
        Ok(game)
    }

    /// Every stored game.
    pub fn games(&self) -> Result<Vec<Game>, ServiceError> {
        Ok(self.store.list()?)
    }

    /// The game with `id`.
    pub fn game(&self, id: GameId) -> Result<Game, ServiceError> {
        self.store.get(id)?.ok_or(ServiceError::NotFound(id))
    }

    /// Apply `mv` for `player` in game `id` and persist the new state.
    ///
    /// The stored game is left untouched when the move is rejected.
    pub fn play(&mut self, id: GameId, player: PlayerId, mv: &Move) -> Result<Game, ServiceError> {
        let mut game = self.game(id)?;
        if let Err(err) = rules::apply(&mut game, player, mv) {
            warn!("game {}: rejected {} from {}: {}", id, mv, player, err);
            return Err(err.into());
        }
        self.store.save(&game)?;
        Ok(game)
    }

    /// End `player`'s turn in game `id`.
    pub fn end_turn(&mut self, id: GameId, player: PlayerId) -> Result<Game, ServiceError> {
        let mut game = self.game(id)?;
        rules::end_turn(&mut game, player)?;
        self.store.save(&game)?;
        Ok(game)
    }

    /// Remove game `id`. Returns whether it existed.
    pub fn delete_game(&mut self, id: GameId) -> Result<bool, ServiceError> {
        Ok(self.store.delete(id)?)
    }

    /// Remove every game.
    pub fn delete_all(&mut self) -> Result<(), ServiceError> {
        Ok(self.store.delete_all()?)
    }
}
