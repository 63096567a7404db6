use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use super::GameStore;
use crate::core::{Game, GameId};
use crate::error::StoreError;

/// Flat-file store: every game in one JSON array.
///
/// Each write rewrites the whole file. A missing file reads as an empty store;
/// parent directories are created on the first write.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<Game>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_all(&self, games: &[Game]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec(games)?)?;
        debug!("wrote {} games to {}", games.len(), self.path.display());
        Ok(())
    }
}

impl GameStore for JsonFileStore {
    fn list(&self) -> Result<Vec<Game>, StoreError> {
        let mut games = self.read_all()?;
        games.sort_by_key(|game| game.id);
        Ok(games)
    }

    fn save(&mut self, game: &Game) -> Result<Vec<Game>, StoreError> {
        let mut games = self.read_all()?;
        match games.iter_mut().find(|stored| stored.id == game.id) {
            Some(stored) => *stored = game.clone(),
            None => games.push(game.clone()),
        }
        self.write_all(&games)?;
        Ok(games)
    }

    fn delete(&mut self, id: GameId) -> Result<bool, StoreError> {
        let mut games = self.read_all()?;
        let before = games.len();
        games.retain(|game| game.id != id);
        let found = games.len() != before;
        self.write_all(&games)?;
        Ok(found)
    }

    fn delete_all(&mut self) -> Result<(), StoreError> {
        self.write_all(&[])
    }
}
