//! Error types.
//!
//! `GameError` covers every way a player action can break the rules. None of
//! them are retryable and the game is never modified when one is returned.
//! `StoreError` and `ServiceError` belong to the collaborators around the
//! rules engine.

use crate::cards::Good;
use crate::core::{GameId, PlayerId};

/// Rule violations raised by player actions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("it is not {player}'s turn ({current} is to play)")]
    InvalidTurn { player: PlayerId, current: PlayerId },

    #[error("the game is over")]
    GameOver,

    #[error("hand already holds the maximum of {limit} goods")]
    HandLimitExceeded { limit: usize },

    #[error("no {0} in the market")]
    GoodNotAvailable(Good),

    #[error("camels can only be taken all at once")]
    CamelNotAllowed,

    #[error("exchange takes {take} cards but gives {give}")]
    LengthMismatch { take: usize, give: usize },

    #[error("cards to take are not all in the market")]
    TakeNotInMarket,

    #[error("cards to give are not all in the player's hand")]
    GiveNotInHand,

    #[error("invalid sale count: {0}")]
    InvalidCount(u32),

    #[error("{0} cannot be sold")]
    NotSellable(Good),

    #[error("cannot sell {requested} {good}, hand holds {held}")]
    InsufficientHand {
        good: Good,
        requested: u32,
        held: usize,
    },
}

/// A string that does not name a good.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown good: {0}")]
pub struct ParseGoodError(pub String);

/// Failures of a game store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed game data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("game snapshot codec failed: {0}")]
    Codec(#[from] bincode::Error),
}

/// Failures surfaced by `GameService`.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("missing game name")]
    MissingName,

    #[error("game {0} not found")]
    NotFound(GameId),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// HTTP-style status code a request layer should answer with.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::MissingName | ServiceError::Game(_) => 400,
            ServiceError::NotFound(_) => 404,
            ServiceError::Store(_) => 500,
        }
    }
}
