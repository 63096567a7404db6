//! End-of-game detection.

use serde::{Deserialize, Serialize};

use super::tokens::TokenStacks;
use crate::cards::{Deck, Good};
use crate::core::Game;

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The draw pile is empty.
    DeckExhausted,
    /// A scarce good has no tokens left.
    ScarceDepleted(Good),
    /// Every common good has run out of tokens.
    CommonDepleted,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndReason::DeckExhausted => f.write_str("deck exhausted"),
            EndReason::ScarceDepleted(good) => write!(f, "{good} tokens depleted"),
            EndReason::CommonDepleted => f.write_str("all common goods depleted"),
        }
    }
}

/// Check the end conditions against a deck and the goods tokens.
///
/// Returns `None` while the game continues.
#[must_use]
pub fn end_condition(deck: &Deck, tokens: &TokenStacks) -> Option<EndReason> {
    if deck.is_empty() {
        return Some(EndReason::DeckExhausted);
    }

    if let Some(good) = Good::SCARCE.into_iter().find(|&good| tokens.is_depleted(good)) {
        return Some(EndReason::ScarceDepleted(good));
    }

    if Good::COMMON.iter().all(|&good| tokens.is_depleted(good)) {
        return Some(EndReason::CommonDepleted);
    }

    None
}

/// Whether `game` has ended, either already flagged or by its current state.
#[must_use]
pub fn is_done(game: &Game) -> bool {
    game.is_done || end_condition(&game.deck, &game.tokens).is_some()
}
