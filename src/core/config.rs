//! Game setup configuration.

use serde::{Deserialize, Serialize};

/// Parameters used when a new game is dealt.
///
/// The rules themselves (hand limit, token values) are fixed; only setup is
/// configurable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the deck and bonus shuffles.
    /// `None` draws a fresh seed from the operating system for every game.
    pub seed: Option<u64>,

    /// Shuffle the deck and bonus stacks.
    /// When false every game is dealt from the unshuffled construction order.
    pub shuffle: bool,

    /// Cards dealt to each player (camels included, moved to the herd).
    pub starting_hand_size: usize,

    /// Cards drawn into the market next to the starting camels.
    pub market_draws: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            shuffle: true,
            starting_hand_size: 5,
            market_draws: 2,
        }
    }
}

impl GameConfig {
    /// Use a fixed seed so every game is dealt identically.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Deal from the unshuffled deck.
    #[must_use]
    pub fn unshuffled(mut self) -> Self {
        self.shuffle = false;
        self
    }

    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seed, None);
        assert!(config.shuffle);
        assert_eq!(config.starting_hand_size, 5);
        assert_eq!(config.market_draws, 2);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_seed(123)
            .unshuffled()
            .with_starting_hand_size(3);

        assert_eq!(config.seed, Some(123));
        assert!(!config.shuffle);
        assert_eq!(config.starting_hand_size, 3);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(config, GameConfig::default().with_seed(7));
    }
}
