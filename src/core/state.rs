//! Game state: the aggregate every action mutates.
//!
//! ## Game
//!
//! One struct holds everything about a game in progress:
//! - The draw pile and the market
//! - Both players' hands, herds and scores
//! - Whose turn it is
//! - Goods and bonus token stacks
//! - Whether the game has ended
//!
//! Every field is always present. A game is cloned cheaply (the deck and token
//! stacks are persistent vectors) and round-trips through serde, so stores can
//! keep either JSON or compact bincode snapshots.

use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::player::{Player, PlayerId, PLAYER_COUNT};
use super::rng::GameRng;
use crate::cards::{draw_cards, init_deck, Deck, Good, DECK_SIZE};
use crate::scoring::{BonusTokens, TokenStacks};

/// Game identifier, assigned sequentially by the service.
pub type GameId = u64;

/// Camels laid face up in the market before any card is drawn.
pub const MARKET_CAMELS: usize = 3;

/// Every card in the game: the draw pile plus the starting market camels.
pub const TOTAL_CARDS: usize = DECK_SIZE + MARKET_CAMELS;

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub name: String,

    /// Seed the deck and bonus stacks were shuffled with.
    pub seed: u64,

    /// Draw pile, consumed from the front.
    pub deck: Deck,

    /// Face-up cards both players trade with.
    pub market: Vec<Good>,

    pub players: [Player; PLAYER_COUNT],

    /// Player allowed to act.
    pub current_player: PlayerId,

    pub tokens: TokenStacks,
    pub bonus_tokens: BonusTokens,

    /// Set once an end condition is reached; never cleared.
    pub is_done: bool,
}

impl Game {
    /// Deal a new game.
    ///
    /// The market gets `MARKET_CAMELS` camels plus `config.market_draws` cards
    /// from the deck, then each player is dealt `config.starting_hand_size`
    /// cards in seat order. Camels dealt to a player go straight to the herd.
    #[must_use]
    pub fn new(id: GameId, name: impl Into<String>, config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let mut deck = if config.shuffle {
            init_deck(Some(&mut rng.for_context("deck")))
        } else {
            init_deck(None)
        };

        let mut market = vec![Good::Camel; MARKET_CAMELS];
        market.extend(draw_cards(&mut deck, config.market_draws));

        let players = [(); PLAYER_COUNT]
            .map(|_| Player::with_hand(draw_cards(&mut deck, config.starting_hand_size)));

        let bonus_tokens = BonusTokens::new(config.shuffle.then_some(&rng));

        Self {
            id,
            name: name.into(),
            seed: rng.seed(),
            deck,
            market,
            players,
            current_player: PlayerId::default(),
            tokens: TokenStacks::new(),
            bonus_tokens,
            is_done: false,
        }
    }

    /// Get a player's holdings.
    ///
    /// Returns `None` for an id outside the table.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&Player> {
        self.players.get(player.index())
    }

    /// Number of cards still in play: deck, market, hands and herds.
    ///
    /// Equals `TOTAL_CARDS` minus the cards sold so far.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.deck.len()
            + self.market.len()
            + self.players.iter().map(Player::card_count).sum::<usize>()
    }

    /// Encode the game as a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a snapshot produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

impl Default for Game {
    /// An empty table: no deck, no market, empty hands, full token stacks.
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            seed: 0,
            deck: Deck::new(),
            market: Vec::new(),
            players: Default::default(),
            current_player: PlayerId::default(),
            tokens: TokenStacks::new(),
            bonus_tokens: BonusTokens::new(None),
            is_done: false,
        }
    }
}
