//! Player identification and per-player holdings.
//!
//! ## PlayerId
//!
//! Type-safe seat index. The game is strictly two-player: seats 0 and 1.
//!
//! ## Player
//!
//! A player's hand of goods, their camel herd and their score.

use serde::{Deserialize, Serialize};

use crate::cards::{multiset, Good};

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 2;

/// Maximum number of goods (camels excluded) a hand may hold.
pub const HAND_LIMIT: usize = 7;

/// Seat index of a player.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
/// Ids arrive from callers unchecked, so an out-of-range id is representable;
/// it simply never matches the player to act.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that plays after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(((self.0 as usize + 1) % PLAYER_COUNT) as u8)
    }

    /// Both seats, in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One player's cards and score.
///
/// Camels never sit in `hand`: they are counted in `camels_count` (the herd)
/// so they never count towards `HAND_LIMIT`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub hand: Vec<Good>,
    pub camels_count: u32,
    pub score: u32,
}

impl Player {
    /// Create a player holding `hand`, with camels already moved to the herd.
    #[must_use]
    pub fn with_hand(hand: Vec<Good>) -> Self {
        let mut player = Self {
            hand,
            ..Self::default()
        };
        player.settle_camels();
        player
    }

    /// Move every camel in the hand into the herd.
    ///
    /// Returns the number of camels moved.
    pub fn settle_camels(&mut self) -> u32 {
        let before = self.hand.len();
        self.hand.retain(|good| !good.is_camel());
        let moved = (before - self.hand.len()) as u32;
        self.camels_count += moved;
        moved
    }

    /// Number of goods in hand, camels excluded.
    #[must_use]
    pub fn goods_in_hand(&self) -> usize {
        self.hand.iter().filter(|good| !good.is_camel()).count()
    }

    /// Whether the hand can take one more good without exceeding the limit.
    #[must_use]
    pub fn has_room(&self) -> bool {
        self.goods_in_hand() < HAND_LIMIT
    }

    /// Number of copies of `good` this player can hand over.
    ///
    /// Camels come from the herd, everything else from the hand.
    #[must_use]
    pub fn holding(&self, good: Good) -> usize {
        if good.is_camel() {
            self.camels_count as usize
        } else {
            multiset::count_of(&self.hand, good)
        }
    }

    /// Total number of cards held, herd included.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.camels_count as usize
    }
}
