//! Goods: the card types of the game.
//!
//! Six goods are sellable commodities, split into a *scarce* group
//! (diamonds, gold, silver) and a *common* group (cloth, spice, leather).
//! Camels are a seventh card type that can never be sold.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseGoodError;

/// A card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Good {
    Diamonds,
    Gold,
    Silver,
    Cloth,
    Spice,
    Leather,
    Camel,
}

impl Good {
    /// Every card type, in deck construction order.
    pub const ALL: [Good; 7] = [
        Good::Diamonds,
        Good::Gold,
        Good::Silver,
        Good::Cloth,
        Good::Spice,
        Good::Leather,
        Good::Camel,
    ];

    /// Goods that can be sold for tokens.
    pub const SELLABLE: [Good; 6] = [
        Good::Diamonds,
        Good::Gold,
        Good::Silver,
        Good::Cloth,
        Good::Spice,
        Good::Leather,
    ];

    /// Goods whose single depleted token stack ends the game.
    pub const SCARCE: [Good; 3] = [Good::Diamonds, Good::Gold, Good::Silver];

    /// Goods that end the game only once all of them are depleted.
    pub const COMMON: [Good; 3] = [Good::Cloth, Good::Spice, Good::Leather];

    #[must_use]
    pub const fn is_camel(self) -> bool {
        matches!(self, Good::Camel)
    }

    #[must_use]
    pub const fn is_sellable(self) -> bool {
        !self.is_camel()
    }

    #[must_use]
    pub const fn is_scarce(self) -> bool {
        matches!(self, Good::Diamonds | Good::Gold | Good::Silver)
    }

    #[must_use]
    pub const fn is_common(self) -> bool {
        matches!(self, Good::Cloth | Good::Spice | Good::Leather)
    }

    /// Number of copies of this good in the draw pile built at game start.
    ///
    /// Camels count 8 here: the other 3 of the 11 camels start in the market.
    #[must_use]
    pub const fn deck_count(self) -> usize {
        match self {
            Good::Diamonds | Good::Gold | Good::Silver => 6,
            Good::Cloth | Good::Spice => 8,
            Good::Leather => 10,
            Good::Camel => 8,
        }
    }

    /// Lowercase name, as used on the wire.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Good::Diamonds => "diamonds",
            Good::Gold => "gold",
            Good::Silver => "silver",
            Good::Cloth => "cloth",
            Good::Spice => "spice",
            Good::Leather => "leather",
            Good::Camel => "camel",
        }
    }
}

impl fmt::Display for Good {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Good {
    type Err = ParseGoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Good::ALL
            .into_iter()
            .find(|good| good.name() == s)
            .ok_or_else(|| ParseGoodError(s.to_string()))
    }
}
