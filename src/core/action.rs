//! Player moves as they arrive from a request layer.
//!
//! A move names one of the four actions plus its payload. Moves are plain
//! data: parsing them does not check any rule, `rules::apply` does.
//!
//! ```
//! use jaipur_engine::cards::Good;
//! use jaipur_engine::core::Move;
//!
//! let mv: Move = serde_json::from_str(r#"{"action": "sell", "good": "gold", "count": 3}"#).unwrap();
//! assert_eq!(mv, Move::Sell { good: Good::Gold, count: 3 });
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Good;

/// Cards named in an exchange. The market rarely holds more than five, so
/// they stay inline.
pub type Cards = SmallVec<[Good; 5]>;

/// One player action with its payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Move {
    /// Take one good from the market.
    TakeGood { good: Good },

    /// Swap `take` from the market against `give` from hand or herd.
    Exchange { take: Cards, give: Cards },

    /// Take every camel in the market.
    TakeAllCamels,

    /// Sell `count` cards of `good`.
    Sell { good: Good, count: u32 },
}

impl Move {
    /// Action name as used on the wire.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Move::TakeGood { .. } => "take-good",
            Move::Exchange { .. } => "exchange",
            Move::TakeAllCamels => "take-all-camels",
            Move::Sell { .. } => "sell",
        }
    }

    /// Build an exchange from slices.
    #[must_use]
    pub fn exchange(take: &[Good], give: &[Good]) -> Self {
        Move::Exchange {
            take: SmallVec::from_slice(take),
            give: SmallVec::from_slice(give),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::TakeGood { good } => write!(f, "take-good {good}"),
            Move::Exchange { take, give } => {
                write!(f, "exchange take {:?} give {:?}", take.as_slice(), give.as_slice())
            }
            Move::TakeAllCamels => f.write_str("take-all-camels"),
            Move::Sell { good, count } => write!(f, "sell {count} {good}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_each_action() {
        let take: Move = serde_json::from_str(r#"{"action": "take-good", "good": "cloth"}"#).unwrap();
        assert_eq!(take, Move::TakeGood { good: Good::Cloth });

        let exchange: Move = serde_json::from_str(
            r#"{"action": "exchange", "take": ["cloth", "camel"], "give": ["diamonds", "gold"]}"#,
        )
        .unwrap();
        assert_eq!(
            exchange,
            Move::exchange(&[Good::Cloth, Good::Camel], &[Good::Diamonds, Good::Gold])
        );

        let camels: Move = serde_json::from_str(r#"{"action": "take-all-camels"}"#).unwrap();
        assert_eq!(camels, Move::TakeAllCamels);

        let sell: Move =
            serde_json::from_str(r#"{"action": "sell", "good": "gold", "count": 2}"#).unwrap();
        assert_eq!(sell, Move::Sell { good: Good::Gold, count: 2 });
    }

    #[test]
    fn test_missing_payload_is_rejected() {
        assert!(serde_json::from_str::<Move>(r#"{"action": "take-good"}"#).is_err());
        assert!(serde_json::from_str::<Move>(r#"{"action": "sell", "good": "gold"}"#).is_err());
        assert!(serde_json::from_str::<Move>(r#"{"action": "fly"}"#).is_err());
    }

    #[test]
    fn test_name_matches_tag() {
        for mv in [
            Move::TakeGood { good: Good::Gold },
            Move::exchange(&[], &[]),
            Move::TakeAllCamels,
            Move::Sell { good: Good::Gold, count: 1 },
        ] {
            let json = serde_json::to_value(&mv).unwrap();
            assert_eq!(json["action"], mv.name());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::Sell { good: Good::Spice, count: 3 }.to_string(), "sell 3 spice");
        assert_eq!(Move::TakeAllCamels.to_string(), "take-all-camels");
    }
}
