//! Scoring: token payouts and end-of-game detection.

pub mod end;
pub mod tokens;

pub use end::{end_condition, is_done, EndReason};
pub use tokens::{BonusTier, BonusTokens, TokenStack, TokenStacks, BONUS_TOKENS, GOODS_TOKENS};
