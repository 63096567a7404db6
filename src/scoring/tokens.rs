//! Token stacks: the point values paid out for sales.
//!
//! Every sellable good has a stack of goods tokens laid out highest value
//! first, so each sale of that good is worth no more than the one before.
//! Selling three or more cards at once also pays out a bonus token from the
//! matching bonus tier; bonus stacks are shuffled once when the game is set
//! up and stay fixed afterwards.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Good;
use crate::core::rng::GameRng;

/// Goods token values per sellable good, top of the stack first.
pub const GOODS_TOKENS: [(Good, &[u32]); 6] = [
    (Good::Diamonds, &[7, 7, 5, 5, 5]),
    (Good::Gold, &[6, 6, 5, 5, 5]),
    (Good::Silver, &[5, 5, 5, 5, 5]),
    (Good::Cloth, &[5, 3, 3, 2, 2, 1, 1]),
    (Good::Spice, &[5, 3, 3, 2, 2, 1, 1]),
    (Good::Leather, &[4, 3, 2, 1, 1, 1, 1, 1, 1]),
];

/// Bonus token values per tier, before shuffling.
pub const BONUS_TOKENS: [(BonusTier, &[u32]); 3] = [
    (BonusTier::Three, &[2, 1, 2, 3, 1, 2, 3]),
    (BonusTier::Four, &[4, 6, 6, 4, 5, 5]),
    (BonusTier::Five, &[8, 10, 9, 8, 10]),
];

/// A stack of tokens. The first value is the top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenStack(Vector<u32>);

impl TokenStack {
    #[must_use]
    pub fn new(values: &[u32]) -> Self {
        Self(values.iter().copied().collect())
    }

    /// Remove and return the top token.
    pub fn take(&mut self) -> Option<u32> {
        self.0.pop_front()
    }

    #[must_use]
    pub fn peek(&self) -> Option<u32> {
        self.0.front().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Token values, top first.
    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    fn shuffle(&mut self, rng: &mut GameRng) {
        let mut values: Vec<u32> = self.values().collect();
        rng.shuffle(&mut values);
        self.0 = values.into_iter().collect();
    }
}

impl From<Vec<u32>> for TokenStack {
    fn from(values: Vec<u32>) -> Self {
        Self(values.into())
    }
}

/// Goods token stacks, one per sellable good.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenStacks(FxHashMap<Good, TokenStack>);

impl TokenStacks {
    /// Stacks seeded with the standard values.
    #[must_use]
    pub fn new() -> Self {
        Self(
            GOODS_TOKENS
                .iter()
                .map(|&(good, values)| (good, TokenStack::new(values)))
                .collect(),
        )
    }

    #[must_use]
    pub fn get(&self, good: Good) -> Option<&TokenStack> {
        self.0.get(&good)
    }

    /// Replace the stack for `good`.
    pub fn set(&mut self, good: Good, stack: TokenStack) {
        self.0.insert(good, stack);
    }

    /// Take the top token for `good`, if any remain.
    pub fn take(&mut self, good: Good) -> Option<u32> {
        self.0.get_mut(&good).and_then(TokenStack::take)
    }

    /// Whether `good` has no tokens left. A good without a stack counts as
    /// depleted.
    #[must_use]
    pub fn is_depleted(&self, good: Good) -> bool {
        self.get(good).map_or(true, TokenStack::is_empty)
    }
}

impl Default for TokenStacks {
    fn default() -> Self {
        Self::new()
    }
}

/// Bonus tier selected by the number of cards sold together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusTier {
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
}

impl BonusTier {
    pub const ALL: [BonusTier; 3] = [BonusTier::Three, BonusTier::Four, BonusTier::Five];

    /// Tier paid for a sale of `count` cards; five or more share the top tier.
    #[must_use]
    pub const fn for_sale(count: u32) -> Option<Self> {
        match count {
            0..=2 => None,
            3 => Some(BonusTier::Three),
            4 => Some(BonusTier::Four),
            _ => Some(BonusTier::Five),
        }
    }

    /// Name of the RNG stream this tier is shuffled with.
    #[must_use]
    pub const fn rng_context(self) -> &'static str {
        match self {
            BonusTier::Three => "bonus-3",
            BonusTier::Four => "bonus-4",
            BonusTier::Five => "bonus-5",
        }
    }
}

/// Bonus token stacks, one per tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BonusTokens(FxHashMap<BonusTier, TokenStack>);

impl BonusTokens {
    /// Bonus stacks with the standard values.
    ///
    /// Each tier is shuffled on its own stream derived from `rng` when one is
    /// given; without an RNG the stacks keep their seed order.
    #[must_use]
    pub fn new(rng: Option<&GameRng>) -> Self {
        Self(
            BONUS_TOKENS
                .iter()
                .map(|&(tier, values)| {
                    let mut stack = TokenStack::new(values);
                    if let Some(rng) = rng {
                        stack.shuffle(&mut rng.for_context(tier.rng_context()));
                    }
                    (tier, stack)
                })
                .collect(),
        )
    }

    #[must_use]
    pub fn get(&self, tier: BonusTier) -> Option<&TokenStack> {
        self.0.get(&tier)
    }

    /// Replace the stack for `tier`.
    pub fn set(&mut self, tier: BonusTier, stack: TokenStack) {
        self.0.insert(tier, stack);
    }

    /// Take the top bonus token of `tier`, if any remain.
    pub fn take(&mut self, tier: BonusTier) -> Option<u32> {
        self.0.get_mut(&tier).and_then(TokenStack::take)
    }
}
