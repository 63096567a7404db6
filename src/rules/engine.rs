//! The four player actions, turn handoff and game results.
//!
//! Every action takes exclusive access to the game, validates everything it
//! needs first and only then mutates. An `Err` therefore always leaves the
//! game exactly as it was.
//!
//! Actions never pass the turn. Callers decide when a turn is over and call
//! `advance_turn`.

use log::{debug, info};

use crate::cards::{draw_card, multiset, Good};
use crate::core::{Game, Move, Player, PlayerId, HAND_LIMIT};
use crate::error::GameError;
use crate::scoring::{end_condition, BonusTier};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Apply a move for `player`.
///
/// Returns the points scored, which is zero for everything but a sale.
pub fn apply(game: &mut Game, player: PlayerId, mv: &Move) -> Result<u32, GameError> {
    debug!("game {}: {} plays {}", game.id, player, mv);
    match mv {
        Move::TakeGood { good } => take_good(game, player, *good).map(|()| 0),
        Move::Exchange { take, give } => exchange(game, player, take, give).map(|()| 0),
        Move::TakeAllCamels => take_all_camels(game, player).map(|_| 0),
        Move::Sell { good, count } => sell_cards(game, player, *good, *count),
    }
}

/// Take one good from the market into the hand.
///
/// The gap in the market is refilled from the deck; once the deck is empty
/// nothing is added.
pub fn take_good(game: &mut Game, player: PlayerId, good: Good) -> Result<(), GameError> {
    let hand = check_turn(game, player)?;
    if !hand.has_room() {
        return Err(GameError::HandLimitExceeded { limit: HAND_LIMIT });
    }
    if good.is_camel() {
        return Err(GameError::CamelNotAllowed);
    }
    if !game.market.contains(&good) {
        return Err(GameError::GoodNotAvailable(good));
    }

    multiset::remove_one(&mut game.market, good);
    holder(game, player).hand.push(good);
    if let Some(card) = draw_card(&mut game.deck) {
        game.market.push(card);
    }

    finish_action(game);
    Ok(())
}

/// Swap `take` from the market against `give` from the player.
///
/// Both sides must have the same length. Camels given come from the herd and
/// camels taken join it. No hand limit applies to an exchange.
pub fn exchange(
    game: &mut Game,
    player: PlayerId,
    take: &[Good],
    give: &[Good],
) -> Result<(), GameError> {
    let holdings = check_turn(game, player)?;
    if take.len() != give.len() {
        return Err(GameError::LengthMismatch {
            take: take.len(),
            give: give.len(),
        });
    }
    if !multiset::contains_all(&game.market, take) {
        return Err(GameError::TakeNotInMarket);
    }
    let can_give = multiset::counts(give)
        .into_iter()
        .all(|(good, needed)| holdings.holding(good) >= needed);
    if !can_give {
        return Err(GameError::GiveNotInHand);
    }

    multiset::remove_all(&mut game.market, take);
    game.market.extend_from_slice(give);

    let acting = holder(game, player);
    let (camels_given, goods_given): (Vec<Good>, Vec<Good>) =
        give.iter().copied().partition(|good| good.is_camel());
    multiset::remove_all(&mut acting.hand, &goods_given);
    acting.camels_count -= camels_given.len() as u32;
    acting.hand.extend_from_slice(take);
    acting.settle_camels();

    finish_action(game);
    Ok(())
}

/// Move every camel in the market to the player's herd.
///
/// Returns the number of camels taken; zero is a valid no-op.
pub fn take_all_camels(game: &mut Game, player: PlayerId) -> Result<u32, GameError> {
    check_turn(game, player)?;

    let before = game.market.len();
    game.market.retain(|good| !good.is_camel());
    let taken = (before - game.market.len()) as u32;
    holder(game, player).camels_count += taken;

    finish_action(game);
    Ok(taken)
}

/// Sell `count` cards of `good` from the player's hand.
///
/// Each card pays the top goods token while any remain; the sale then pays
/// the top bonus token of its tier, if any. Empty stacks pay nothing.
/// Returns the points scored.
pub fn sell_cards(
    game: &mut Game,
    player: PlayerId,
    good: Good,
    count: u32,
) -> Result<u32, GameError> {
    let hand = check_turn(game, player)?;
    if count < 1 {
        return Err(GameError::InvalidCount(count));
    }
    if !good.is_sellable() {
        return Err(GameError::NotSellable(good));
    }
    let held = multiset::count_of(&hand.hand, good);
    if held < count as usize {
        return Err(GameError::InsufficientHand {
            good,
            requested: count,
            held,
        });
    }

    let mut earned = 0;
    for _ in 0..count {
        multiset::remove_one(&mut holder(game, player).hand, good);
        earned += game.tokens.take(good).unwrap_or(0);
    }
    if let Some(tier) = BonusTier::for_sale(count) {
        earned += game.bonus_tokens.take(tier).unwrap_or(0);
    }
    holder(game, player).score += earned;
    debug!("game {}: {} sold {} {} for {}", game.id, player, count, good, earned);

    finish_action(game);
    Ok(earned)
}

/// Pass the turn to the other player.
pub fn advance_turn(game: &mut Game) {
    game.current_player = game.current_player.next();
}

/// Pass the turn on behalf of `player`, who must be the one to act.
pub fn end_turn(game: &mut Game, player: PlayerId) -> Result<(), GameError> {
    check_turn(game, player)?;
    advance_turn(game);
    debug!("game {}: {} to play", game.id, game.current_player);
    Ok(())
}

/// Outcome of a finished game, `None` while it is still running.
#[must_use]
pub fn result(game: &Game) -> Option<GameResult> {
    if !game.is_done {
        return None;
    }

    let [first, second] = &game.players;
    Some(match first.score.cmp(&second.score) {
        std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::new(0)),
        std::cmp::Ordering::Less => GameResult::Winner(PlayerId::new(1)),
        std::cmp::Ordering::Equal => GameResult::Draw,
    })
}

/// Common precondition of every action: the game is running and it is
/// `player`'s turn. Returns the acting player's holdings for further checks.
fn check_turn(game: &Game, player: PlayerId) -> Result<&Player, GameError> {
    if game.is_done {
        return Err(GameError::GameOver);
    }
    if player != game.current_player {
        return Err(GameError::InvalidTurn {
            player,
            current: game.current_player,
        });
    }
    game.player(player).ok_or(GameError::InvalidTurn {
        player,
        current: game.current_player,
    })
}

/// Acting player's holdings. Only called after `check_turn` succeeded.
fn holder(game: &mut Game, player: PlayerId) -> &mut Player {
    &mut game.players[player.index()]
}

/// Re-evaluate the end conditions. The flag is sticky.
fn finish_action(game: &mut Game) {
    if game.is_done {
        return;
    }
    if let Some(reason) = end_condition(&game.deck, &game.tokens) {
        game.is_done = true;
        info!("game {} over: {}", game.id, reason);
    }
}
