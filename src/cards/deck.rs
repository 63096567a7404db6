//! Draw pile construction and draw semantics.
//!
//! The deck is an ordered sequence consumed from the front. It is backed by
//! `im::Vector` so cloning a game (snapshots, what-if evaluation) does not
//! copy the pile.

use im::Vector;

use super::good::Good;
use crate::core::rng::GameRng;

/// The shared draw pile.
pub type Deck = Vector<Good>;

/// Number of cards in a freshly built draw pile.
pub const DECK_SIZE: usize = 52;

/// Build the 52-card draw pile.
///
/// Cards are laid out in `Good::ALL` order (all diamonds, then all gold, ...)
/// and shuffled when an RNG is supplied. Passing `None` keeps construction
/// order, which makes game layouts reproducible by hand.
#[must_use]
pub fn init_deck(rng: Option<&mut GameRng>) -> Deck {
    let mut cards: Vec<Good> = Good::ALL
        .iter()
        .flat_map(|&good| std::iter::repeat(good).take(good.deck_count()))
        .collect();

    if let Some(rng) = rng {
        rng.shuffle(&mut cards);
    }

    cards.into_iter().collect()
}

/// Remove up to `count` cards from the front of `deck` and return them.
///
/// Drawing from a short or empty deck is not an error: only the remaining
/// cards are returned.
pub fn draw_cards(deck: &mut Deck, count: usize) -> Vec<Good> {
    (0..count).map_while(|_| deck.pop_front()).collect()
}

/// Draw a single card, if any remain.
pub fn draw_card(deck: &mut Deck) -> Option<Good> {
    deck.pop_front()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(deck: &Deck, good: Good) -> usize {
        deck.iter().filter(|&&g| g == good).count()
    }

    #[test]
    fn test_init_deck_counts() {
        let mut rng = GameRng::new(42);
        let deck = init_deck(Some(&mut rng));

        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(count(&deck, Good::Diamonds), 6);
        assert_eq!(count(&deck, Good::Gold), 6);
        assert_eq!(count(&deck, Good::Silver), 6);
        assert_eq!(count(&deck, Good::Cloth), 8);
        assert_eq!(count(&deck, Good::Spice), 8);
        assert_eq!(count(&deck, Good::Leather), 10);
        assert_eq!(count(&deck, Good::Camel), 8);
    }

    #[test]
    fn test_init_deck_unshuffled_order() {
        let deck = init_deck(None);

        assert_eq!(deck[0], Good::Diamonds);
        assert_eq!(deck[6], Good::Gold);
        assert_eq!(deck[12], Good::Silver);
        assert_eq!(deck[18], Good::Cloth);
        assert_eq!(deck[26], Good::Spice);
        assert_eq!(deck[34], Good::Leather);
        assert_eq!(deck[44], Good::Camel);
        assert_eq!(deck[DECK_SIZE - 1], Good::Camel);
    }

    #[test]
    fn test_init_deck_seeded_is_deterministic() {
        let deck1 = init_deck(Some(&mut GameRng::new(7)));
        let deck2 = init_deck(Some(&mut GameRng::new(7)));
        assert_eq!(deck1, deck2);
        assert_ne!(deck1, init_deck(None));
    }

    #[test]
    fn test_draw_cards() {
        let mut deck: Deck = vec![Good::Camel, Good::Diamonds, Good::Gold].into();
        let drawn = draw_cards(&mut deck, 1);

        assert_eq!(drawn, vec![Good::Camel]);
        assert_eq!(deck.len(), 2);
        assert_eq!(deck[0], Good::Diamonds);
    }

    #[test]
    fn test_draw_cards_empty_deck() {
        let mut deck = Deck::new();
        assert!(draw_cards(&mut deck, 1).is_empty());
        assert!(deck.is_empty());
        assert_eq!(draw_card(&mut deck), None);
    }

    #[test]
    fn test_draw_cards_partial() {
        let mut deck: Deck = vec![Good::Spice, Good::Cloth].into();
        let drawn = draw_cards(&mut deck, 5);

        assert_eq!(drawn, vec![Good::Spice, Good::Cloth]);
        assert!(deck.is_empty());
    }
}
