//! Multiset operations over card sequences.
//!
//! Markets and hands are ordered, but the trading rules only care about how
//! many of each good a sequence holds. These helpers answer containment and
//! perform bulk removal without disturbing the order of what is left.

use rustc_hash::FxHashMap;

use super::good::Good;

/// Count the occurrences of every good in `cards`.
#[must_use]
pub fn counts(cards: &[Good]) -> FxHashMap<Good, usize> {
    let mut counts = FxHashMap::default();
    for &card in cards {
        *counts.entry(card).or_insert(0) += 1;
    }
    counts
}

/// Number of copies of `good` in `cards`.
#[must_use]
pub fn count_of(cards: &[Good], good: Good) -> usize {
    cards.iter().filter(|&&card| card == good).count()
}

/// Whether `subset` is a sub-multiset of `cards`.
#[must_use]
pub fn contains_all(cards: &[Good], subset: &[Good]) -> bool {
    let available = counts(cards);
    counts(subset)
        .into_iter()
        .all(|(good, needed)| available.get(&good).copied().unwrap_or(0) >= needed)
}

/// Remove one instance of `good`, the first one found.
///
/// Returns `false` if `good` was not present.
pub fn remove_one(cards: &mut Vec<Good>, good: Good) -> bool {
    match cards.iter().position(|&card| card == good) {
        Some(index) => {
            cards.remove(index);
            true
        }
        None => false,
    }
}

/// Remove one instance per entry of `items`.
///
/// Callers check `contains_all` first; entries that are not present are
/// skipped. Returns the number of cards removed.
pub fn remove_all(cards: &mut Vec<Good>, items: &[Good]) -> usize {
    items.iter().filter(|&&item| remove_one(cards, item)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let cards = [Good::Gold, Good::Camel, Good::Gold];
        let counts = counts(&cards);
        assert_eq!(counts[&Good::Gold], 2);
        assert_eq!(counts[&Good::Camel], 1);
        assert!(!counts.contains_key(&Good::Silver));
    }

    #[test]
    fn test_contains_all_respects_multiplicity() {
        let market = [Good::Cloth, Good::Camel, Good::Cloth];

        assert!(contains_all(&market, &[]));
        assert!(contains_all(&market, &[Good::Cloth, Good::Cloth]));
        assert!(contains_all(&market, &[Good::Camel, Good::Cloth]));
        assert!(!contains_all(&market, &[Good::Camel, Good::Camel]));
        assert!(!contains_all(&market, &[Good::Silver]));
    }

    #[test]
    fn test_remove_all_keeps_order() {
        let mut cards = vec![Good::Gold, Good::Spice, Good::Gold, Good::Leather];
        let removed = remove_all(&mut cards, &[Good::Gold, Good::Leather]);

        assert_eq!(removed, 2);
        assert_eq!(cards, vec![Good::Spice, Good::Gold]);
    }

    #[test]
    fn test_remove_one_missing() {
        let mut cards = vec![Good::Gold];
        assert!(!remove_one(&mut cards, Good::Silver));
        assert_eq!(cards, vec![Good::Gold]);
    }

    #[test]
    fn test_count_of() {
        let cards = [Good::Gold, Good::Camel, Good::Gold];
        assert_eq!(count_of(&cards, Good::Gold), 2);
        assert_eq!(count_of(&cards, Good::Diamonds), 0);
    }
}
