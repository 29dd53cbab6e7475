use std::cmp::Ordering;

use itertools::Itertools;

use crate::cards::card::OwnedCard;
use crate::cards::deck::Deck;
use crate::utilities::constants::{DECK_SLOTS, TOP_BUDGET_MATCHES};

/// How far the owned cards get the user towards one desired deck.
/// Only produced when the overlap is worth money.
#[derive(Debug, PartialEq, Clone)]
pub struct OwnedOverlap {
    pub deck_name: String,
    pub deck_price: f64,
    pub cards_owned: u32,
    pub non_basic_total: u32,
    pub saved_value: f64,
    /// (raw card name, quantity applied) in deck-list order.
    pub cards: Vec<(String, u32)>,
}

/// One budget deck's overlap with a desired deck.
#[derive(Debug, PartialEq, Clone)]
pub struct BudgetMatch {
    pub name: String,
    pub price: f64,
    pub shared_count: u32,
    pub non_basic_total: u32,
    pub shared_value: f64,
}

/// The top budget decks for one desired deck, best shared value first.
#[derive(Debug, PartialEq, Clone)]
pub struct BudgetComparison {
    pub deck_name: String,
    pub deck_price: f64,
    pub matches: Vec<BudgetMatch>,
}

/// Walks each desired deck and totals the cards the inventory already
/// covers. Applied quantity per card is min(required, owned); the value
/// is the desired deck's own unit price, since that is what the user
/// avoids paying. Basic mana rows shrink the denominator instead.
pub fn evaluate_owned_cards(desired_decks: &[Deck], owned: &[OwnedCard]) -> Vec<OwnedOverlap> {
    desired_decks
        .iter()
        .filter_map(|deck| {
            let mut non_basic_total = DECK_SLOTS;
            let mut cards_owned = 0;
            let mut saved_value = 0.0;
            let mut cards = Vec::new();

            for entry in &deck.cards {
                if entry.name.is_basic_mana() {
                    non_basic_total -= 1;
                    continue;
                }
                if let Some(owned_card) = owned.iter().find(|card| card.name == entry.name) {
                    let applied = entry.quantity.min(owned_card.quantity);
                    cards_owned += applied;
                    saved_value += applied as f64 * entry.unit_price;
                    cards.push((entry.name.raw().to_string(), applied));
                }
            }

            (saved_value > 0.0).then(|| OwnedOverlap {
                deck_name: deck.name.clone(),
                deck_price: deck.price,
                cards_owned,
                non_basic_total,
                saved_value,
                cards,
            })
        })
        .collect()
}

/// Ranks every budget deck against each desired deck by the dollar value
/// of the cards they share, keeping the top five. Zero-value pairs are
/// dropped; the sort is stable, so ties at the cutoff keep the order the
/// budget decks were discovered in.
pub fn evaluate_budget_decks(desired_decks: &[Deck], budget_decks: &[Deck]) -> Vec<BudgetComparison> {
    desired_decks
        .iter()
        .map(|deck| {
            let matches = budget_decks
                .iter()
                .filter_map(|budget| shared_with(deck, budget))
                .sorted_by(|a, b| {
                    b.shared_value
                        .partial_cmp(&a.shared_value)
                        .unwrap_or(Ordering::Equal)
                })
                .take(TOP_BUDGET_MATCHES)
                .collect();

            BudgetComparison {
                deck_name: deck.name.clone(),
                deck_price: deck.price,
                matches,
            }
        })
        .collect()
}

/// Same overlap walk as the owned-cards evaluation, but supplied by a
/// budget deck's list and valued at the budget deck's unit prices.
fn shared_with(desired: &Deck, budget: &Deck) -> Option<BudgetMatch> {
    let mut non_basic_total = DECK_SLOTS;
    let mut shared_count = 0;
    let mut shared_value = 0.0;

    for entry in &desired.cards {
        if entry.name.is_basic_mana() {
            non_basic_total -= 1;
            continue;
        }
        if let Some(budget_card) = budget.cards.iter().find(|card| card.name == entry.name) {
            let applied = entry.quantity.min(budget_card.quantity);
            shared_count += applied;
            shared_value += applied as f64 * budget_card.unit_price;
        }
    }

    (shared_value > 0.0).then(|| BudgetMatch {
        name: budget.name.clone(),
        price: budget.price,
        shared_count,
        non_basic_total,
        shared_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::helpers::{deck_card, owned, sample_deck, tarn};

    #[test]
    fn applied_quantity_is_capped_by_the_deck_requirement() {
        let desired = vec![sample_deck("Grixis Death's Shadow", vec![tarn(4, 12.0)])];

        let partial = evaluate_owned_cards(&desired, &[owned("Scalding Tarn", 2)]);
        assert_eq!(partial[0].cards_owned, 2);
        assert_eq!(partial[0].saved_value, 24.0);

        let surplus = evaluate_owned_cards(&desired, &[owned("Scalding Tarn", 6)]);
        assert_eq!(surplus[0].cards_owned, 4);
        assert_eq!(surplus[0].saved_value, 48.0);
        assert_eq!(surplus[0].cards, vec![("Scalding Tarn".to_string(), 4)]);
    }

    #[test]
    fn matching_ignores_case() {
        let desired = vec![sample_deck("Shadow", vec![tarn(4, 12.0)])];
        let report = evaluate_owned_cards(&desired, &[owned("sCALDING tARN", 1)]);
        assert_eq!(report[0].saved_value, 12.0);
    }

    #[test]
    fn a_basic_mana_row_shrinks_the_denominator_once() {
        let desired = vec![sample_deck(
            "Mono U",
            vec![deck_card("Island", 17, 0.25), tarn(4, 12.0)],
        )];
        let report = evaluate_owned_cards(&desired, &[owned("Scalding Tarn", 4)]);
        assert_eq!(report[0].non_basic_total, 74);
        assert_eq!(report[0].cards_owned, 4);
        assert_eq!(report[0].saved_value, 48.0);
    }

    #[test]
    fn owned_basics_contribute_nothing() {
        let desired = vec![sample_deck("Mono U", vec![deck_card("Island", 17, 0.25)])];
        let report = evaluate_owned_cards(&desired, &[owned("Island", 17)]);
        assert!(report.is_empty());
    }

    #[test]
    fn decks_with_no_monetary_overlap_are_left_out() {
        let desired = vec![
            sample_deck("Shadow", vec![tarn(4, 12.0)]),
            sample_deck("Tron", vec![deck_card("Karn Liberated", 3, 40.0)]),
        ];
        let report = evaluate_owned_cards(&desired, &[owned("Scalding Tarn", 1)]);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].deck_name, "Shadow");
    }

    #[test]
    fn budget_overlap_is_valued_at_the_budget_decks_prices() {
        let desired = vec![sample_deck("Shadow", vec![tarn(4, 12.0)])];
        let budget = vec![sample_deck("Cheap Fetches", vec![tarn(2, 3.0)])];

        let report = evaluate_budget_decks(&desired, &budget);
        let entry = &report[0].matches[0];
        assert_eq!(entry.shared_count, 2);
        assert_eq!(entry.shared_value, 6.0);
        assert_eq!(entry.price, 6.0);
    }

    #[test]
    fn ranking_is_descending_zero_dropped_and_truncated_to_five() {
        let desired = vec![sample_deck("Shadow", vec![tarn(60, 1.0)])];
        let shared_values = [10.0, 50.0, 5.0, 30.0, 0.0, 20.0];
        let budget: Vec<_> = shared_values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                sample_deck(&format!("Budget {}", i), vec![tarn(1, *value)])
            })
            .collect();

        let report = evaluate_budget_decks(&desired, &budget);
        let values: Vec<f64> = report[0].matches.iter().map(|m| m.shared_value).collect();
        assert_eq!(values, vec![50.0, 30.0, 20.0, 10.0, 5.0]);

        // A sixth nonzero entry pushes the lowest out.
        let mut crowded = budget.clone();
        crowded.push(sample_deck("Budget 6", vec![tarn(1, 40.0)]));
        let report = evaluate_budget_decks(&desired, &crowded);
        let values: Vec<f64> = report[0].matches.iter().map(|m| m.shared_value).collect();
        assert_eq!(values, vec![50.0, 40.0, 30.0, 20.0, 10.0]);
    }

    #[test]
    fn ties_at_the_cutoff_keep_discovery_order() {
        let desired = vec![sample_deck("Shadow", vec![tarn(60, 1.0)])];
        let budget: Vec<_> = (0..7)
            .map(|i| sample_deck(&format!("Budget {}", i), vec![tarn(1, 10.0)]))
            .collect();

        let report = evaluate_budget_decks(&desired, &budget);
        let names: Vec<&str> = report[0].matches.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Budget 0", "Budget 1", "Budget 2", "Budget 3", "Budget 4"]
        );
    }
}
