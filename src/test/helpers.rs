use chrono::NaiveDate;

use crate::cards::card::{CardName, DeckCard, OwnedCard};
use crate::cards::deck::Deck;

pub fn deck_card(name: &str, quantity: u32, unit_price: f64) -> DeckCard {
    DeckCard {
        name: CardName::new(name),
        quantity,
        unit_price,
    }
}

pub fn tarn(quantity: u32, unit_price: f64) -> DeckCard {
    deck_card("Scalding Tarn", quantity, unit_price)
}

pub fn owned(name: &str, quantity: u32) -> OwnedCard {
    OwnedCard {
        name: CardName::new(name),
        quantity,
    }
}

/// A deck priced as the sum of its rows, dated and addressed arbitrarily.
pub fn sample_deck(name: &str, cards: Vec<DeckCard>) -> Deck {
    let price = cards
        .iter()
        .map(|card| card.quantity as f64 * card.unit_price)
        .sum();
    Deck {
        name: name.to_string(),
        url: "https://www.mtggoldfish.com/deck/784979#paper".to_string(),
        date: NaiveDate::from_ymd_opt(2017, 10, 5).unwrap(),
        price,
        cards,
    }
}
