use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cards::card::DeckCard;

/// A fetched deck. Constructed once when the page is scraped (or when a
/// cached snapshot is loaded) and never mutated afterwards.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub url: String,
    pub date: NaiveDate,
    pub price: f64,
    pub cards: Vec<DeckCard>,
}
