use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A card name with a normalized form used for all comparisons.
/// MTGGoldfish, the inventory file and the wishlist may disagree on
/// capitalization, so equality, ordering and hashing all go through the
/// lowercased form while the raw spelling is kept for display.
#[derive(Debug, Clone)]
pub struct CardName {
    raw: String,
    normalized: String,
}

impl CardName {
    pub fn new(raw: &str) -> Self {
        let raw = raw.trim().to_string();
        let normalized = raw.to_lowercase();
        CardName { raw, normalized }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Basic mana cards are excluded from all overlap analysis.
    pub fn is_basic_mana(&self) -> bool {
        matches!(
            self.normalized.as_str(),
            "mountain" | "swamp" | "plains" | "island" | "forest"
        )
    }
}

impl fmt::Display for CardName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl PartialEq for CardName {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for CardName {}

impl PartialOrd for CardName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CardName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized.cmp(&other.normalized)
    }
}

impl Hash for CardName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl Serialize for CardName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for CardName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CardName::new(&s))
    }
}

/// One row of a fetched deck list. The unit price is the row total
/// divided by the quantity, so it is always present on deck entries.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DeckCard {
    pub name: CardName,
    pub quantity: u32,
    pub unit_price: f64,
}

/// One line of the owned-card inventory. Inventory entries carry no
/// price; valuation always comes from the deck being evaluated.
#[derive(Debug, PartialEq, Clone)]
pub struct OwnedCard {
    pub name: CardName,
    pub quantity: u32,
}
