pub const GOLDFISH_URL: &str = "https://www.mtggoldfish.com";
pub const BUDGET_DECKS_PATH: &str = "/decks/budget/modern#paper";

pub const OWNED_CARDS_FILE: &str = "owned_cards.txt";
pub const DESIRED_DECKS_FILE: &str = "desired_decks.txt";
pub const DECK_CACHE_DIR: &str = "deck_cache";

/// Cached decks older than this are flagged in the fetch summary.
pub const STALE_AFTER_DAYS: i64 = 30;

/// A constructed deck is 60 main + 15 sideboard cards; the non-basic
/// denominator starts here and shrinks by one per basic-mana row.
pub const DECK_SLOTS: u32 = 75;

/// How many budget decks to keep per desired deck in the ranking.
pub const TOP_BUDGET_MATCHES: usize = 5;
