use chrono::NaiveDate;
use log::{debug, info, warn};
use regex::Regex;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::cards::card::{CardName, DeckCard};
use crate::cards::deck::Deck;
use crate::collection::deck_id_from_url;
use crate::deck_cache::DeckCache;
use crate::error::AppError;
use crate::utilities::constants::BUDGET_DECKS_PATH;

/// How a batch of deck fetches was satisfied; feeds the console summary.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct FetchStats {
    pub total: usize,
    pub cache_hits: usize,
    pub stale_hits: usize,
}

/// Fetches deck pages and the budget-deck listing from MTGGoldfish.
/// The base URL and client are injected so tests can point it at a mock
/// server; all extraction from fetched HTML happens in pure functions
/// below. The extraction depends on MTGGoldfish's page structure (CSS
/// class names, the 4-column paper decklist table, title suffixes) and
/// breaks when the site changes — an accepted fragility.
pub struct GoldfishScraper {
    client: Client,
    base_url: String,
}

impl GoldfishScraper {
    pub fn new(base_url: &str, client: Client) -> Self {
        GoldfishScraper {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// Resolves each URL to a `Deck`, from the cache when a record exists
    /// and no forced refresh was requested, from the network otherwise.
    /// Freshly fetched decks are cached before being returned. One page
    /// request per deck, strictly sequential; the first failure aborts.
    pub async fn fetch_decks(
        &self,
        urls: &[String],
        force_refresh: bool,
        cache: &DeckCache,
    ) -> Result<(Vec<Deck>, FetchStats), AppError> {
        if force_refresh {
            info!("Manual cache update requested, refetching every deck");
        }

        let mut decks = Vec::new();
        let mut stats = FetchStats {
            total: urls.len(),
            ..FetchStats::default()
        };

        for url in urls {
            let deck_id = deck_id_from_url(url)?;

            if !force_refresh && cache.exists(&deck_id) {
                stats.cache_hits += 1;
                if cache.is_stale(&deck_id) {
                    stats.stale_hits += 1;
                }
                decks.push(cache.load(&deck_id)?);
                continue;
            }

            let deck = self.fetch_deck(url).await?;
            cache.save(&deck, &deck_id)?;
            decks.push(deck);
        }

        Ok((decks, stats))
    }

    pub async fn fetch_deck(&self, url: &str) -> Result<Deck, AppError> {
        debug!("Fetching deck page {}", url);
        let html = self.get_page(url).await?;
        parse_deck_page(&html, url)
    }

    /// Enumerates the deck URLs behind every tile on the budget listing
    /// page, via each tile's paper price-info link.
    pub async fn budget_deck_urls(&self) -> Result<Vec<String>, AppError> {
        let url = format!("{}{}", self.base_url, BUDGET_DECKS_PATH);
        info!("Fetching budget deck listing from {}", url);
        let html = self.get_page(&url).await?;
        parse_budget_listing(&html, &url)
    }

    async fn get_page(&self, url: &str) -> Result<String, AppError> {
        let fetch_err = |source| AppError::Fetch {
            url: url.to_string(),
            source,
        };
        let response = self.client.get(url).send().await.map_err(fetch_err)?;
        let response = response.error_for_status().map_err(fetch_err)?;
        response.text().await.map_err(fetch_err)
    }
}

fn parse_deck_page(html: &str, url: &str) -> Result<Deck, AppError> {
    let structure_err = |detail: &str| AppError::PageStructure {
        url: url.to_string(),
        detail: detail.to_string(),
    };

    let document = Html::parse_document(html);
    let title_selector = Selector::parse(".deck-view-title").unwrap();
    let description_selector = Selector::parse(".deck-view-description").unwrap();
    let row_selector =
        Selector::parse("#tab-paper .deck-view-decklist .deck-view-deck-table tbody tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let raw_title = document
        .select(&title_selector)
        .next()
        .map(element_text)
        .ok_or_else(|| structure_err("deck title not found"))?;
    let name = clean_deck_name(&raw_title);

    let description = document
        .select(&description_selector)
        .next()
        .map(element_text)
        .ok_or_else(|| structure_err("deck description not found"))?;
    let date = parse_deck_date(&description)
        .ok_or_else(|| structure_err("no trailing date in the deck description"))?;

    let mut cards = Vec::new();
    let mut price = 0.0;
    for row in document.select(&row_selector) {
        let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
        // Section header rows ("Creatures", "Lands", ...) have fewer columns.
        if cells.len() != 4 {
            continue;
        }

        let quantity: u32 = element_text(cells[0])
            .parse()
            .map_err(|_| structure_err("card row with a non-numeric quantity"))?;
        if quantity == 0 {
            return Err(structure_err("card row with a zero quantity"));
        }
        let line_total: f64 = element_text(cells[3])
            .trim_start_matches('$')
            .parse()
            .map_err(|_| structure_err("card row with a non-numeric price"))?;

        price += line_total;
        cards.push(DeckCard {
            name: CardName::new(&element_text(cells[1])),
            quantity,
            unit_price: line_total / quantity as f64,
        });
    }

    if cards.is_empty() {
        warn!("Deck page {} had no card rows", url);
    }

    Ok(Deck {
        name,
        url: url.to_string(),
        date,
        price,
        cards,
    })
}

/// The title ends in "by <author>" on budget deck pages and in
/// "Suggest a Better Name" on archetype pages.
fn clean_deck_name(raw_title: &str) -> String {
    if let Some(at) = raw_title.find("by ") {
        if at > 0 {
            return raw_title[..at].trim().to_string();
        }
    }
    raw_title
        .trim()
        .trim_end_matches("Suggest a Better Name")
        .trim()
        .to_string()
}

/// The description free text ends in the deck date, e.g. "Oct 5, 2017".
fn parse_deck_date(description: &str) -> Option<NaiveDate> {
    let date_pattern = Regex::new(r"([A-Z][a-z]{2} \d{1,2}, \d{4})\s*$").unwrap();
    let matched = date_pattern.captures(description)?.get(1)?;
    NaiveDate::parse_from_str(matched.as_str(), "%b %d, %Y").ok()
}

fn parse_budget_listing(html: &str, page_url: &str) -> Result<Vec<String>, AppError> {
    let document = Html::parse_document(html);
    let link_selector = Selector::parse(
        ".archetype-tile .archetype-tile-description-wrapper \
         .archetype-tile-description .deck-price-paper a",
    )
    .unwrap();

    let base = Url::parse(page_url).map_err(|_| AppError::BadDeckUrl(page_url.to_string()))?;
    let mut urls = Vec::new();
    for link in document.select(&link_selector) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let absolute = base.join(href).map_err(|_| AppError::PageStructure {
            url: page_url.to_string(),
            detail: format!("unresolvable deck link \"{}\"", href),
        })?;
        urls.push(absolute.to_string());
    }

    if urls.is_empty() {
        warn!("Budget listing {} had no deck tiles", page_url);
    }
    Ok(urls)
}

fn element_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}
