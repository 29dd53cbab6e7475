mod cards;
mod collection;
mod comparer;
mod config;
mod deck_cache;
mod error;
mod goldfish_scraper;
mod report;
mod test;
mod utilities;

use std::process;

use clap::Parser;
use log::{error, info};
use reqwest::Client;

use config::Cli;
use deck_cache::DeckCache;
use error::AppError;
use goldfish_scraper::GoldfishScraper;
use utilities::constants::{
    DECK_CACHE_DIR, DESIRED_DECKS_FILE, GOLDFISH_URL, OWNED_CARDS_FILE,
};

async fn run(cli: &Cli) -> Result<(), AppError> {
    let owned_cards = collection::load_owned_cards(OWNED_CARDS_FILE)?;
    let deck_urls = collection::load_desired_deck_urls(DESIRED_DECKS_FILE)?;

    let cache = DeckCache::new(DECK_CACHE_DIR);
    let scraper = GoldfishScraper::new(GOLDFISH_URL, Client::new());

    let start_time = chrono::Local::now();
    println!("- Fetching Deck information of desired decks...");
    let (desired_decks, stats) = scraper
        .fetch_decks(&deck_urls, cli.update, &cache)
        .await?;
    report::print_fetch_summary(&stats);

    // With nothing in the inventory the only useful output left is the
    // budget-deck report, so it runs even without the flag.
    let run_budget_analysis = cli.budget || owned_cards.is_empty();

    let budget_decks = if run_budget_analysis {
        if cli.budget {
            println!("- Budget flag set. Fetching Deck information of all Modern Budget decks for budget analysis...");
        } else {
            println!("- The owned cards file was empty. Fetching Deck information of all Modern Budget decks for budget analysis...");
        }
        let budget_urls = scraper.budget_deck_urls().await?;
        let (decks, stats) = scraper
            .fetch_decks(&budget_urls, cli.update, &cache)
            .await?;
        report::print_fetch_summary(&stats);
        Some(decks)
    } else {
        None
    };

    info!(
        "Done fetching all deck information, took {} seconds",
        (chrono::Local::now() - start_time).num_seconds()
    );

    let owned_overlap = if owned_cards.is_empty() {
        Vec::new()
    } else {
        println!("\n- Beginning Owned Cards evaluations...");
        comparer::evaluate_owned_cards(&desired_decks, &owned_cards)
    };

    let budget_report = budget_decks.map(|decks| {
        println!("\n- Beginning Budget Deck List evaluations...");
        comparer::evaluate_budget_decks(&desired_decks, &decks)
    });

    report::print_report_banner();
    report::print_owned_overlap(&owned_overlap);
    if let Some(budget_report) = budget_report {
        report::print_budget_comparison(&budget_report);
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    report::print_run_banner();
    match run(&cli).await {
        Ok(()) => {}
        // The one fatal-input path that still exits cleanly: the user has
        // to fix the duplicate themselves, there is nothing to retry.
        Err(AppError::DuplicateOwnedCard(name)) => {
            error!(
                "\"{}\" occurs more than once in {}. Exiting.",
                name, OWNED_CARDS_FILE
            );
        }
        Err(e) => {
            error!("{}", e);
            if let AppError::Fetch { url, .. } = &e {
                error!(
                    "Check your internet connection. MTGGoldfish also has occasional outages; \
                     try opening \"{}\" yourself, then run again.",
                    url
                );
            }
            process::exit(1);
        }
    }
}
