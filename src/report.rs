use crate::comparer::{BudgetComparison, OwnedOverlap};
use crate::goldfish_scraper::FetchStats;

/// Console rendering only; every number printed here was computed by the
/// comparer or counted by the fetcher.

pub fn print_run_banner() {
    println!();
    println!("=====================================================");
    println!("================ Beginning Fresh Run ================");
    println!("=====================================================");
}

pub fn print_report_banner() {
    println!();
    println!("============================================");
    println!("================ Report(s) =================");
    println!("============================================");
}

pub fn print_fetch_summary(stats: &FetchStats) {
    for line in fetch_summary_lines(stats) {
        println!("{}", line);
    }
}

/// The summary is product output, not diagnostics, so the stale-cache
/// warning goes to stdout with the cache-hit count instead of through
/// the log filter.
fn fetch_summary_lines(stats: &FetchStats) -> Vec<String> {
    let mut lines = vec![format!(
        "  Finished fetching deck data. {} of {} decks fetched from the cache.",
        stats.cache_hits, stats.total
    )];
    if stats.stale_hits > 0 {
        lines.push(format!(
            "  [WARNING]: {} cached decks were created more than 30 days ago. \
             Prices may have changed significantly since then. \
             Run with --update to refresh your cached decks.",
            stats.stale_hits
        ));
    }
    lines
}

pub fn print_owned_overlap(reports: &[OwnedOverlap]) {
    for report in reports {
        println!(
            "\n== Owned cards that are used in \"{}\" (${:.2}) ==",
            report.deck_name, report.deck_price
        );
        println!(
            "   Number of cards owned: {}/{}",
            report.cards_owned, report.non_basic_total
        );
        println!("   Value saved: ${:.2}", report.saved_value);
        println!("   List of specific cards:");
        for (name, quantity) in &report.cards {
            println!("      {}x {}", quantity, name);
        }
    }
}

pub fn print_budget_comparison(reports: &[BudgetComparison]) {
    for report in reports {
        println!(
            "\n== Budget Decks that compare to \"{}\" (${:.2}) ==",
            report.deck_name, report.deck_price
        );
        for entry in &report.matches {
            println!("   Budget Deck: {}", entry.name);
            println!("      Budget Deck cost: ${:.2}", entry.price);
            println!(
                "      Number of cards shared: {}/{}",
                entry.shared_count, entry.non_basic_total
            );
            println!("      Value shared: ${:.2}", entry.shared_value);
        }
    }
}
