use clap::Parser;

/// Reports how far your owned cards get you towards the decks listed in
/// desired_decks.txt, and which MTGGoldfish budget decks overlap the most
/// (by monetary value, not sheer card count) with each of them.
#[derive(Parser, Debug)]
#[command(name = "mtg_deck_tracker")]
pub struct Cli {
    /// Process all Modern budget decks from the MTGGoldfish listing, even
    /// when the owned-cards file is not empty. First run can take a while;
    /// fetched decks are cached for later runs.
    #[arg(short = 'b', long = "budget")]
    pub budget: bool,

    /// Fetch fresh data for every deck, ignoring cached copies regardless
    /// of their age.
    #[arg(short = 'u', long = "update")]
    pub update: bool,
}
