use std::fs;
use std::path::Path;

use log::warn;
use url::Url;

use crate::cards::card::{CardName, OwnedCard};
use crate::error::AppError;

/// Parses the owned-cards file: one `<quantity> <card name>` per line,
/// `#`-prefixed and blank lines skipped. A card name appearing twice
/// (case-insensitive) is a fatal configuration error; we point it out and
/// stop instead of guessing what the user meant.
pub fn load_owned_cards<P: AsRef<Path>>(path: P) -> Result<Vec<OwnedCard>, AppError> {
    let content = fs::read_to_string(path)?;
    let mut owned: Vec<OwnedCard> = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((quantity, name)) = line.split_once(' ') else {
            warn!("Skipping owned-cards line without a quantity: \"{}\"", line);
            continue;
        };
        let quantity: u32 = match quantity.parse() {
            Ok(q) => q,
            Err(_) => {
                warn!("Skipping owned-cards line with a bad quantity: \"{}\"", line);
                continue;
            }
        };

        let name = CardName::new(name);
        if owned.iter().any(|card| card.name == name) {
            return Err(AppError::DuplicateOwnedCard(name.raw().to_string()));
        }
        owned.push(OwnedCard { name, quantity });
    }

    Ok(owned)
}

/// Parses the wishlist file: one deck URL per line, `#`-prefixed and
/// blank lines skipped.
pub fn load_desired_deck_urls<P: AsRef<Path>>(path: P) -> Result<Vec<String>, AppError> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Extracts the cache key from a deck URL: the path segment following
/// `deck/` (budget decks) or `archetype/` (meta decks), with any `#paper`
/// style fragment already stripped by the URL parser.
pub fn deck_id_from_url(url: &str) -> Result<String, AppError> {
    let parsed = Url::parse(url).map_err(|_| AppError::BadDeckUrl(url.to_string()))?;
    let mut segments = parsed
        .path_segments()
        .ok_or_else(|| AppError::BadDeckUrl(url.to_string()))?;

    let id = segments
        .find(|segment| *segment == "deck" || *segment == "archetype")
        .and_then(|_| segments.next())
        .filter(|id| !id.is_empty())
        .map(str::to_string);

    id.ok_or_else(|| AppError::BadDeckUrl(url.to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_quantities_and_skips_comments() {
        let file = write_file(
            "# my collection\n\
             \n\
             4 Scalding Tarn\n\
             1 Death's Shadow\n",
        );
        let owned = load_owned_cards(file.path()).unwrap();
        assert_eq!(owned.len(), 2);
        assert_eq!(owned[0].quantity, 4);
        assert_eq!(owned[0].name, CardName::new("scalding tarn"));
    }

    #[test]
    fn duplicate_name_is_fatal_regardless_of_case() {
        let file = write_file("4 Scalding Tarn\n2 SCALDING TARN\n");
        match load_owned_cards(file.path()) {
            Err(AppError::DuplicateOwnedCard(name)) => assert_eq!(name, "SCALDING TARN"),
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_lines_are_skipped_not_fatal() {
        let file = write_file("Tarmogoyf\nfour Scalding Tarn\n2 Thoughtseize\n");
        let owned = load_owned_cards(file.path()).unwrap();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].name, CardName::new("Thoughtseize"));
    }

    #[test]
    fn wishlist_keeps_urls_in_file_order() {
        let file = write_file(
            "# decks I want\n\
             https://www.mtggoldfish.com/archetype/modern-grixis-death-s-shadow#paper\n\
             https://www.mtggoldfish.com/deck/784979#paper\n",
        );
        let urls = load_desired_deck_urls(file.path()).unwrap();
        assert_eq!(urls.len(), 2);
        assert!(urls[0].contains("archetype"));
    }

    #[test]
    fn extracts_numeric_deck_id() {
        let id = deck_id_from_url("https://www.mtggoldfish.com/deck/784979#paper").unwrap();
        assert_eq!(id, "784979");
    }

    #[test]
    fn extracts_archetype_deck_id() {
        let id = deck_id_from_url(
            "https://www.mtggoldfish.com/archetype/modern-grixis-death-s-shadow#paper",
        )
        .unwrap();
        assert_eq!(id, "modern-grixis-death-s-shadow");
    }

    #[test]
    fn rejects_urls_without_a_deck_marker() {
        assert!(deck_id_from_url("https://www.mtggoldfish.com/metagame/modern").is_err());
        assert!(deck_id_from_url("not a url").is_err());
    }
}
