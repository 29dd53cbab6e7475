use std::fs;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use log::warn;

use crate::cards::deck::Deck;
use crate::error::AppError;
use crate::utilities::constants::STALE_AFTER_DAYS;

/// File-per-deck cache. Each record is a JSON snapshot of a `Deck`,
/// named `<deck_id>_<MM>_<DD>_<YYYY>` after the day it was fetched.
/// There is at most one live record per deck id; `save` replaces
/// wholesale. Single-process use only, no locking.
pub struct DeckCache {
    dir: PathBuf,
}

impl DeckCache {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        DeckCache { dir: dir.into() }
    }

    pub fn exists(&self, deck_id: &str) -> bool {
        self.record_for(deck_id).is_some()
    }

    /// True iff a record exists and was fetched 30 or more days ago.
    pub fn is_stale(&self, deck_id: &str) -> bool {
        self.is_stale_on(deck_id, Local::now().date_naive())
    }

    fn is_stale_on(&self, deck_id: &str, today: NaiveDate) -> bool {
        match self.record_for(deck_id) {
            Some((_, fetched)) => (today - fetched).num_days() >= STALE_AFTER_DAYS,
            None => false,
        }
    }

    /// Writes a fresh record dated today, deleting any previous record
    /// for the same deck id first. The cache directory is created lazily.
    pub fn save(&self, deck: &Deck, deck_id: &str) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir)?;
        if let Some((old_record, _)) = self.record_for(deck_id) {
            fs::remove_file(old_record)?;
        }

        let today = Local::now().date_naive();
        let file_name = format!("{}_{}", deck_id, today.format("%m_%d_%Y"));
        let body = serde_json::to_string(deck)?;
        fs::write(self.dir.join(file_name), body)?;
        Ok(())
    }

    pub fn load(&self, deck_id: &str) -> Result<Deck, AppError> {
        let (record, _) = self
            .record_for(deck_id)
            .ok_or_else(|| AppError::CacheMiss(deck_id.to_string()))?;
        let body = fs::read_to_string(record)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Finds the record for a deck id and the date encoded in its name.
    /// The date is the last three `_`-separated tokens; everything before
    /// them is the id, so ids containing underscores stay intact.
    fn record_for(&self, deck_id: &str) -> Option<(PathBuf, NaiveDate)> {
        let entries = fs::read_dir(&self.dir).ok()?;
        for entry in entries.flatten() {
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            match split_record_name(file_name) {
                Some((id, date)) if id == deck_id => return Some((entry.path(), date)),
                Some(_) => {}
                None => warn!("Ignoring unrecognized cache file \"{}\"", file_name),
            }
        }
        None
    }
}

fn split_record_name(file_name: &str) -> Option<(&str, NaiveDate)> {
    let parts: Vec<&str> = file_name.split('_').collect();
    if parts.len() < 4 {
        return None;
    }
    let (id_parts, date_parts) = parts.split_at(parts.len() - 3);
    let month: u32 = date_parts[0].parse().ok()?;
    let day: u32 = date_parts[1].parse().ok()?;
    let year: i32 = date_parts[2].parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    // The id length is everything up to the date suffix.
    let id_len = id_parts.iter().map(|p| p.len() + 1).sum::<usize>() - 1;
    Some((&file_name[..id_len], date))
}
