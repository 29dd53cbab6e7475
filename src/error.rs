use std::fmt;

/// Everything that can abort a run, propagated up to the driver which
/// decides how to report it and which exit code to use.
#[derive(Debug)]
pub enum AppError {
    /// A card name occurs more than once (case-insensitive) in the
    /// owned-cards file. The user has to resolve this themselves.
    DuplicateOwnedCard(String),
    /// A wishlist line that is neither a deck/ nor an archetype/ URL.
    BadDeckUrl(String),
    /// Network failure reaching a deck or listing page.
    Fetch { url: String, source: reqwest::Error },
    /// The page came back but did not have the expected structure.
    PageStructure { url: String, detail: String },
    /// A cache load was requested for a deck id with no record on disk.
    CacheMiss(String),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::DuplicateOwnedCard(name) => {
                write!(f, "\"{}\" occurs more than once in the owned cards file", name)
            }
            AppError::BadDeckUrl(url) => {
                write!(f, "not a deck or archetype URL: \"{}\"", url)
            }
            AppError::Fetch { url, source } => {
                write!(f, "failed to fetch \"{}\": {}", url, source)
            }
            AppError::PageStructure { url, detail } => {
                write!(f, "unexpected page structure at \"{}\": {}", url, detail)
            }
            AppError::CacheMiss(deck_id) => {
                write!(f, "no cached record for deck id \"{}\"", deck_id)
            }
            AppError::Io(e) => write!(f, "I/O error: {}", e),
            AppError::Json(e) => write!(f, "serialization error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Fetch { source, .. } => Some(source),
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}
