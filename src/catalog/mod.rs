pub mod genre;
pub mod models;
pub mod mood;

pub use genre::{GenreFilter, GenreGroup, SongGenre};
pub use models::{RawSong, Song};
pub use mood::SongMood;

use strsim::jaro_winkler;

const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Canonical enum key: trimmed, uppercased, with runs of whitespace and `-`
/// collapsed into a single `_`.
pub fn normalize_key(raw: &str) -> String {
    let mut key = String::with_capacity(raw.len());
    let mut pending_sep = false;

    for c in raw.trim().chars() {
        if c.is_whitespace() || c == '-' {
            pending_sep = true;
            continue;
        }
        if pending_sep {
            key.push('_');
            pending_sep = false;
        }
        key.extend(c.to_uppercase());
    }

    key
}

/// Closest known name to `raw`, if any is similar enough to be worth offering.
pub fn suggest<'a>(raw: &str, candidates: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let key = normalize_key(raw);

    let mut best: Option<&str> = None;
    let mut best_score: f64 = 0.0;
    for candidate in candidates {
        let score = jaro_winkler(&key, candidate);
        if score > best_score {
            best_score = score;
            best = Some(candidate);
        }
    }

    best.filter(|_| best_score >= SUGGESTION_THRESHOLD)
}
