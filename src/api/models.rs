use serde::Serialize;

use crate::catalog::{GenreFilter, Song, SongMood};
use crate::duration::split_min_sec;
use crate::error::{AppError, Result};

/// What the user is looking for. Title and artist are substring filters on
/// the server side; at least one of them has to be given.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SongQuery {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub genre: Option<GenreFilter>,
    pub mood: Option<SongMood>,
    pub allow_reuse: bool,
}

impl SongQuery {
    pub fn with_title(mut self, title: impl AsRef<str>) -> Self {
        self.title = non_blank(title.as_ref());
        self
    }

    pub fn with_artist(mut self, artist: impl AsRef<str>) -> Self {
        self.artist = non_blank(artist.as_ref());
        self
    }

    pub fn with_genre(mut self, genre: Option<GenreFilter>) -> Self {
        self.genre = genre;
        self
    }

    pub fn with_mood(mut self, mood: Option<SongMood>) -> Self {
        self.mood = mood;
        self
    }

    pub fn allow_reuse(mut self, allow: bool) -> Self {
        self.allow_reuse = allow;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.is_none() && self.artist.is_none() {
            return Err(AppError::InvalidCriteria("enter title or artist".into()));
        }
        Ok(())
    }

    /// True when the song carries a genre or mood that the requested one
    /// does not cover. Songs with no genre or mood are never flagged.
    pub fn is_off_criteria(&self, song: &Song) -> bool {
        let off_genre = match (self.genre, song.genre) {
            (Some(filter), Some(genre)) => !filter.allows(genre),
            _ => false,
        };
        let off_mood = match (self.mood, song.mood) {
            (Some(wanted), Some(mood)) => !wanted.is_compatible_with(mood),
            _ => false,
        };
        off_genre || off_mood
    }
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Body of `POST /api/setlist`. Absent criteria go over the wire as empty
/// strings, which the server treats as "no filter".
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SetlistRequestBody<'a> {
    pub title: &'a str,
    pub artist: &'a str,
    pub genre: &'static str,
    pub bpm: Option<u32>,
    pub mood: &'static str,
    pub duration_minutes: u32,
    pub duration_seconds: u32,
    pub allow_reuse: bool,
}

impl<'a> SetlistRequestBody<'a> {
    pub fn new(query: &'a SongQuery, target_seconds: u32) -> Self {
        let (duration_minutes, duration_seconds) = split_min_sec(target_seconds);
        Self {
            title: query.title.as_deref().unwrap_or(""),
            artist: query.artist.as_deref().unwrap_or(""),
            genre: query.genre.map(|g| g.as_str()).unwrap_or(""),
            bpm: None,
            mood: query.mood.map(|m| m.as_str()).unwrap_or(""),
            duration_minutes,
            duration_seconds,
            allow_reuse: query.allow_reuse,
        }
    }
}
