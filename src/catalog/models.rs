use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::catalog::{SongGenre, SongMood};

/// A song as the set partitioner sees it: normalized and read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Song {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub genre: Option<SongGenre>,
    pub mood: Option<SongMood>,
    pub bpm: Option<u32>,
    pub duration_seconds: u32,
}

impl Song {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("(untitled)")
    }

    pub fn display_artist(&self) -> &str {
        self.artist.as_deref().unwrap_or("(unknown artist)")
    }
}

/// A song record exactly as the server sends it.
///
/// Every field is optional and numbers may arrive as strings, floats or
/// nulls, so nothing here is trusted until `normalize` runs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSong {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub bpm: Option<Value>,
    #[serde(default)]
    pub duration_in_seconds: Option<Value>,
    #[serde(default)]
    pub duration_minutes: Option<Value>,
    #[serde(default)]
    pub duration_seconds: Option<Value>,
}

impl RawSong {
    pub fn normalize(self) -> Song {
        let duration_seconds = self.resolve_duration();

        let genre = self.genre.as_deref().and_then(|g| g.parse::<SongGenre>().ok());
        let mood = self.mood.as_deref().and_then(|m| m.parse::<SongMood>().ok());
        if self.genre.is_some() && genre.is_none() {
            debug!("Unrecognised genre on song {:?}: {:?}", self.title, self.genre);
        }

        Song {
            title: non_blank(self.title),
            artist: non_blank(self.artist),
            genre,
            mood,
            bpm: self.bpm.as_ref().and_then(whole_number).and_then(|b| u32::try_from(b).ok()),
            duration_seconds,
        }
    }

    // Direct seconds win unless missing, unreadable or 0; a negative direct
    // value still wins and becomes 0. Then minutes*60+seconds, then 0.
    fn resolve_duration(&self) -> u32 {
        let direct = self.duration_in_seconds.as_ref().and_then(whole_number);
        if let Some(secs) = direct.filter(|s| *s != 0) {
            return clamp_u32(secs);
        }

        let minutes = self.duration_minutes.as_ref().and_then(whole_number);
        let seconds = self.duration_seconds.as_ref().and_then(whole_number);
        match (minutes, seconds) {
            (Some(m), Some(s)) => clamp_u32(m.saturating_mul(60).saturating_add(s)),
            _ => 0,
        }
    }
}

/// Read a JSON number or numeric string, truncating fractions toward zero.
fn whole_number(value: &Value) -> Option<i64> {
    let n = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64))?,
        Value::String(s) => {
            let f = s.trim().parse::<f64>().ok()?;
            if !f.is_finite() {
                return None;
            }
            f.trunc() as i64
        }
        _ => return None,
    };
    Some(n)
}

fn clamp_u32(n: i64) -> u32 {
    u32::try_from(n.max(0)).unwrap_or(u32::MAX)
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

#[cfg(test)]
impl Song {
    pub fn mock(title: &str, duration_seconds: u32) -> Self {
        Self {
            title: Some(title.to_string()),
            artist: Some("Mock Artist".to_string()),
            genre: Some(SongGenre::Rock),
            mood: None,
            bpm: None,
            duration_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawSong {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_prefers_direct_seconds() {
        let song = raw(json!({
            "title": "Paranoid",
            "durationInSeconds": 170,
            "durationMinutes": 9,
            "durationSeconds": 9
        }))
        .normalize();
        assert_eq!(song.duration_seconds, 170);
    }

    #[test]
    fn test_falls_back_to_minutes_and_seconds() {
        let song = raw(json!({
            "title": "Paranoid",
            "durationInSeconds": 0,
            "durationMinutes": 2,
            "durationSeconds": 50
        }))
        .normalize();
        assert_eq!(song.duration_seconds, 170);

        let song = raw(json!({"durationMinutes": "3", "durationSeconds": 5.9})).normalize();
        assert_eq!(song.duration_seconds, 185);
    }

    #[test]
    fn test_missing_or_invalid_duration_is_zero() {
        assert_eq!(raw(json!({"title": "x"})).normalize().duration_seconds, 0);
        assert_eq!(raw(json!({"durationMinutes": 3})).normalize().duration_seconds, 0);
        assert_eq!(
            raw(json!({"durationInSeconds": "abc", "durationMinutes": null}))
                .normalize()
                .duration_seconds,
            0
        );
        assert_eq!(
            raw(json!({"durationMinutes": -2, "durationSeconds": 10}))
                .normalize()
                .duration_seconds,
            0
        );
    }

    #[test]
    fn test_negative_direct_seconds_do_not_fall_back() {
        let song = raw(json!({
            "durationInSeconds": -5,
            "durationMinutes": 3,
            "durationSeconds": 0
        }))
        .normalize();
        assert_eq!(song.duration_seconds, 0);

        let song = raw(json!({
            "durationInSeconds": "n/a",
            "durationMinutes": 3,
            "durationSeconds": 0
        }))
        .normalize();
        assert_eq!(song.duration_seconds, 180);
    }

    #[test]
    fn test_normalizes_text_and_enums() {
        let song = raw(json!({
            "title": "  ",
            "artist": " Black Sabbath ",
            "genre": "HEAVY_METAL",
            "mood": "DARK",
            "bpm": 163
        }))
        .normalize();
        assert_eq!(song.title, None);
        assert_eq!(song.artist.as_deref(), Some("Black Sabbath"));
        assert_eq!(song.genre, Some(SongGenre::HeavyMetal));
        assert_eq!(song.mood, Some(SongMood::Dark));
        assert_eq!(song.bpm, Some(163));
        assert_eq!(song.display_title(), "(untitled)");
    }

    #[test]
    fn test_unknown_enum_values_are_dropped() {
        let song = raw(json!({"genre": "POLKA", "mood": "SLEEPY", "bpm": -4})).normalize();
        assert_eq!(song.genre, None);
        assert_eq!(song.mood, None);
        assert_eq!(song.bpm, None);
    }
}
