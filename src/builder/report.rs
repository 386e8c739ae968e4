use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use colored::Colorize;
use serde::Serialize;
use tracing::info;

use crate::api::SongQuery;
use crate::catalog::Song;
use crate::duration::format_duration;
use crate::error::Result;

#[derive(Debug, Clone, Serialize)]
pub struct BuiltSet {
    pub index: usize,
    pub title: String,
    pub target_seconds: u32,
    pub total_seconds: u32,
    pub songs: Vec<Song>,
}

impl BuiltSet {
    /// `"{base} - Set {n}"` when a base title was given, else `"Set {n}"`.
    pub fn title_for(base: Option<&str>, index: usize) -> String {
        match base {
            Some(base) => format!("{} - Set {}", base, index),
            None => format!("Set {}", index),
        }
    }

    pub fn overflow_seconds(&self) -> u32 {
        self.total_seconds.saturating_sub(self.target_seconds)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub generated_at: DateTime<Local>,
    pub criteria: SongQuery,
    pub requested_seconds: u32,
    pub fetched_songs: usize,
    pub unplaced_songs: usize,
    pub combined_seconds: u32,
    pub sets: Vec<BuiltSet>,
}

impl BuildReport {
    pub fn song_count(&self) -> usize {
        self.sets.iter().map(|s| s.songs.len()).sum()
    }

    /// Placed songs whose genre or mood falls outside the request.
    pub fn off_criteria_count(&self) -> usize {
        self.sets
            .iter()
            .flat_map(|s| &s.songs)
            .filter(|song| self.criteria.is_off_criteria(song))
            .count()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        info!("Setlist saved to: {}", path.display());

        Ok(())
    }

    pub fn print(&self) {
        if self.song_count() == 0 {
            println!("{}", "No songs generated.".yellow());
            return;
        }

        for set in &self.sets {
            println!();
            println!(
                "{} ({})",
                set.title.bold(),
                format_duration(set.total_seconds).cyan()
            );

            let target = format!("target {}", format_duration(set.target_seconds));
            if set.overflow_seconds() > 0 {
                println!(
                    "  {} {}",
                    target,
                    format!("(+{} over)", format_duration(set.overflow_seconds())).yellow()
                );
            } else {
                println!("  {}", target);
            }

            if set.songs.is_empty() {
                println!("  {}", "(empty)".dimmed());
            }
            for (i, song) in set.songs.iter().enumerate() {
                let marker = if self.criteria.is_off_criteria(song) {
                    " *".yellow().to_string()
                } else {
                    String::new()
                };
                println!(
                    "  {:2}. {} - {} ({}){}",
                    i + 1,
                    song.display_title(),
                    song.display_artist(),
                    format_duration(song.duration_seconds),
                    marker
                );
            }
        }

        if self.sets.len() > 1 {
            println!(
                "\n{} {}",
                "Total Combined Duration:".bold(),
                format_duration(self.combined_seconds)
            );
        }

        let off_criteria = self.off_criteria_count();
        if off_criteria > 0 {
            println!(
                "\n{}",
                format!("* {} song(s) outside the requested genre or mood", off_criteria).yellow()
            );
        }

        if self.unplaced_songs > 0 {
            println!(
                "\n{}",
                format!(
                    "{} of {} fetched songs did not fit in any set",
                    self.unplaced_songs, self.fetched_songs
                )
                .yellow()
            );
        }
    }
}
