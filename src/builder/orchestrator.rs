use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::api::{SongQuery, SongSource};
use crate::builder::report::{BuildReport, BuiltSet};
use crate::catalog::Song;
use crate::duration::{MinSec, format_duration};
use crate::error::Result;
use crate::partitioner::partition;
use crate::planner::plan;

/// Everything the user chose for one build.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    pub query: SongQuery,
    pub set_count: usize,
    pub durations: Vec<MinSec>,
}

pub struct SetlistBuilder<S> {
    source: S,
    show_progress: bool,
}

impl<S: SongSource> SetlistBuilder<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Validate the input, fetch one batch of songs for the combined
    /// duration, then split it across the requested sets.
    ///
    /// Nothing is fetched when validation fails, and nothing is partitioned
    /// when the fetch fails.
    pub async fn build(&self, request: &BuildRequest) -> Result<BuildReport> {
        request.query.validate()?;
        let set_plan = plan(request.set_count, &request.durations)?;
        let targets = set_plan.target_seconds();

        info!(
            "Building {} set(s), targets {:?}, combined {}",
            set_plan.set_count(),
            targets,
            format_duration(set_plan.total_seconds)
        );

        let songs = self.fetch(&request.query, set_plan.total_seconds).await?;
        let fetched_songs = songs.len();

        let result = partition(songs, &targets);
        if result.unplaced > 0 {
            warn!(
                "{} of {} songs left over after every set reached its target",
                result.unplaced, fetched_songs
            );
        }

        let base_title = request.query.title.as_deref();
        let sets: Vec<BuiltSet> = set_plan
            .targets
            .iter()
            .zip(result.sets.into_iter().zip(result.totals))
            .map(|(target, (songs, total))| BuiltSet {
                index: target.index,
                title: BuiltSet::title_for(base_title, target.index),
                target_seconds: target.target_seconds,
                total_seconds: total,
                songs,
            })
            .collect();

        for set in &sets {
            debug!(
                "{}: {} songs, {} of {}",
                set.title,
                set.songs.len(),
                format_duration(set.total_seconds),
                format_duration(set.target_seconds)
            );
        }

        Ok(BuildReport {
            generated_at: Local::now(),
            criteria: request.query.clone(),
            requested_seconds: set_plan.total_seconds,
            fetched_songs,
            unplaced_songs: result.unplaced,
            combined_seconds: sets.iter().map(|s| s.total_seconds).sum(),
            sets,
        })
    }

    async fn fetch(&self, query: &SongQuery, target_seconds: u32) -> Result<Vec<Song>> {
        if !self.show_progress {
            return self.source.fetch_songs(query, target_seconds).await;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Fetching songs for {}", format_duration(target_seconds)));
        pb.enable_steady_tick(Duration::from_millis(100));

        let songs = self.source.fetch_songs(query, target_seconds).await;

        pb.finish_and_clear();
        songs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::planner::PlanError;
    use std::sync::Mutex;

    /// Hands back a fixed list and remembers what it was asked for.
    struct FixedSource {
        songs: Vec<Song>,
        fail: bool,
        calls: Mutex<Vec<u32>>,
    }

    impl FixedSource {
        fn new(durations: &[u32]) -> Self {
            Self {
                songs: durations
                    .iter()
                    .enumerate()
                    .map(|(i, d)| Song::mock(&format!("Track {}", i + 1), *d))
                    .collect(),
                fail: false,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new(&[])
            }
        }

        fn calls(&self) -> Vec<u32> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl SongSource for FixedSource {
        async fn fetch_songs(&self, _query: &SongQuery, target_seconds: u32) -> Result<Vec<Song>> {
            self.calls.lock().unwrap().push(target_seconds);
            if self.fail {
                return Err(AppError::Api("Setlist request failed (500): boom".into()));
            }
            Ok(self.songs.clone())
        }
    }

    fn request(set_count: usize, durations: &[(i64, i64)]) -> BuildRequest {
        BuildRequest {
            query: SongQuery::default().with_title("Gig"),
            set_count,
            durations: durations.iter().map(|(m, s)| MinSec::new(*m, *s)).collect(),
        }
    }

    #[tokio::test]
    async fn test_builds_sets_from_one_fetch() {
        let builder = SetlistBuilder::new(FixedSource::new(&[50, 40, 10]));

        let report = builder.build(&request(2, &[(1, 0), (1, 0)])).await.unwrap();

        assert_eq!(builder.source.calls(), vec![120]);
        assert_eq!(report.sets.len(), 2);
        assert_eq!(report.sets[0].title, "Gig - Set 1");
        assert_eq!(report.sets[0].total_seconds, 60);
        assert_eq!(report.sets[1].total_seconds, 40);
        assert_eq!(
            report.sets[0]
                .songs
                .iter()
                .map(|s| s.display_title())
                .collect::<Vec<_>>(),
            vec!["Track 1", "Track 3"]
        );
        assert_eq!(report.combined_seconds, 100);
        assert_eq!(report.requested_seconds, 120);
    }

    #[tokio::test]
    async fn test_counts_unplaced_songs() {
        let builder = SetlistBuilder::new(FixedSource::new(&[30, 30, 30]));

        let report = builder.build(&request(1, &[(1, 0)])).await.unwrap();

        assert_eq!(report.fetched_songs, 3);
        assert_eq!(report.unplaced_songs, 1);
        assert_eq!(report.song_count(), 2);
    }

    #[tokio::test]
    async fn test_invalid_duration_skips_fetch() {
        let builder = SetlistBuilder::new(FixedSource::new(&[30]));

        let err = builder.build(&request(2, &[(0, 0), (0, 0)])).await.unwrap_err();
        assert!(matches!(err, AppError::Plan(PlanError::NoDuration)));

        let err = builder.build(&request(2, &[(59, 0), (1, 0)])).await.unwrap_err();
        assert!(matches!(err, AppError::Plan(PlanError::ExceedsMaximum(3600))));

        assert!(builder.source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_criteria_skips_fetch() {
        let builder = SetlistBuilder::new(FixedSource::new(&[30]));
        let mut req = request(1, &[(5, 0)]);
        req.query = SongQuery::default();

        let err = builder.build(&req).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCriteria(_)));
        assert!(builder.source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let builder = SetlistBuilder::new(FixedSource::failing());

        let err = builder.build(&request(1, &[(5, 0)])).await.unwrap_err();
        assert!(matches!(err, AppError::Api(_)));
        assert_eq!(builder.source.calls(), vec![300]);
    }
}
