pub mod api;
pub mod builder;
pub mod catalog;
pub mod config;
pub mod duration;
pub mod error;
pub mod partitioner;
pub mod planner;

pub use api::{SetlistApiClient, SongQuery, SongSource};
pub use builder::{BuildReport, BuildRequest, BuiltSet, SetlistBuilder};
pub use catalog::{GenreFilter, GenreGroup, RawSong, Song, SongGenre, SongMood};
pub use config::Config;
pub use duration::MinSec;
pub use error::{AppError, Result};
pub use partitioner::{PartitionResult, partition};
pub use planner::{PlanError, SetPlan, SetTarget, plan};
