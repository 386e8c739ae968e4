pub mod client;
pub mod models;

pub use client::{SetlistApiClient, SongSource};
pub use models::SongQuery;
