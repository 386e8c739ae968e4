use std::future::Future;

use reqwest::Client;
use tracing::{debug, info, warn};
use url::Url;

use crate::api::models::{SetlistRequestBody, SongQuery};
use crate::catalog::{RawSong, Song};
use crate::config::Config;
use crate::error::{AppError, Result};

const SETLIST_PATH: &str = "api/setlist";

/// Where candidate songs come from.
///
/// Implementations return songs in the order they should be considered,
/// sized by the source to roughly fill `target_seconds`.
pub trait SongSource {
    fn fetch_songs(
        &self,
        query: &SongQuery,
        target_seconds: u32,
    ) -> impl Future<Output = Result<Vec<Song>>> + Send;
}

pub struct SetlistApiClient {
    http_client: Client,
    endpoint: Url,
}

impl SetlistApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut base = config.base_url()?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base
            .join(SETLIST_PATH)
            .map_err(|e| AppError::Config(format!("Invalid setlist endpoint: {}", e)))?;

        let http_client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(format!("setlist-builder/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        debug!("Setlist endpoint: {}", endpoint);

        Ok(Self {
            http_client,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl SongSource for SetlistApiClient {
    async fn fetch_songs(&self, query: &SongQuery, target_seconds: u32) -> Result<Vec<Song>> {
        let body = SetlistRequestBody::new(query, target_seconds);

        info!(
            "Requesting songs for {}s (title={:?}, artist={:?})",
            target_seconds, query.title, query.artist
        );

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            warn!("Setlist request failed ({}): {}", status, error_text);
            return Err(AppError::Api(format!(
                "Setlist request failed ({}): {}",
                status, error_text
            )));
        }

        let raw_songs: Vec<RawSong> = response
            .json()
            .await
            .map_err(|e| AppError::Api(format!("Failed to parse setlist response: {}", e)))?;

        debug!("Received {} songs", raw_songs.len());

        Ok(raw_songs.into_iter().map(RawSong::normalize).collect())
    }
}
