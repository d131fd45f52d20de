//! Review feed sources.
//!
//! The public feed is produced by a [`ReviewProvider`]. With a Google access
//! token configured, the live Google Business Profile source is tried first
//! and the mock list is the fallback; without one, the mock list is served
//! directly. Either way the handler receives canonical `Review` records and
//! never special-cases where they came from.

mod google;
mod mock;

use crate::config::Config;
use async_trait::async_trait;
use common::model::review::Review;
use log::warn;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub use google::GoogleReviewsProvider;
pub use mock::MockReviewsProvider;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Missing GOOGLE_LOCATION_ID or GOOGLE_ACCESS_TOKEN")]
    MissingCredentials,

    #[error("Google API error: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait ReviewProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch_reviews(&self) -> Result<Vec<Review>, SourceError>;
}

/// Serves `primary` and switches to `fallback` whenever it fails.
pub struct FallbackProvider {
    primary: Arc<dyn ReviewProvider>,
    fallback: Arc<dyn ReviewProvider>,
}

impl FallbackProvider {
    pub fn new(primary: Arc<dyn ReviewProvider>, fallback: Arc<dyn ReviewProvider>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl ReviewProvider for FallbackProvider {
    fn name(&self) -> &'static str {
        "fallback"
    }

    async fn fetch_reviews(&self) -> Result<Vec<Review>, SourceError> {
        match self.primary.fetch_reviews().await {
            Ok(reviews) => Ok(reviews),
            Err(e) => {
                warn!(
                    "Failed to fetch reviews from {}, falling back to {}: {}",
                    self.primary.name(),
                    self.fallback.name(),
                    e
                );
                self.fallback.fetch_reviews().await
            }
        }
    }
}

/// Chooses the feed source for the given configuration.
pub fn build_provider(config: &Config) -> Arc<dyn ReviewProvider> {
    let mock: Arc<dyn ReviewProvider> =
        Arc::new(MockReviewsProvider::new(config.mock_reviews_path.clone()));

    if config.google_access_token.is_none() {
        log::info!("No GOOGLE_ACCESS_TOKEN found, serving mock reviews");
        return mock;
    }

    let google = GoogleReviewsProvider::new(
        config.google_api_base.clone(),
        config.google_location_id.clone(),
        config.google_access_token.clone(),
        config.mapper.clone(),
        Duration::from_secs(config.google_timeout_secs),
    );
    match google {
        Ok(google) => Arc::new(FallbackProvider::new(Arc::new(google), mock)),
        Err(e) => {
            warn!("Cannot build the Google client, serving mock reviews: {}", e);
            mock
        }
    }
}
