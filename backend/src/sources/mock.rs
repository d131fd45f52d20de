use super::{ReviewProvider, SourceError};
use async_trait::async_trait;
use common::model::review::Review;
use log::warn;
use std::path::{Path, PathBuf};

static BUNDLED_REVIEWS: &str = include_str!("../../../data/reviews.json");

/// Pre-normalized reviews from a JSON file.
///
/// A configured file that cannot be read or parsed is reported and replaced
/// by the list bundled into the binary.
pub struct MockReviewsProvider {
    path: Option<PathBuf>,
}

impl MockReviewsProvider {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    async fn load_file(path: &Path) -> Result<Vec<Review>, SourceError> {
        let raw = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&raw)?)
    }
}

pub fn bundled_reviews() -> Result<Vec<Review>, SourceError> {
    Ok(serde_json::from_str(BUNDLED_REVIEWS)?)
}

#[async_trait]
impl ReviewProvider for MockReviewsProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch_reviews(&self) -> Result<Vec<Review>, SourceError> {
        if let Some(path) = &self.path {
            match Self::load_file(path).await {
                Ok(reviews) => return Ok(reviews),
                Err(e) => warn!(
                    "Could not load mock reviews from {}: {}; using bundled list",
                    path.display(),
                    e
                ),
            }
        }
        bundled_reviews()
    }
}
