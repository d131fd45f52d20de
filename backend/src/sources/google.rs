use super::{ReviewProvider, SourceError};
use async_trait::async_trait;
use common::mapper::{MapperConfig, ReviewMapper};
use common::model::google::GoogleReviewsPage;
use common::model::review::Review;
use log::debug;
use std::time::Duration;

const PAGE_SIZE: &str = "50";

/// Live reviews from the Google Business Profile API.
///
/// Pages are followed until the response carries no `nextPageToken`; every
/// review is normalized with the configured [`ReviewMapper`]. Each request is
/// bounded by `timeout`, so a stalled upstream surfaces as an error.
pub struct GoogleReviewsProvider {
    client: reqwest::Client,
    api_base: String,
    location_id: Option<String>,
    access_token: Option<String>,
    mapper: ReviewMapper,
}

impl GoogleReviewsProvider {
    pub fn new(
        api_base: String,
        location_id: Option<String>,
        access_token: Option<String>,
        mapper: MapperConfig,
        timeout: Duration,
    ) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_base,
            location_id,
            access_token,
            mapper: ReviewMapper::new(mapper),
        })
    }

    fn reviews_url(&self, location_id: &str) -> String {
        format!(
            "{}/v1/accounts/-/locations/{}/reviews",
            self.api_base.trim_end_matches('/'),
            location_id
        )
    }
}

#[async_trait]
impl ReviewProvider for GoogleReviewsProvider {
    fn name(&self) -> &'static str {
        "google"
    }

    async fn fetch_reviews(&self) -> Result<Vec<Review>, SourceError> {
        let (Some(location_id), Some(token)) = (&self.location_id, &self.access_token) else {
            return Err(SourceError::MissingCredentials);
        };
        let url = self.reviews_url(location_id);

        let mut reviews = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut request = self
                .client
                .get(&url)
                .bearer_auth(token)
                .query(&[("pageSize", PAGE_SIZE)]);
            if let Some(t) = &page_token {
                request = request.query(&[("pageToken", t.as_str())]);
            }

            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(SourceError::Status {
                    status: status.as_u16(),
                    reason: status.canonical_reason().unwrap_or("").to_string(),
                });
            }

            let page: GoogleReviewsPage = serde_json::from_slice(&response.bytes().await?)?;
            debug!("Fetched {} Google reviews", page.reviews.len());
            reviews.extend(self.mapper.map_all(&page.reviews));

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(next) => page_token = Some(next),
                None => break,
            }
        }
        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::sources::tests::{review, StaticProvider};
    use crate::sources::FallbackProvider;
    use std::net::TcpListener;
    use std::sync::Arc;

    fn provider(location: Option<&str>, token: Option<&str>) -> GoogleReviewsProvider {
        provider_at("https://example.invalid/", location, token)
    }

    fn provider_at(base: &str, location: Option<&str>, token: Option<&str>) -> GoogleReviewsProvider {
        GoogleReviewsProvider::new(
            base.into(),
            location.map(str::to_string),
            token.map(str::to_string),
            MapperConfig::default(),
            Duration::from_millis(300),
        )
        .unwrap()
    }

    // Accepts connections (via the listen backlog) but never answers.
    fn stalled_upstream() -> (TcpListener, String) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        (listener, base)
    }

    #[test]
    fn builds_location_url() {
        assert_eq!(
            provider(None, None).reviews_url("456"),
            "https://example.invalid/v1/accounts/-/locations/456/reviews"
        );
    }

    #[actix_web::test]
    async fn missing_credentials_fail_before_any_request() {
        for p in [provider(None, Some("t")), provider(Some("456"), None)] {
            assert!(matches!(
                p.fetch_reviews().await,
                Err(SourceError::MissingCredentials)
            ));
        }
    }

    #[actix_web::test]
    async fn stalled_upstream_times_out() {
        let (_listener, base) = stalled_upstream();
        let p = provider_at(&base, Some("456"), Some("t"));

        let result = tokio::time::timeout(Duration::from_secs(5), p.fetch_reviews())
            .await
            .expect("request must give up on its own");
        match result {
            Err(SourceError::Http(e)) => assert!(e.is_timeout()),
            other => panic!("expected a timeout, got {:?}", other.map(|r| r.len())),
        }
    }

    #[actix_web::test]
    async fn stalled_upstream_falls_back() {
        let (_listener, base) = stalled_upstream();
        let fallback = FallbackProvider::new(
            Arc::new(provider_at(&base, Some("456"), Some("t"))),
            Arc::new(StaticProvider(vec![review("mock")])),
        );

        let reviews = tokio::time::timeout(Duration::from_secs(5), fallback.fetch_reviews())
            .await
            .expect("fallback must not wait on the stalled upstream")
            .unwrap();
        assert_eq!(reviews[0].id, "mock");
    }
}
