//! Wire shape of the Google Business Profile reviews API.
//!
//! Every field defaults when absent so that a partial or odd payload still
//! deserializes. Normalization into [`crate::model::review::Review`] happens in
//! [`crate::mapper`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoogleReview {
    pub review_id: String,
    pub reviewer: GoogleReviewer,
    /// One of `ONE`..`FIVE` in practice, but not trusted.
    pub star_rating: String,
    pub comment: String,
    pub create_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_reply: Option<GoogleReviewReply>,
    /// Opaque resource name, e.g. `accounts/123/locations/456/reviews/abc`.
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoogleReviewer {
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoogleReviewReply {
    pub comment: String,
    pub update_time: String,
}

/// One page of the list-reviews response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoogleReviewsPage {
    pub reviews: Vec<GoogleReview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// The closed set of qualitative star labels the API documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarRating {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl StarRating {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "ONE" => Some(StarRating::One),
            "TWO" => Some(StarRating::Two),
            "THREE" => Some(StarRating::Three),
            "FOUR" => Some(StarRating::Four),
            "FIVE" => Some(StarRating::Five),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        match self {
            StarRating::One => 1,
            StarRating::Two => 2,
            StarRating::Three => 3,
            StarRating::Four => 4,
            StarRating::Five => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_payload_deserializes() {
        let review: GoogleReview =
            serde_json::from_str(r#"{"reviewId":"abc","starRating":"TWO"}"#).unwrap();
        assert_eq!(review.review_id, "abc");
        assert_eq!(review.reviewer.display_name, "");
        assert_eq!(review.reviewer.profile_photo_url, None);
        assert_eq!(review.comment, "");
    }

    #[test]
    fn page_without_reviews_is_empty() {
        let page: GoogleReviewsPage = serde_json::from_str("{}").unwrap();
        assert!(page.reviews.is_empty());
        assert_eq!(page.next_page_token, None);
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert_eq!(StarRating::from_label("THREE").map(StarRating::value), Some(3));
        assert_eq!(StarRating::from_label("three"), None);
        assert_eq!(StarRating::from_label("STAR_RATING_UNSPECIFIED"), None);
    }
}
