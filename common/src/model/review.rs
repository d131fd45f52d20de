use serde::{Deserialize, Serialize};

/// Canonical testimonial record shared by every part of the system.
///
/// Reviews coming from Google are produced by [`crate::mapper`]; reviews coming
/// from the bundled mock file or from storage are deserialized directly. The
/// carousel does not care which path a record took.
///
/// The JSON shape is camelCase. On input the legacy keys `author`, `text` and
/// `profilePhotoUrl` are accepted for `name`, `content` and `image`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique within a list. Used as the animation key in the frontend.
    /// Blank on create requests, where storage assigns one.
    #[serde(default)]
    pub id: String,
    #[serde(alias = "author")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(alias = "text", default)]
    pub content: String,
    /// Star count in `1..=5`.
    pub rating: u8,
    /// ISO-8601 timestamp, display only.
    #[serde(default)]
    pub created_at: String,
    #[serde(alias = "profilePhotoUrl", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ReviewSource>,
    /// Deep link to the original review.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Review {
    pub fn is_google(&self) -> bool {
        self.source == Some(ReviewSource::Google)
    }
}

/// Where a review originally came from. Drives the badge on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewSource {
    Google,
    Direct,
    Email,
    #[serde(other)]
    Other,
}

impl ReviewSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewSource::Google => "google",
            ReviewSource::Direct => "direct",
            ReviewSource::Email => "email",
            ReviewSource::Other => "other",
        }
    }

    /// Parses a stored label. Unknown labels become `Other`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "google" => ReviewSource::Google,
            "direct" => ReviewSource::Direct,
            "email" => ReviewSource::Email,
            _ => ReviewSource::Other,
        }
    }
}

/// Optional constraints for listing stored reviews.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewFilter {
    #[serde(default)]
    pub min_rating: Option<u8>,
    #[serde(default)]
    pub source: Option<ReviewSource>,
}

impl ReviewFilter {
    pub fn matches(&self, review: &Review) -> bool {
        let rating_ok = self.min_rating.is_none_or(|min| review.rating >= min);
        let source_ok = self.source.is_none_or(|s| review.source == Some(s));
        rating_ok && source_ok
    }
}

/// Partial update of a stored review. The id can never be changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub content: Option<String>,
    pub rating: Option<u8>,
    pub created_at: Option<String>,
    pub image: Option<String>,
    pub location: Option<String>,
    pub project: Option<String>,
    pub source: Option<ReviewSource>,
    pub url: Option<String>,
}

impl ReviewUpdate {
    pub fn is_empty(&self) -> bool {
        self == &ReviewUpdate::default()
    }

    /// Overwrites every field that is set in the update.
    pub fn apply(&self, review: &mut Review) {
        if let Some(name) = &self.name {
            review.name = name.clone();
        }
        if let Some(content) = &self.content {
            review.content = content.clone();
        }
        if let Some(rating) = self.rating {
            review.rating = rating;
        }
        if let Some(created_at) = &self.created_at {
            review.created_at = created_at.clone();
        }
        if let Some(source) = self.source {
            review.source = Some(source);
        }
        for (value, slot) in [
            (&self.role, &mut review.role),
            (&self.image, &mut review.image),
            (&self.location, &mut review.location),
            (&self.project, &mut review.project),
            (&self.url, &mut review.url),
        ] {
            if let Some(v) = value {
                *slot = Some(v.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Review {
        Review {
            id: "r1".into(),
            name: "Sarah J.".into(),
            role: Some("Homeowner".into()),
            content: "Great work".into(),
            rating: 4,
            created_at: "2024-02-15T10:30:00Z".into(),
            image: None,
            location: None,
            project: None,
            source: Some(ReviewSource::Google),
            url: None,
        }
    }

    #[test]
    fn serializes_camel_case_and_skips_missing_optionals() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["createdAt"], "2024-02-15T10:30:00Z");
        assert_eq!(json["source"], "google");
        assert!(json.get("image").is_none());
        assert!(json.get("url").is_none());
    }

    #[test]
    fn accepts_legacy_field_names() {
        let review: Review = serde_json::from_str(
            r#"{"id":"7","author":"Ana","text":"Nice","rating":5,
                "createdAt":"2024-01-01T00:00:00Z","profilePhotoUrl":"https://x/a.png"}"#,
        )
        .unwrap();
        assert_eq!(review.name, "Ana");
        assert_eq!(review.content, "Nice");
        assert_eq!(review.image.as_deref(), Some("https://x/a.png"));
        assert_eq!(review.source, None);
    }

    #[test]
    fn unknown_source_label_is_other() {
        let review: Review = serde_json::from_str(
            r#"{"id":"1","name":"A","content":"","rating":3,"source":"yelp"}"#,
        )
        .unwrap();
        assert_eq!(review.source, Some(ReviewSource::Other));
        assert_eq!(ReviewSource::from_label(" Google "), ReviewSource::Google);
    }

    #[test]
    fn filter_checks_rating_and_source() {
        let review = sample();
        assert!(ReviewFilter::default().matches(&review));
        assert!(!ReviewFilter { min_rating: Some(5), source: None }.matches(&review));
        assert!(!ReviewFilter { min_rating: None, source: Some(ReviewSource::Direct) }.matches(&review));
        assert!(ReviewFilter { min_rating: Some(4), source: Some(ReviewSource::Google) }.matches(&review));
    }

    #[test]
    fn update_applies_only_set_fields() {
        let mut review = sample();
        let update = ReviewUpdate {
            rating: Some(5),
            location: Some("Laval, QC".into()),
            ..Default::default()
        };
        assert!(!update.is_empty());
        update.apply(&mut review);
        assert_eq!(review.rating, 5);
        assert_eq!(review.location.as_deref(), Some("Laval, QC"));
        assert_eq!(review.name, "Sarah J.");
        assert_eq!(review.role.as_deref(), Some("Homeowner"));
        assert!(ReviewUpdate::default().is_empty());
    }
}
