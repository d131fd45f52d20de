//! # Review Mapper
//!
//! Normalizes one Google Business Profile review into the canonical
//! [`Review`] record. The mapping is pure and total: a missing photo, an empty
//! display name or an unknown rating label each degrade to a fixed fallback,
//! never to an error, so one bad review cannot break the whole carousel.
//!
//! Derived fields are deterministic. The same raw display name always yields
//! the same initials, palette color and avatar URL, which keeps fixtures and
//! avatar caches stable.

use crate::model::google::{GoogleReview, StarRating};
use crate::model::review::{Review, ReviewSource};

const FALLBACK_NAME: &str = "Google User";
const FALLBACK_INITIALS: &str = "GU";
const DEFAULT_ROLE: &str = "Verified Customer";
const DEFAULT_REVIEW_LINK_BASE: &str = "https://maps.google.com/?q=";
const AVATAR_BASE: &str = "https://ui-avatars.com/api/";

const AVATAR_PALETTE: [&str; 10] = [
    "6366f1", "8b5cf6", "06b6d4", "10b981", "f59e0b", "ef4444", "84cc16", "f97316", "ec4899",
    "3b82f6",
];

/// Knobs for values the external payload never carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperConfig {
    /// Role label put on every mapped review.
    pub role: Option<String>,
    /// Location to show when the source has none. Unset by default.
    pub default_location: Option<String>,
    /// Prefix of the deep link; the review's resource name is appended.
    pub review_link_base: String,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            role: Some(DEFAULT_ROLE.to_string()),
            default_location: None,
            review_link_base: DEFAULT_REVIEW_LINK_BASE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReviewMapper {
    config: MapperConfig,
}

impl ReviewMapper {
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    pub fn map(&self, raw: &GoogleReview) -> Review {
        let display_name = raw.reviewer.display_name.as_str();
        let image = raw
            .reviewer
            .profile_photo_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| avatar_url(display_name));
        let url = if raw.name.is_empty() {
            None
        } else {
            Some(format!("{}{}", self.config.review_link_base, raw.name))
        };

        Review {
            id: raw.review_id.clone(),
            name: format_name(display_name),
            role: self.config.role.clone(),
            content: raw.comment.clone(),
            rating: map_star_rating(&raw.star_rating),
            created_at: raw.create_time.clone(),
            image: Some(image),
            location: self.config.default_location.clone(),
            project: None,
            source: Some(ReviewSource::Google),
            url,
        }
    }

    pub fn map_all<'a>(&self, raw: impl IntoIterator<Item = &'a GoogleReview>) -> Vec<Review> {
        raw.into_iter().map(|r| self.map(r)).collect()
    }
}

/// Maps one review with the default [`MapperConfig`].
pub fn map_external_review(raw: &GoogleReview) -> Review {
    ReviewMapper::default().map(raw)
}

/// `ONE`..`FIVE` to `1..=5`. Anything else is treated as five stars.
pub fn map_star_rating(label: &str) -> u8 {
    StarRating::from_label(label).map_or(5, StarRating::value)
}

/// Shortens a display name to first name plus last initial, e.g.
/// `"John Doe"` becomes `"John D."`. Single names pass through.
pub fn format_name(raw: &str) -> String {
    let parts: Vec<&str> = raw.split_whitespace().collect();
    match parts.as_slice() {
        [] => FALLBACK_NAME.to_string(),
        [only] => (*only).to_string(),
        [first, .., last] => match last.chars().next() {
            Some(initial) => format!("{first} {initial}."),
            None => (*first).to_string(),
        },
    }
}

pub fn get_initials(raw: &str) -> String {
    let parts: Vec<&str> = raw.split_whitespace().collect();
    let initials: String = match parts.as_slice() {
        [] => return FALLBACK_INITIALS.to_string(),
        [only] => only.chars().take(1).collect(),
        [first, .., last] => first.chars().take(1).chain(last.chars().take(1)).collect(),
    };
    initials.to_uppercase()
}

/// Picks an avatar background from the palette by hashing the raw name.
///
/// The hash walks UTF-16 code units and computes
/// `hash = unit + ((hash << 5) - hash)` where the shift operates on the low
/// 32 bits of `hash` and wraps, while the subtraction and addition are exact.
pub fn color_from_name(raw: &str) -> &'static str {
    let mut hash: i64 = 0;
    for unit in raw.encode_utf16() {
        let shifted = (hash as i32).wrapping_shl(5) as i64;
        hash = i64::from(unit).wrapping_add(shifted.wrapping_sub(hash));
    }
    AVATAR_PALETTE[(hash.unsigned_abs() % AVATAR_PALETTE.len() as u64) as usize]
}

/// Placeholder avatar URL built from the initials and palette color.
pub fn avatar_url(raw: &str) -> String {
    let initials = get_initials(raw);
    format!(
        "{AVATAR_BASE}?name={}&background={}&color=fff&size=100&bold=true&format=png",
        urlencoding::encode(&initials),
        color_from_name(raw)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::google::GoogleReviewer;

    fn payload(display_name: &str, photo: Option<&str>, rating: &str) -> GoogleReview {
        GoogleReview {
            review_id: "review_123".into(),
            reviewer: GoogleReviewer {
                display_name: display_name.into(),
                profile_photo_url: photo.map(str::to_string),
            },
            star_rating: rating.into(),
            comment: "Excellent service! Highly recommend.".into(),
            create_time: "2024-02-15T10:30:00Z".into(),
            review_reply: None,
            name: "accounts/123/locations/456".into(),
        }
    }

    #[test]
    fn maps_full_payload() {
        let review = map_external_review(&payload(
            "John Doe",
            Some("https://example.com/avatar.jpg"),
            "FIVE",
        ));

        assert_eq!(review.id, "review_123");
        assert_eq!(review.name, "John D.");
        assert_eq!(review.role.as_deref(), Some("Verified Customer"));
        assert_eq!(review.rating, 5);
        assert_eq!(review.content, "Excellent service! Highly recommend.");
        assert_eq!(review.created_at, "2024-02-15T10:30:00Z");
        assert_eq!(review.image.as_deref(), Some("https://example.com/avatar.jpg"));
        assert_eq!(review.source, Some(ReviewSource::Google));
        assert_eq!(
            review.url.as_deref(),
            Some("https://maps.google.com/?q=accounts/123/locations/456")
        );
        assert_eq!(review.location, None);
    }

    #[test]
    fn missing_photo_gets_generated_avatar() {
        let review = map_external_review(&payload("Jane Smith", None, "FOUR"));
        assert_eq!(review.name, "Jane S.");
        assert_eq!(review.rating, 4);
        assert_eq!(
            review.image.as_deref(),
            Some(
                "https://ui-avatars.com/api/?name=JS&background=3b82f6&color=fff&size=100&bold=true&format=png"
            )
        );
    }

    #[test]
    fn blank_photo_counts_as_missing() {
        let review = map_external_review(&payload("John Doe", Some(""), "FIVE"));
        assert!(review.image.unwrap().contains("ui-avatars.com"));
    }

    #[test]
    fn star_labels_map_exactly() {
        let labels = ["ONE", "TWO", "THREE", "FOUR", "FIVE"];
        for (label, expected) in labels.iter().zip(1u8..=5) {
            assert_eq!(map_star_rating(label), expected);
        }
    }

    #[test]
    fn unknown_star_label_defaults_to_five() {
        assert_eq!(map_star_rating("UNKNOWN"), 5);
        assert_eq!(map_star_rating(""), 5);
        assert_eq!(map_star_rating("one"), 5);
    }

    #[test]
    fn blank_names_fall_back() {
        for name in ["", " ", "\t\n  "] {
            assert_eq!(format_name(name), "Google User");
            assert_eq!(get_initials(name), "GU");
        }
    }

    #[test]
    fn name_formatting() {
        assert_eq!(format_name("Madonna"), "Madonna");
        assert_eq!(format_name("  Jane   Smith "), "Jane S.");
        assert_eq!(format_name("Mary Ann van Dyke"), "Mary D.");
        assert_eq!(format_name("Élodie Brûlé"), "Élodie B.");
    }

    #[test]
    fn initials() {
        assert_eq!(get_initials("madonna"), "M");
        assert_eq!(get_initials("john ronald tolkien"), "JT");
        assert_eq!(get_initials("élodie brûlé"), "ÉB");
    }

    #[test]
    fn palette_selection_is_stable() {
        assert_eq!(color_from_name("John Doe"), "f97316");
        assert_eq!(color_from_name("Jane Smith"), "3b82f6");
        assert_eq!(color_from_name(""), "6366f1");
        assert_eq!(color_from_name("Madonna"), "84cc16");
        assert_eq!(color_from_name("A very long reviewer display name here"), "3b82f6");
    }

    #[test]
    fn avatar_url_encodes_initials() {
        assert_eq!(
            avatar_url("Élodie Brûlé"),
            "https://ui-avatars.com/api/?name=%C3%89B&background=6366f1&color=fff&size=100&bold=true&format=png"
        );
    }

    #[test]
    fn mapping_is_deterministic() {
        let raw = payload("Sarah Johnson", None, "THREE");
        let first = serde_json::to_string(&map_external_review(&raw)).unwrap();
        let second = serde_json::to_string(&map_external_review(&raw)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn config_supplies_location_and_role() {
        let mapper = ReviewMapper::new(MapperConfig {
            role: None,
            default_location: Some("Montreal, QC".into()),
            ..MapperConfig::default()
        });
        let review = mapper.map(&payload("John Doe", None, "TWO"));
        assert_eq!(review.location.as_deref(), Some("Montreal, QC"));
        assert_eq!(review.role, None);
    }

    #[test]
    fn empty_resource_name_has_no_link() {
        let mut raw = payload("John Doe", None, "FIVE");
        raw.name.clear();
        assert_eq!(map_external_review(&raw).url, None);
    }

    #[test]
    fn map_all_preserves_order() {
        let mut second = payload("Jane Smith", None, "ONE");
        second.review_id = "review_456".into();
        let reviews = ReviewMapper::default().map_all([&payload("John Doe", None, "FIVE"), &second]);
        let ids: Vec<&str> = reviews.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["review_123", "review_456"]);
    }
}
