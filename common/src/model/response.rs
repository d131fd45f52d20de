use serde::{Deserialize, Serialize};

/// Uniform `{ success, data?, error? }` envelope returned by the storage
/// endpoints. Callers branch on `success` instead of on HTTP exceptions.
///
/// Missing optional keys read back as `None`. Do not add `#[serde(default)]`
/// to `data`: it would require `T: Default` to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Item count, only set on list responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
            total: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
            total: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    pub fn ok_list(items: Vec<T>) -> Self {
        let total = items.len();
        Self {
            total: Some(total),
            ..Self::ok(items)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::review::Review;

    #[test]
    fn failure_has_no_data() {
        let resp: ApiResponse<u32> = ApiResponse::failure("Testimonial not found");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "error": "Testimonial not found"}));
    }

    #[test]
    fn reads_review_envelopes() {
        let ok: ApiResponse<Review> = serde_json::from_str(
            r#"{"success":true,"data":{"id":"r1","name":"Ana P.","content":"Top","rating":5},
                "message":"Testimonial created"}"#,
        )
        .unwrap();
        assert!(ok.success);
        assert_eq!(ok.data.unwrap().id, "r1");
        assert_eq!(ok.message.as_deref(), Some("Testimonial created"));

        let failed: ApiResponse<Review> =
            serde_json::from_str(r#"{"success":false,"error":"Testimonial not found"}"#).unwrap();
        assert!(!failed.success);
        assert!(failed.data.is_none());
        assert_eq!(failed.error.as_deref(), Some("Testimonial not found"));

        let list: ApiResponse<Vec<Review>> =
            serde_json::from_str(r#"{"success":true,"data":[],"total":0}"#).unwrap();
        assert_eq!(list.total, Some(0));
    }

    #[test]
    fn list_carries_total() {
        let resp = ApiResponse::ok_list(vec![1, 2, 3]);
        assert!(resp.success);
        assert_eq!(resp.total, Some(3));
    }
}
