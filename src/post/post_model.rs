use crate::utils::error::CustomError;
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub body: String,
    pub collaborators: Vec<ObjectId>,
    pub tags: Vec<PostTag>,
    pub created_date: DateTime<Utc>,
}

/// Join entry linking a post to a shared tag. `is_explicit` distinguishes
/// user-supplied tags from title-derived ones.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PostTag {
    pub tag_id: ObjectId,
    pub is_explicit: bool,
}

#[derive(Debug)]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
    pub collaborators: Vec<String>,
    pub explicit_tags: Vec<String>,
}

impl CreatePostRequest {
    /// Validate the raw JSON payload by hand so the response can name the
    /// first missing or malformed field. Runs before any database work.
    pub fn from_payload(payload: &Value) -> Result<Self, CustomError> {
        let payload = payload
            .as_object()
            .ok_or_else(|| CustomError::ValidationError("missing json body".to_string()))?;

        for required_field in ["title", "body", "collaborators", "explicit_tags"] {
            CustomError::raise_assert(
                payload.contains_key(required_field),
                format!("\"{}\" required", required_field),
                CustomError::ValidationError,
            )?;
        }

        let title = payload["title"]
            .as_str()
            .ok_or_else(|| CustomError::ValidationError("\"title\" must be a string".to_string()))?
            .to_string();

        let body = payload["body"]
            .as_str()
            .ok_or_else(|| CustomError::ValidationError("\"body\" must be a string".to_string()))?
            .to_string();

        let collaborators = string_list(&payload["collaborators"], "collaborators")?;
        let explicit_tags = string_list(&payload["explicit_tags"], "explicit_tags")?;

        Ok(CreatePostRequest {
            title,
            body,
            collaborators,
            explicit_tags,
        })
    }
}

fn string_list(value: &Value, field: &str) -> Result<Vec<String>, CustomError> {
    value
        .as_array()
        .ok_or_else(|| CustomError::ValidationError(format!("\"{}\" must be a list", field)))?
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                CustomError::ValidationError(format!("\"{}\" entries must be strings", field))
            })
        })
        .collect()
}

/// Collaborator summary embedded in the fetch response.
#[derive(Debug, Serialize)]
pub struct CollaboratorView {
    pub user_id: String,
    pub username: String,
    pub display_name: String,
}

/// Response shape for `GET /post/{id}`.
#[derive(Debug, Serialize)]
pub struct PostView {
    pub post_id: String,
    pub created_date: DateTime<Utc>,
    pub title: String,
    pub body: String,
    pub collaborators: Vec<CollaboratorView>,
    pub explicit_tags: Vec<String>,
    pub implicit_tags: Vec<String>,
}

/// Response shape for `POST /post/`; collaborators are echoed as ids only.
#[derive(Debug, Serialize)]
pub struct CreatedPostView {
    pub post_id: String,
    pub title: String,
    pub body: String,
    pub collaborators: Vec<String>,
    pub explicit_tags: Vec<String>,
    pub implicit_tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> Value {
        json!({
            "title": "Async Rust",
            "body": "Notes on async Rust.",
            "collaborators": ["64f000000000000000000001"],
            "explicit_tags": ["rust", "async"],
        })
    }

    #[test]
    fn accepts_complete_payload() {
        let req = CreatePostRequest::from_payload(&full_payload()).unwrap();
        assert_eq!(req.title, "Async Rust");
        assert_eq!(req.explicit_tags, vec!["rust", "async"]);
        assert_eq!(req.collaborators, vec!["64f000000000000000000001"]);
    }

    #[test]
    fn missing_body_is_a_validation_error() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("body");

        let err = CreatePostRequest::from_payload(&payload).unwrap_err();
        assert!(matches!(err, CustomError::ValidationError(msg) if msg == "\"body\" required"));
    }

    #[test]
    fn missing_collaborators_is_a_validation_error() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("collaborators");

        let err = CreatePostRequest::from_payload(&payload).unwrap_err();
        assert!(
            matches!(err, CustomError::ValidationError(msg) if msg == "\"collaborators\" required")
        );
    }

    #[test]
    fn non_object_payload_is_rejected() {
        let err = CreatePostRequest::from_payload(&json!(null)).unwrap_err();
        assert!(matches!(err, CustomError::ValidationError(msg) if msg == "missing json body"));
    }

    #[test]
    fn non_list_tags_are_rejected() {
        let mut payload = full_payload();
        payload["explicit_tags"] = json!("rust");

        let err = CreatePostRequest::from_payload(&payload).unwrap_err();
        assert!(
            matches!(err, CustomError::ValidationError(msg) if msg == "\"explicit_tags\" must be a list")
        );
    }
}
