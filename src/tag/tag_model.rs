use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A tag is shared across posts: looked up case-insensitively via `key`,
/// created once preserving the submitter's casing, never deleted here.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Tag {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Tag text as first submitted, casing preserved.
    pub tag: String,
    /// Normalized lookup key: trimmed, lowercased. Unique per collection.
    pub key: String,
    pub created_date: DateTime<Utc>,
}

impl Tag {
    pub fn new(name: &str) -> Self {
        Tag {
            id: ObjectId::new(),
            tag: name.to_string(),
            key: name.trim().to_lowercase(),
            created_date: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tag_preserves_casing_and_normalizes_key() {
        let tag = Tag::new("MongoDB");
        assert_eq!(tag.tag, "MongoDB");
        assert_eq!(tag.key, "mongodb");
    }
}
