use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Declared ahead of the mixed user-or-team collaborator feature; no routes
/// target teams yet.
#[allow(dead_code)]
#[derive(Debug, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub members: Vec<ObjectId>,
    pub created_date: DateTime<Utc>,
}
