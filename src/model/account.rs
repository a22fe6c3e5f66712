use bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// Stored credential record. The document keeps the original field names
/// (`password`, `createdAt`) so existing user collections stay readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    #[serde(rename = "password")]
    pub password_hash: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime,
}
