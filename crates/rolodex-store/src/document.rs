use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Document id, assigned at creation
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A stored user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Document id, assigned at creation
    pub id: Uuid,
    pub username: String,
    pub email: String,
}
