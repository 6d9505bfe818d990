//! User record type.

use serde::{Deserialize, Serialize};

/// A user record stored in the "users" collection.
///
/// `id` and `date` are server-assigned at creation and immutable afterward;
/// there is no update operation for users. Profile fields pass through the
/// core unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Opaque unique identifier (UUID text), immutable after creation.
    #[serde(default)]
    pub id: String,

    /// Unix-seconds creation timestamp.
    #[serde(default)]
    pub date: i64,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_roundtrip() {
        let user = User {
            id: "u1".to_string(),
            date: 10,
            name: "a".to_string(),
            email: Some("a@example.com".to_string()),
        };
        let json = serde_json::to_string(&user).unwrap();
        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, user);
    }

    #[test]
    fn test_user_deserialize_without_server_fields() {
        let user: User = serde_json::from_str(r#"{"name": "a"}"#).unwrap();
        assert_eq!(user.id, "");
        assert_eq!(user.date, 0);
        assert!(user.email.is_none());
    }

    #[test]
    fn test_user_serialize_skips_missing_email() {
        let user = User {
            id: "u1".to_string(),
            date: 10,
            name: "a".to_string(),
            email: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("email"));
    }
}
