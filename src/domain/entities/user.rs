//! Domain entity representing an API user.

use chrono::{DateTime, Utc};

/// A registered user.
///
/// Users are created once and never updated or deleted by the service.
/// `email` is unique across all users; the store enforces it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: i64, email: String, name: Option<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            email,
            name,
            created_at,
        }
    }
}

/// Input data for creating a new user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let now = Utc::now();
        let user = User::new(
            1,
            "ada@example.com".to_string(),
            Some("Ada".to_string()),
            now,
        );

        assert_eq!(user.id, 1);
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.name.as_deref(), Some("Ada"));
        assert_eq!(user.created_at, now);
    }

    #[test]
    fn test_user_without_name() {
        let user = User::new(2, "anon@example.com".to_string(), None, Utc::now());

        assert!(user.name.is_none());
    }
}
