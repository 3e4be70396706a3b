use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use super::technology::{Technology, TechnologyId};

/// The unique handle a user is looked up by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Username {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Username {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Identifier of a [`User`]. Freshly generated, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A registered user and the technologies they plan to study.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait, keyed
/// by [`Username`]. See [`crate::user_actor`] for the technology actions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: Username,
    /// Insertion order is display order.
    pub technologies: Vec<Technology>,
}

/// Payload for creating a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub username: Username,
}

impl User {
    /// Creates a user with a fresh id and no technologies.
    pub fn new(name: impl Into<String>, username: impl Into<Username>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            username: username.into(),
            technologies: Vec::new(),
        }
    }

    pub(crate) fn technology_mut(&mut self, id: TechnologyId) -> Option<&mut Technology> {
        self.technologies.iter_mut().find(|tech| tech.id == id)
    }

    /// Removes a technology, keeping the relative order of the rest.
    pub(crate) fn remove_technology(&mut self, id: TechnologyId) -> Option<Technology> {
        let index = self.technologies.iter().position(|tech| tech.id == id)?;
        Some(self.technologies.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("Alice", "alice");

        assert_eq!(user.name, "Alice");
        assert_eq!(user.username.as_str(), "alice");
        assert!(user.technologies.is_empty());
        assert_ne!(user.id, User::new("Alice", "alice").id);
    }

    #[test]
    fn test_serialized_shape() {
        let user = User::new("Alice", "alice");
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": user.id.to_string(),
                "name": "Alice",
                "username": "alice",
                "technologies": [],
            })
        );
    }
}
