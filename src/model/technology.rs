use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use super::timestamp::{self, Deadline};

/// Identifier of a [`Technology`]. Freshly generated, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TechnologyId(Uuid);

impl TechnologyId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses an id taken from a request path. Anything that is not a UUID cannot name
    /// a technology, so it yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }
}

impl Default for TechnologyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TechnologyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A study item owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Technology {
    pub id: TechnologyId,
    pub title: String,
    pub studied: bool,
    pub deadline: Deadline,
    #[serde(serialize_with = "timestamp::serialize")]
    pub created_at: DateTime<Utc>,
}

/// Payload for adding a technology to a user.
#[derive(Debug, Clone)]
pub struct TechnologyCreate {
    pub title: String,
    pub deadline: Deadline,
}

/// Payload for editing a technology. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct TechnologyUpdate {
    pub title: Option<String>,
    pub deadline: Option<Deadline>,
}

impl Technology {
    /// Creates a not-yet-studied technology stamped with `created_at`.
    pub fn new(params: TechnologyCreate, created_at: DateTime<Utc>) -> Self {
        Self {
            id: TechnologyId::new(),
            title: params.title,
            studied: false,
            deadline: params.deadline,
            created_at,
        }
    }

    /// Applies an update. An empty title counts as "not supplied".
    pub fn apply(&mut self, update: TechnologyUpdate) {
        if let Some(title) = update.title.filter(|title| !title.is_empty()) {
            self.title = title;
        }
        if let Some(deadline) = update.deadline {
            self.deadline = deadline;
        }
    }

    pub fn mark_studied(&mut self) {
        self.studied = true;
    }
}
