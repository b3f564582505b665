//! Link entity representing a short path mapping.

use chrono::{DateTime, Utc};

/// A stored mapping from a short path to its destination URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub path: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(path: String, url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            path,
            url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub path: String,
    pub url: String,
}
