//! API key entity authorizing use of the HTTP API.

use chrono::{DateTime, Utc};

/// A provisioned API key.
///
/// Keys are created out-of-band (see the `admin` binary) and never change
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey {
    pub key: String,
    pub owner_email: String,
    pub created_at: DateTime<Utc>,
}

impl ApiKey {
    pub fn new(key: String, owner_email: String, created_at: DateTime<Utc>) -> Self {
        Self {
            key,
            owner_email,
            created_at,
        }
    }
}

/// Input data for provisioning a new API key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApiKey {
    pub key: String,
    pub owner_email: String,
}
