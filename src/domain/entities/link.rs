//! Link entity representing a hook-to-URL mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted short link.
///
/// Binds a short hook to its original URL plus creation, expiry, and visit
/// metadata. Both `hook` and `original_url` are unique among live links.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub original_url: String,
    pub hook: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub visits: i64,
}

impl Link {
    /// Returns true if the link has passed its expiry time.
    ///
    /// Expired links stay resolvable but are refused at redirect time.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| e < Utc::now())
    }
}

/// Input data for creating a new link. `visits` always starts at zero.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub original_url: String,
    pub hook: String,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Resolution projection of a [`Link`], also the cache payload.
///
/// Serialized to JSON for the cache round trip, so field names are part of
/// the cache format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkDetails {
    pub id: i64,
    pub original_url: String,
    pub shortened_url: String,
    pub creation_date: DateTime<Utc>,
    pub expiration_date: Option<DateTime<Utc>>,
}

impl From<&Link> for LinkDetails {
    fn from(link: &Link) -> Self {
        Self {
            id: link.id,
            original_url: link.original_url.clone(),
            shortened_url: link.hook.clone(),
            creation_date: link.created_at,
            expiration_date: link.expires_at,
        }
    }
}

impl LinkDetails {
    /// Returns true if the expiry timestamp is strictly in the past.
    pub fn is_expired(&self) -> bool {
        self.expiration_date.is_some_and(|e| e < Utc::now())
    }
}
