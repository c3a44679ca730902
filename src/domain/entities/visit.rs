//! Visit entity representing a single redirect event.

use serde::Serialize;

/// One row of the append-only visit log.
///
/// Captured per successful redirect: origin address, derived browser and OS
/// labels, and the referrer. Missing request headers are stored as empty
/// strings rather than NULLs.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Visit {
    pub from_addr: String,
    pub browser_info: String,
    pub referrer: String,
    pub os_info: String,
}

/// Input data for recording a new visit.
#[derive(Debug, Clone)]
pub struct NewVisit {
    pub link_id: i64,
    pub from_addr: String,
    pub browser_info: String,
    pub referrer: String,
    pub os_info: String,
}
