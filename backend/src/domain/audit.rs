//! Audit columns shared by customers and accounts.

use chrono::{DateTime, Utc};

/// Actor recorded in `created_by` and `updated_by` for writes made by this
/// service.
pub const AUDIT_ACTOR: &str = "ACCOUNTS_MS";

/// Who touched a record and when.
///
/// Fields stay `None` until the service stamps them; the store persists them
/// verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditTrail {
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

impl AuditTrail {
    /// Record creation at `at`.
    pub fn stamp_created(&mut self, at: DateTime<Utc>) {
        self.created_at = Some(at);
        self.created_by = Some(AUDIT_ACTOR.to_owned());
    }

    /// Record a modification at `at`. Creation fields are left alone.
    pub fn stamp_updated(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
        self.updated_by = Some(AUDIT_ACTOR.to_owned());
    }
}
