//! Customer entity.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::audit::AuditTrail;

/// Store-assigned customer identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i64);

impl CustomerId {
    /// Wrap a raw identifier issued by the store.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for CustomerId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Person owning at most one account.
///
/// ## Invariants
/// - `mobile_number` identifies at most one stored customer.
/// - `customer_id` is `None` only before the first save; the store assigns it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    pub customer_id: Option<CustomerId>,
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub audit: AuditTrail,
}
