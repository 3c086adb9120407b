//! Driving port for account lookups.

use async_trait::async_trait;

use crate::domain::{AccountsError, CustomerView};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountsQuery: Send + Sync {
    /// Customer and account details for `mobile_number`.
    async fn fetch_account(&self, mobile_number: &str) -> Result<CustomerView, AccountsError>;
}
