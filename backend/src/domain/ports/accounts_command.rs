//! Driving port for account mutations.
//!
//! HTTP handlers call this port to open, change and close accounts without
//! touching persistence concerns.

use async_trait::async_trait;

use crate::domain::{AccountsError, CustomerView};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountsCommand: Send + Sync {
    /// Register the customer described by `view` and open their account.
    ///
    /// # Errors
    ///
    /// [`AccountsError::CustomerAlreadyExists`] when the mobile number is
    /// taken; nothing is written in that case.
    async fn create_account(&self, view: CustomerView) -> Result<(), AccountsError>;

    /// Merge `view` into the stored account and its owning customer.
    ///
    /// The embedded account view must carry the account number. Returns
    /// `false` when the change was not applied.
    async fn update_account(&self, view: CustomerView) -> Result<bool, AccountsError>;

    /// Close the account registered under `mobile_number` and forget the
    /// customer. Returns `false` when nothing was removed.
    async fn delete_account(&self, mobile_number: &str) -> Result<bool, AccountsError>;
}
