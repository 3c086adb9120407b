//! Port for account persistence.
//!
//! Accounts are keyed by their [`AccountNumber`] and reachable through the
//! owning customer's id.

use async_trait::async_trait;

use crate::domain::{Account, AccountNumber, CustomerId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by account repository adapters.
    pub enum AccountRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "account repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "account repository query failed: {message}",
        /// The account number is already held by a different customer.
        AccountNumberTaken { account_number: i64 } =>
            "account number {account_number} belongs to another customer",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Look up the account owned by `customer_id`.
    async fn find_by_customer_id(
        &self,
        customer_id: CustomerId,
    ) -> Result<Option<Account>, AccountRepositoryError>;

    async fn find_by_account_number(
        &self,
        account_number: AccountNumber,
    ) -> Result<Option<Account>, AccountRepositoryError>;

    /// Insert the account, or overwrite it when the stored row has the same
    /// owner.
    ///
    /// Callers must set `account_number` and `customer_id` before saving. A
    /// number already held by another customer is rejected with
    /// [`AccountRepositoryError::AccountNumberTaken`] and nothing is written.
    async fn save(&self, account: Account) -> Result<Account, AccountRepositoryError>;

    /// Remove the account owned by `customer_id`, if any.
    async fn delete_by_customer_id(
        &self,
        customer_id: CustomerId,
    ) -> Result<(), AccountRepositoryError>;
}
