//! Port for customer persistence.
//!
//! Customers are reachable by the store-assigned [`CustomerId`] and by their
//! unique mobile number. Adapters own id assignment.

use async_trait::async_trait;

use crate::domain::{Customer, CustomerId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by customer repository adapters.
    pub enum CustomerRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "customer repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "customer repository query failed: {message}",
        /// The store's uniqueness guarantee on mobile numbers rejected a write.
        DuplicateMobileNumber { mobile_number: String } =>
            "mobile number {mobile_number} is already registered",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Look up the customer registered under `mobile_number`.
    async fn find_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<Option<Customer>, CustomerRepositoryError>;

    async fn find_by_id(
        &self,
        id: CustomerId,
    ) -> Result<Option<Customer>, CustomerRepositoryError>;

    /// Insert or update a customer.
    ///
    /// A customer without an id is inserted and returned with the id the
    /// store assigned; otherwise the stored row is overwritten.
    async fn save(&self, customer: Customer) -> Result<Customer, CustomerRepositoryError>;

    /// Remove a customer. Deleting an absent id is not an error.
    async fn delete_by_id(&self, id: CustomerId) -> Result<(), CustomerRepositoryError>;
}
