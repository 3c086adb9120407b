//! Accounts domain service.
//!
//! Implements the [`AccountsCommand`] and [`AccountsQuery`] driving ports on
//! top of the customer and account repositories. Every operation stops at its
//! first failure and returns it unchanged; nothing is retried or compensated.
//!
//! The duplicate check in [`AccountsCommand::create_account`] is a plain
//! read-then-write. Two concurrent creates for one mobile number are settled
//! by the store's uniqueness constraint, which adapters report as
//! [`CustomerRepositoryError::DuplicateMobileNumber`].

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::mapper::{account_from_view, customer_from_view, to_customer_view};
use crate::domain::ports::{
    AccountNumberGenerator, AccountRepository, AccountRepositoryError, AccountsCommand,
    AccountsQuery, CustomerRepository, CustomerRepositoryError,
};
use crate::domain::{
    Account, AccountType, AccountView, AccountsError, Customer, CustomerId, CustomerView,
    DEFAULT_BRANCH_ADDRESS,
};

/// Accounts service implementing the driving ports.
#[derive(Clone)]
pub struct AccountsService<C, A> {
    customer_repo: Arc<C>,
    account_repo: Arc<A>,
    account_numbers: Arc<dyn AccountNumberGenerator>,
    clock: Arc<dyn Clock>,
}

impl<C, A> AccountsService<C, A> {
    /// Create a service over the given repositories.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use accounts::domain::AccountsService;
    /// # use accounts::domain::ports::RandomAccountNumberGenerator;
    /// # use accounts::outbound::memory::InMemoryAccountsStore;
    /// # use mockable::DefaultClock;
    /// let store = Arc::new(InMemoryAccountsStore::default());
    /// let service = AccountsService::new(
    ///     store.clone(),
    ///     store,
    ///     Arc::new(RandomAccountNumberGenerator),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(
        customer_repo: Arc<C>,
        account_repo: Arc<A>,
        account_numbers: Arc<dyn AccountNumberGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            customer_repo,
            account_repo,
            account_numbers,
            clock,
        }
    }
}

impl<C, A> AccountsService<C, A>
where
    C: CustomerRepository,
    A: AccountRepository,
{
    fn map_customer_error(error: CustomerRepositoryError) -> AccountsError {
        match error {
            CustomerRepositoryError::Connection { message } => {
                AccountsError::unavailable(format!("customer repository unavailable: {message}"))
            }
            CustomerRepositoryError::Query { message } => {
                AccountsError::internal(format!("customer repository error: {message}"))
            }
            CustomerRepositoryError::DuplicateMobileNumber { mobile_number } => {
                AccountsError::customer_already_exists(mobile_number)
            }
        }
    }

    fn map_account_error(error: AccountRepositoryError) -> AccountsError {
        match error {
            AccountRepositoryError::Connection { message } => {
                AccountsError::unavailable(format!("account repository unavailable: {message}"))
            }
            AccountRepositoryError::Query { message } => {
                AccountsError::internal(format!("account repository error: {message}"))
            }
            AccountRepositoryError::AccountNumberTaken { account_number } => {
                AccountsError::internal(format!(
                    "generated account number {account_number} is already issued"
                ))
            }
        }
    }

    fn stored_customer_id(customer: &Customer) -> Result<CustomerId, AccountsError> {
        customer
            .customer_id
            .ok_or_else(|| AccountsError::internal("stored customer has no id"))
    }

    fn new_account(&self, view: Option<&AccountView>, customer_id: CustomerId) -> Account {
        let template = Account {
            account_type: AccountType::Savings,
            branch_address: DEFAULT_BRANCH_ADDRESS.to_owned(),
            ..Account::default()
        };
        let mut account = match view {
            Some(view) => account_from_view(view, template),
            None => template,
        };
        account.account_number = Some(self.account_numbers.next_account_number());
        account.customer_id = Some(customer_id);
        account.audit.stamp_created(self.clock.utc());
        account
    }

    async fn customer_by_mobile(&self, mobile_number: &str) -> Result<Customer, AccountsError> {
        self.customer_repo
            .find_by_mobile_number(mobile_number)
            .await
            .map_err(Self::map_customer_error)?
            .ok_or_else(|| {
                AccountsError::resource_not_found("Customer", "mobileNumber", mobile_number)
            })
    }
}

#[async_trait]
impl<C, A> AccountsCommand for AccountsService<C, A>
where
    C: CustomerRepository,
    A: AccountRepository,
{
    async fn create_account(&self, view: CustomerView) -> Result<(), AccountsError> {
        let mobile_number = view
            .mobile_number
            .as_deref()
            .ok_or_else(|| AccountsError::validation("mobileNumber", "mobileNumber is required"))?;

        let existing = self
            .customer_repo
            .find_by_mobile_number(mobile_number)
            .await
            .map_err(Self::map_customer_error)?;
        if existing.is_some() {
            return Err(AccountsError::customer_already_exists(mobile_number));
        }

        let mut customer = customer_from_view(&view, Customer::default());
        customer.audit.stamp_created(self.clock.utc());
        let saved = self
            .customer_repo
            .save(customer)
            .await
            .map_err(Self::map_customer_error)?;
        let customer_id = Self::stored_customer_id(&saved)?;

        let account = self.new_account(view.account.as_ref(), customer_id);
        let account = self
            .account_repo
            .save(account)
            .await
            .map_err(Self::map_account_error)?;

        debug!(
            customer_id = customer_id.get(),
            account_number = ?account.account_number.map(|n| n.get()),
            "opened account"
        );
        Ok(())
    }

    async fn update_account(&self, view: CustomerView) -> Result<bool, AccountsError> {
        let Some(account_view) = view.account.as_ref() else {
            return Err(AccountsError::validation(
                "AccountNumber",
                "account details with an account number are required",
            ));
        };
        let Some(account_number) = account_view.account_number else {
            return Err(AccountsError::validation(
                "AccountNumber",
                "AccountNumber is required",
            ));
        };

        let account = self
            .account_repo
            .find_by_account_number(account_number)
            .await
            .map_err(Self::map_account_error)?
            .ok_or_else(|| {
                AccountsError::resource_not_found("Account", "AccountNumber", account_number)
            })?;
        let mut account = account_from_view(account_view, account);
        account.audit.stamp_updated(self.clock.utc());
        let account = self
            .account_repo
            .save(account)
            .await
            .map_err(Self::map_account_error)?;

        let customer_id = account
            .customer_id
            .ok_or_else(|| AccountsError::internal("stored account has no customer id"))?;
        let customer = self
            .customer_repo
            .find_by_id(customer_id)
            .await
            .map_err(Self::map_customer_error)?
            .ok_or_else(|| {
                AccountsError::resource_not_found("Customer", "customerId", customer_id)
            })?;
        let mut customer = customer_from_view(&view, customer);
        customer.audit.stamp_updated(self.clock.utc());
        self.customer_repo
            .save(customer)
            .await
            .map_err(Self::map_customer_error)?;

        debug!(
            customer_id = customer_id.get(),
            account_number = account_number.get(),
            "updated account"
        );
        Ok(true)
    }

    async fn delete_account(&self, mobile_number: &str) -> Result<bool, AccountsError> {
        let customer = self.customer_by_mobile(mobile_number).await?;
        let customer_id = Self::stored_customer_id(&customer)?;

        self.account_repo
            .delete_by_customer_id(customer_id)
            .await
            .map_err(Self::map_account_error)?;
        self.customer_repo
            .delete_by_id(customer_id)
            .await
            .map_err(Self::map_customer_error)?;

        debug!(customer_id = customer_id.get(), "closed account");
        Ok(true)
    }
}

#[async_trait]
impl<C, A> AccountsQuery for AccountsService<C, A>
where
    C: CustomerRepository,
    A: AccountRepository,
{
    async fn fetch_account(&self, mobile_number: &str) -> Result<CustomerView, AccountsError> {
        let customer = self.customer_by_mobile(mobile_number).await?;
        let customer_id = Self::stored_customer_id(&customer)?;

        let account = self
            .account_repo
            .find_by_customer_id(customer_id)
            .await
            .map_err(Self::map_account_error)?
            .ok_or_else(|| {
                AccountsError::resource_not_found("Account", "customerId", customer_id)
            })?;

        Ok(to_customer_view(&customer, &account))
    }
}

#[cfg(test)]
#[path = "accounts_service_tests.rs"]
mod tests;
