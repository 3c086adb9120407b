//! In-process store implementing both repository ports.
//!
//! Used when no database URL is configured and by integration tests. It
//! enforces the same uniqueness rule as the PostgreSQL schema: a mobile
//! number belongs to at most one customer.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    AccountRepository, AccountRepositoryError, CustomerRepository, CustomerRepositoryError,
};
use crate::domain::{Account, AccountNumber, Customer, CustomerId};

#[derive(Debug, Default)]
struct StoreState {
    customers: BTreeMap<CustomerId, Customer>,
    accounts: BTreeMap<AccountNumber, Account>,
    last_customer_id: i64,
}

/// Customers and accounts held behind a single mutex.
#[derive(Debug, Default)]
pub struct InMemoryAccountsStore {
    state: Mutex<StoreState>,
}

const POISONED: &str = "in-memory store lock poisoned";

impl InMemoryAccountsStore {
    /// Empty store; customer ids start at 1.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Option<MutexGuard<'_, StoreState>> {
        self.state.lock().ok()
    }

    fn customer_state(&self) -> Result<MutexGuard<'_, StoreState>, CustomerRepositoryError> {
        self.lock()
            .ok_or_else(|| CustomerRepositoryError::query(POISONED))
    }

    fn account_state(&self) -> Result<MutexGuard<'_, StoreState>, AccountRepositoryError> {
        self.lock().ok_or_else(|| AccountRepositoryError::query(POISONED))
    }
}

#[async_trait]
impl CustomerRepository for InMemoryAccountsStore {
    async fn find_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<Option<Customer>, CustomerRepositoryError> {
        let state = self.customer_state()?;
        Ok(state
            .customers
            .values()
            .find(|customer| customer.mobile_number == mobile_number)
            .cloned())
    }

    async fn find_by_id(
        &self,
        id: CustomerId,
    ) -> Result<Option<Customer>, CustomerRepositoryError> {
        let state = self.customer_state()?;
        Ok(state.customers.get(&id).cloned())
    }

    async fn save(&self, mut customer: Customer) -> Result<Customer, CustomerRepositoryError> {
        let mut state = self.customer_state()?;
        let taken = state.customers.values().any(|other| {
            other.mobile_number == customer.mobile_number && other.customer_id != customer.customer_id
        });
        if taken {
            return Err(CustomerRepositoryError::duplicate_mobile_number(
                customer.mobile_number,
            ));
        }

        let id = match customer.customer_id {
            Some(id) => id,
            None => {
                state.last_customer_id += 1;
                CustomerId::new(state.last_customer_id)
            }
        };
        customer.customer_id = Some(id);
        state.customers.insert(id, customer.clone());
        Ok(customer)
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<(), CustomerRepositoryError> {
        let mut state = self.customer_state()?;
        state.customers.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountsStore {
    async fn find_by_customer_id(
        &self,
        customer_id: CustomerId,
    ) -> Result<Option<Account>, AccountRepositoryError> {
        let state = self.account_state()?;
        Ok(state
            .accounts
            .values()
            .find(|account| account.customer_id == Some(customer_id))
            .cloned())
    }

    async fn find_by_account_number(
        &self,
        account_number: AccountNumber,
    ) -> Result<Option<Account>, AccountRepositoryError> {
        let state = self.account_state()?;
        Ok(state.accounts.get(&account_number).cloned())
    }

    async fn save(&self, account: Account) -> Result<Account, AccountRepositoryError> {
        let number = account
            .account_number
            .ok_or_else(|| AccountRepositoryError::query("account number must be set before saving"))?;
        let mut state = self.account_state()?;
        let held_by_other = state
            .accounts
            .get(&number)
            .is_some_and(|stored| stored.customer_id != account.customer_id);
        if held_by_other {
            return Err(AccountRepositoryError::account_number_taken(number.get()));
        }
        state.accounts.insert(number, account.clone());
        Ok(account)
    }

    async fn delete_by_customer_id(
        &self,
        customer_id: CustomerId,
    ) -> Result<(), AccountRepositoryError> {
        let mut state = self.account_state()?;
        state
            .accounts
            .retain(|_, account| account.customer_id != Some(customer_id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AccountType;
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> InMemoryAccountsStore {
        InMemoryAccountsStore::new()
    }

    fn customer(mobile_number: &str) -> Customer {
        Customer {
            name: "John Hans".to_owned(),
            email: "test@gmail.com".to_owned(),
            mobile_number: mobile_number.to_owned(),
            ..Customer::default()
        }
    }

    #[rstest]
    #[tokio::test]
    async fn save_assigns_sequential_ids(store: InMemoryAccountsStore) {
        let first = CustomerRepository::save(&store, customer("5717778989"))
            .await
            .expect("first save");
        let second = CustomerRepository::save(&store, customer("5717778990"))
            .await
            .expect("second save");

        assert_eq!(first.customer_id, Some(CustomerId::new(1)));
        assert_eq!(second.customer_id, Some(CustomerId::new(2)));
        let found = store
            .find_by_mobile_number("5717778990")
            .await
            .expect("lookup");
        assert_eq!(found, Some(second));
    }

    #[rstest]
    #[tokio::test]
    async fn mobile_numbers_stay_unique(store: InMemoryAccountsStore) {
        CustomerRepository::save(&store, customer("5717778989"))
            .await
            .expect("first save");

        let error = CustomerRepository::save(&store, customer("5717778989"))
            .await
            .expect_err("duplicate");

        assert_eq!(
            error,
            CustomerRepositoryError::duplicate_mobile_number("5717778989")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn resaving_a_customer_overwrites_it(store: InMemoryAccountsStore) {
        let mut saved = CustomerRepository::save(&store, customer("5717778989"))
            .await
            .expect("save");
        saved.email = "new@example.com".to_owned();

        CustomerRepository::save(&store, saved.clone())
            .await
            .expect("update");

        let id = saved.customer_id.expect("id assigned");
        let found = store.find_by_id(id).await.expect("lookup");
        assert_eq!(found.map(|c| c.email), Some("new@example.com".to_owned()));
    }

    #[rstest]
    #[tokio::test]
    async fn accounts_are_found_by_number_and_owner(store: InMemoryAccountsStore) {
        let account = Account {
            account_number: Some(AccountNumber::new(1_122_334_455)),
            customer_id: Some(CustomerId::new(3)),
            account_type: AccountType::Checking,
            branch_address: "123 ABC".to_owned(),
            ..Account::default()
        };
        AccountRepository::save(&store, account.clone())
            .await
            .expect("save");

        assert_eq!(
            store
                .find_by_account_number(AccountNumber::new(1_122_334_455))
                .await
                .expect("by number"),
            Some(account.clone())
        );
        assert_eq!(
            store
                .find_by_customer_id(CustomerId::new(3))
                .await
                .expect("by owner"),
            Some(account)
        );

        store
            .delete_by_customer_id(CustomerId::new(3))
            .await
            .expect("delete");
        assert!(
            store
                .find_by_customer_id(CustomerId::new(3))
                .await
                .expect("by owner")
                .is_none()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn account_numbers_stay_with_their_owner(store: InMemoryAccountsStore) {
        let first = Account {
            account_number: Some(AccountNumber::new(1_500_000_000)),
            customer_id: Some(CustomerId::new(1)),
            branch_address: "123 ABC".to_owned(),
            ..Account::default()
        };
        AccountRepository::save(&store, first.clone())
            .await
            .expect("first save");

        let error = AccountRepository::save(
            &store,
            Account {
                customer_id: Some(CustomerId::new(2)),
                account_type: AccountType::Checking,
                ..first.clone()
            },
        )
        .await
        .expect_err("number held by customer 1");

        assert_eq!(
            error,
            AccountRepositoryError::account_number_taken(1_500_000_000_i64)
        );
        assert_eq!(
            store
                .find_by_customer_id(CustomerId::new(1))
                .await
                .expect("by owner"),
            Some(first)
        );
        assert!(
            store
                .find_by_customer_id(CustomerId::new(2))
                .await
                .expect("by owner")
                .is_none()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn owner_can_resave_its_account(store: InMemoryAccountsStore) {
        let account = Account {
            account_number: Some(AccountNumber::new(1_500_000_000)),
            customer_id: Some(CustomerId::new(1)),
            ..Account::default()
        };
        AccountRepository::save(&store, account.clone())
            .await
            .expect("insert");

        let changed = Account {
            account_type: AccountType::Checking,
            ..account
        };
        let saved = AccountRepository::save(&store, changed.clone())
            .await
            .expect("overwrite");

        assert_eq!(saved, changed);
    }

    #[rstest]
    #[tokio::test]
    async fn accounts_without_number_are_rejected(store: InMemoryAccountsStore) {
        let error = AccountRepository::save(&store, Account::default())
            .await
            .expect_err("missing number");
        assert!(matches!(error, AccountRepositoryError::Query { .. }));
    }
}
