//! PostgreSQL-backed `AccountRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{AccountRepository, AccountRepositoryError};
use crate::domain::{AUDIT_ACTOR, Account, AccountNumber, AccountType, AuditTrail, CustomerId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{AccountRow, AccountUpdate, NewAccountRow};
use super::pool::{DbPool, PoolError};
use super::schema::accounts;

/// Diesel implementation of the `AccountRepository` port.
///
/// Saves insert first and fall back to an update guarded by the owning
/// `customer_id`, so an issued number is never handed to another customer.
#[derive(Clone)]
pub struct DieselAccountRepository {
    pool: DbPool,
}

impl DieselAccountRepository {
    /// Create a repository drawing connections from `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> AccountRepositoryError {
    map_pool_error(error, AccountRepositoryError::connection)
}

fn diesel_error(error: DieselError) -> AccountRepositoryError {
    map_diesel_error(
        error,
        AccountRepositoryError::query,
        AccountRepositoryError::connection,
    )
}

fn row_to_account(row: AccountRow) -> Account {
    let account_type = row.account_type.parse().unwrap_or_else(|_| {
        warn!(
            value = %row.account_type,
            account_number = row.account_number,
            "unrecognised account_type value, defaulting to Savings"
        );
        AccountType::Savings
    });

    Account {
        account_number: Some(AccountNumber::new(row.account_number)),
        customer_id: Some(CustomerId::new(row.customer_id)),
        account_type,
        branch_address: row.branch_address,
        audit: AuditTrail {
            created_at: Some(row.created_at),
            created_by: Some(row.created_by),
            updated_at: row.updated_at,
            updated_by: row.updated_by,
        },
    }
}

#[async_trait]
impl AccountRepository for DieselAccountRepository {
    async fn find_by_customer_id(
        &self,
        customer_id: CustomerId,
    ) -> Result<Option<Account>, AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row: Option<AccountRow> = accounts::table
            .filter(accounts::customer_id.eq(customer_id.get()))
            .select(AccountRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;

        Ok(row.map(row_to_account))
    }

    async fn find_by_account_number(
        &self,
        account_number: AccountNumber,
    ) -> Result<Option<Account>, AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row: Option<AccountRow> = accounts::table
            .find(account_number.get())
            .select(AccountRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;

        Ok(row.map(row_to_account))
    }

    async fn save(&self, account: Account) -> Result<Account, AccountRepositoryError> {
        let account_number = account
            .account_number
            .ok_or_else(|| AccountRepositoryError::query("account number must be set before saving"))?;
        let customer_id = account
            .customer_id
            .ok_or_else(|| AccountRepositoryError::query("account owner must be set before saving"))?;
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let audit = &account.audit;
        let new_row = NewAccountRow {
            account_number: account_number.get(),
            customer_id: customer_id.get(),
            account_type: account.account_type.as_str(),
            branch_address: &account.branch_address,
            created_at: audit.created_at,
            created_by: audit.created_by.as_deref().unwrap_or(AUDIT_ACTOR),
            updated_at: audit.updated_at,
            updated_by: audit.updated_by.as_deref(),
        };
        let update = AccountUpdate {
            account_type: account.account_type.as_str(),
            branch_address: &account.branch_address,
            updated_at: audit.updated_at,
            updated_by: audit.updated_by.as_deref(),
        };

        let inserted: Option<AccountRow> = diesel::insert_into(accounts::table)
            .values(&new_row)
            .on_conflict_do_nothing()
            .returning(AccountRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        if let Some(row) = inserted {
            return Ok(row_to_account(row));
        }

        // The number exists; only its owner may overwrite it.
        let updated: Option<AccountRow> = diesel::update(
            accounts::table
                .find(account_number.get())
                .filter(accounts::customer_id.eq(customer_id.get())),
        )
        .set(&update)
        .returning(AccountRow::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(diesel_error)?;
        let row =
            updated.ok_or_else(|| AccountRepositoryError::account_number_taken(account_number.get()))?;

        Ok(row_to_account(row))
    }

    async fn delete_by_customer_id(
        &self,
        customer_id: CustomerId,
    ) -> Result<(), AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        diesel::delete(accounts::table.filter(accounts::customer_id.eq(customer_id.get())))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(diesel_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    fn row(account_type: &str) -> AccountRow {
        AccountRow {
            account_number: 1_122_334_455,
            customer_id: 9,
            account_type: account_type.to_owned(),
            branch_address: "123 ABC".to_owned(),
            created_at: Utc
                .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
                .single()
                .expect("valid date"),
            created_by: AUDIT_ACTOR.to_owned(),
            updated_at: None,
            updated_by: None,
        }
    }

    #[rstest]
    #[case("Checking", AccountType::Checking)]
    #[case("Savings", AccountType::Savings)]
    #[case("Brokerage", AccountType::Savings)]
    fn rows_convert_account_type(#[case] stored: &str, #[case] expected: AccountType) {
        let account = row_to_account(row(stored));

        assert_eq!(account.account_type, expected);
        assert_eq!(account.account_number, Some(AccountNumber::new(1_122_334_455)));
        assert_eq!(account.customer_id, Some(CustomerId::new(9)));
    }
}
