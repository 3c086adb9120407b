//! PostgreSQL-backed `CustomerRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CustomerRepository, CustomerRepositoryError};
use crate::domain::{AUDIT_ACTOR, AuditTrail, Customer, CustomerId};

use super::error_mapping::{is_unique_violation, map_diesel_error, map_pool_error};
use super::models::{CustomerRow, CustomerUpdate, NewCustomerRow};
use super::pool::{DbPool, PoolError};
use super::schema::customer;

/// Diesel implementation of the `CustomerRepository` port.
///
/// Saves are single-statement upserts keyed by `customer_id`; the unique
/// index on `mobile_number` is reported as
/// [`CustomerRepositoryError::DuplicateMobileNumber`].
#[derive(Clone)]
pub struct DieselCustomerRepository {
    pool: DbPool,
}

impl DieselCustomerRepository {
    /// Create a repository drawing connections from `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> CustomerRepositoryError {
    map_pool_error(error, CustomerRepositoryError::connection)
}

fn diesel_error(error: DieselError) -> CustomerRepositoryError {
    map_diesel_error(
        error,
        CustomerRepositoryError::query,
        CustomerRepositoryError::connection,
    )
}

fn row_to_customer(row: CustomerRow) -> Customer {
    Customer {
        customer_id: Some(CustomerId::new(row.customer_id)),
        name: row.name,
        email: row.email,
        mobile_number: row.mobile_number,
        audit: AuditTrail {
            created_at: Some(row.created_at),
            created_by: Some(row.created_by),
            updated_at: row.updated_at,
            updated_by: row.updated_by,
        },
    }
}

#[async_trait]
impl CustomerRepository for DieselCustomerRepository {
    async fn find_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<Option<Customer>, CustomerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row: Option<CustomerRow> = customer::table
            .filter(customer::mobile_number.eq(mobile_number))
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;

        Ok(row.map(row_to_customer))
    }

    async fn find_by_id(
        &self,
        id: CustomerId,
    ) -> Result<Option<Customer>, CustomerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row: Option<CustomerRow> = customer::table
            .find(id.get())
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;

        Ok(row.map(row_to_customer))
    }

    async fn save(&self, entity: Customer) -> Result<Customer, CustomerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let audit = &entity.audit;
        let new_row = NewCustomerRow {
            customer_id: entity.customer_id.map(CustomerId::get),
            name: &entity.name,
            email: &entity.email,
            mobile_number: &entity.mobile_number,
            created_at: audit.created_at,
            created_by: audit.created_by.as_deref().unwrap_or(AUDIT_ACTOR),
            updated_at: audit.updated_at,
            updated_by: audit.updated_by.as_deref(),
        };
        let update = CustomerUpdate {
            name: &entity.name,
            email: &entity.email,
            mobile_number: &entity.mobile_number,
            updated_at: audit.updated_at,
            updated_by: audit.updated_by.as_deref(),
        };

        let row: CustomerRow = diesel::insert_into(customer::table)
            .values(&new_row)
            .on_conflict(customer::customer_id)
            .do_update()
            .set(&update)
            .returning(CustomerRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    CustomerRepositoryError::duplicate_mobile_number(entity.mobile_number.clone())
                } else {
                    diesel_error(err)
                }
            })?;

        Ok(row_to_customer(row))
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<(), CustomerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        diesel::delete(customer::table.find(id.get()))
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

    #[rstest]
    fn rows_convert_with_audit_columns() {
        let created = Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .expect("valid date");
        let row = CustomerRow {
            customer_id: 9,
            name: "John Hans".to_owned(),
            email: "test@gmail.com".to_owned(),
            mobile_number: "5717778989".to_owned(),
            created_at: created,
            created_by: AUDIT_ACTOR.to_owned(),
            updated_at: None,
            updated_by: None,
        };

        let customer = row_to_customer(row);

        assert_eq!(customer.customer_id, Some(CustomerId::new(9)));
        assert_eq!(customer.mobile_number, "5717778989");
        assert_eq!(customer.audit.created_at, Some(created));
        assert_eq!(customer.audit.updated_by, None);
    }

    #[rstest]
    fn pool_failures_become_connection_errors() {
        let error = pool_error(PoolError::checkout("timed out"));
        assert_eq!(error, CustomerRepositoryError::connection("timed out"));
    }
}
