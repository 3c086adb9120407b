//! Internal Diesel row structs.
//!
//! These never leave the persistence layer; repositories convert them to and
//! from domain entities.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{accounts, customer};

/// Row read from `customer`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = customer)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CustomerRow {
    pub customer_id: i64,
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

/// Insertable customer.
///
/// `None` for `customer_id` or `created_at` lets the column default apply.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = customer)]
pub(crate) struct NewCustomerRow<'a> {
    pub customer_id: Option<i64>,
    pub name: &'a str,
    pub email: &'a str,
    pub mobile_number: &'a str,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: &'a str,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<&'a str>,
}

/// Columns overwritten when an existing customer is saved again.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = customer)]
pub(crate) struct CustomerUpdate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub mobile_number: &'a str,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<&'a str>,
}

/// Row read from `accounts`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AccountRow {
    pub account_number: i64,
    pub customer_id: i64,
    pub account_type: String,
    pub branch_address: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = accounts)]
pub(crate) struct NewAccountRow<'a> {
    pub account_number: i64,
    pub customer_id: i64,
    pub account_type: &'a str,
    pub branch_address: &'a str,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: &'a str,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<&'a str>,
}

/// Columns overwritten when an existing account is saved again.
///
/// The account number and owner never change.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = accounts)]
pub(crate) struct AccountUpdate<'a> {
    pub account_type: &'a str,
    pub branch_address: &'a str,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<&'a str>,
}
