//! Domain entities, transfer views, and the accounts service.
//!
//! Purpose: keep the customer/account rules independent of HTTP and
//! PostgreSQL. Inbound adapters call the driving ports in [`ports`]; outbound
//! adapters implement the repository ports.
//!
//! Public surface:
//! - [`Customer`] and [`Account`]: stored entities.
//! - [`CustomerView`] and [`AccountView`]: wire-transfer shapes.
//! - [`mapper`]: conversions between the two.
//! - [`AccountsError`] and [`ErrorCode`]: failure taxonomy.
//! - [`AccountsService`]: implementation of the driving ports.

pub mod account;
mod accounts_service;
pub mod audit;
pub mod customer;
pub mod error;
pub mod mapper;
pub mod ports;
pub mod views;

pub use self::account::{
    ACCOUNT_NUMBER_MAX, ACCOUNT_NUMBER_MIN, Account, AccountNumber, AccountType,
    AccountTypeParseError, DEFAULT_BRANCH_ADDRESS,
};
pub use self::accounts_service::AccountsService;
pub use self::audit::{AUDIT_ACTOR, AuditTrail};
pub use self::customer::{Customer, CustomerId};
pub use self::error::{AccountsError, ErrorCode};
pub use self::views::{AccountView, CustomerView};
