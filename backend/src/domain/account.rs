//! Account entity and its value types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use super::audit::AuditTrail;
use super::customer::CustomerId;

/// Lowest account number handed out by the generator.
pub const ACCOUNT_NUMBER_MIN: i64 = 1_000_000_000;
/// Highest account number handed out by the generator.
pub const ACCOUNT_NUMBER_MAX: i64 = 1_999_999_999;
/// Branch recorded for new accounts when the caller does not name one.
pub const DEFAULT_BRANCH_ADDRESS: &str = "123 Main Street, New York";

/// Unique, immutable account number; primary key of the account store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(i64);

impl AccountNumber {
    /// Wrap a raw account number.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw account number value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for AccountNumber {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of bank account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum AccountType {
    #[default]
    Savings,
    Checking,
}

impl AccountType {
    /// Canonical spelling used on the wire and in the store.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Savings => "Savings",
            Self::Checking => "Checking",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string names no known [`AccountType`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown account type: {value}")]
pub struct AccountTypeParseError {
    pub value: String,
}

impl FromStr for AccountType {
    type Err = AccountTypeParseError;

    /// Parse case-insensitively; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("savings") {
            Ok(Self::Savings)
        } else if trimmed.eq_ignore_ascii_case("checking") {
            Ok(Self::Checking)
        } else {
            Err(AccountTypeParseError {
                value: s.to_owned(),
            })
        }
    }
}

/// Bank account belonging to exactly one customer.
///
/// `customer_id` is a back-reference: the account does not own its customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Account {
    pub account_number: Option<AccountNumber>,
    pub customer_id: Option<CustomerId>,
    pub account_type: AccountType,
    pub branch_address: String,
    pub audit: AuditTrail,
}
