//! Domain ports for the hexagonal boundary.
//!
//! Driven ports ([`CustomerRepository`], [`AccountRepository`],
//! [`AccountNumberGenerator`]) are implemented by outbound adapters. Driving
//! ports ([`AccountsCommand`], [`AccountsQuery`]) are what inbound adapters
//! call.

mod macros;
pub(crate) use macros::define_port_error;

mod account_number_generator;
mod account_repository;
mod accounts_command;
mod accounts_query;
mod customer_repository;

#[cfg(test)]
pub use account_number_generator::MockAccountNumberGenerator;
pub use account_number_generator::{AccountNumberGenerator, RandomAccountNumberGenerator};
#[cfg(test)]
pub use account_repository::MockAccountRepository;
pub use account_repository::{AccountRepository, AccountRepositoryError};
pub use accounts_command::AccountsCommand;
#[cfg(test)]
pub use accounts_command::MockAccountsCommand;
pub use accounts_query::AccountsQuery;
#[cfg(test)]
pub use accounts_query::MockAccountsQuery;
#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
pub use customer_repository::{CustomerRepository, CustomerRepositoryError};
