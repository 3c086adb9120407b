//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories here only translate between Diesel rows and domain entities;
//! the accounts service owns every business rule. Connections come from a
//! `bb8` pool driven by `diesel-async`, and the schema is created by the
//! migrations embedded in [`run_migrations`].
//!
//! ```ignore
//! use accounts::outbound::persistence::{DbPool, DieselCustomerRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/accounts")).await?;
//! let customers = DieselCustomerRepository::new(pool);
//! ```

mod diesel_account_repository;
mod diesel_customer_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_account_repository::DieselAccountRepository;
pub use diesel_customer_repository::DieselCustomerRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
