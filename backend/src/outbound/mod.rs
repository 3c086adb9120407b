//! Outbound adapters implementing the domain repository ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel
//! - **memory**: process-local store for development and tests

pub mod memory;
pub mod persistence;
