//! HTTP inbound adapter exposing the account endpoints and health probes.

pub mod accounts;
pub mod error;
pub mod health;
pub mod state;
pub mod validation;

pub use error::{ApiError, ApiResult};
