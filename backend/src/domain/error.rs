//! Failure taxonomy of the accounts domain.
//!
//! These errors are transport agnostic. The HTTP adapter maps them onto status
//! codes and its JSON envelope; nothing in the domain decides a status.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;
use utoipa::ToSchema;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// A required lookup key matched no record.
    NotFound,
    /// The record being created is already registered.
    AlreadyExists,
    /// A backing store could not be reached.
    ServiceUnavailable,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

/// Errors returned by the accounts service.
///
/// # Examples
/// ```
/// use accounts::domain::{AccountsError, ErrorCode};
///
/// let err = AccountsError::resource_not_found("Customer", "mobileNumber", "5717778989");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(
///     err.to_string(),
///     "Customer not found with the given input data mobileNumber : '5717778989'"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountsError {
    #[error("{resource} not found with the given input data {field} : '{value}'")]
    ResourceNotFound {
        resource: String,
        field: String,
        value: String,
    },
    #[error("Customer already registered with given mobileNumber {mobile_number}")]
    CustomerAlreadyExists { mobile_number: String },
    #[error("{message}")]
    Validation { field: String, message: String },
    #[error("{message}")]
    Unavailable { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AccountsError {
    pub fn resource_not_found(
        resource: impl Into<String>,
        field: impl Into<String>,
        value: impl Display,
    ) -> Self {
        Self::ResourceNotFound {
            resource: resource.into(),
            field: field.into(),
            value: value.to_string(),
        }
    }

    pub fn customer_already_exists(mobile_number: impl Into<String>) -> Self {
        Self::CustomerAlreadyExists {
            mobile_number: mobile_number.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::ResourceNotFound { .. } => ErrorCode::NotFound,
            Self::CustomerAlreadyExists { .. } => ErrorCode::AlreadyExists,
            Self::Validation { .. } => ErrorCode::InvalidRequest,
            Self::Unavailable { .. } => ErrorCode::ServiceUnavailable,
            Self::Internal { .. } => ErrorCode::InternalError,
        }
    }

    /// Structured payload identifying what the failure is about.
    pub fn details(&self) -> Option<Value> {
        match self {
            Self::ResourceNotFound {
                resource,
                field,
                value,
            } => Some(json!({
                "resource": resource,
                "field": field,
                "value": value,
            })),
            Self::CustomerAlreadyExists { mobile_number } => {
                Some(json!({ "mobileNumber": mobile_number }))
            }
            Self::Validation { field, .. } => Some(json!({
                "field": field,
                "code": "missing_field",
            })),
            Self::Unavailable { .. } | Self::Internal { .. } => None,
        }
    }
}
