//! HTTP error envelope and mapping from domain failures.
//!
//! Handlers return [`ApiResult`]; any [`AccountsError`] converts with `?` into
//! an [`ApiError`], which renders as
//! `{"code", "message", "traceId"?, "details"?}` with a status derived from
//! the error code.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{AccountsError, ErrorCode};
use crate::middleware::trace::{TRACE_ID_HEADER, TraceId};

const REDACTED_MESSAGE: &str = "Internal server error";

/// Standard error envelope returned by HTTP handlers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    #[schema(example = "not_found")]
    code: ErrorCode,
    #[schema(example = "Customer not found with the given input data mobileNumber : '5717778989'")]
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Build an error, capturing the trace identifier of the current request.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    fn redacted(&self) -> Self {
        Self {
            code: self.code,
            message: REDACTED_MESSAGE.to_owned(),
            trace_id: self.trace_id.clone(),
            details: None,
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest | ErrorCode::AlreadyExists => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<AccountsError> for ApiError {
    fn from(error: AccountsError) -> Self {
        let mut api = Self::new(error.code(), error.to_string());
        api.details = error.details();
        api
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(self.code)
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = &self.trace_id {
            builder.insert_header((TRACE_ID_HEADER, id.clone()));
        }
        if matches!(self.code, ErrorCode::InternalError) {
            error!(message = %self.message, trace_id = ?self.trace_id, "internal error");
            return builder.json(self.redacted());
        }
        builder.json(self)
    }
}
