//! Account HTTP handlers.
//!
//! ```text
//! GET    /api/fetch?mobileNumber=
//! POST   /api/create
//! PUT    /api/update
//! DELETE /api/delete?mobileNumber=
//! ```
//!
//! Requests are parsed into domain views here; the accounts service owns the
//! business rules. Boolean outcomes from update and delete map to `200` and
//! `417`.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{AccountView, CustomerView};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ApiError;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    EMAIL, MOBILE_NUMBER, NAME, parse_account_number, parse_account_type, require,
    validate_branch_address, validate_email, validate_mobile_number, validate_name,
};

pub(crate) const MESSAGE_201: &str = "Account created successfully";
pub(crate) const MESSAGE_200: &str = "Request processed successfully";
pub(crate) const MESSAGE_417_UPDATE: &str =
    "Update operation failed. Please try again or contact Dev team";
pub(crate) const MESSAGE_417_DELETE: &str =
    "Delete operation failed. Please try again or contact Dev team";

/// Customer payload for create and update.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    #[schema(example = "John Hans")]
    pub name: Option<String>,
    #[schema(example = "test@gmail.com")]
    pub email: Option<String>,
    #[schema(example = "5717778989")]
    pub mobile_number: Option<String>,
    #[serde(rename = "accountsDto")]
    pub account: Option<AccountRequest>,
}

/// Account payload embedded in [`CustomerRequest`].
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountRequest {
    #[schema(example = 1122334455)]
    pub account_number: Option<i64>,
    #[schema(example = "Savings")]
    pub account_type: Option<String>,
    #[schema(example = "123 Main Street, New York")]
    pub branch_address: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct MobileNumberQuery {
    /// Ten-digit mobile number of the customer.
    pub mobile_number: Option<String>,
}

/// Outcome wrapper returned by create, update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    #[schema(example = "200")]
    pub status_code: String,
    #[schema(example = "Request processed successfully")]
    pub status_msg: String,
}

impl StatusResponse {
    fn reply(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(Self {
            status_code: status.as_u16().to_string(),
            status_msg: message.to_owned(),
        })
    }
}

fn parse_mobile_number(query: MobileNumberQuery) -> Result<String, ApiError> {
    let mobile_number = require(query.mobile_number, MOBILE_NUMBER)?;
    validate_mobile_number(&mobile_number)?;
    Ok(mobile_number)
}

/// Validate whichever account fields are present.
fn parse_account_request(payload: AccountRequest) -> Result<AccountView, ApiError> {
    let account_number = payload
        .account_number
        .map(parse_account_number)
        .transpose()?;
    let account_type = payload
        .account_type
        .as_deref()
        .map(parse_account_type)
        .transpose()?;
    if let Some(branch_address) = payload.branch_address.as_deref() {
        validate_branch_address(branch_address)?;
    }
    Ok(AccountView {
        account_number,
        account_type,
        branch_address: payload.branch_address,
    })
}

/// Validate customer fields that are present; `required` makes absence an
/// error.
fn parse_customer_request(payload: CustomerRequest, required: bool) -> ApiResult<CustomerView> {
    let CustomerRequest {
        name,
        email,
        mobile_number,
        account,
    } = payload;
    let (name, email, mobile_number) = if required {
        (
            Some(require(name, NAME)?),
            Some(require(email, EMAIL)?),
            Some(require(mobile_number, MOBILE_NUMBER)?),
        )
    } else {
        (name, email, mobile_number)
    };

    if let Some(name) = name.as_deref() {
        validate_name(name)?;
    }
    if let Some(email) = email.as_deref() {
        validate_email(email)?;
    }
    if let Some(mobile_number) = mobile_number.as_deref() {
        validate_mobile_number(mobile_number)?;
    }

    Ok(CustomerView {
        name,
        email,
        mobile_number,
        account: account.map(parse_account_request).transpose()?,
    })
}

fn parse_create_request(payload: CustomerRequest) -> ApiResult<CustomerView> {
    let mut view = parse_customer_request(payload, true)?;
    // Account numbers are issued by the server.
    if let Some(account) = view.account.as_mut() {
        account.account_number = None;
    }
    Ok(view)
}

/// Fetch a customer and their account by mobile number.
#[utoipa::path(
    get,
    path = "/api/fetch",
    params(MobileNumberQuery),
    responses(
        (status = 200, description = "Customer and account details", body = CustomerView),
        (status = 400, description = "Invalid mobile number", body = ApiError),
        (status = 404, description = "No customer or account", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["accounts"],
    operation_id = "fetchAccountDetails"
)]
#[get("/fetch")]
pub async fn fetch_account(
    state: web::Data<HttpState>,
    query: web::Query<MobileNumberQuery>,
) -> ApiResult<web::Json<CustomerView>> {
    let mobile_number = parse_mobile_number(query.into_inner())?;
    let view = state.accounts_query.fetch_account(&mobile_number).await?;
    Ok(web::Json(view))
}

/// Register a customer and open their account.
///
/// A `mobileNumber` query parameter is accepted for compatibility and
/// ignored; the body is authoritative.
#[utoipa::path(
    post,
    path = "/api/create",
    request_body = CustomerRequest,
    responses(
        (status = 201, description = "Account created", body = StatusResponse),
        (status = 400, description = "Invalid input or customer already registered", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError),
        (status = 503, description = "Store unavailable", body = ApiError)
    ),
    tags = ["accounts"],
    operation_id = "createAccount"
)]
#[post("/create")]
pub async fn create_account(
    state: web::Data<HttpState>,
    payload: web::Json<CustomerRequest>,
) -> ApiResult<HttpResponse> {
    let view = parse_create_request(payload.into_inner())?;
    state.accounts.create_account(view).await?;
    Ok(StatusResponse::reply(StatusCode::CREATED, MESSAGE_201))
}

/// Change customer and account details.
///
/// The embedded account must carry `accountNumber`; absent fields are left
/// unchanged.
#[utoipa::path(
    put,
    path = "/api/update",
    request_body = CustomerRequest,
    responses(
        (status = 200, description = "Account updated", body = StatusResponse),
        (status = 400, description = "Invalid input", body = ApiError),
        (status = 404, description = "No account or customer", body = ApiError),
        (status = 417, description = "Update not applied", body = StatusResponse),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["accounts"],
    operation_id = "updateAccountDetails"
)]
#[put("/update")]
pub async fn update_account(
    state: web::Data<HttpState>,
    payload: web::Json<CustomerRequest>,
) -> ApiResult<HttpResponse> {
    let view = parse_customer_request(payload.into_inner(), false)?;
    let response = if state.accounts.update_account(view).await? {
        StatusResponse::reply(StatusCode::OK, MESSAGE_200)
    } else {
        StatusResponse::reply(StatusCode::EXPECTATION_FAILED, MESSAGE_417_UPDATE)
    };
    Ok(response)
}

/// Close the account registered under a mobile number.
#[utoipa::path(
    delete,
    path = "/api/delete",
    params(MobileNumberQuery),
    responses(
        (status = 200, description = "Account deleted", body = StatusResponse),
        (status = 400, description = "Invalid mobile number", body = ApiError),
        (status = 404, description = "No customer", body = ApiError),
        (status = 417, description = "Delete not applied", body = StatusResponse),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["accounts"],
    operation_id = "deleteAccountDetails"
)]
#[delete("/delete")]
pub async fn delete_account(
    state: web::Data<HttpState>,
    query: web::Query<MobileNumberQuery>,
) -> ApiResult<HttpResponse> {
    let mobile_number = parse_mobile_number(query.into_inner())?;
    let response = if state.accounts.delete_account(&mobile_number).await? {
        StatusResponse::reply(StatusCode::OK, MESSAGE_200)
    } else {
        StatusResponse::reply(StatusCode::EXPECTATION_FAILED, MESSAGE_417_DELETE)
    };
    Ok(response)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::invalid_request("request body is not a valid customer payload")
        .with_details(json!({ "code": "invalid_body", "reason": err.to_string() }))
        .into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::invalid_request("query string is malformed")
        .with_details(json!({ "code": "invalid_query", "reason": err.to_string() }))
        .into()
}

/// Register the account routes under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .service(fetch_account)
            .service(create_account)
            .service(update_account)
            .service(delete_account),
    );
}

#[cfg(test)]
#[path = "accounts_tests.rs"]
mod tests;
