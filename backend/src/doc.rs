//! OpenAPI documentation for the accounts API.
//!
//! The generated document backs Swagger UI in debug builds and is printed by
//! `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::domain::{AccountType, AccountView, CustomerView, ErrorCode};
use crate::inbound::http::ApiError;
use crate::inbound::http::accounts::{AccountRequest, CustomerRequest, StatusResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Accounts service API",
        description = "Create, fetch, update and delete customers together with their bank account."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::accounts::fetch_account,
        crate::inbound::http::accounts::create_account,
        crate::inbound::http::accounts::update_account,
        crate::inbound::http::accounts::delete_account,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CustomerView,
        AccountView,
        AccountType,
        CustomerRequest,
        AccountRequest,
        StatusResponse,
        ApiError,
        ErrorCode
    )),
    tags(
        (name = "accounts", description = "Customer and account lifecycle"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
