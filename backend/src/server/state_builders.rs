//! Builders for the HTTP state from the configured store.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use accounts::domain::AccountsService;
use accounts::domain::ports::{
    AccountNumberGenerator, AccountRepository, CustomerRepository, RandomAccountNumberGenerator,
};
use accounts::inbound::http::state::HttpState;
use accounts::outbound::memory::InMemoryAccountsStore;
use accounts::outbound::persistence::{DieselAccountRepository, DieselCustomerRepository};

use super::ServerConfig;

fn service_state<C, A>(customers: Arc<C>, accounts: Arc<A>) -> HttpState
where
    C: CustomerRepository + 'static,
    A: AccountRepository + 'static,
{
    let account_numbers: Arc<dyn AccountNumberGenerator> = Arc::new(RandomAccountNumberGenerator);
    let service = AccountsService::new(customers, accounts, account_numbers, Arc::new(DefaultClock));
    HttpState::from_service(Arc::new(service))
}

/// Wire the accounts service over PostgreSQL when a pool is configured,
/// otherwise over a fresh in-memory store.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => service_state(
            Arc::new(DieselCustomerRepository::new(pool.clone())),
            Arc::new(DieselAccountRepository::new(pool.clone())),
        ),
        None => {
            let store = Arc::new(InMemoryAccountsStore::new());
            service_state(store.clone(), store)
        }
    };
    web::Data::new(state)
}
