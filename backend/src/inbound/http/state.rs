//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see the driving ports,
//! so they can be exercised with mocks and no I/O.

use std::sync::Arc;

use crate::domain::ports::{AccountsCommand, AccountsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountsCommand>,
    pub accounts_query: Arc<dyn AccountsQuery>,
}

impl HttpState {
    pub fn new(accounts: Arc<dyn AccountsCommand>, accounts_query: Arc<dyn AccountsQuery>) -> Self {
        Self {
            accounts,
            accounts_query,
        }
    }

    /// Use one service for both ports.
    ///
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use accounts::domain::AccountsService;
    /// use accounts::domain::ports::RandomAccountNumberGenerator;
    /// use accounts::inbound::http::state::HttpState;
    /// use accounts::outbound::memory::InMemoryAccountsStore;
    /// use mockable::DefaultClock;
    ///
    /// let store = Arc::new(InMemoryAccountsStore::default());
    /// let service = AccountsService::new(
    ///     store.clone(),
    ///     store,
    ///     Arc::new(RandomAccountNumberGenerator),
    ///     Arc::new(DefaultClock),
    /// );
    /// let state = HttpState::from_service(Arc::new(service));
    /// let _accounts = state.accounts.clone();
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: AccountsCommand + AccountsQuery + 'static,
    {
        Self {
            accounts: service.clone(),
            accounts_query: service,
        }
    }
}
