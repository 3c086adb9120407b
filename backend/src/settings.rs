//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `ACCOUNTS_*` environment variables, and an
//! optional configuration file, in that order of precedence.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Problems turning loaded values into usable settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind host {host}: {message}")]
    InvalidHost { host: String, message: String },
}

/// Runtime settings for the accounts service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ACCOUNTS")]
pub struct AccountsSettings {
    /// Interface to bind the HTTP listener to.
    pub host: Option<String>,
    /// TCP port for the HTTP listener.
    pub port: Option<u16>,
    /// PostgreSQL connection string. Without one the in-memory store is used.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Apply embedded migrations before serving.
    pub run_migrations: Option<bool>,
}

impl AccountsSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Migrations run unless explicitly disabled.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }

    /// Socket address for the HTTP listener.
    ///
    /// # Errors
    ///
    /// [`SettingsError::InvalidHost`] when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host();
        let ip: IpAddr = host.parse().map_err(|err: std::net::AddrParseError| {
            SettingsError::InvalidHost {
                host: host.to_owned(),
                message: err.to_string(),
            }
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "ACCOUNTS_HOST",
        "ACCOUNTS_PORT",
        "ACCOUNTS_DATABASE_URL",
        "ACCOUNTS_POOL_MAX_SIZE",
        "ACCOUNTS_RUN_MIGRATIONS",
    ];

    fn load_from_empty_args() -> AccountsSettings {
        AccountsSettings::load_from_iter([OsString::from("accounts")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();

        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), DEFAULT_PORT);
        assert_eq!(settings.database_url(), None);
        assert_eq!(settings.pool_max_size(), DEFAULT_POOL_MAX_SIZE);
        assert!(settings.run_migrations());
        assert_eq!(
            settings.bind_addr().expect("default bind address"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("socket address")
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("ACCOUNTS_HOST", Some("127.0.0.1".to_owned())),
            ("ACCOUNTS_PORT", Some("9090".to_owned())),
            (
                "ACCOUNTS_DATABASE_URL",
                Some("postgres://bank@localhost/accounts".to_owned()),
            ),
            ("ACCOUNTS_POOL_MAX_SIZE", Some("4".to_owned())),
            ("ACCOUNTS_RUN_MIGRATIONS", Some("false".to_owned())),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(
            settings.database_url(),
            Some("postgres://bank@localhost/accounts")
        );
        assert_eq!(settings.pool_max_size(), 4);
        assert!(!settings.run_migrations());
        assert_eq!(
            settings.bind_addr().expect("bind address"),
            "127.0.0.1:9090".parse::<SocketAddr>().expect("socket address")
        );
    }

    #[rstest]
    fn blank_database_url_means_in_memory() {
        let _guard = lock_env([("ACCOUNTS_DATABASE_URL", Some("  ".to_owned()))]);

        assert_eq!(load_from_empty_args().database_url(), None);
    }

    #[rstest]
    fn hostnames_are_rejected_as_bind_hosts() {
        let settings = AccountsSettings {
            host: Some("localhost".to_owned()),
            port: None,
            database_url: None,
            pool_max_size: None,
            run_migrations: None,
        };

        assert!(matches!(
            settings.bind_addr(),
            Err(SettingsError::InvalidHost { .. })
        ));
    }
}
