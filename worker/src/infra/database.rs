use announcement_dispatcher::environment::Environment;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Pool, Postgres};
use std::time::Duration;

/// Connection settings of the user store.
pub struct Database {
    pub host: String,
    pub name: String,
    pub user: String,
    pub pass: String,
    pub app_name: String,
    pub port: u16,
    pub min_pool_size: u32,
    pub max_pool_size: u32,
    pub acquire_timeout_in_millis: u64,
}

impl Database {
    pub fn from_env() -> Self {
        Self {
            host: Environment::string("DB_HOST", "localhost"),
            name: Environment::string("DB_NAME", "local"),
            user: Environment::string("DB_USER", "local"),
            pass: Environment::string("DB_PASS", "local"),
            app_name: Environment::string("DB_APP_NAME", "announcement-dispatcher"),
            port: Environment::u16("DB_PORT", 5432),
            min_pool_size: Environment::u32("DB_MIN_POOL_SIZE", 0),
            max_pool_size: Environment::u32("DB_MAX_POOL_SIZE", 5),
            acquire_timeout_in_millis: Environment::u64("DB_ACQUIRE_TIMEOUT_IN_MILLIS", 5000),
        }
    }

    pub fn db_connection_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .database(&self.name)
            .username(&self.user)
            .password(&self.pass)
            .port(self.port)
            .application_name(&self.app_name)
    }

    /// Connections are opened on first use, so an unreachable store only fails
    /// the SMS phase of the dispatches that need it.
    pub fn create_lazy_db_pool(self) -> Pool<Postgres> {
        PgPoolOptions::new()
            .min_connections(self.min_pool_size)
            .max_connections(self.max_pool_size)
            .acquire_timeout(Duration::from_millis(self.acquire_timeout_in_millis))
            .test_before_acquire(true)
            .connect_lazy_with(self.db_connection_options())
    }
}
