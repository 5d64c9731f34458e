use core_config::{
    AppInfo, FromEnv, app_info, cors::CorsConfig, env_parse, server::ServerConfig,
};
use database::postgres::PostgresConfig;
use strum::{Display, EnumString};

// Re-export Environment for use in other modules
pub use core_config::Environment;

const DEFAULT_PORT: u16 = 8000;

/// Where tasks are kept, from `STORAGE_BACKEND`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StorageBackend {
    #[default]
    Stub,
    Memory,
    Postgres,
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub cors: CorsConfig,
    /// Only loaded for the postgres backend
    pub database: Option<PostgresConfig>,
    pub environment: Environment,
    pub server: ServerConfig,
    pub storage: StorageBackend,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env_with_port(DEFAULT_PORT)?;
        let cors = CorsConfig::from_env()?;
        let storage: StorageBackend = env_parse("STORAGE_BACKEND", "stub")?;
        let database = match storage {
            StorageBackend::Postgres => Some(PostgresConfig::from_env()?), // Requires DATABASE_URL
            StorageBackend::Stub | StorageBackend::Memory => None,
        };

        Ok(Self {
            app: app_info!(),
            cors,
            database,
            environment,
            server,
            storage,
        })
    }
}
