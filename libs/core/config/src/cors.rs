use crate::{ConfigError, FromEnv, env_or_default};

/// Origins of the local frontends (Vite dev server and CRA/Next).
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5173,http://localhost:3000";

/// CORS configuration shared by the HTTP services
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_origins: origins.into_iter().map(Into::into).collect(),
        }
    }
}

impl FromEnv for CorsConfig {
    /// Reads the comma-separated `CORS_ALLOWED_ORIGIN` list.
    fn from_env() -> Result<Self, ConfigError> {
        let raw = env_or_default("CORS_ALLOWED_ORIGIN", DEFAULT_ALLOWED_ORIGINS);

        let allowed_origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if allowed_origins.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: "at least one origin is required".to_string(),
            });
        }

        Ok(Self { allowed_origins })
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_ORIGINS.split(','))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_defaults_to_local_frontends() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            let config = CorsConfig::from_env().unwrap();
            assert_eq!(
                config.allowed_origins,
                vec!["http://localhost:5173", "http://localhost:3000"]
            );
            assert_eq!(config, CorsConfig::default());
        });
    }

    #[test]
    fn test_cors_trims_and_skips_empty_entries() {
        temp_env::with_var(
            "CORS_ALLOWED_ORIGIN",
            Some(" https://a.example.com , ,https://b.example.com"),
            || {
                let config = CorsConfig::from_env().unwrap();
                assert_eq!(
                    config.allowed_origins,
                    vec!["https://a.example.com", "https://b.example.com"]
                );
            },
        );
    }

    #[test]
    fn test_cors_rejects_empty_list() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some(" , "), || {
            let err = CorsConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("CORS_ALLOWED_ORIGIN"));
        });
    }
}
