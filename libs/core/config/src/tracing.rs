use crate::Environment;
use tracing::{debug, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

/// Install color-eyre for the binaries' `eyre::Result` errors.
///
/// Call it first thing in `main`. Reports show the error location and leave
/// the environment section out. Later calls are ignored.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Filter directives used when `RUST_LOG` is not set.
pub fn default_directives(environment: &Environment) -> &'static str {
    match environment {
        Environment::Production => "info,tower_http=info,sea_orm=warn",
        Environment::Development => "debug,tower_http=debug,sea_orm=info,sqlx=warn,hyper=info",
    }
}

/// Installs the global subscriber.
///
/// Production writes flattened JSON lines, development writes the pretty
/// multi-line format. Both carry a `tracing_error::ErrorLayer` so eyre
/// reports include span traces. `RUST_LOG` replaces the default directives.
///
/// Only the first call installs anything; tests call it freely.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(environment)));

    let format: Box<dyn Layer<Registry> + Send + Sync> = match environment {
        Environment::Production => fmt::layer()
            .json()
            .with_target(false)
            .flatten_event(true)
            .boxed(),
        Environment::Development => fmt::layer()
            .pretty()
            .with_file(false)
            .with_line_number(false)
            .boxed(),
    };

    let installed = tracing_subscriber::registry()
        .with(format)
        .with(ErrorLayer::default())
        .with(filter)
        .try_init()
        .is_ok();

    if installed {
        info!(?environment, "Tracing initialized");
    } else {
        debug!("Global subscriber already set, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_is_quieter_than_development() {
        assert!(default_directives(&Environment::Production).starts_with("info"));
        assert!(default_directives(&Environment::Development).starts_with("debug"));
    }

    #[test]
    fn test_default_directives_parse() {
        for env in [Environment::Development, Environment::Production] {
            assert!(EnvFilter::try_new(default_directives(&env)).is_ok());
        }
    }

    #[test]
    fn test_init_tracing_twice_does_not_panic() {
        init_tracing(&Environment::Development);
        init_tracing(&Environment::Production);
    }

    #[test]
    fn test_init_tracing_respects_rust_log() {
        temp_env::with_var("RUST_LOG", Some("warn"), || {
            init_tracing(&Environment::Production);
        });
    }
}
