use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{DatasetSettings, LogLevel, Logging, QuerySettings, Server, Settings};

/// Prefix for environment overrides, e.g. `SCHOOLS__SERVER__PORT=8080`.
const ENV_PREFIX: &str = "SCHOOLS";

/// Loads the application configuration.
///
/// Sources, lowest precedence first: built-in defaults, an optional
/// `config.toml` in the working directory, then `SCHOOLS__*` environment
/// variables (a `.env` file is read first if present).
pub fn load_config() -> Result<Settings, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from("config.toml")
}

/// Same as [`load_config`] but reads the given file instead of `config.toml`.
/// A missing file is not an error.
pub fn load_config_from(file: &str) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name(file).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    validate(&settings)?;

    Ok(settings)
}

fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if settings.query.display_limit == 0 {
        return Err(ConfigError::ValidationError(
            "query.display_limit must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
