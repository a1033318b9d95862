use config::{Config, Environment, File, Source};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Default configuration file stem, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "japi";

/// Prefix for environment overrides (`JAPI__INVOKER__DEFAULT_DOMAIN`).
pub const ENV_PREFIX: &str = "JAPI";

#[japi_derive::japi_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a file layered with `JAPI__`-prefixed environment variables.
///
/// An explicit `path` must exist. Without one, `japi.{toml,yaml,json,...}` in
/// the working directory is used when present and defaults apply otherwise.
/// Nested keys use double underscores: `JAPI__LOGGING__LEVEL=debug` sets
/// `logging.level`.
///
/// # Errors
/// Returns [`ConfigError::Config`] when an explicit file is missing, a source
/// cannot be parsed, or the merged values do not fit `T`.
///
/// # Example
/// ```rust
/// use japi_kernel::config::load_config;
/// use japi_kernel::domain::config::AppConfig;
///
/// let cfg: AppConfig = load_config(None::<&str>).unwrap_or_default();
/// assert!(cfg.invoker.pretty.is_none());
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match path.as_ref() {
        Some(p) => {
            info!(path = %p.as_ref().display(), "Loading configuration");
            File::from(p.as_ref()).required(true)
        }
        None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    load_from(file, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__")
}

fn load_from<T, F>(file: F, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    F: Source + Send + Sync + 'static,
{
    Config::builder()
        .add_source(file)
        .add_source(env)
        .build()
        .context("Failed to build configuration")?
        .try_deserialize::<T>()
        .context("Failed to deserialize configuration")
}
