use serde::Deserialize;
use std::path::PathBuf;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub invoker: InvokerSettings,
    pub logging: LoggingSettings,
}

/// Settings consumed by the invoker assembler.
///
/// Both strings are only needed when the assembler has to build a registry,
/// an exception mapper registry, or a dispatcher on its own.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InvokerSettings {
    /// Dotted location(s) to collect resources and exception mappers from,
    /// comma separated (e.g. `app.resources,app.errors`).
    pub resource_search_location: Option<String>,
    /// Base URL used to build resource links (e.g. `http://example.com`).
    pub default_domain: Option<String>,
    /// Pretty-print response documents. Unset leaves the builder's choice.
    pub pretty: Option<bool>,
}

/// Logging output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub filter: Option<String>,
    pub console: bool,
    pub directory: Option<PathBuf>,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, console: true, directory: None, json: false }
    }
}
