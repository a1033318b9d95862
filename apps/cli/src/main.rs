use anyhow::{Context, Result};
use clap::Parser;
use japi::domain::config::{AppConfig, LoggingSettings};
use japi::kernel::config::load_config;
use japi_cli::Cli;
use japi_logger::{LevelFilter, Logger};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let cfg: AppConfig =
        load_config(cli.config.as_ref()).context("Critical: Configuration is malformed")?;
    let _log = init_logger(&cfg.logging)?;

    let status = cli.execute(&cfg.invoker, &mut std::io::stdout().lock())?;

    Ok(if status < 400 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn init_logger(settings: &LoggingSettings) -> Result<Logger> {
    let level: LevelFilter =
        settings.level.parse().with_context(|| format!("Invalid log level '{}'", settings.level))?;

    let mut builder =
        Logger::builder().name(env!("CARGO_PKG_NAME")).level(level).console(settings.console);
    if let Some(filter) = &settings.filter {
        builder = builder.env_filter(filter);
    }
    if let Some(dir) = &settings.directory {
        builder = builder.path(dir);
        if settings.json {
            builder = builder.json();
        }
    }

    Ok(builder.init()?)
}
