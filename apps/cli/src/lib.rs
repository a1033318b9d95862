//! # japi CLI
//!
//! Serves a single JSON:API request against the bundled demo resources and
//! prints the response. Handy for poking at routing, error mapping and
//! document shapes without an HTTP server.
//!
//! ```text
//! japi GET /articles/1
//! japi POST /articles --data '{"data":{"type":"articles","attributes":{"title":"Hi"}}}'
//! japi GET '/articles?filter[author]=ada' --pretty
//! ```

pub mod demo;

use anyhow::{Context, Result};
use clap::Parser;
use japi::domain::config::InvokerSettings;
use japi::domain::constants::JSON_API_MEDIA_TYPE;
use japi::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Base URL for links when neither the config nor `--domain` sets one.
pub const DEFAULT_DOMAIN: &str = "http://localhost:8080";

#[derive(Debug, Parser)]
#[command(name = "japi", version, about = "Serve one JSON:API request against the demo resources")]
pub struct Cli {
    /// Request method (GET, POST, PATCH, DELETE).
    pub method: String,

    /// Request path, optionally followed by `?query`.
    pub path: String,

    /// Request body.
    #[arg(short, long)]
    pub data: Option<String>,

    /// `Accept` header; omitted when not given.
    #[arg(long)]
    pub accept: Option<String>,

    /// `Content-Type` header; defaults to the JSON:API media type when a body is given.
    #[arg(long)]
    pub content_type: Option<String>,

    /// Base URL for resource links, overriding the configuration.
    #[arg(long)]
    pub domain: Option<String>,

    #[arg(long)]
    pub pretty: bool,

    /// Configuration file; `japi.*` in the working directory is used otherwise.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Assembles an invoker over the demo stores.
    ///
    /// Settings layer in order: built-in demo values, then `settings`, then
    /// command line flags.
    pub fn invoker(&self, settings: &InvokerSettings) -> Result<Invoker> {
        let mut builder = InvokerBuilder::new()
            .service_locator(demo::locator())
            .resource_search_location(demo::SEARCH_LOCATION)
            .default_domain(DEFAULT_DOMAIN)
            .defaults(demo::defaults())
            .settings(settings);

        if let Some(domain) = &self.domain {
            builder = builder.default_domain(domain);
        }
        if self.pretty {
            builder = builder.pretty(true);
        }

        builder.build().context("Failed to assemble the invoker")
    }

    /// Serves the request and writes `HTTP <status>` followed by the body to `out`.
    ///
    /// Returns the response status.
    pub fn execute(&self, settings: &InvokerSettings, out: &mut impl Write) -> Result<u16> {
        let invoker = self.invoker(settings)?;
        let mut ctx = self.context();

        invoker.invoke(&mut ctx).context("Failed to serve the request")?;
        let status = ctx.status().context("The invoker did not set a status")?;
        debug!(status, bytes = ctx.response_body().len(), "Request served");

        writeln!(out, "HTTP {status}")?;
        if !ctx.response_body().is_empty() {
            out.write_all(ctx.response_body())?;
            writeln!(out)?;
        }
        out.flush()?;

        Ok(status)
    }

    fn context(&self) -> BufferedContext {
        let (path, query) = self.path.split_once('?').unwrap_or((self.path.as_str(), ""));
        let mut ctx = BufferedContext::new(self.method.as_str(), path).with_query(query);

        if let Some(accept) = &self.accept {
            ctx = ctx.with_accept(accept.as_str());
        }
        if let Some(data) = &self.data {
            let content_type = self.content_type.as_deref().unwrap_or(JSON_API_MEDIA_TYPE);
            ctx = ctx.with_content_type(content_type).with_body(data.as_bytes());
        } else if let Some(content_type) = &self.content_type {
            ctx = ctx.with_content_type(content_type.as_str());
        }
        ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("japi").chain(args.iter().copied()))
    }

    fn run(args: &[&str]) -> (u16, String) {
        let mut out = Vec::new();
        let status = cli(args).execute(&InvokerSettings::default(), &mut out).unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn splits_the_query_from_the_path() {
        let ctx = cli(&["GET", "/articles?filter[author]=ada"]).context();
        assert_eq!(ctx.path(), "/articles");
        assert_eq!(ctx.query(), "filter[author]=ada");
    }

    #[test]
    fn bodies_default_to_the_json_api_media_type() {
        let ctx = cli(&["POST", "/articles", "--data", "{}"]).context();
        assert_eq!(ctx.content_type(), Some(JSON_API_MEDIA_TYPE));
        assert_eq!(ctx.body(), b"{}");
    }

    #[test]
    fn links_use_the_domain_flag() {
        let (status, out) = run(&["GET", "/people/ada", "--domain", "https://api.example.org"]);
        assert_eq!(status, 200);
        assert!(out.starts_with("HTTP 200\n"));
        assert!(out.contains("https://api.example.org/people/ada"));
    }

    #[test]
    fn settings_override_built_in_values() {
        let settings = InvokerSettings {
            default_domain: Some("https://configured.example".to_owned()),
            ..InvokerSettings::default()
        };
        let mut out = Vec::new();
        cli(&["GET", "/people/grace"]).execute(&settings, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("https://configured.example/people/grace"));
    }

    #[test]
    fn empty_bodies_print_only_the_status() {
        let (status, out) = run(&["DELETE", "/articles/1"]);
        assert_eq!(status, 204);
        assert_eq!(out, "HTTP 204\n");
    }
}
