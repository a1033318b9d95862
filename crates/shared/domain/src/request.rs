use crate::constants::status;
use crate::document::{Document, ErrorObject};
use strum_macros::{AsRefStr, Display, EnumString};

/// Request methods understood by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// Ordered query parameters. Repeated keys are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits a raw `a=1&b=2` query string. Keys without `=` get an empty value.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let pairs = raw
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (key.to_owned(), value.to_owned()),
                None => (pair.to_owned(), String::new()),
            })
            .collect();
        Self(pairs)
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push((key.into(), value.into()));
        self
    }

    /// First value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A transport-neutral request handed to the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub query: QueryParams,
    pub body: Option<Document>,
}

impl Request {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: QueryParams::default(), body: None }
    }

    #[must_use]
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    #[must_use]
    pub fn body(mut self, body: Document) -> Self {
        self.body = Some(body);
        self
    }
}

/// Dispatcher output: a status and an optional document.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub document: Option<Document>,
}

impl Response {
    #[must_use]
    pub const fn new(status: u16, document: Option<Document>) -> Self {
        Self { status, document }
    }

    #[must_use]
    pub const fn ok(document: Document) -> Self {
        Self::new(status::OK, Some(document))
    }

    #[must_use]
    pub const fn no_content() -> Self {
        Self::new(status::NO_CONTENT, None)
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Error payload produced by exception mappers.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub status: u16,
    pub errors: Vec<ErrorObject>,
}

impl ErrorResponse {
    /// A response carrying a single error object whose status mirrors `status`.
    #[must_use]
    pub fn single(status: u16, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self { status, errors: vec![ErrorObject::with_status(status).title(title).detail(detail)] }
    }
}

impl From<ErrorResponse> for Response {
    fn from(error: ErrorResponse) -> Self {
        Self::new(error.status, Some(Document::errors(error.errors)))
    }
}
