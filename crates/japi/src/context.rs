use std::io;

/// Transport-neutral view of one request/response exchange.
pub trait InvokerContext {
    fn method(&self) -> &str;

    fn path(&self) -> &str;

    /// Raw query string without the leading `?`.
    fn query(&self) -> &str;

    fn accept(&self) -> Option<&str>;

    fn content_type(&self) -> Option<&str>;

    fn body(&self) -> &[u8];

    fn set_status(&mut self, status: u16);

    fn set_content_type(&mut self, content_type: &str);

    fn write_body(&mut self, body: &[u8]) -> io::Result<()>;
}

/// In-memory [`InvokerContext`] that records the response.
#[derive(Debug, Clone, Default)]
pub struct BufferedContext {
    method: String,
    path: String,
    query: String,
    accept: Option<String>,
    content_type: Option<String>,
    body: Vec<u8>,
    status: Option<u16>,
    response_content_type: Option<String>,
    response_body: Vec<u8>,
}

impl BufferedContext {
    #[must_use]
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self { method: method.into(), path: path.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Status set by the invoker, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    #[must_use]
    pub fn response_content_type(&self) -> Option<&str> {
        self.response_content_type.as_deref()
    }

    #[must_use]
    pub fn response_body(&self) -> &[u8] {
        &self.response_body
    }

    /// The response body parsed as JSON, if it is JSON.
    #[must_use]
    pub fn response_json(&self) -> Option<serde_json::Value> {
        serde_json::from_slice(&self.response_body).ok()
    }
}

impl InvokerContext for BufferedContext {
    fn method(&self) -> &str {
        &self.method
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn query(&self) -> &str {
        &self.query
    }

    fn accept(&self) -> Option<&str> {
        self.accept.as_deref()
    }

    fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    fn body(&self) -> &[u8] {
        &self.body
    }

    fn set_status(&mut self, status: u16) {
        self.status = Some(status);
    }

    fn set_content_type(&mut self, content_type: &str) {
        self.response_content_type = Some(content_type.to_owned());
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<()> {
        self.response_body.extend_from_slice(body);
        Ok(())
    }
}
