use crate::context::InvokerContext;
use crate::error::InvokerError;
use japi_dispatcher::RequestDispatcher;
use japi_domain::constants::{JSON_API_MEDIA_TYPE, status};
use japi_domain::request::{ErrorResponse, Method, QueryParams, Request, Response};
use japi_mapper::DataMapper;
use japi_resources::ResourceRegistry;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug)]
struct InvokerParts {
    mapper: Arc<DataMapper>,
    registry: ResourceRegistry,
    dispatcher: RequestDispatcher,
}

/// The assembled pipeline: mapper, resource registry and dispatcher.
///
/// Cloning is cheap and clones share the same parts.
#[derive(Debug, Clone)]
pub struct Invoker {
    parts: Arc<InvokerParts>,
}

impl Invoker {
    pub(crate) fn new(
        mapper: Arc<DataMapper>,
        registry: ResourceRegistry,
        dispatcher: RequestDispatcher,
    ) -> Self {
        Self { parts: Arc::new(InvokerParts { mapper, registry, dispatcher }) }
    }

    #[must_use]
    pub fn mapper(&self) -> &Arc<DataMapper> {
        &self.parts.mapper
    }

    #[must_use]
    pub fn registry(&self) -> &ResourceRegistry {
        &self.parts.registry
    }

    #[must_use]
    pub fn dispatcher(&self) -> &RequestDispatcher {
        &self.parts.dispatcher
    }

    /// Serves one request from `ctx` and writes the response back into it.
    ///
    /// Protocol failures (unacceptable media types, unknown methods, unreadable
    /// bodies) become error responses; only failures to write the response
    /// are returned as errors.
    pub fn invoke(&self, ctx: &mut dyn InvokerContext) -> Result<(), InvokerError> {
        if !admits_json_api(ctx.accept()) {
            debug!(accept = ctx.accept(), "Request does not accept JSON:API");
            ctx.set_status(status::NOT_ACCEPTABLE);
            return Ok(());
        }

        let response = match self.to_request(ctx) {
            Ok(request) => self.parts.dispatcher.dispatch(&request),
            Err(rejection) => rejection.into(),
        };
        self.write(ctx, &response)
    }

    fn to_request(&self, ctx: &dyn InvokerContext) -> Result<Request, ErrorResponse> {
        let method = ctx.method().parse::<Method>().map_err(|_| {
            ErrorResponse::single(
                status::METHOD_NOT_ALLOWED,
                "Method Not Allowed",
                format!("{} is not supported", ctx.method()),
            )
        })?;
        let mut request = Request::new(method, ctx.path()).query(QueryParams::parse(ctx.query()));

        if ctx.body().iter().any(|byte| !byte.is_ascii_whitespace()) {
            if !ctx.content_type().is_some_and(is_json_api) {
                return Err(ErrorResponse::single(
                    status::UNSUPPORTED_MEDIA_TYPE,
                    "Unsupported Media Type",
                    format!("request bodies must be {JSON_API_MEDIA_TYPE}"),
                ));
            }
            let document = self.parts.mapper.read_document(ctx.body()).map_err(|err| {
                warn!(error = %err, "Unreadable request body");
                ErrorResponse::single(status::BAD_REQUEST, "Bad Request", err.to_string())
            })?;
            request = request.body(document);
        }
        Ok(request)
    }

    fn write(&self, ctx: &mut dyn InvokerContext, response: &Response) -> Result<(), InvokerError> {
        let body = response
            .document
            .as_ref()
            .map(|document| self.parts.mapper.write_document(document))
            .transpose()?;

        ctx.set_status(response.status);
        if let Some(body) = body {
            ctx.set_content_type(JSON_API_MEDIA_TYPE);
            ctx.write_body(&body)?;
        }
        Ok(())
    }
}

/// Missing or empty `Accept` admits anything.
fn admits_json_api(accept: Option<&str>) -> bool {
    let Some(accept) = accept.filter(|a| !a.trim().is_empty()) else {
        return true;
    };
    accept.split(',').any(|range| {
        let range = range.split(';').next().unwrap_or_default().trim();
        range == "*/*" || range.eq_ignore_ascii_case("application/*") || is_json_api(range)
    })
}

fn is_json_api(media_type: &str) -> bool {
    media_type
        .split(';')
        .next()
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(JSON_API_MEDIA_TYPE))
}
