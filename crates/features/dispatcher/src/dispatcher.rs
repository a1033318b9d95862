use crate::error::DispatchError;
use crate::path::JsonPath;
use crate::registry::ControllerRegistry;
use japi_domain::request::{Request, Response};
use japi_errors::ExceptionMapperRegistry;
use japi_resources::ResourceRegistry;
use std::sync::Arc;
use tracing::{debug, error, warn};

#[derive(Debug)]
struct DispatcherInner {
    controllers: ControllerRegistry,
    exceptions: ExceptionMapperRegistry,
}

/// Routes requests to controllers and renders every failure as a response.
#[derive(Debug, Clone)]
pub struct RequestDispatcher {
    inner: Arc<DispatcherInner>,
}

impl RequestDispatcher {
    #[must_use]
    pub fn new(controllers: ControllerRegistry, exceptions: ExceptionMapperRegistry) -> Self {
        Self { inner: Arc::new(DispatcherInner { controllers, exceptions }) }
    }

    pub fn dispatch(&self, request: &Request) -> Response {
        let response = match self.try_dispatch(request) {
            Ok(response) => response,
            Err(err) => self.error_response(&err),
        };
        debug!(
            method = %request.method,
            path = %request.path,
            status = response.status,
            "Request dispatched"
        );
        response
    }

    fn try_dispatch(&self, request: &Request) -> Result<Response, DispatchError> {
        let path = JsonPath::parse(&request.path, self.resource_registry())?;
        self.inner.controllers.get_controller(&path, request.method)?.handle(&path, request)
    }

    fn error_response(&self, err: &DispatchError) -> Response {
        if let Some(mapped) = self.inner.exceptions.map_error(err) {
            return mapped.into();
        }

        let response = err.to_error_response();
        if response.status >= 500 {
            error!(error = %err, "Request failed");
        } else {
            warn!(error = %err, status = response.status, "Request rejected");
        }
        response.into()
    }

    #[must_use]
    pub fn resource_registry(&self) -> &ResourceRegistry {
        self.inner.controllers.resource_registry()
    }

    #[must_use]
    pub fn exception_mappers(&self) -> &ExceptionMapperRegistry {
        &self.inner.exceptions
    }

    /// Whether both handles refer to the same dispatcher instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
