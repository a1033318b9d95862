use super::{Controller, ControllerContext};
use crate::error::DispatchError;
use crate::path::JsonPath;
use japi_domain::document::Document;
use japi_domain::request::{Method, Request, Response};

/// `GET /{type}`
#[derive(Debug, Clone)]
pub struct CollectionGet {
    context: ControllerContext,
}

impl CollectionGet {
    #[must_use]
    pub const fn new(context: ControllerContext) -> Self {
        Self { context }
    }
}

impl Controller for CollectionGet {
    fn is_acceptable(&self, path: &JsonPath, method: Method) -> bool {
        method == Method::Get && path.is_collection()
    }

    fn handle(&self, path: &JsonPath, request: &Request) -> Result<Response, DispatchError> {
        let resource_type = path.resource_type();
        let values = self.context.entry(resource_type)?.repository().find_all(&request.query)?;
        let objects = self.context.encode_all(resource_type, &values)?;
        Ok(Response::ok(Document::collection(objects)))
    }
}
