use super::{Controller, ControllerContext};
use crate::error::DispatchError;
use crate::path::JsonPath;
use japi_domain::constants::status;
use japi_domain::document::Document;
use japi_domain::request::{Method, Request, Response};
use serde_json::Value;

/// `GET /{type}/{ids}`: one id yields a single resource, several a collection.
#[derive(Debug, Clone)]
pub struct ResourceGet {
    context: ControllerContext,
}

impl ResourceGet {
    #[must_use]
    pub const fn new(context: ControllerContext) -> Self {
        Self { context }
    }
}

impl Controller for ResourceGet {
    fn is_acceptable(&self, path: &JsonPath, method: Method) -> bool {
        method == Method::Get && matches!(path, JsonPath::Resource { .. })
    }

    fn handle(&self, path: &JsonPath, request: &Request) -> Result<Response, DispatchError> {
        let resource_type = path.resource_type();
        match path.ids().as_slice() {
            [id] => {
                let value = self.context.find_existing(resource_type, id, request)?;
                Ok(Response::ok(Document::resource(self.context.encode(resource_type, &value)?)))
            }
            ids => {
                let entry = self.context.entry(resource_type)?;
                let ids = self.context.parse_ids(entry.information(), ids)?;
                let values = entry.repository().find_all_with_ids(&ids, &request.query)?;
                let objects = self.context.encode_all(resource_type, &values)?;
                Ok(Response::ok(Document::collection(objects)))
            }
        }
    }
}

/// `POST /{type}`: creates the resource in the body and answers `201`.
#[derive(Debug, Clone)]
pub struct ResourcePost {
    context: ControllerContext,
}

impl ResourcePost {
    #[must_use]
    pub const fn new(context: ControllerContext) -> Self {
        Self { context }
    }
}

impl Controller for ResourcePost {
    fn is_acceptable(&self, path: &JsonPath, method: Method) -> bool {
        method == Method::Post && path.is_collection()
    }

    fn handle(&self, path: &JsonPath, request: &Request) -> Result<Response, DispatchError> {
        let resource_type = path.resource_type();
        let object = self.context.body_resource(resource_type, request)?;
        let value = self.context.mapper().decode_resource(object)?;

        let saved = self.context.entry(resource_type)?.repository().save(value)?;
        let document = Document::resource(self.context.encode(resource_type, &saved)?);
        Ok(Response::new(status::CREATED, Some(document)))
    }
}

/// `PATCH /{type}/{id}`: merges the body's fields over the stored resource.
#[derive(Debug, Clone)]
pub struct ResourcePatch {
    context: ControllerContext,
}

impl ResourcePatch {
    #[must_use]
    pub const fn new(context: ControllerContext) -> Self {
        Self { context }
    }
}

impl Controller for ResourcePatch {
    fn is_acceptable(&self, path: &JsonPath, method: Method) -> bool {
        method == Method::Patch && matches!(path, JsonPath::Resource { ids, .. } if ids.len() == 1)
    }

    fn handle(&self, path: &JsonPath, request: &Request) -> Result<Response, DispatchError> {
        let resource_type = path.resource_type();
        let [id] = path.ids()[..] else {
            return Err(DispatchError::bad_request("PATCH takes exactly one id"));
        };

        let object = self.context.body_resource(resource_type, request)?;
        if object.id.as_deref().is_some_and(|body_id| body_id != id) {
            return Err(DispatchError::conflict(format!("body id does not match '{id}'")));
        }

        let entry = self.context.entry(resource_type)?;
        let path_id = self.context.parse_id(entry.information(), id)?;
        let mut stored = self.context.find_existing(resource_type, id, request)?;
        let Value::Object(changes) = self.context.mapper().decode_resource(object)? else {
            return Err(DispatchError::from("decoded resource is not an object"));
        };
        if let Value::Object(fields) = &mut stored {
            fields.extend(changes);
            // The stored row is addressed by the path, whatever the body says.
            fields.insert(entry.information().id_field.clone(), path_id);
        }

        let saved = entry.repository().save(stored)?;
        Ok(Response::ok(Document::resource(self.context.encode(resource_type, &saved)?)))
    }
}

/// `DELETE /{type}/{ids}`
#[derive(Debug, Clone)]
pub struct ResourceDelete {
    context: ControllerContext,
}

impl ResourceDelete {
    #[must_use]
    pub const fn new(context: ControllerContext) -> Self {
        Self { context }
    }
}

impl Controller for ResourceDelete {
    fn is_acceptable(&self, path: &JsonPath, method: Method) -> bool {
        method == Method::Delete && matches!(path, JsonPath::Resource { .. })
    }

    fn handle(&self, path: &JsonPath, _request: &Request) -> Result<Response, DispatchError> {
        let entry = self.context.entry(path.resource_type())?;
        // Every id must parse before anything is deleted.
        let ids = self.context.parse_ids(entry.information(), &path.ids())?;
        for id in &ids {
            entry.repository().delete(id)?;
        }
        Ok(Response::no_content())
    }
}
