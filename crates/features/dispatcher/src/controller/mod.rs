//! Controllers, one per path shape and method.

mod collection;
mod field;
mod resource;

pub use collection::CollectionGet;
pub use field::{FieldResourceGet, RelationshipsGet};
pub use resource::{ResourceDelete, ResourceGet, ResourcePatch, ResourcePost};

use crate::error::DispatchError;
use crate::path::JsonPath;
use japi_domain::document::ResourceObject;
use japi_domain::request::{Method, Request, Response};
use japi_domain::resource::ResourceInformation;
use japi_kernel::parser::TypeParser;
use japi_mapper::DataMapper;
use japi_resources::{RegistryEntry, ResourceRegistry};
use serde_json::Value;
use std::fmt::Debug;
use std::sync::Arc;

pub trait Controller: Debug + Send + Sync {
    fn is_acceptable(&self, path: &JsonPath, method: Method) -> bool;

    fn handle(&self, path: &JsonPath, request: &Request) -> Result<Response, DispatchError>;
}

/// Collaborators shared by every controller.
#[derive(Debug, Clone)]
pub struct ControllerContext {
    registry: ResourceRegistry,
    parser: TypeParser,
    mapper: Arc<DataMapper>,
}

impl ControllerContext {
    #[must_use]
    pub const fn new(
        registry: ResourceRegistry,
        parser: TypeParser,
        mapper: Arc<DataMapper>,
    ) -> Self {
        Self { registry, parser, mapper }
    }

    #[must_use]
    pub const fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn mapper(&self) -> &Arc<DataMapper> {
        &self.mapper
    }

    fn entry(&self, resource_type: &str) -> Result<&RegistryEntry, DispatchError> {
        self.registry.entry(resource_type).ok_or_else(|| {
            DispatchError::not_found(format!("unknown resource type '{resource_type}'"))
        })
    }

    fn parse_id(
        &self,
        information: &ResourceInformation,
        raw: &str,
    ) -> Result<Value, DispatchError> {
        self.parser.parse(raw, information.id_kind).map_err(|source| DispatchError::Parser {
            source,
            context: Some(information.resource_type.clone().into()),
        })
    }

    fn parse_ids(
        &self,
        information: &ResourceInformation,
        raws: &[&str],
    ) -> Result<Vec<Value>, DispatchError> {
        self.parser.parse_all(raws.iter().copied(), information.id_kind).map_err(|source| {
            DispatchError::Parser {
                source,
                context: Some(information.resource_type.clone().into()),
            }
        })
    }

    fn encode(&self, resource_type: &str, value: &Value) -> Result<ResourceObject, DispatchError> {
        Ok(self.mapper.encode_resource(resource_type, value)?)
    }

    fn encode_all(
        &self,
        resource_type: &str,
        values: &[Value],
    ) -> Result<Vec<ResourceObject>, DispatchError> {
        values.iter().map(|value| self.encode(resource_type, value)).collect()
    }

    /// Stored value of the single resource at `resource_type`/`raw_id`.
    fn find_existing(
        &self,
        resource_type: &str,
        raw_id: &str,
        request: &Request,
    ) -> Result<Value, DispatchError> {
        let entry = self.entry(resource_type)?;
        let id = self.parse_id(entry.information(), raw_id)?;
        entry.repository().find_one(&id, &request.query)?.ok_or_else(|| {
            DispatchError::not_found(format!("{resource_type} '{raw_id}' does not exist"))
        })
    }

    /// The resource object carried by the request body, checked against the path type.
    fn body_resource<'r>(
        &self,
        resource_type: &str,
        request: &'r Request,
    ) -> Result<&'r ResourceObject, DispatchError> {
        let object = request
            .body
            .as_ref()
            .and_then(|document| document.single_resource())
            .ok_or_else(|| {
                DispatchError::bad_request("request body must carry a single resource")
            })?;

        if object.resource_type != resource_type {
            return Err(DispatchError::conflict(format!(
                "body type '{}' does not match '{resource_type}'",
                object.resource_type
            )));
        }
        Ok(object)
    }
}
